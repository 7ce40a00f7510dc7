use super::{check_grad, GradCheckError};
use crate::error::AutogradError;

#[test]
fn test_check_grad_polynomial() {
    // f(a, b) = a^3 * b + 2b
    let result = check_grad(
        |_graph, x| Ok(x[0].powf(3.0) * x[1] + x[1] * 2.0),
        &[1.3, -0.7],
        1e-6,
        1e-4,
    );
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_check_grad_quotient_and_tanh() {
    let result = check_grad(
        |_graph, x| Ok((x[0] / x[1]).tanh() - 1.0 / x[0]),
        &[0.8, 1.9],
        1e-6,
        1e-4,
    );
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_check_grad_detects_relu_kink() {
    // At exactly zero the subgradient is 0 but the central difference is 1/2.
    match check_grad(|_graph, x| Ok(x[0].relu()), &[0.0], 1e-6, 1e-4) {
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_eq!(analytical_grad, 0.0);
            assert!((numerical_grad - 0.5).abs() < 1e-6);
        }
        other => panic!("Expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_propagates_forward_errors() {
    let result = check_grad(|_graph, x| x[0].pow(x[1]), &[2.0, 3.0], 1e-6, 1e-4);
    match result {
        Err(GradCheckError::ForwardPassError(AutogradError::TypeMismatch { operation, .. })) => {
            assert_eq!(operation, "power");
        }
        other => panic!("Expected ForwardPassError, got {:?}", other),
    }
}

#[test]
fn test_check_grad_rejects_bad_epsilon() {
    for epsilon in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
        let result = check_grad(|_graph, x| Ok(x[0] * 2.0), &[1.0], epsilon, 1e-4);
        assert!(
            matches!(result, Err(GradCheckError::InvalidEpsilon(_))),
            "epsilon {} should be rejected",
            epsilon
        );
    }
}

#[test]
fn test_check_grad_reports_non_finite_grad() {
    // d/dx x^-1 = -x^-2 overflows this close to zero.
    let result = check_grad(|_graph, x| Ok(x[0].powf(-1.0)), &[1e-300], 1e-6, 1e-4);
    assert!(matches!(
        result,
        Err(GradCheckError::NumericalGradNaNOrInfinite { input_index: 0, .. })
            | Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
    ));
}

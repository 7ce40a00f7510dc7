mod common;

use common::{golden_init, Expr, XS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::autograd::{check_grad, GradCheckError};
use scalargrad_core::model::Mlp;
use scalargrad_core::nn::Module;
use scalargrad_core::AutogradError;

#[test]
fn test_random_expression_trees_match_finite_differences() {
    let mut rng = StdRng::seed_from_u64(0x5ca1_a7);
    for case in 0..200 {
        let input_count = rng.gen_range(1..=3);
        let expr = Expr::random(&mut rng, input_count, 3);
        let inputs: Vec<f64> = (0..input_count).map(|_| rng.gen_range(-1.0..1.0)).collect();

        let result = check_grad(|graph, x| Ok(expr.eval(graph, x)), &inputs, 1e-6, 1e-4);
        assert!(
            result.is_ok(),
            "case {}: {:?} at {:?} failed: {:?}",
            case,
            expr,
            inputs,
            result
        );
    }
}

#[test]
fn test_mlp_gradients_match_finite_differences() {
    // The weights are rebuilt from the same deterministic sequence on every
    // evaluation, so only the inputs vary between graphs.
    let result = check_grad(
        |graph, x| {
            let mlp = Mlp::new(graph, 3, &[4, 4, 1], &mut golden_init())?;
            let out = mlp.forward(graph, x)?;
            Ok(out.as_slice()[0])
        },
        &XS[0],
        1e-6,
        1e-4,
    );
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_forward_errors_surface_through_grad_check() {
    let result = check_grad(
        |graph, x| {
            let mlp = Mlp::new(graph, 3, &[1], &mut golden_init())?;
            Ok(mlp.forward(graph, x)?.as_slice()[0])
        },
        &[1.0, 2.0],
        1e-6,
        1e-4,
    );
    assert_eq!(
        result,
        Err(GradCheckError::ForwardPassError(
            AutogradError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ))
    );
}

use super::SgdOptimizer;
use crate::autograd::graph::Graph;
use crate::error::AutogradError;
use crate::model::Mlp;
use crate::nn::init::ConstantInit;
use crate::nn::layers::Neuron;
use crate::nn::module::Module;
use crate::optim::optimizer_trait::Optimizer;
use approx::assert_relative_eq;

#[test]
fn test_sgd_basic_step() -> Result<(), AutogradError> {
    let graph = Graph::new();
    let param_data = [1.0, 2.0, 3.0, 4.0];
    let grad_data = [0.1, 0.2, 0.3, 0.4];
    let params: Vec<_> = param_data.iter().map(|&d| graph.leaf(d)).collect();
    for (p, &g) in params.iter().zip(&grad_data) {
        p.set_grad(g);
    }

    let mut optimizer = SgdOptimizer::new(params.iter().map(|p| p.id()), 0.1)?;
    optimizer.step(&graph)?;

    for ((p, &d), &g) in params.iter().zip(&param_data).zip(&grad_data) {
        assert_relative_eq!(p.data(), d - 0.1 * g);
        assert_eq!(p.grad(), g, "step leaves gradients in place");
    }
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), AutogradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(2.0);
    (a * b).backward();

    let mut optimizer = SgdOptimizer::new([a.id()], 0.5)?;
    optimizer.zero_grad(&graph)?;
    assert_eq!(a.grad(), 0.0);
    assert_eq!(b.grad(), 1.0, "only managed parameters are cleared");
    Ok(())
}

#[test]
fn test_sgd_rejects_invalid_lr() {
    for lr in [-0.1, f64::NAN, f64::INFINITY] {
        let result = SgdOptimizer::new(Vec::new(), lr);
        assert!(
            matches!(result, Err(AutogradError::InvalidArgument(_))),
            "lr {} should be rejected",
            lr
        );
    }
}

#[test]
fn test_sgd_set_lr() -> Result<(), AutogradError> {
    let mut optimizer = SgdOptimizer::new(Vec::new(), 0.1)?;
    optimizer.set_lr(0.01)?;
    assert_eq!(optimizer.lr(), 0.01);
    assert!(optimizer.set_lr(-1.0).is_err());
    assert_eq!(optimizer.lr(), 0.01);
    Ok(())
}

#[test]
fn test_sgd_unknown_param() -> Result<(), AutogradError> {
    let graph = Graph::new();
    let other = Graph::new();
    let foreign = other.leaf(1.0).id();

    let mut optimizer = SgdOptimizer::new([foreign], 0.1)?;
    assert_eq!(
        optimizer.step(&graph),
        Err(AutogradError::UnknownNode { id: 0, len: 0 })
    );
    Ok(())
}

#[test]
fn test_sgd_rejects_params_dropped_by_truncate() -> Result<(), AutogradError> {
    let mut graph = Graph::new();
    let checkpoint = graph.checkpoint();
    let mlp = Mlp::new(&graph, 2, &[2, 1], &mut ConstantInit(0.5))?;
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), 1.0)?;

    graph.truncate(checkpoint);
    let a = graph.leaf(10.0);
    a.set_grad(1.0);

    assert!(matches!(
        optimizer.step(&graph),
        Err(AutogradError::UnknownNode { id: 0, .. })
    ));
    assert!(optimizer.zero_grad(&graph).is_err());
    assert!(mlp.forward(&graph, &[1.0, 2.0]).is_err());
    assert_eq!(a.data(), 10.0, "unrelated node is untouched");
    assert_eq!(a.grad(), 1.0);
    Ok(())
}

#[test]
fn test_sgd_moves_neuron_toward_target() -> Result<(), AutogradError> {
    let graph = Graph::new();
    let neuron = Neuron::new(&graph, 2, true, &mut ConstantInit(0.1));
    let mut optimizer = SgdOptimizer::new(neuron.parameters(), 0.05)?;
    let x = [1.0, -2.0];
    let target = 0.5;

    let squared_error = |graph: &Graph| -> Result<f64, AutogradError> {
        let y = neuron.forward(graph, &x)?;
        Ok((y.data() - target).powi(2))
    };

    let before = squared_error(&graph)?;
    for _ in 0..20 {
        optimizer.zero_grad(&graph)?;
        let y = neuron.forward(&graph, &x)?;
        (y - target).powf(2.0).backward();
        optimizer.step(&graph)?;
    }
    assert!(squared_error(&graph)? < before);
    Ok(())
}

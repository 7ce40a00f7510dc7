//! # Training a small MLP on four points
//!
//! Builds a 3 -> [4, 4] -> 1 tanh network and fits it to a toy regression
//! set with plain SGD:
//! 1. forward pass over every sample and summed squared-error loss,
//! 2. `zero_grad`, `backward`, `step`,
//! 3. truncation of the graph back to the parameters, so the arena does not
//!    grow across epochs.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example train_mlp`
//! (`RUST_LOG=debug` also shows the engine's own logging.)

use log::info;
use scalargrad_core::model::Mlp;
use scalargrad_core::nn::{Module, MseLoss, UniformInit};
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::{AutogradError, Graph, Value};

const EPOCHS: usize = 50;
const LEARNING_RATE: f64 = 0.1;

fn main() -> Result<(), AutogradError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut graph = Graph::new();
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], &mut UniformInit::seeded(1337))?;
    info!("{}", mlp);
    info!("{} parameters", mlp.num_parameters());

    let mut optimizer = SgdOptimizer::new(mlp.parameters(), LEARNING_RATE)?;
    let loss_fn = MseLoss::default();
    let checkpoint = graph.checkpoint();

    for epoch in 0..EPOCHS {
        let loss_value = {
            let preds = xs
                .iter()
                .map(|x| mlp.forward(&graph, x).map(|out| out.as_slice()[0]))
                .collect::<Result<Vec<Value<'_>>, AutogradError>>()?;
            let loss = loss_fn.calculate(&graph, &preds, &ys)?;

            optimizer.zero_grad(&graph)?;
            loss.backward();
            optimizer.step(&graph)?;
            loss.data()
        };
        let graph_size = graph.len();
        graph.truncate(checkpoint);

        if epoch % 10 == 0 || epoch == EPOCHS - 1 {
            info!(
                "epoch {:>3}: loss {:.6} ({} nodes before truncation)",
                epoch, loss_value, graph_size
            );
        }
    }

    for (x, y) in xs.iter().zip(&ys) {
        let pred = mlp.forward(&graph, x)?.as_slice()[0].data();
        println!("{:?} -> {:+.4} (target {:+.1})", x, pred, y);
    }
    Ok(())
}

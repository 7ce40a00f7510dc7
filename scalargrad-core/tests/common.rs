use rand::rngs::StdRng;
use rand::Rng;
use scalargrad_core::nn::FnInit;
use scalargrad_core::{Graph, Value};

// Shared by several integration test crates; each uses a different subset.

/// Toy regression set: four 3-dimensional inputs and their targets.
#[allow(dead_code)]
pub(crate) const XS: [[f64; 3]; 4] = [
    [2.0, 3.0, -1.0],
    [3.0, -1.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];

#[allow(dead_code)]
pub(crate) const YS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

/// Deterministic initializer spreading values over `[-1, 1)` with the
/// golden-ratio sequence.
#[allow(dead_code)]
pub(crate) fn golden_init() -> FnInit<impl FnMut() -> f64> {
    let mut k = 0u64;
    FnInit(move || {
        k += 1;
        (k as f64 * 0.618_033_988_749_894_9).fract() * 2.0 - 1.0
    })
}

/// Small random expression over indexed inputs, used for finite-difference
/// checks. Every variant is smooth on the whole real line.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub(crate) enum Expr {
    Input(usize),
    Const(f64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    /// `a / (b² + 1)`, so the denominator never vanishes.
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, f64),
    Neg(Box<Expr>),
    Tanh(Box<Expr>),
    Sigmoid(Box<Expr>),
}

#[allow(dead_code)]
impl Expr {
    pub(crate) fn random(rng: &mut StdRng, input_count: usize, depth: usize) -> Expr {
        if depth == 0 || rng.gen_bool(0.2) {
            return if rng.gen_bool(0.75) {
                Expr::Input(rng.gen_range(0..input_count))
            } else {
                Expr::Const(rng.gen_range(-2.0..2.0))
            };
        }
        let sub = |rng: &mut StdRng| Box::new(Expr::random(rng, input_count, depth - 1));
        match rng.gen_range(0..9) {
            0 => Expr::Add(sub(rng), sub(rng)),
            1 => Expr::Sub(sub(rng), sub(rng)),
            2 => Expr::Mul(sub(rng), sub(rng)),
            3 => Expr::Div(sub(rng), sub(rng)),
            4 => Expr::Pow(sub(rng), 2.0),
            5 => Expr::Pow(sub(rng), 3.0),
            6 => Expr::Neg(sub(rng)),
            7 => Expr::Tanh(sub(rng)),
            _ => Expr::Sigmoid(sub(rng)),
        }
    }

    pub(crate) fn eval<'g>(&self, graph: &'g Graph, x: &[Value<'g>]) -> Value<'g> {
        match self {
            Expr::Input(i) => x[*i],
            Expr::Const(c) => graph.leaf(*c),
            Expr::Add(a, b) => a.eval(graph, x) + b.eval(graph, x),
            Expr::Sub(a, b) => a.eval(graph, x) - b.eval(graph, x),
            Expr::Mul(a, b) => a.eval(graph, x) * b.eval(graph, x),
            Expr::Div(a, b) => a.eval(graph, x) / (b.eval(graph, x).powf(2.0) + 1.0),
            Expr::Pow(a, e) => a.eval(graph, x).powf(*e),
            Expr::Neg(a) => -a.eval(graph, x),
            Expr::Tanh(a) => a.eval(graph, x).tanh(),
            Expr::Sigmoid(a) => a.eval(graph, x).sigmoid(),
        }
    }
}

/// Summed squared error of `preds` against `targets`, built with the
/// operators directly.
#[allow(dead_code)]
pub(crate) fn squared_error<'g>(preds: &[Value<'g>], targets: &[f64]) -> Option<Value<'g>> {
    preds
        .iter()
        .zip(targets)
        .map(|(&p, &y)| (p - y).powf(2.0))
        .reduce(|acc, term| acc + term)
}

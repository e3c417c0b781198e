/// The hyperparameters of the logistic regression
#[derive(Debug, Clone)]
pub struct Params {
    /// Number of full-batch gradient steps performed by a single fit.
    /// There is no convergence check, the loop always runs to completion
    pub epochs: usize,
    /// Learning rate, scales the gradient contribution of each step
    pub eta: f64,
    /// L2 regularization strength, shrinks the weights towards zero
    /// on every step
    pub lambda: f64,
    /// Optional seed for Rng
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            epochs: 1000,
            eta: 0.01,
            lambda: 1.0,
            seed: None,
        }
    }
}

/// Per-call hyperparameter overrides accepted by fit.
/// Any field left as `None` keeps the model's current value; a `Some`
/// replaces it for this and all future calls, once the input shapes
/// have been accepted.
#[derive(Debug, Clone, Default)]
pub struct FitOptions {
    /// Replacement epoch count
    pub epochs: Option<usize>,
    /// Replacement learning rate
    pub eta: Option<f64>,
    /// Replacement L2 strength
    pub lambda: Option<f64>,
}

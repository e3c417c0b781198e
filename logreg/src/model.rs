use nalgebra::{DMatrix, DVector, Dim, Matrix};
use nanorand::{Rng, WyRand};

use crate::{sigmoid::v_sigmoid, Error, FitOptions, Params, WeightVector, NUM_FEATURES};

/// Binary logistic regression model
///
/// Owns the weight vector, which starts out all-zero, is stochastically
/// reinitialized at the start of every [`fit`](Self::fit) call and updated
/// in place once per epoch. Lives in memory only, for the lifetime of the
/// instance.
#[derive(Debug)]
pub struct LogisticRegression {
    params: Params,
    /// Bias weight at index 0, one weight per feature after that
    weights: WeightVector,
    /// Number of samples seen by the most recent fit
    row_count: usize,
    /// Weight vector length, bias included. Fixed at construction
    column_count: usize,
    rng: WyRand,
}

impl LogisticRegression {
    /// Create a new model with all-zero weights
    ///
    /// # Arguments:
    /// params: The hyperparameters, kept until overridden by a fit call
    pub fn new(params: Params) -> Self {
        let rng = match params.seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };
        let column_count = NUM_FEATURES + 1;

        Self {
            params,
            weights: Matrix::from_element_generic(
                Dim::from_usize(column_count),
                Dim::from_usize(1),
                0.0,
            ),
            row_count: 0,
            column_count,
            rng,
        }
    }

    /// Train the weight vector on the given samples and labels
    ///
    /// Any prior training is discarded: the weights are freshly sampled
    /// before the epoch loop starts. Runs the full epoch count, there is
    /// no convergence check.
    ///
    /// # Arguments:
    /// x: One row per sample, [`NUM_FEATURES`] columns
    /// y: One row per sample, a single column of binary labels
    /// opts: Optional hyperparameter overrides, persisted on the model
    /// once the shapes validate; a rejected call leaves them untouched
    pub fn fit(
        &mut self,
        x: &DMatrix<f64>,
        y: &DMatrix<f64>,
        opts: FitOptions,
    ) -> Result<(), Error> {
        if x.nrows() == 0 {
            return Err(Error::EmptyMatrix);
        }
        if x.ncols() != NUM_FEATURES {
            return Err(Error::ColumnCountMismatch {
                expected: NUM_FEATURES,
                found: x.ncols(),
            });
        }
        if y.nrows() != x.nrows() {
            return Err(Error::RowCountMismatch {
                x_rows: x.nrows(),
                y_rows: y.nrows(),
            });
        }
        if y.ncols() != 1 {
            return Err(Error::ColumnCountMismatch {
                expected: 1,
                found: y.ncols(),
            });
        }

        if let Some(epochs) = opts.epochs {
            self.params.epochs = epochs;
        }
        if let Some(eta) = opts.eta {
            self.params.eta = eta;
        }
        if let Some(lambda) = opts.lambda {
            self.params.lambda = lambda;
        }

        self.row_count = x.nrows();
        let x_bias = self.add_bias_column(x);
        self.init_weights();
        trace!("init weights: {}", self.weights);

        let mut epochs = self.params.epochs;
        while epochs > 0 {
            let signal = self.calculate_signal(&x_bias, y);
            self.update_weights(&x_bias, y, &signal);

            if epochs % 10 == 0 {
                debug!("weights: {}", self.weights);
            }
            epochs -= 1;
        }

        Ok(())
    }

    /// Compute the per-row probability of the positive class
    ///
    /// Accepts either a raw [`NUM_FEATURES`]-column matrix, which gets
    /// bias-augmented first, or an already augmented one, which is scored
    /// as-is. Output length always matches the number of input rows,
    /// regardless of the batch size of the last fit.
    pub fn predict(&self, x: &DMatrix<f64>) -> Result<DVector<f64>, Error> {
        if x.nrows() == 0 {
            return Err(Error::EmptyMatrix);
        }
        let x_bias = if x.ncols() == self.column_count - 1 {
            self.add_bias_column(x)
        } else if x.ncols() == self.column_count {
            x.clone()
        } else {
            // name the nearest acceptable width, raw or augmented
            return Err(Error::ColumnCountMismatch {
                expected: if x.ncols() > self.column_count {
                    self.column_count
                } else {
                    NUM_FEATURES
                },
                found: x.ncols(),
            });
        };

        let linear = x_bias * &self.weights;

        Ok(v_sigmoid(&linear))
    }

    /// Current weight vector, bias at index 0
    #[inline(always)]
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Current hyperparameters, including any fit-time overrides
    #[inline(always)]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Number of samples in the most recent training batch
    #[inline(always)]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Prepend the constant bias feature to every row
    fn add_bias_column(&self, x: &DMatrix<f64>) -> DMatrix<f64> {
        Matrix::from_fn_generic(
            Dim::from_usize(x.nrows()),
            Dim::from_usize(x.ncols() + 1),
            |i, j| {
                if j == 0 {
                    1.0
                } else {
                    x[(i, j - 1)]
                }
            },
        )
    }

    /// Sample a fresh weight vector, scaled down by the column count,
    /// with the bias weight pinned to 1.0
    fn init_weights(&mut self) {
        let bound = 1.0 / (self.column_count as f64).sqrt();
        let (lower, upper) = (-bound, bound);

        let rng = &mut self.rng;
        let mut weights: WeightVector = Matrix::from_fn_generic(
            Dim::from_usize(self.column_count),
            Dim::from_usize(1),
            |_, _| (upper - lower) * (lower + rng.generate::<f64>()),
        );
        weights[0] = 1.0;

        self.weights = weights;
    }

    /// The label-weighted linear score of every sample
    fn calculate_signal(&self, x_bias: &DMatrix<f64>, y: &DMatrix<f64>) -> DVector<f64> {
        let linear = x_bias * &self.weights;

        y.column(0).component_mul(&linear)
    }

    /// One full-batch gradient step with L2 weight decay
    fn update_weights(&mut self, x_bias: &DMatrix<f64>, y: &DMatrix<f64>, signal: &DVector<f64>) {
        let n = self.row_count as f64;
        let scalar = self.params.eta / n;
        let scalar2 = 1.0 - (2.0 * self.params.eta * self.params.lambda) / n;

        let m1 = y.column(0).component_mul(&v_sigmoid(signal));
        let grad = x_bias.transpose() * m1;

        self.weights = scalar * grad + scalar2 * &self.weights;
    }
}

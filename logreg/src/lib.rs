//! Binary logistic regression over dense feature matrices,
//! trained with fixed-epoch full-batch gradient descent and L2 weight decay.

#[macro_use]
extern crate log;

use nalgebra::{Const, Dyn, Matrix, VecStorage};

mod error;
mod model;
mod params;
mod sigmoid;

pub use error::Error;
pub use model::LogisticRegression;
pub use params::{FitOptions, Params};
pub use sigmoid::{sigmoid, v_sigmoid};

/// The weight vector of the model, with the bias term at index 0
pub type WeightVector = Matrix<f64, Dyn, Const<1>, VecStorage<f64, Dyn, Const<1>>>;

/// Number of input features per sample, fixed at model construction.
/// The trained weight vector has one additional component for the bias.
pub const NUM_FEATURES: usize = 10;

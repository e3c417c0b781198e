use nalgebra::DVector;

/// The logistic function, mapping any real value into (0, 1).
/// Total over f64: very large magnitudes saturate to 0.0 or 1.0
/// rather than failing.
#[inline(always)]
pub fn sigmoid(v: f64) -> f64 {
    1.0 / (1.0 + (-v).exp())
}

/// Elementwise sigmoid over a column vector
#[inline]
#[must_use]
pub fn v_sigmoid(vals: &DVector<f64>) -> DVector<f64> {
    vals.map(sigmoid)
}

/// The errors which can occur when handing matrices to the model.
/// All of them are rejected before any numeric work starts; sigmoid
/// saturation at the floating point extremes is accepted silently and
/// never reported here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The feature matrix has no rows
    #[error("feature matrix must have at least one row")]
    EmptyMatrix,

    /// Feature and label matrices disagree on the number of samples
    #[error("feature matrix has {x_rows} rows but label matrix has {y_rows}")]
    RowCountMismatch {
        /// Rows of the feature matrix
        x_rows: usize,
        /// Rows of the label matrix
        y_rows: usize,
    },

    /// A matrix has a column count the model cannot accept
    #[error("expected {expected} columns, found {found}")]
    ColumnCountMismatch {
        /// The column count the operation requires
        expected: usize,
        /// The column count that was passed in
        found: usize,
    },
}

//! Error type for explicitly checked resizes.

use thiserror::Error;

/// Reason a [`try_resize_table`](crate::OpenAddressingMap::try_resize_table) call left
/// the table untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResizeError {
    /// An open-addressing table cannot hold fewer slots than live entries.
    #[error("requested capacity {requested} is below the current size {size}")]
    BelowSize {
        /// Capacity passed by the caller
        requested: usize,
        /// Live entries at the time of the call
        size: usize,
    },
    /// A chaining table needs at least one bucket.
    #[error("requested capacity {requested} is below the minimum of 1 bucket")]
    BelowMinimum {
        /// Capacity passed by the caller
        requested: usize,
    },
}

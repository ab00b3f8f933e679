//! Error types for vcall.
//!
//! There is no fallible external input beyond the by-name selectors, so the
//! hierarchy is a single enum:
//!
//! - [`DispatchError`] - Unknown selector names and trace sink failures

use thiserror::Error;

/// Errors that can occur while constructing, retargeting, or dispatching.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A by-name lookup named a variant the registry does not hold.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// A by-name dispatch named an operation with no table slot.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Writing a trace line to the output sink failed.
    #[error("trace write failed")]
    Trace(#[from] std::io::Error),
}

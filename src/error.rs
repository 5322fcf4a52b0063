//! Error types for gateway and controller operations.

use thiserror::Error;

/// Main error type for request operations.
///
/// The display strings are part of the public contract; callers match on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// A request was dispatched before the gateway was initialized.
    #[error("call Init first")]
    Uninitialized,

    /// The controller refused the argument of a request.
    #[error("sorry, not that one")]
    Rejected,
}

/// Result type for request operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

//! # Sequenced Request Gateway
//!
//! A controller that pretends to send requests, numbering each one, behind a
//! gateway that must be initialized before use.
//!
//! ## Core Concepts
//!
//! - **Controller**: Sequence counter and last request identifier under one
//!   `RwLock`; mutation is exclusive, read-back is shared
//! - **Gateway**: Uninitialized or ready; routes every request through one
//!   initialization check
//! - **Requests**: `one` returns the request's sequence, `two` returns its
//!   identifier (`two?val=<value>&seq=<n>`)
//!
//! ## Example
//!
//! ```
//! use seqgate::{Gateway, GatewayError, Sequence};
//!
//! let mut gateway = Gateway::new();
//! assert_eq!(gateway.two("quack"), Err(GatewayError::Uninitialized));
//!
//! gateway.init();
//! assert_eq!(gateway.one(5)?, Sequence(1));
//! assert_eq!(gateway.one(3), Err(GatewayError::Rejected));
//! assert_eq!(gateway.two("potato")?, "two?val=potato&seq=2");
//! # Ok::<(), GatewayError>(())
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod global;
pub mod request;
pub mod types;

// Re-exports
pub use config::ControllerConfig;
pub use controller::Controller;
pub use error::{GatewayError, Result};
pub use gateway::{Gateway, GatewayState};
pub use request::{One, Request, Two};
pub use types::*;

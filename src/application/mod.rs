//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod loader;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::{DocumentResultExt, IoResultExt};

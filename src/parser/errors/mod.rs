//! Parser error handling module
//!
//! - [`JavadocError`]: failures raised by the parser core
//! - [`Diagnostic`]: what a dispatcher reports once it decided how to recover
//! - [`ErrorCode`]: categorized codes for filtering and documentation

mod codes;
mod error;
mod failure;

pub use codes::ErrorCode;
pub use error::{Diagnostic, Severity};
pub use failure::JavadocError;

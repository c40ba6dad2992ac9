//! # getbuilds common
//!
//! Shared error type, logging bootstrap and test helpers used by every
//! crate in the getbuilds workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{GetbuildsError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};

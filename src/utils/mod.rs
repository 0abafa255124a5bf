//! Utility modules
//!
//! This module contains common utilities used throughout the application,
//! including error handling, logging setup, and CSV generation.

pub mod csv;
pub mod errors;
pub mod logging;

pub use errors::{FairHubError, Result};

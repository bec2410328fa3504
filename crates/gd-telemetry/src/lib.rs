//! Logging bootstrap shared by the gradient-dash binaries.

pub mod logging;

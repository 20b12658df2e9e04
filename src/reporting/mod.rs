//! Reporting
//!
//! Structured logging for a probing run.

pub mod logging;

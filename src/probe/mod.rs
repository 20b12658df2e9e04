//! Host probing
//!
//! This module checks hosts over HTTP and HTTPS and runs those checks
//! across a host list with a bounded number of concurrent probes.

pub mod prober;
pub mod scheduler;

// Re-export commonly used items
pub use prober::{FetchStatus, ProbeHost, Prober, ReqwestFetcher, is_live_status};
pub use scheduler::{Aggregate, probe_all, probe_all_with_progress};

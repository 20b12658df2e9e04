//! Find which hosts answer over HTTP and HTTPS.
//!
//! Every host is tried as `http://host` and `https://host`; a URL is live
//! when the GET completes with a status below 400. Hosts are probed
//! concurrently with a fixed worker bound and the live URLs come back
//! deduplicated and sorted.

pub mod config;
pub mod core;
pub mod input;
pub mod probe;
pub mod reporting;
pub mod ui;

// Re-export commonly used items
pub use crate::config::{CliConfig, Config};
pub use crate::core::{HostProbeError, ProbeResult, Result, Scheme};
pub use crate::probe::{FetchStatus, ProbeHost, Prober, ReqwestFetcher, probe_all, probe_all_with_progress};

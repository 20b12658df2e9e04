//! Host list input
//!
//! Reads the hosts to probe, one per line, from a file or stdin.

pub mod hosts;

pub use hosts::{read_hosts, read_hosts_from_reader, read_hosts_from_stdin};

use rustc_hash::FxHashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::core::{HostProbeError, ProbeResult, Result};
use crate::probe::prober::ProbeHost;
use crate::reporting::logging;
use crate::ui::ProgressReporter;

/// Live URLs collected across every host of a run.
///
/// Unordered while probes are still completing; [`Aggregate::into_sorted`]
/// produces the final output order.
#[derive(Debug, Default)]
pub struct Aggregate {
    urls: FxHashSet<String>,
    hosts_completed: usize,
}

impl Aggregate {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            urls: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            hosts_completed: 0,
        }
    }

    /// Merge the live URLs of one finished host.
    pub fn merge(&mut self, result: ProbeResult) {
        self.urls.extend(result.into_urls());
        self.hosts_completed += 1;
    }

    pub fn hosts_completed(&self) -> usize {
        self.hosts_completed
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Drain into a lexicographically sorted list of unique URLs.
    pub fn into_sorted(self) -> Vec<String> {
        let mut urls: Vec<String> = self.urls.into_iter().collect();
        urls.sort_unstable();
        urls
    }
}

/// Probe every host with at most `workers` probes in flight and return the
/// sorted, deduplicated live URLs.
pub async fn probe_all<P>(
    prober: Arc<P>,
    hosts: Vec<String>,
    timeout: Duration,
    workers: usize,
) -> Result<Vec<String>>
where
    P: ProbeHost + 'static,
{
    probe_all_with_progress(prober, hosts, timeout, workers, None).await
}

/// Same as [`probe_all`], reporting each finished host to `progress`.
///
/// Blocks until every host has been probed. A probe task that panics or
/// gets cancelled fails the whole run: the remaining tasks are aborted and
/// no URLs are returned.
pub async fn probe_all_with_progress<P>(
    prober: Arc<P>,
    hosts: Vec<String>,
    timeout: Duration,
    workers: usize,
    progress: Option<&ProgressReporter>,
) -> Result<Vec<String>>
where
    P: ProbeHost + 'static,
{
    if workers == 0 {
        return Err(HostProbeError::InvalidArgument(
            "Worker count cannot be 0. Expected a positive integer.".to_string(),
        ));
    }

    let host_count = hosts.len();
    logging::log_probe_start(host_count, workers);
    if let Some(prog) = progress {
        prog.start_probing(host_count);
    }

    let start_time = Instant::now();
    let slots = Arc::new(Semaphore::new(workers));
    let mut tasks: JoinSet<ProbeResult> = JoinSet::new();
    let mut aggregate = Aggregate::with_capacity(host_count * 2);

    for host in hosts {
        // Merge finished probes while waiting for a free slot
        let permit = loop {
            tokio::select! {
                permit = Arc::clone(&slots).acquire_owned() => break permit?,
                Some(joined) = tasks.join_next() => {
                    record(&mut aggregate, joined?, progress);
                }
            }
        };

        let prober = Arc::clone(&prober);
        tasks.spawn(async move {
            let result = prober.probe(&host, timeout).await;
            drop(permit);
            result
        });
    }

    while let Some(joined) = tasks.join_next().await {
        record(&mut aggregate, joined?, progress);
    }

    let live_urls = aggregate.into_sorted();

    if let Some(prog) = progress {
        prog.finish_probing(live_urls.len(), host_count);
    }
    logging::log_probe_complete(host_count, live_urls.len(), start_time.elapsed().as_millis());

    Ok(live_urls)
}

fn record(aggregate: &mut Aggregate, result: ProbeResult, progress: Option<&ProgressReporter>) {
    aggregate.merge(result);
    if let Some(prog) = progress {
        prog.update_probe_progress(aggregate.hosts_completed());
    }
}

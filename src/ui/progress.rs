use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Progress bar for a probing run, drawn on stderr so stdout only carries URLs.
pub struct ProgressReporter {
    probe_progress: Mutex<Option<ProgressBar>>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            probe_progress: Mutex::new(None),
            enabled,
        }
    }

    pub fn start_probing(&self, total_hosts: usize) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::with_draw_target(
            Some(total_hosts as u64),
            ProgressDrawTarget::stderr(),
        );
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} hosts probed ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb.set_message("Probing hosts");
        pb.enable_steady_tick(Duration::from_millis(120));

        if let Ok(mut slot) = self.probe_progress.lock() {
            *slot = Some(pb);
        }
    }

    pub fn update_probe_progress(&self, completed: usize) {
        if let Ok(slot) = self.probe_progress.lock()
            && let Some(ref pb) = *slot
        {
            pb.set_position(completed as u64);
        }
    }

    pub fn finish_probing(&self, live_count: usize, total_hosts: usize) {
        if let Ok(slot) = self.probe_progress.lock()
            && let Some(ref pb) = *slot
        {
            pb.finish_with_message(format!(
                "✓ Probed {total_hosts} host(s), {live_count} live URL(s)"
            ));
        }
    }

    /// Remove the bar from the terminal once the run is over.
    pub fn finish_and_clear(&self) {
        if let Ok(mut slot) = self.probe_progress.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

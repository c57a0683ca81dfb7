use log::{debug, warn};
use std::time::{Duration, Instant};

mod host;
mod series;

pub use host::*;
pub use series::*;

/// Default interval between two samples
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_millis(1000);

/// Polls host CPU and memory utilisation at a fixed interval and records
/// both readings into two series of always-equal length.
pub struct MetricsSampler<H = SysinfoHost> {
    host: H,
    cpu: TimeSeries,
    memory: TimeSeries,
    last_update: Instant,
    update_interval: Duration,
}

impl Default for MetricsSampler<SysinfoHost> {
    fn default() -> Self {
        Self::new(SysinfoHost::new(), DEFAULT_UPDATE_INTERVAL)
    }
}

impl<H: HostMetrics> MetricsSampler<H> {
    pub fn new(host: H, update_interval: Duration) -> Self {
        Self {
            host,
            cpu: TimeSeries::new(),
            memory: TimeSeries::new(),
            last_update: Instant::now(),
            update_interval,
        }
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    pub fn set_update_interval(&mut self, interval: Duration) {
        self.update_interval = interval;
    }

    pub fn should_update(&self) -> bool {
        self.last_update.elapsed() >= self.update_interval
    }

    /// Time left until the next sample is due
    pub fn until_next_update(&self) -> Duration {
        self.update_interval.saturating_sub(self.last_update.elapsed())
    }

    /// Queries the host once and appends to both series.
    ///
    /// On failure neither series is touched, so they never diverge.
    pub fn tick(&mut self) -> Result<Sample, MetricsError> {
        self.last_update = Instant::now();
        let sample = self.host.sample()?;
        let index = self.cpu.push(sample.cpu_percent);
        self.memory.push(sample.memory_percent);
        debug!(
            "sample #{index}: cpu {:.1}%, memory {:.1}%",
            sample.cpu_percent, sample.memory_percent
        );
        Ok(sample)
    }

    /// Ticks if the interval has elapsed; a failed query is logged and skipped.
    pub fn poll(&mut self) -> Option<Sample> {
        if !self.should_update() {
            return None;
        }
        match self.tick() {
            Ok(sample) => Some(sample),
            Err(e) => {
                warn!("Skipping metrics sample: {e}");
                None
            }
        }
    }

    pub fn cpu(&self) -> &TimeSeries {
        &self.cpu
    }

    pub fn memory(&self) -> &TimeSeries {
        &self.memory
    }

    /// Number of samples recorded so far
    pub fn len(&self) -> usize {
        self.cpu.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty()
    }
}

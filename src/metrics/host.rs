use sysinfo::System;
use thiserror::Error;

/// One reading of host utilisation, both in percent (0..=100)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub cpu_percent: f64,
    pub memory_percent: f64,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricsError {
    #[error("host reported zero total memory")]
    MemoryUnavailable,
    #[error("host returned a non-finite {metric} reading: {value}")]
    InvalidReading { metric: &'static str, value: f64 },
    #[error("host metrics query failed: {0}")]
    Query(String),
}

/// Synchronous point queries against the host OS.
pub trait HostMetrics {
    fn sample(&mut self) -> Result<Sample, MetricsError>;
}

/// Host metrics backed by `sysinfo`, refreshing only CPU usage and RAM.
pub struct SysinfoHost {
    system: System,
}

impl Default for SysinfoHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoHost {
    pub fn new() -> Self {
        let mut system = System::new();
        // Prime the CPU counters so the next refresh has a baseline to diff against.
        system.refresh_cpu_usage();
        system.refresh_memory();
        Self { system }
    }
}

impl HostMetrics for SysinfoHost {
    fn sample(&mut self) -> Result<Sample, MetricsError> {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        let cpu_percent = f64::from(self.system.global_cpu_usage());
        if !cpu_percent.is_finite() {
            return Err(MetricsError::InvalidReading {
                metric: "cpu",
                value: cpu_percent,
            });
        }

        let total = self.system.total_memory();
        if total == 0 {
            return Err(MetricsError::MemoryUnavailable);
        }
        let memory_percent = self.system.used_memory() as f64 / total as f64 * 100.0;

        Ok(Sample {
            cpu_percent,
            memory_percent,
        })
    }
}

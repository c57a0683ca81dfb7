use crate::metrics::TimeSeries;
use std::ops::Range;

/// Fraction of the visible data span added above and below each axis
const Y_MARGIN: f64 = 0.05;

/// Vertical extent of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Auto-scales to the given data extent. A flat series is widened by
    /// one unit each way; no data gives the full percentage range.
    pub fn fit(extent: Option<(f64, f64)>) -> Self {
        match extent {
            None => Self { min: 0.0, max: 100.0 },
            Some((lo, hi)) if hi - lo <= f64::EPSILON => Self {
                min: lo - 1.0,
                max: hi + 1.0,
            },
            Some((lo, hi)) => {
                let pad = (hi - lo) * Y_MARGIN;
                Self {
                    min: lo - pad,
                    max: hi + pad,
                }
            }
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Geometry of the dual-axis chart for one frame: a horizontal window
/// anchored to the newest sample, the CPU range on the left axis and the
/// memory range on the right axis.
///
/// Both lines share the left axis coordinate space; memory values are
/// mapped into it with [`memory_to_plot`](Self::memory_to_plot).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartWindow {
    pub indices: Range<usize>,
    pub x_min: f64,
    pub x_max: f64,
    pub cpu: AxisRange,
    pub memory: AxisRange,
}

impl ChartWindow {
    pub fn compute(cpu: &TimeSeries, memory: &TimeSeries, visible: usize) -> Self {
        let indices = cpu.window_range(visible);
        let x_min = indices.start as f64;
        let x_max = (indices.end as f64).max(x_min + 1.0);
        Self {
            indices,
            x_min,
            x_max,
            cpu: AxisRange::fit(cpu.window_extent(visible)),
            memory: AxisRange::fit(memory.window_extent(visible)),
        }
    }

    /// Maps a memory percentage onto the left (CPU) axis coordinates
    pub fn memory_to_plot(&self, value: f64) -> f64 {
        self.cpu.min + (value - self.memory.min) * self.cpu.span() / self.memory.span()
    }

    /// Inverse of [`memory_to_plot`](Self::memory_to_plot), used for right axis labels
    pub fn plot_to_memory(&self, y: f64) -> f64 {
        self.memory.min + (y - self.cpu.min) * self.memory.span() / self.cpu.span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: impl IntoIterator<Item = f64>) -> TimeSeries {
        let mut series = TimeSeries::new();
        for v in values {
            series.push(v);
        }
        series
    }

    #[test]
    fn window_is_anchored_to_newest_sample() {
        let cpu = series((0..25).map(|i| i as f64));
        let memory = series((0..25).map(|_| 50.0));
        let window = ChartWindow::compute(&cpu, &memory, 20);
        assert_eq!(window.indices, 5..25);
        assert_eq!(window.x_min, 5.0);
        assert_eq!(window.x_max, 25.0);
    }

    #[test]
    fn short_history_starts_at_zero() {
        let cpu = series([10.0, 20.0, 30.0]);
        let memory = series([40.0, 41.0, 42.0]);
        let window = ChartWindow::compute(&cpu, &memory, 20);
        assert_eq!(window.indices, 0..3);
        assert_eq!((window.x_min, window.x_max), (0.0, 3.0));
    }

    #[test]
    fn empty_history_has_usable_bounds() {
        let window = ChartWindow::compute(&TimeSeries::new(), &TimeSeries::new(), 20);
        assert_eq!(window.indices, 0..0);
        assert!(window.x_max > window.x_min);
        assert_eq!(window.cpu, AxisRange { min: 0.0, max: 100.0 });
    }

    #[test]
    fn axes_scale_to_visible_data_only() {
        // an early spike scrolls out of the window
        let cpu = series(std::iter::once(100.0).chain((0..20).map(|i| 10.0 + i as f64)));
        let memory = series((0..21).map(|i| 60.0 + (i % 2) as f64 * 10.0));
        let window = ChartWindow::compute(&cpu, &memory, 20);

        assert!(window.cpu.max < 100.0);
        assert!(window.cpu.min < 10.0 + 1.0 && window.cpu.min > 9.0);
        assert!(window.cpu.max > 29.0 && window.cpu.max < 30.0);
        assert!(window.memory.min < 60.0 && window.memory.max > 70.0);
    }

    #[test]
    fn flat_series_does_not_collapse() {
        assert_eq!(AxisRange::fit(Some((42.0, 42.0))), AxisRange { min: 41.0, max: 43.0 });
    }

    #[test]
    fn memory_mapping_round_trips_across_axes() {
        let cpu = series([0.0, 50.0]);
        let memory = series([70.0, 80.0]);
        let window = ChartWindow::compute(&cpu, &memory, 20);

        assert!((window.memory_to_plot(window.memory.min) - window.cpu.min).abs() < 1e-9);
        assert!((window.memory_to_plot(window.memory.max) - window.cpu.max).abs() < 1e-9);
        let y = window.memory_to_plot(75.0);
        assert!((window.plot_to_memory(y) - 75.0).abs() < 1e-9);
    }
}

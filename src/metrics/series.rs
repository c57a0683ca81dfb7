use std::ops::Range;

/// Append-only history of `(sample index, value)` pairs.
///
/// Storage grows for the whole session; charts only ever look at the
/// trailing [`window`](Self::window).
#[derive(Default, Debug, Clone)]
pub struct TimeSeries {
    points: Vec<(usize, f64)>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value at the next index and returns that index
    pub fn push(&mut self, value: f64) -> usize {
        let index = self.points.len();
        self.points.push((index, value));
        index
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the newest value, if any
    pub fn last(&self) -> Option<f64> {
        self.points.last().map(|&(_, value)| value)
    }

    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    /// Indices covered by the trailing window of at most `size` points.
    ///
    /// # Arguments
    /// * `size` - Maximum number of points in the window
    pub fn window_range(&self, size: usize) -> Range<usize> {
        self.points.len().saturating_sub(size)..self.points.len()
    }

    /// Returns the trailing window of at most `size` points, oldest first
    pub fn window(&self, size: usize) -> &[(usize, f64)] {
        &self.points[self.window_range(size)]
    }

    /// Returns `(min, max)` of the values in the trailing window
    pub fn window_extent(&self, size: usize) -> Option<(f64, f64)> {
        self.window(size).iter().fold(None, |acc, &(_, v)| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_consecutive_indices() {
        let mut series = TimeSeries::new();
        assert_eq!(series.push(3.0), 0);
        assert_eq!(series.push(4.5), 1);
        assert_eq!(series.points(), &[(0, 3.0), (1, 4.5)]);
        assert_eq!(series.last(), Some(4.5));
    }

    #[test]
    fn window_is_shorter_than_size_while_history_is_short() {
        let mut series = TimeSeries::new();
        for v in 0..7 {
            series.push(v as f64);
        }
        assert_eq!(series.window_range(20), 0..7);
        assert_eq!(series.window(20).len(), 7);
    }

    #[test]
    fn window_follows_newest_sample() {
        let mut series = TimeSeries::new();
        for v in 0..25 {
            series.push(v as f64);
        }
        assert_eq!(series.window_range(20), 5..25);
        let window = series.window(20);
        assert_eq!(window.first(), Some(&(5, 5.0)));
        assert_eq!(window.last(), Some(&(24, 24.0)));
        // storage is not truncated
        assert_eq!(series.len(), 25);
    }

    #[test]
    fn extent_only_considers_visible_points() {
        let mut series = TimeSeries::new();
        series.push(99.0);
        for _ in 0..20 {
            series.push(10.0);
        }
        series.push(30.0);
        assert_eq!(series.window_extent(20), Some((10.0, 30.0)));
        assert_eq!(TimeSeries::new().window_extent(20), None);
    }
}

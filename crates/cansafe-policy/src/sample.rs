//! Short history window of torque readings.

/// Number of readings kept per sample window.
pub const MAX_SAMPLE_VALS: usize = 6;

/// The latest [`MAX_SAMPLE_VALS`] readings of a torque signal with their
/// running minimum and maximum.
///
/// Limits anchored on driver or motor torque use the window extremes so a
/// single noisy reading cannot widen them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TorqueSample {
    values: [i32; MAX_SAMPLE_VALS],
    min: i32,
    max: i32,
}

impl TorqueSample {
    /// An all-zero window.
    pub const fn new() -> Self {
        Self {
            values: [0; MAX_SAMPLE_VALS],
            min: 0,
            max: 0,
        }
    }

    /// Push `value` as the newest reading, dropping the oldest.
    pub fn update(&mut self, value: i32) {
        self.values.rotate_right(1);
        if let Some(newest) = self.values.first_mut() {
            *newest = value;
        }
        self.min = self.values.iter().copied().min().unwrap_or(value);
        self.max = self.values.iter().copied().max().unwrap_or(value);
    }

    /// Most recent reading.
    pub fn latest(&self) -> i32 {
        self.values.first().copied().unwrap_or(0)
    }

    /// Smallest reading in the window.
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Largest reading in the window.
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Readings, newest first.
    pub const fn values(&self) -> &[i32; MAX_SAMPLE_VALS] {
        &self.values
    }

    /// Clear back to an all-zero window.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_tracks_extremes() {
        let mut sample = TorqueSample::new();
        sample.update(100);
        sample.update(-40);
        assert_eq!(sample.latest(), -40);
        assert_eq!(sample.max(), 100);
        // zeros from the initial window are still present
        assert_eq!(sample.min(), -40);
    }

    #[test]
    fn test_old_values_fall_out() {
        let mut sample = TorqueSample::new();
        sample.update(500);
        for _ in 0..MAX_SAMPLE_VALS {
            sample.update(10);
        }
        assert_eq!(sample.max(), 10);
        assert_eq!(sample.min(), 10);
        assert_eq!(sample.values(), &[10; MAX_SAMPLE_VALS]);
    }

    #[test]
    fn test_newest_first_order() {
        let mut sample = TorqueSample::new();
        for v in 1..=3 {
            sample.update(v);
        }
        assert_eq!(sample.values(), &[3, 2, 1, 0, 0, 0]);
    }

    #[test]
    fn test_reset() {
        let mut sample = TorqueSample::new();
        sample.update(7);
        sample.reset();
        assert_eq!(sample, TorqueSample::new());
    }
}

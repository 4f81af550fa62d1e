//! Trailing activation window and the smoothed density statistic.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of past activations retained
pub const DEFAULT_WINDOW_CAPACITY: usize = 10;

/// Bounded history of recent activations for one agent instance.
///
/// Oldest entries are evicted once capacity is exceeded. The window
/// exists only to feed the smoothed density statistic; it is never fed
/// back into same-turn classification or scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityWindow {
    values: VecDeque<f64>,
    capacity: usize,
}

impl DensityWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a new activation, evicting the oldest when full.
    pub fn push(&mut self, activation: f64) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(activation);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries in insertion order, oldest first.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Smoothed density: mean scaled by one minus the normalized
    /// standard deviation. High and steady activations score highest.
    pub fn density(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        let n = self.values.len() as f64;
        let mean = self.values.iter().sum::<f64>() / n;
        let variance = self
            .values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;
        let std = variance.sqrt();

        (mean * (1.0 - std / (mean + 1e-8))).clamp(0.0, 1.0)
    }
}

impl Default for DensityWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_never_exceeds_capacity() {
        let mut window = DensityWindow::default();

        for i in 0..15 {
            window.push(i as f64 / 15.0);
            assert!(window.len() <= 10);
        }

        // After 15 inserts the window holds exactly the last 10, in order.
        assert_eq!(window.len(), 10);
        let held: Vec<f64> = window.values().collect();
        let expected: Vec<f64> = (5..15).map(|i| i as f64 / 15.0).collect();
        assert_eq!(held, expected);
    }

    #[test]
    fn test_density_of_constant_series() {
        let mut window = DensityWindow::default();
        for _ in 0..10 {
            window.push(0.6);
        }

        // Zero spread: density collapses to the mean.
        assert!((window.density() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_density_penalizes_spread() {
        let mut steady = DensityWindow::default();
        let mut jittery = DensityWindow::default();

        for i in 0..10 {
            steady.push(0.5);
            jittery.push(if i % 2 == 0 { 0.1 } else { 0.9 });
        }

        assert!(steady.density() > jittery.density());
    }

    #[test]
    fn test_empty_window_density() {
        let window = DensityWindow::default();
        assert_eq!(window.density(), 0.0);
    }
}

//! Summary statistics over a finished outcome set.
//!
//! Everything here is a pure read of the immutable `OutcomeSet`; the final
//! values are copied and sorted once at construction so repeated percentile
//! lookups stay cheap.

use serde::{Deserialize, Serialize};

use crate::model::OutcomeSet;

/// Aggregated statistics over the final values of all trials.
#[derive(Debug, Clone)]
pub struct OutcomeStats {
    sorted_finals: Vec<f64>,
}

impl OutcomeStats {
    /// Sort a copy of the final-value array for order-statistic queries.
    #[must_use]
    pub fn new(outcomes: &OutcomeSet) -> Self {
        let mut sorted_finals = outcomes.final_values().to_vec();
        sorted_finals.sort_by(|a, b| a.total_cmp(b));
        Self { sorted_finals }
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.sorted_finals.iter().sum::<f64>() / self.sorted_finals.len() as f64
    }

    #[must_use]
    pub fn median(&self) -> f64 {
        let n = self.sorted_finals.len();
        if n % 2 == 1 {
            self.sorted_finals[n / 2]
        } else {
            (self.sorted_finals[n / 2 - 1] + self.sorted_finals[n / 2]) / 2.0
        }
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.sorted_finals[0]
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.sorted_finals[self.sorted_finals.len() - 1]
    }

    /// Percentile with linear interpolation between closest ranks.
    ///
    /// For `p` in [0, 100] the fractional rank is `p / 100 * (n - 1)`; the
    /// result interpolates linearly between the order statistics on either
    /// side of it, so `percentile(0)` is the minimum, `percentile(100)` the
    /// maximum, and `percentile(50)` the median. Returns `None` outside
    /// [0, 100].
    #[must_use]
    pub fn percentile(&self, p: f64) -> Option<f64> {
        if !(0.0..=100.0).contains(&p) {
            return None;
        }
        let n = self.sorted_finals.len();
        let rank = p / 100.0 * (n - 1) as f64;
        let lo = rank.floor() as usize;
        let frac = rank - lo as f64;
        let value = if lo + 1 < n {
            self.sorted_finals[lo] + frac * (self.sorted_finals[lo + 1] - self.sorted_finals[lo])
        } else {
            self.sorted_finals[lo]
        };
        Some(value)
    }

    /// Bundle the headline numbers into one serializable summary.
    #[must_use]
    pub fn summary(&self) -> OutcomeSummary {
        OutcomeSummary {
            num_trials: self.sorted_finals.len(),
            mean: self.mean(),
            median: self.median(),
            min: self.min(),
            max: self.max(),
            p5: self.percentile(5.0).expect("5.0 is in range"),
            p95: self.percentile(95.0).expect("95.0 is in range"),
        }
    }
}

/// Headline statistics of a Monte Carlo run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutcomeSummary {
    pub num_trials: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub p5: f64,
    pub p95: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrialPath;

    fn outcomes(finals: &[f64]) -> OutcomeSet {
        let paths = finals
            .iter()
            .map(|&v| TrialPath::new(vec![100.0, v]))
            .collect();
        OutcomeSet::new(100.0, paths)
    }

    #[test]
    fn test_mean_median_min_max() {
        let stats = OutcomeStats::new(&outcomes(&[50.0, 100.0, 200.0, 250.0]));
        assert!((stats.mean() - 150.0).abs() < 1e-12);
        assert!((stats.median() - 150.0).abs() < 1e-12);
        assert_eq!(stats.min(), 50.0);
        assert_eq!(stats.max(), 250.0);
    }

    #[test]
    fn test_median_odd_count() {
        let stats = OutcomeStats::new(&outcomes(&[300.0, 100.0, 200.0]));
        assert_eq!(stats.median(), 200.0);
    }

    #[test]
    fn test_percentile_interpolation() {
        // Sorted: [10, 20, 30, 40]; rank(p) = p/100 * 3
        let stats = OutcomeStats::new(&outcomes(&[40.0, 10.0, 30.0, 20.0]));
        assert_eq!(stats.percentile(0.0), Some(10.0));
        assert_eq!(stats.percentile(100.0), Some(40.0));
        // p=50 -> rank 1.5 -> halfway between 20 and 30
        assert_eq!(stats.percentile(50.0), Some(25.0));
        // p=25 -> rank 0.75 -> 10 + 0.75 * 10
        assert_eq!(stats.percentile(25.0), Some(17.5));
    }

    #[test]
    fn test_percentile_out_of_range() {
        let stats = OutcomeStats::new(&outcomes(&[1.0, 2.0]));
        assert_eq!(stats.percentile(-0.1), None);
        assert_eq!(stats.percentile(100.1), None);
    }

    #[test]
    fn test_percentile_monotonicity() {
        let stats = OutcomeStats::new(&outcomes(&[5.0, 80.0, 13.0, 42.0, 7.0, 99.0, 21.0]));
        let mut prev = f64::NEG_INFINITY;
        for p in 0..=100 {
            let v = stats.percentile(f64::from(p)).unwrap();
            assert!(v >= prev, "percentile({p}) = {v} dropped below {prev}");
            prev = v;
        }
    }

    #[test]
    fn test_summary_consistent_with_parts() {
        let stats = OutcomeStats::new(&outcomes(&[50.0, 100.0, 200.0, 250.0]));
        let summary = stats.summary();
        assert_eq!(summary.num_trials, 4);
        assert_eq!(summary.mean, stats.mean());
        assert_eq!(summary.median, stats.median());
        assert_eq!(summary.min, stats.min());
        assert_eq!(summary.max, stats.max());
    }
}

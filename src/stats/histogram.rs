use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

pub const HISTOGRAM_BINS: usize = 8;

/// One bar of the lap time distribution chart, covering `[start, end)`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistogramBucket {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBucket {
    pub fn label(&self) -> String {
        format!("{:.1}-{:.1}s", self.start, self.end)
    }
}

/// Split lap times into `HISTOGRAM_BINS` equal-width buckets between the fastest
/// and slowest time. The slowest time lands in the last bucket.
pub fn lap_time_histogram(times: &[f64]) -> Vec<HistogramBucket> {
    let (min, max) = match times.iter().copied().minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => return Vec::new(),
        MinMaxResult::OneElement(value) => (value, value),
        MinMaxResult::MinMax(min, max) => (min, max),
    };

    let mut size = (max - min) / HISTOGRAM_BINS as f64;
    if size == 0. || !size.is_finite() {
        size = 1.;
    }

    let mut buckets = (0..HISTOGRAM_BINS)
        .map(|idx| HistogramBucket {
            start: min + idx as f64 * size,
            end: min + (idx + 1) as f64 * size,
            count: 0,
        })
        .collect_vec();

    for value in times {
        let idx = ((value - min) / size).floor() as usize;
        buckets[idx.min(HISTOGRAM_BINS - 1)].count += 1;
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input_has_no_buckets() {
        assert!(lap_time_histogram(&[]).is_empty());
    }

    #[test]
    fn test_bucket_ranges_are_evenly_spaced() {
        let times = [90.0, 91.0, 92.0, 93.0, 94.0, 95.0, 96.0, 97.0, 98.0];
        let buckets = lap_time_histogram(&times);
        assert_eq!(buckets.len(), HISTOGRAM_BINS);
        assert_eq!(buckets[0].start, 90.0);
        assert_eq!(buckets[7].end, 98.0);
        for bucket in &buckets {
            assert!((bucket.end - bucket.start - 1.0).abs() < 1e-9);
        }
        // 97 and the maximum 98 share the last bucket
        assert_eq!(buckets[7].count, 2);
        assert!(buckets[..7].iter().all(|b| b.count == 1));
    }

    #[test]
    fn test_repeated_value_uses_unit_width() {
        let buckets = lap_time_histogram(&[91.5, 91.5, 91.5]);
        assert_eq!(buckets.len(), HISTOGRAM_BINS);
        assert_eq!(buckets[0].start, 91.5);
        assert_eq!(buckets[0].end, 92.5);
        assert_eq!(buckets[0].count, 3);
        assert!(buckets[1..].iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_label() {
        let bucket = HistogramBucket {
            start: 90.04,
            end: 91.26,
            count: 3,
        };
        assert_eq!(bucket.label(), "90.0-91.3s");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_every_time_lands_in_a_bucket(
            times in prop::collection::vec(70.0f64..130.0, 1..500),
        ) {
            let buckets = lap_time_histogram(&times);
            prop_assert_eq!(buckets.len(), HISTOGRAM_BINS);
            prop_assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), times.len());

            let max = times.iter().copied().fold(f64::MIN, f64::max);
            let max_count = times.iter().filter(|t| **t == max).count();
            prop_assert!(buckets[HISTOGRAM_BINS - 1].count >= max_count);
        }
    }
}

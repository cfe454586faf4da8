use std::borrow::Borrow;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::data::LapRecord;

/// Lap times that can take part in aggregation, in lap order.
pub fn present_lap_times<L: Borrow<LapRecord>>(laps: &[L]) -> Vec<f64> {
    laps.iter().filter_map(|lap| Borrow::<LapRecord>::borrow(lap).lap_time()).collect()
}

pub fn average(times: &[f64]) -> Option<f64> {
    if times.is_empty() {
        return None;
    }
    Some(times.iter().sum::<f64>() / times.len() as f64)
}

/// Lower median: with an even count the lower of the two middle values is
/// reported, never their mean or the upper one: `[1, 2, 3, 4]` gives 2, not 3.
pub fn median(times: &[f64]) -> Option<f64> {
    if times.is_empty() {
        return None;
    }
    let sorted = times.iter().copied().sorted_by(f64::total_cmp).collect_vec();
    Some(sorted[(sorted.len() - 1) / 2])
}

pub fn fastest(times: &[f64]) -> Option<f64> {
    times.iter().copied().min_by(f64::total_cmp)
}

/// Population standard deviation (divides by n).
pub fn std_dev(times: &[f64]) -> Option<f64> {
    let mean = average(times)?;
    let variance = times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / times.len() as f64;
    Some(variance.sqrt())
}

/// Headline pace figures for a set of laps.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LapTimeSummary {
    /// Every lap in the input, timed or not
    pub total_laps: usize,
    pub timed_laps: usize,
    pub average: Option<f64>,
    pub median: Option<f64>,
    pub fastest: Option<f64>,
    pub std_dev: Option<f64>,
}

impl LapTimeSummary {
    pub fn from_laps<L: Borrow<LapRecord>>(laps: &[L]) -> Self {
        let times = present_lap_times(laps);
        Self {
            total_laps: laps.len(),
            timed_laps: times.len(),
            average: average(&times),
            median: median(&times),
            fastest: fastest(&times),
            std_dev: std_dev(&times),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_input_is_unavailable() {
        assert_eq!(average(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(fastest(&[]), None);
        assert_eq!(std_dev(&[]), None);
    }

    #[test]
    fn test_median_even_count_takes_lower_middle() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.0));
        assert_eq!(median(&[4.0, 3.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn test_median_odd_count_takes_middle() {
        assert_eq!(median(&[93.2, 90.1, 91.5]), Some(91.5));
        assert_eq!(median(&[90.0]), Some(90.0));
    }

    #[test]
    fn test_population_std_dev() {
        // mean 5, squared deviations sum to 32, n = 8
        let times = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(approx_eq(std_dev(&times).unwrap(), 2.0));
        assert_eq!(std_dev(&[91.0]), Some(0.));
    }

    #[test]
    fn test_summary_skips_untimed_laps() {
        let laps = vec![
            LapRecord {
                lap_time_seconds: Some(92.0),
                ..LapRecord::default()
            },
            LapRecord::default(),
            LapRecord {
                lap_time_seconds: Some(90.0),
                ..LapRecord::default()
            },
        ];
        let summary = LapTimeSummary::from_laps(&laps);
        assert_eq!(summary.total_laps, 3);
        assert_eq!(summary.timed_laps, 2);
        assert_eq!(summary.fastest, Some(90.0));
        assert_eq!(summary.median, Some(90.0));
        assert!(approx_eq(summary.average.unwrap(), 91.0));
        assert!(approx_eq(summary.std_dev.unwrap(), 1.0));
    }

    #[test]
    fn test_zero_lap_time_is_present() {
        let laps = vec![LapRecord {
            lap_time_seconds: Some(0.),
            ..LapRecord::default()
        }];
        assert_eq!(present_lap_times(&laps), vec![0.]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_statistics_stay_within_range(
            times in prop::collection::vec(60.0f64..200.0, 1..200),
        ) {
            let min = fastest(&times).unwrap();
            let max = times.iter().copied().fold(f64::MIN, f64::max);
            let avg = average(&times).unwrap();
            let med = median(&times).unwrap();

            prop_assert!(min <= avg + 1e-9 && avg <= max + 1e-9);
            prop_assert!(min <= med && med <= max);
            prop_assert!(std_dev(&times).unwrap() >= 0.);
            prop_assert!(times.contains(&med));
        }
    }
}

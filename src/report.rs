// Everything the lap telemetry view shows for one race and driver selection.

use std::borrow::Borrow;

use serde::Serialize;

use crate::{
    data::{LapRecord, RaceResult},
    results::{race_winner, rank_results},
    stats::{
        CompoundSummary, DriverFilter, HistogramBucket, LapTimeSummary, StintSummary,
        filter_laps, lap_time_histogram, present_lap_times, summarize_compounds,
        summarize_stints,
    },
};

#[derive(Clone, Debug, Serialize)]
pub struct LapReport {
    pub driver_filter: String,
    pub summary: LapTimeSummary,
    pub histogram: Vec<HistogramBucket>,
    pub compounds: Vec<CompoundSummary>,
    pub stints: Vec<StintSummary>,
}

impl LapReport {
    pub fn build<L: Borrow<LapRecord>>(laps: &[L], filter: &DriverFilter) -> Self {
        let filtered = filter_laps(laps, filter);
        Self {
            driver_filter: filter.to_string(),
            summary: LapTimeSummary::from_laps(&filtered),
            histogram: lap_time_histogram(&present_lap_times(&filtered)),
            compounds: summarize_compounds(&filtered),
            stints: summarize_stints(&filtered, filter),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ResultsReport {
    pub winner: Option<String>,
    pub results: Vec<RaceResult>,
}

impl ResultsReport {
    pub fn build(results: &[RaceResult]) -> Self {
        Self {
            winner: race_winner(results).map(|winner| winner.display_name().to_string()),
            results: rank_results(results),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Position, StintId};

    fn lap(driver: &str, stint: u32, compound: &str, time: Option<f64>) -> LapRecord {
        LapRecord {
            driver_code: Some(driver.to_string()),
            stint: Some(StintId::from(stint)),
            compound: Some(compound.to_string()),
            lap_time_seconds: time,
            ..LapRecord::default()
        }
    }

    #[test]
    fn test_report_for_single_driver() {
        let laps = vec![
            lap("VER", 1, "SOFT", Some(92.0)),
            lap("HAM", 1, "SOFT", Some(93.0)),
            lap("VER", 1, "SOFT", None),
            lap("VER", 2, "HARD", Some(94.0)),
        ];
        let report = LapReport::build(&laps, &DriverFilter::Driver("VER".into()));
        assert_eq!(report.driver_filter, "VER");
        assert_eq!(report.summary.total_laps, 3);
        assert_eq!(report.summary.timed_laps, 2);
        assert_eq!(report.histogram.iter().map(|b| b.count).sum::<usize>(), 2);
        assert_eq!(report.compounds[0].compound, "SOFT");
        assert_eq!(report.compounds[0].count, 2);
        assert_eq!(report.stints.len(), 2);
        assert!(report.stints.iter().all(|s| s.driver == "VER"));
    }

    #[test]
    fn test_report_for_unknown_driver_is_empty() {
        let laps = vec![lap("VER", 1, "SOFT", Some(92.0))];
        let report = LapReport::build(&laps, &DriverFilter::Driver("SAR".into()));
        assert_eq!(report.summary, LapTimeSummary::default());
        assert!(report.histogram.is_empty());
        assert!(report.compounds.is_empty());
        assert!(report.stints.is_empty());
    }

    #[test]
    fn test_results_report() {
        let results = vec![
            RaceResult {
                position: Some(Position::from(2)),
                driver_code: Some("NOR".into()),
                ..RaceResult::default()
            },
            RaceResult {
                position: Some(Position::from(1)),
                driver_code: Some("PIA".into()),
                driver_name: Some("Oscar Piastri".into()),
                ..RaceResult::default()
            },
        ];
        let report = ResultsReport::build(&results);
        assert_eq!(report.winner.as_deref(), Some("Oscar Piastri"));
        assert_eq!(report.results[0].driver_code.as_deref(), Some("PIA"));
    }
}

use std::{borrow::Borrow, cmp::Ordering, collections::HashMap};

use serde::{Deserialize, Serialize};

use super::{DriverFilter, LapAccumulator, compound::UNKNOWN_COMPOUND};
use crate::data::LapRecord;

/// Stints shown when every driver is selected.
pub const STINT_LIMIT: usize = 8;

const NO_VALUE: &str = "—";

/// Pace of one (driver, stint, compound) run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StintSummary {
    pub driver: String,
    pub stint: String,
    pub compound: String,
    pub laps: usize,
    pub average: Option<f64>,
}

#[derive(Hash, PartialEq, Eq)]
struct StintKey {
    driver: String,
    stint: String,
    compound: String,
}

impl StintKey {
    fn of(lap: &LapRecord) -> Self {
        Self {
            driver: lap.driver_code.clone().unwrap_or_else(|| "UNK".to_string()),
            stint: lap
                .stint
                .as_ref()
                .map_or_else(|| "NA".to_string(), ToString::to_string),
            compound: lap
                .compound
                .clone()
                .unwrap_or_else(|| UNKNOWN_COMPOUND.to_string()),
        }
    }
}

fn by_average(a: &StintSummary, b: &StintSummary) -> Ordering {
    match (a.average, b.average) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Group laps into stints, fastest average first. Stints without any timed lap
/// go last. With `DriverFilter::All` only the `STINT_LIMIT` fastest are kept.
pub fn summarize_stints<L: Borrow<LapRecord>>(
    laps: &[L],
    filter: &DriverFilter,
) -> Vec<StintSummary> {
    let mut index: HashMap<StintKey, usize> = HashMap::new();
    let mut groups: Vec<(StintSummary, LapAccumulator)> = Vec::new();

    for lap in laps {
        let lap = Borrow::<LapRecord>::borrow(lap);
        let slot = *index.entry(StintKey::of(lap)).or_insert_with(|| {
            let row = StintSummary {
                driver: lap.driver_code.clone().unwrap_or_else(|| NO_VALUE.to_string()),
                stint: lap
                    .stint
                    .as_ref()
                    .map_or_else(|| NO_VALUE.to_string(), ToString::to_string),
                compound: lap
                    .compound
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_COMPOUND.to_string()),
                laps: 0,
                average: None,
            };
            groups.push((row, LapAccumulator::default()));
            groups.len() - 1
        });
        groups[slot].1.push(lap);
    }

    let mut summary: Vec<StintSummary> = groups
        .into_iter()
        .map(|(row, acc)| StintSummary {
            laps: acc.laps,
            average: acc.average(),
            ..row
        })
        .collect();
    summary.sort_by(by_average);
    if filter.is_all() {
        summary.truncate(STINT_LIMIT);
    }
    summary
}

use std::{borrow::Borrow, collections::HashMap};

use serde::{Deserialize, Serialize};

use super::LapAccumulator;
use crate::data::LapRecord;

pub const UNKNOWN_COMPOUND: &str = "Unknown";

/// Usage volume and average pace for one tyre compound.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompoundSummary {
    pub compound: String,
    pub count: usize,
    pub average: Option<f64>,
}

/// Group laps by compound, most used compound first. Compounds with the same lap
/// count keep the order in which they first appear.
pub fn summarize_compounds<L: Borrow<LapRecord>>(laps: &[L]) -> Vec<CompoundSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, LapAccumulator)> = Vec::new();

    for lap in laps {
        let lap = Borrow::<LapRecord>::borrow(lap);
        let compound = lap.compound.as_deref().unwrap_or(UNKNOWN_COMPOUND);
        let slot = *index.entry(compound).or_insert_with(|| {
            groups.push((compound, LapAccumulator::default()));
            groups.len() - 1
        });
        groups[slot].1.push(lap);
    }

    let mut summary: Vec<CompoundSummary> = groups
        .into_iter()
        .map(|(compound, acc)| CompoundSummary {
            compound: compound.to_string(),
            count: acc.laps,
            average: acc.average(),
        })
        .collect();
    summary.sort_by(|a, b| b.count.cmp(&a.count));
    summary
}

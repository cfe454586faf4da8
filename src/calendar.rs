// Season calendar progress relative to a given day.

use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;

use crate::data::Race;

pub const RECENT_RACES: usize = 5;

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct SeasonProgress {
    pub next_race: Option<Race>,
    pub last_race: Option<Race>,
    /// Races held on or before the reference day
    pub completed: usize,
    pub total_races: usize,
    pub progress_pct: Option<u32>,
    pub countdown_days: Option<i64>,
}

impl SeasonProgress {
    /// Races without a parseable date count toward the season total only.
    pub fn compute(races: &[Race], today: NaiveDate) -> Self {
        let dated = races
            .iter()
            .filter_map(|race| race.event_date().map(|date| (race, date)))
            .collect_vec();
        let (past, upcoming): (Vec<_>, Vec<_>) =
            dated.iter().partition(|(_, date)| *date <= today);

        let next = upcoming.first().copied();
        let last = past.last().copied().or(dated.last());
        let total_races = races.len();
        let progress_pct = (total_races > 0)
            .then(|| ((past.len() as f64 / total_races as f64) * 100.).round() as u32);

        Self {
            next_race: next.map(|(race, _)| (*race).clone()),
            last_race: last.map(|(race, _)| (*race).clone()),
            completed: past.len(),
            total_races,
            progress_pct,
            countdown_days: next.map(|(_, date)| (*date - today).num_days().max(0)),
        }
    }
}

/// Races held on or before `today`, most recent first.
pub fn recent_completed(races: &[Race], today: NaiveDate, limit: usize) -> Vec<&Race> {
    races
        .iter()
        .filter_map(|race| race.event_date().map(|date| (race, date)))
        .filter(|(_, date)| *date <= today)
        .sorted_by(|(_, a), (_, b)| b.cmp(a))
        .map(|(race, _)| race)
        .take(limit)
        .collect()
}

// Season, race, driver and team pickers. When the data under a picker changes
// the current choice is kept only if it still exists.

use std::borrow::Borrow;

use itertools::Itertools;

use crate::{
    data::{DriverStanding, LapRecord, Race},
    stats::DriverFilter,
};

pub const AVAILABLE_SEASONS: [i32; 6] = [2025, 2024, 2023, 2022, 2021, 2020];

/// Head-to-head pair picked before any season data is loaded.
pub const DEFAULT_COMPARISON: (&str, &str) = ("VER", "NOR");

pub fn is_available_season(season: i32) -> bool {
    AVAILABLE_SEASONS.contains(&season)
}

/// "All drivers" followed by every driver code in the laps, sorted.
pub fn driver_options<L: Borrow<LapRecord>>(laps: &[L]) -> Vec<DriverFilter> {
    let codes = laps
        .iter()
        .filter_map(|lap| Borrow::<LapRecord>::borrow(lap).driver_code.as_deref())
        .filter(|code| !code.is_empty())
        .unique()
        .sorted()
        .map(|code| DriverFilter::Driver(code.to_string()));
    std::iter::once(DriverFilter::All).chain(codes).collect()
}

pub fn reconcile_driver_filter(current: &DriverFilter, options: &[DriverFilter]) -> DriverFilter {
    if options.contains(current) {
        current.clone()
    } else {
        DriverFilter::All
    }
}

/// Team names present in the laps, sorted ignoring case.
pub fn team_options<L: Borrow<LapRecord>>(laps: &[L]) -> Vec<String> {
    laps.iter()
        .filter_map(|lap| Borrow::<LapRecord>::borrow(lap).team.as_deref())
        .filter(|team| !team.is_empty())
        .unique()
        .sorted_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        })
        .map(str::to_string)
        .collect()
}

/// With no teams loaded yet the current choice is left alone.
pub fn reconcile_team(current: Option<&str>, options: &[String]) -> Option<String> {
    match (current, options.first()) {
        (Some(team), _) if options.iter().any(|option| option == team) => Some(team.to_string()),
        (_, Some(first)) => Some(first.clone()),
        (current, None) => current.map(str::to_string),
    }
}

/// With no races loaded yet the current choice is left alone.
pub fn reconcile_race(races: &[Race], current: Option<i64>) -> Option<i64> {
    match (current, races.first()) {
        (Some(id), _) if races.iter().any(|race| race.id == id) => Some(id),
        (_, Some(first)) => Some(first.id),
        (current, None) => current,
    }
}

/// The season's drivers sorted by name for the head-to-head pickers. Drivers
/// without a name sort first; equal names keep their input order.
pub fn comparison_options(drivers: &[DriverStanding]) -> Vec<&DriverStanding> {
    drivers
        .iter()
        .sorted_by(|a, b| {
            let a = a.name.as_deref().unwrap_or_default();
            let b = b.name.as_deref().unwrap_or_default();
            a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
        })
        .collect()
}

/// Keep each side of the pair while its driver is still in the season. A stale
/// first pick moves to the first option and a stale second pick to the second,
/// falling back to the default pair when the option list is too short. With no
/// drivers loaded the pair is left alone.
pub fn reconcile_comparison(
    current: (&str, &str),
    options: &[&DriverStanding],
) -> (String, String) {
    let (first, second) = current;
    if options.is_empty() {
        return (first.to_string(), second.to_string());
    }
    let keep_or = |code: &str, slot: usize, fallback: &str| {
        if options.iter().any(|driver| driver.code == code) {
            return code.to_string();
        }
        options
            .get(slot)
            .map(|driver| driver.code.as_str())
            .filter(|option| !option.is_empty())
            .unwrap_or(fallback)
            .to_string()
    };
    (
        keep_or(first, 0, DEFAULT_COMPARISON.0),
        keep_or(second, 1, DEFAULT_COMPARISON.1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lap(driver: Option<&str>, team: Option<&str>) -> LapRecord {
        LapRecord {
            driver_code: driver.map(str::to_string),
            team: team.map(str::to_string),
            ..LapRecord::default()
        }
    }

    fn race(id: i64) -> Race {
        Race {
            id,
            name: format!("Round {id}"),
            ..Race::default()
        }
    }

    #[test]
    fn test_driver_options_are_unique_and_sorted() {
        let laps = vec![
            lap(Some("VER"), None),
            lap(Some("HAM"), None),
            lap(None, None),
            lap(Some("VER"), None),
            lap(Some(""), None),
        ];
        assert_eq!(
            driver_options(&laps),
            vec![
                DriverFilter::All,
                DriverFilter::Driver("HAM".into()),
                DriverFilter::Driver("VER".into()),
            ]
        );
    }

    #[test]
    fn test_stale_driver_resets_to_all() {
        let options = driver_options(&[lap(Some("NOR"), None)]);
        let nor = DriverFilter::Driver("NOR".into());
        assert_eq!(reconcile_driver_filter(&nor, &options), nor);
        assert_eq!(
            reconcile_driver_filter(&DriverFilter::Driver("RIC".into()), &options),
            DriverFilter::All
        );
    }

    #[test]
    fn test_team_options_sorted_ignoring_case() {
        let laps = vec![
            lap(None, Some("Williams")),
            lap(None, Some("alpine")),
            lap(None, Some("McLaren")),
            lap(None, Some("Williams")),
        ];
        assert_eq!(team_options(&laps), vec!["alpine", "McLaren", "Williams"]);
    }

    #[test]
    fn test_reconcile_team() {
        let options = vec!["Ferrari".to_string(), "Haas F1 Team".to_string()];
        assert_eq!(
            reconcile_team(Some("Haas F1 Team"), &options).as_deref(),
            Some("Haas F1 Team")
        );
        assert_eq!(reconcile_team(Some("Sauber"), &options).as_deref(), Some("Ferrari"));
        assert_eq!(reconcile_team(None, &options).as_deref(), Some("Ferrari"));
        assert_eq!(reconcile_team(Some("Ferrari"), &[]).as_deref(), Some("Ferrari"));
        assert_eq!(reconcile_team(None, &[]), None);
    }

    #[test]
    fn test_reconcile_race() {
        let races = vec![race(7), race(8)];
        assert_eq!(reconcile_race(&races, Some(8)), Some(8));
        assert_eq!(reconcile_race(&races, Some(3)), Some(7));
        assert_eq!(reconcile_race(&races, None), Some(7));
        assert_eq!(reconcile_race(&[], Some(8)), Some(8));
        assert_eq!(reconcile_race(&[], None), None);
    }

    fn driver(code: &str, name: Option<&str>) -> DriverStanding {
        DriverStanding {
            code: code.to_string(),
            name: name.map(str::to_string),
            ..DriverStanding::default()
        }
    }

    #[test]
    fn test_comparison_options_sorted_by_name() {
        let drivers = vec![
            driver("VER", Some("Max Verstappen")),
            driver("ALO", Some("Fernando Alonso")),
            driver("XXX", None),
            driver("LEC", Some("charles Leclerc")),
        ];
        let codes: Vec<_> = comparison_options(&drivers)
            .iter()
            .map(|d| d.code.as_str())
            .collect();
        assert_eq!(codes, vec!["XXX", "LEC", "ALO", "VER"]);
    }

    #[test]
    fn test_reconcile_comparison() {
        let drivers = vec![
            driver("PIA", Some("Oscar Piastri")),
            driver("HAM", Some("Lewis Hamilton")),
            driver("NOR", Some("Lando Norris")),
        ];
        let options = comparison_options(&drivers);

        assert_eq!(
            reconcile_comparison(("PIA", "NOR"), &options),
            ("PIA".to_string(), "NOR".to_string())
        );
        // Stale picks move to the first and second drivers by name
        assert_eq!(
            reconcile_comparison(("VER", "SAI"), &options),
            ("NOR".to_string(), "HAM".to_string())
        );
        assert_eq!(
            reconcile_comparison(("HAM", "RIC"), &options),
            ("HAM".to_string(), "HAM".to_string())
        );
    }

    #[test]
    fn test_reconcile_comparison_short_or_empty_options() {
        let drivers = vec![driver("ALB", Some("Alexander Albon"))];
        let options = comparison_options(&drivers);
        assert_eq!(
            reconcile_comparison(("VER", "LEC"), &options),
            ("ALB".to_string(), "NOR".to_string())
        );
        assert_eq!(
            reconcile_comparison(("VER", "LEC"), &[]),
            ("VER".to_string(), "LEC".to_string())
        );
    }

    #[test]
    fn test_available_seasons() {
        assert!(is_available_season(2023));
        assert!(!is_available_season(2019));
    }
}

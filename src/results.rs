// Race result ordering and season standings.

use std::cmp::Ordering;

use crate::data::{DriverStanding, RaceResult};

fn by_position(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Finishing order for display: classified results first by position, then
/// retirements. Within each group entries without a usable position go last and
/// otherwise keep their original order.
pub fn rank_results(results: &[RaceResult]) -> Vec<RaceResult> {
    let mut ranked = results.to_vec();
    ranked.sort_by(|a, b| {
        a.is_non_classified()
            .cmp(&b.is_non_classified())
            .then_with(|| by_position(a.numeric_position(), b.numeric_position()))
    });
    ranked
}

/// The entry in first place. A position passed through as the string `"1"` counts,
/// the same way `rank_results` reads it; text like `"P1"` does not.
pub fn race_winner(results: &[RaceResult]) -> Option<&RaceResult> {
    results
        .iter()
        .find(|result| result.numeric_position() == Some(1.))
}

/// Drivers ordered by season points, missing points counting as zero.
pub fn rank_by_points(standings: &[DriverStanding]) -> Vec<DriverStanding> {
    let mut ranked = standings.to_vec();
    ranked.sort_by(|a, b| {
        b.points
            .unwrap_or(0.)
            .total_cmp(&a.points.unwrap_or(0.))
    });
    ranked
}

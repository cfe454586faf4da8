// Derived statistics over a race's lap collection. Everything here is a pure
// function of its input and is recomputed whenever the input changes.

pub mod compound;
pub mod histogram;
pub mod stint;
pub mod summary;

use std::{borrow::Borrow, convert::Infallible, fmt, str::FromStr};

pub use compound::{CompoundSummary, summarize_compounds};
pub use histogram::{HISTOGRAM_BINS, HistogramBucket, lap_time_histogram};
pub use stint::{STINT_LIMIT, StintSummary, summarize_stints};
pub use summary::{LapTimeSummary, average, fastest, median, present_lap_times, std_dev};

use crate::data::LapRecord;

/// Driver selector used by every lap view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DriverFilter {
    #[default]
    All,
    Driver(String),
}

impl DriverFilter {
    pub fn matches(&self, lap: &LapRecord) -> bool {
        match self {
            Self::All => true,
            Self::Driver(code) => lap.driver_code.as_deref() == Some(code.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl FromStr for DriverFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Driver(s.to_string()))
        }
    }
}

impl fmt::Display for DriverFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All drivers"),
            Self::Driver(code) => f.write_str(code),
        }
    }
}

/// Laps matching `filter`, in their original order.
pub fn filter_laps<'a, L: Borrow<LapRecord>>(
    laps: &'a [L],
    filter: &DriverFilter,
) -> Vec<&'a LapRecord> {
    laps.iter()
        .map(Borrow::<LapRecord>::borrow)
        .filter(|lap| filter.matches(lap))
        .collect()
}

/// Lap count and timed laps collected for one group.
#[derive(Clone, Debug, Default)]
pub(crate) struct LapAccumulator {
    pub(crate) laps: usize,
    times: Vec<f64>,
}

impl LapAccumulator {
    pub(crate) fn push(&mut self, lap: &LapRecord) {
        self.laps += 1;
        if let Some(time) = lap.lap_time() {
            self.times.push(time);
        }
    }

    pub(crate) fn average(&self) -> Option<f64> {
        average(&self.times)
    }
}

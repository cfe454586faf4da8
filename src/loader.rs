// Reads backend payloads saved to disk. Lap dumps can also be JSON Lines, one
// lap per line.

use std::{fs, path::Path};

use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::{
    PitlaneError,
    data::{
        DriverStanding, LapRecord, LapsPayload, Race, RaceResult, RacesPayload, ResultsPayload,
        StandingsPayload,
    },
};

/// Either the endpoint's envelope object or the bare array inside it.
enum Document<T, P> {
    Bare(Vec<T>),
    Payload(P),
}

fn display_path(path: &Path) -> String {
    format!("{:?}", path)
}

fn check_file(source_file: &Path) -> Result<(), PitlaneError> {
    if !source_file.is_file() {
        return Err(PitlaneError::InvalidPayloadFile {
            path: display_path(source_file),
        });
    }
    Ok(())
}

fn parse_error(source_file: &Path, e: serde_json::Error) -> PitlaneError {
    PitlaneError::PayloadParseError {
        path: display_path(source_file),
        source: e,
    }
}

// The shape is picked from the first token so a bad record reports its own
// field and line instead of a generic mismatch.
fn load_document<T: DeserializeOwned, P: DeserializeOwned>(
    source_file: &Path,
) -> Result<Document<T, P>, PitlaneError> {
    check_file(source_file)?;
    let content = fs::read_to_string(source_file).map_err(|e| PitlaneError::PayloadIOError {
        path: display_path(source_file),
        source: e,
    })?;
    let document = if content.trim_start().starts_with('[') {
        serde_json::from_str(&content).map(Document::Bare)
    } else {
        serde_json::from_str(&content).map(Document::Payload)
    };
    document.map_err(|e| parse_error(source_file, e))
}

fn load_jsonl<T: DeserializeOwned>(source_file: &Path) -> Result<Vec<T>, PitlaneError> {
    check_file(source_file)?;
    serde_jsonlines::json_lines(source_file)
        .and_then(|lines| lines.collect::<Result<Vec<T>, std::io::Error>>())
        .map_err(|e| PitlaneError::PayloadIOError {
            path: display_path(source_file),
            source: e,
        })
}

fn extension(source_file: &Path) -> Option<String> {
    source_file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

pub fn load_laps(source_file: &Path) -> Result<Vec<LapRecord>, PitlaneError> {
    let laps = match extension(source_file).as_deref() {
        Some("jsonl") => load_jsonl(source_file)?,
        Some("json") => match load_document::<LapRecord, LapsPayload>(source_file)? {
            Document::Bare(laps) => laps,
            Document::Payload(payload) => {
                if let Some(count) = payload.count
                    && count != payload.laps.len()
                {
                    debug!(
                        "Payload count {} does not match {} laps in {:?}",
                        count,
                        payload.laps.len(),
                        source_file
                    );
                }
                payload.laps
            }
        },
        _ => {
            return Err(PitlaneError::UnsupportedPayloadFormat {
                path: display_path(source_file),
            });
        }
    };
    info!("Loaded {} laps from {:?}", laps.len(), source_file);
    Ok(laps)
}

pub fn load_results(source_file: &Path) -> Result<Vec<RaceResult>, PitlaneError> {
    let results = match load_document::<RaceResult, ResultsPayload>(source_file)? {
        Document::Bare(results) => results,
        Document::Payload(payload) => payload.results,
    };
    info!("Loaded {} results from {:?}", results.len(), source_file);
    Ok(results)
}

pub fn load_races(source_file: &Path) -> Result<Vec<Race>, PitlaneError> {
    let races = match load_document::<Race, RacesPayload>(source_file)? {
        Document::Bare(races) => races,
        Document::Payload(payload) => payload.races,
    };
    info!("Loaded {} races from {:?}", races.len(), source_file);
    Ok(races)
}

pub fn load_standings(source_file: &Path) -> Result<Vec<DriverStanding>, PitlaneError> {
    let standings = match load_document::<DriverStanding, StandingsPayload>(source_file)? {
        Document::Bare(standings) => standings,
        Document::Payload(payload) => payload.drivers,
    };
    info!("Loaded {} drivers from {:?}", standings.len(), source_file);
    Ok(standings)
}

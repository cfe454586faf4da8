// Error types for pitlane

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum PitlaneError {
    // Errors while loading backend payloads
    #[snafu(display("Invalid payload file: {path}"))]
    InvalidPayloadFile { path: String },
    #[snafu(display("Error reading payload file {path}"))]
    PayloadIOError { path: String, source: io::Error },
    #[snafu(display("Error parsing payload file {path}"))]
    PayloadParseError {
        path: String,
        source: serde_json::Error,
    },
    #[snafu(display("Unsupported payload format for {path}, expected .json or .jsonl"))]
    UnsupportedPayloadFormat { path: String },

    #[snafu(display("Error serializing report"))]
    ReportSerializeError { source: serde_json::Error },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    // User input validation errors
    #[snafu(display("Invalid user input: {field} - {reason}"))]
    InvalidUserInput { field: String, reason: String },
}

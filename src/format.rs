// Display helpers shared by the CLI tables.

pub const MISSING: &str = "—";

/// Seconds with millisecond precision, or a dash when unavailable.
pub fn format_seconds(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{value:.3}s"),
        _ => MISSING.to_string(),
    }
}

pub fn format_optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

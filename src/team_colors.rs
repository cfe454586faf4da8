// Constructor palettes used to theme team views.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct TeamColors {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

const fn palette(
    name: &'static str,
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
) -> TeamColors {
    TeamColors {
        name,
        primary,
        secondary,
        accent,
    }
}

const TEAM_COLORS: [(&str, TeamColors); 10] = [
    ("mercedes", palette("Mercedes", "#00D2BE", "#000000", "#6CD3BF")),
    ("ferrari", palette("Ferrari", "#DC0000", "#FFF200", "#FF4444")),
    ("redbull", palette("Red Bull Racing", "#0600EF", "#FCD700", "#1E41FF")),
    ("mclaren", palette("McLaren", "#FF8700", "#000000", "#FFB800")),
    ("alpine", palette("Alpine", "#FE86BC", "#0090FF", "#FF9EC5")),
    ("astonmartin", palette("Aston Martin", "#006F62", "#00352F", "#229971")),
    ("sauber", palette("Kick Sauber", "#00E701", "#000000", "#52F066")),
    ("visarb", palette("Visa RB", "#1634CB", "#FFFFFF", "#4A69FF")),
    ("haas", palette("Haas", "#B6BABD", "#ED1B24", "#E8EAEA")),
    ("williams", palette("Williams", "#00A0DD", "#041E42", "#37BBED")),
];

/// Used for empty and unrecognised team names.
pub const FALLBACK_COLORS: TeamColors = palette("Ferrari", "#DC0000", "#FFF200", "#FF4444");

// Sponsor and entry names the backend reports, mapped to a palette key
const TEAM_ALIASES: [(&str, &str); 18] = [
    ("mercedesamg", "mercedes"),
    ("mercedesamgpetronas", "mercedes"),
    ("mercedesamgpetronasf1team", "mercedes"),
    ("scuderiaferrari", "ferrari"),
    ("redbullracing", "redbull"),
    ("oracle", "redbull"),
    ("oracleredbullracing", "redbull"),
    ("mclarenf1team", "mclaren"),
    ("bwtalpinef1team", "alpine"),
    ("astonmartinaramco", "astonmartin"),
    ("astonmartinaramcof1team", "astonmartin"),
    ("kicksauer", "sauber"),
    ("stakef1teamkicksauber", "sauber"),
    ("visacashapp", "visarb"),
    ("visacashapprb", "visarb"),
    ("visacashapprbformulaone", "visarb"),
    ("haasf1team", "haas"),
    ("williamsracing", "williams"),
];

/// Lowercase and keep ASCII letters and digits only.
pub fn normalize_team_name(team_name: &str) -> String {
    team_name
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

pub fn team_colors(team_name: &str) -> TeamColors {
    if team_name.is_empty() {
        return FALLBACK_COLORS;
    }
    let normalized = normalize_team_name(team_name);
    let key = TEAM_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map_or(normalized.as_str(), |(_, key)| *key);
    TEAM_COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(FALLBACK_COLORS, |(_, colors)| *colors)
}

/// CSS custom properties for a team-themed panel.
pub fn team_css_vars(team_name: &str) -> [(&'static str, &'static str); 3] {
    let colors = team_colors(team_name);
    [
        ("--team-primary", colors.primary),
        ("--team-secondary", colors.secondary),
        ("--team-accent", colors.accent),
    ]
}

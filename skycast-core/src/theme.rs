use rand::Rng;
use serde::{Deserialize, Serialize};

/// Cosmetic dark/light preference, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Screen-edge anchors the theme marker can sit at.
pub const EDGE_ANCHORS: [&str; 8] = [
    "top-left",
    "top-right",
    "bottom-left",
    "bottom-right",
    "middle-left",
    "middle-right",
    "top-center",
    "bottom-center",
];

/// Anchor the marker starts at on a fresh session (top-right).
pub const INITIAL_ANCHOR: usize = 1;

/// Draw the marker's next anchor: uniform over the 7 anchors that are not
/// `current`. Repeats of earlier positions across draws are allowed.
pub fn next_anchor(current: usize, rng: &mut impl Rng) -> usize {
    debug_assert!(current < EDGE_ANCHORS.len());
    let pick = rng.gen_range(0..EDGE_ANCHORS.len() - 1);
    if pick >= current { pick + 1 } else { pick }
}

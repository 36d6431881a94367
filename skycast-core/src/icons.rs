//! OpenWeather icon-code lookup table.
//!
//! Codes `01*`..`03*` (clear and light clouds) share one glyph, mirroring the
//! single animated asset the product uses for that family; everything else
//! maps individually. Unknown codes fall back to the clear-sky glyph.

/// Shared glyph for the clear/light-cloud family.
const SUN_AND_CLOUD: &str = "🌤";

pub const FALLBACK_GLYPH: &str = "☀";

const ICON_GLYPHS: &[(&str, &str)] = &[
    ("01d", SUN_AND_CLOUD),
    ("01n", SUN_AND_CLOUD),
    ("02d", SUN_AND_CLOUD),
    ("02n", SUN_AND_CLOUD),
    ("03d", SUN_AND_CLOUD),
    ("03n", SUN_AND_CLOUD),
    ("04d", "☁"),
    ("04n", "☁"),
    ("09d", "🌧"),
    ("09n", "🌧"),
    ("10d", "🌦"),
    ("10n", "🌦"),
    ("11d", "⛈"),
    ("11n", "⛈"),
    ("13d", "❄"),
    ("13n", "❄"),
    ("50d", "🌫"),
    ("50n", "🌫"),
];

pub fn glyph_for(icon_code: &str) -> &'static str {
    ICON_GLYPHS
        .iter()
        .find(|(code, _)| *code == icon_code)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(FALLBACK_GLYPH)
}

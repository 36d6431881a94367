//! Terminal painting of the fixed display slots.
//!
//! The core hands over pre-formatted strings ([`skycast_core::WeatherView`],
//! clock readouts); this module only lays them out. The theme marker sits on
//! the card frame at one of the eight edge anchors.

use skycast_core::{
    clock::{self, ClockReadout},
    theme::Theme,
    App, Screen,
};

const BAR_WIDTH: usize = 24;
const MIN_CARD_WIDTH: usize = 40;
const MARKER: char = '◐';

struct Palette {
    frame: &'static str,
    error: &'static str,
    reset: &'static str,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette { frame: "\x1b[34m", error: "\x1b[31m", reset: "\x1b[0m" },
        Theme::Dark => Palette { frame: "\x1b[96m", error: "\x1b[91m", reset: "\x1b[0m" },
    }
}

/// Paint the whole screen for the app's current state.
pub fn paint(app: &App) {
    let readout = clock::readout(app.clock().now());
    for line in lines(app, &readout) {
        println!("{line}");
    }
}

/// Compose all output lines. Split from [`paint`] so tests can assert on the
/// slots without capturing stdout.
pub fn lines(app: &App, clock: &ClockReadout) -> Vec<String> {
    let pal = palette(app.theme());

    let mut content: Vec<String> = Vec::new();
    match app.screen() {
        Screen::Hidden => {
            content.push("Type a city name to look up the weather.".to_string());
        }
        Screen::Weather(view) => {
            content.push(format!("{}  {} — {}", view.icon, view.condition, view.description));
            content.push(format!(
                "{}{}  in {}",
                view.temperature, view.temp_glyph, view.location_name
            ));
            content.push(view.feels_like_text.clone());
            content.push(format!(
                "{}  {}",
                view.humidity_text,
                humidity_bar(view.humidity_bar_pct, BAR_WIDTH)
            ));
        }
        Screen::Error(message) => {
            content.push(format!("{}{}{}", pal.error, message, pal.reset));
        }
    }
    content.push(format!("{} — {}  ({})", clock.time, clock.date, app.clock_label()));

    let mut out = framed(&content, app.anchor(), &pal);

    if !app.recent().is_empty() {
        let shortcuts = app
            .recent()
            .iter()
            .enumerate()
            .map(|(i, city)| format!("{}:{city}", i + 1))
            .collect::<Vec<_>>()
            .join("  ");
        out.push(format!("Recent: {shortcuts}"));
    }

    // The unit toggle is only advertised while weather is on screen.
    if matches!(app.screen(), Screen::Weather(_)) {
        out.push(format!("[:unit] {}", app.unit_toggle_label()));
    }

    out
}

/// Proportional fill bar: `pct` of `width` cells filled, rounded to nearest.
pub fn humidity_bar(pct: u8, width: usize) -> String {
    let pct = usize::from(pct.min(100));
    let filled = (pct * width + 50) / 100;
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}

/// Wrap content lines in a box frame with the theme marker spliced into the
/// border at the given edge anchor (see `skycast_core::theme::EDGE_ANCHORS`).
fn framed(content: &[String], anchor: usize, pal: &Palette) -> Vec<String> {
    let width = content
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_CARD_WIDTH)
        + 2;

    // Anchor indexes: 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right,
    // 4 middle-left, 5 middle-right, 6 top-center, 7 bottom-center.
    let top_marker = match anchor {
        0 => Some(1),
        6 => Some((width + 2) / 2),
        1 => Some(width),
        _ => None,
    };
    let bottom_marker = match anchor {
        2 => Some(1),
        7 => Some((width + 2) / 2),
        3 => Some(width),
        _ => None,
    };
    let mid = content.len() / 2;

    let mut out = Vec::with_capacity(content.len() + 2);
    out.push(horizontal(width, '┌', '┐', top_marker, pal));
    for (i, line) in content.iter().enumerate() {
        let left = if anchor == 4 && i == mid { MARKER } else { '│' };
        let right = if anchor == 5 && i == mid { MARKER } else { '│' };
        out.push(content_row(line, width, left, right, pal));
    }
    out.push(horizontal(width, '└', '┘', bottom_marker, pal));
    out
}

fn horizontal(
    width: usize,
    left: char,
    right: char,
    marker_col: Option<usize>,
    pal: &Palette,
) -> String {
    let mut chars: Vec<char> = Vec::with_capacity(width + 2);
    chars.push(left);
    chars.extend(std::iter::repeat('─').take(width));
    chars.push(right);
    if let Some(col) = marker_col {
        chars[col.min(width + 1)] = MARKER;
    }
    let border: String = chars.into_iter().collect();
    format!("{}{border}{}", pal.frame, pal.reset)
}

fn content_row(line: &str, width: usize, left: char, right: char, pal: &Palette) -> String {
    // Char count over-counts ANSI escapes and under-counts wide glyphs;
    // close enough for a card frame.
    let visible = line.chars().count();
    let pad = " ".repeat(width.saturating_sub(visible + 2));
    format!(
        "{frame}{left}{reset} {line}{pad} {frame}{right}{reset}",
        frame = pal.frame,
        reset = pal.reset,
    )
}

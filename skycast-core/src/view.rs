use crate::{icons, model::WeatherReport};

/// Pre-formatted values for the fixed display slots. Building the view is
/// deterministic; the terminal renderer only paints these strings.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub condition: String,
    pub description: String,
    /// "Humidity 73%"
    pub humidity_text: String,
    /// Fill-bar percent, mapped 1:1 from the humidity percent.
    pub humidity_bar_pct: u8,
    /// "Feels 21°C"
    pub feels_like_text: String,
    /// Rounded to the nearest integer.
    pub temperature: i64,
    pub temp_glyph: &'static str,
    pub location_name: String,
    pub icon: &'static str,
    /// "Paris Time"
    pub clock_label: String,
}

impl WeatherView {
    pub fn from_report(report: &WeatherReport) -> Self {
        let glyph = report.unit.temp_glyph();
        Self {
            condition: report.condition.clone(),
            description: report.description.clone(),
            humidity_text: format!("Humidity {}%", report.humidity_pct),
            humidity_bar_pct: report.humidity_pct.min(100),
            feels_like_text: format!("Feels {}{}", report.feels_like.round() as i64, glyph),
            temperature: report.temperature.round() as i64,
            temp_glyph: glyph,
            location_name: report.location_name.clone(),
            icon: icons::glyph_for(&report.icon_code),
            clock_label: format!("{} Time", report.location_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;

    fn report() -> WeatherReport {
        WeatherReport {
            location_name: "Paris".into(),
            condition: "Clouds".into(),
            description: "scattered clouds".into(),
            icon_code: "03d".into(),
            temperature: 21.4,
            feels_like: 20.6,
            humidity_pct: 73,
            timezone_offset_secs: 7200,
            unit: Unit::Metric,
        }
    }

    #[test]
    fn humidity_text_and_bar_agree() {
        let view = WeatherView::from_report(&report());
        assert_eq!(view.humidity_text, "Humidity 73%");
        assert_eq!(view.humidity_bar_pct, 73);
    }

    #[test]
    fn temperatures_round_to_nearest_integer() {
        let view = WeatherView::from_report(&report());
        assert_eq!(view.temperature, 21);
        assert_eq!(view.feels_like_text, "Feels 21°C");

        let mut r = report();
        r.temperature = 21.5;
        r.unit = Unit::Imperial;
        let view = WeatherView::from_report(&r);
        assert_eq!(view.temperature, 22);
        assert_eq!(view.temp_glyph, "°F");
    }

    #[test]
    fn clock_label_names_the_location() {
        let view = WeatherView::from_report(&report());
        assert_eq!(view.clock_label, "Paris Time");
        assert_eq!(view.icon, crate::icons::glyph_for("03d"));
    }
}

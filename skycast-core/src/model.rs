use serde::{Deserialize, Serialize};

/// A single weather lookup: either a free-text city name or a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coords { lat: f64, lon: f64 },
}

impl WeatherQuery {
    /// City name for queries that carry one; coordinate queries have none.
    pub fn city(&self) -> Option<&str> {
        match self {
            WeatherQuery::City(name) => Some(name.as_str()),
            WeatherQuery::Coords { .. } => None,
        }
    }
}

/// Parsed current-weather payload, consumed by the render step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    pub condition: String,
    pub description: String,
    pub icon_code: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    /// Seconds east of UTC at the reported location.
    pub timezone_offset_secs: i32,
    pub unit: Unit,
}

/// Temperature unit system sent to the weather service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Unit {
    #[default]
    #[serde(rename = "metric")]
    Metric,
    #[serde(rename = "imperial")]
    Imperial,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Metric => "metric",
            Unit::Imperial => "imperial",
        }
    }

    pub fn parse(s: &str) -> Option<Unit> {
        match s {
            "metric" => Some(Unit::Metric),
            "imperial" => Some(Unit::Imperial),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Unit {
        match self {
            Unit::Metric => Unit::Imperial,
            Unit::Imperial => Unit::Metric,
        }
    }

    pub fn temp_glyph(&self) -> &'static str {
        match self {
            Unit::Metric => "°C",
            Unit::Imperial => "°F",
        }
    }

    /// Label for the unit toggle, advertising the *other* unit.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Unit::Metric => "Switch to °F",
            Unit::Imperial => "Switch to °C",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_parse_roundtrip() {
        for unit in [Unit::Metric, Unit::Imperial] {
            assert_eq!(Unit::parse(unit.as_str()), Some(unit));
        }
        assert_eq!(Unit::parse("kelvin"), None);
    }

    #[test]
    fn toggle_label_advertises_other_unit() {
        assert_eq!(Unit::Metric.toggle_label(), "Switch to °F");
        assert_eq!(Unit::Imperial.toggle_label(), "Switch to °C");
    }

    #[test]
    fn coordinate_queries_have_no_city() {
        assert_eq!(WeatherQuery::City("Paris".into()).city(), Some("Paris"));
        assert_eq!(WeatherQuery::Coords { lat: 48.8, lon: 2.3 }.city(), None);
    }
}

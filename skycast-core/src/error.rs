use thiserror::Error;

/// User-facing failures. Every variant's message is shown verbatim on the
/// error slot; none of them is fatal and none triggers a retry.
#[derive(Debug, Error)]
pub enum SkycastError {
    #[error("Please enter a city name.")]
    EmptyInput,

    #[error("Location not found!")]
    NotFound,

    #[error("Weather request failed: {0}")]
    Fetch(anyhow::Error),

    #[error("Speech recognition not supported in this session.")]
    VoiceUnsupported,

    #[error("Speech recognition error: {0}")]
    Voice(anyhow::Error),

    #[error("Geolocation not supported.")]
    GeoUnsupported,

    #[error("Geolocation not allowed.")]
    GeoDenied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_ui_strings() {
        assert_eq!(SkycastError::EmptyInput.to_string(), "Please enter a city name.");
        assert_eq!(SkycastError::NotFound.to_string(), "Location not found!");
        assert_eq!(SkycastError::GeoDenied.to_string(), "Geolocation not allowed.");
    }
}

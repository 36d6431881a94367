//! Platform-capability seams: geolocation and voice capture.
//!
//! Each capability is a small `{available, request}` trait so the session can
//! run against real integrations or test doubles interchangeably.

use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::SkycastError;

/// Single-shot device position lookup.
#[async_trait]
pub trait Geolocator: Send + Sync {
    fn available(&self) -> bool;
    async fn locate(&self) -> Result<(f64, f64), SkycastError>;
}

/// Single-shot voice transcript capture.
#[async_trait]
pub trait VoiceCapture: Send + Sync {
    fn available(&self) -> bool;
    async fn capture(&self) -> Result<String, SkycastError>;
}

const IP_API_URL: &str = "http://ip-api.com/json";
const GEO_TIMEOUT_SECS: u64 = 10;

/// Coarse geolocation from the machine's public IP. The terminal stand-in for
/// a positioning sensor; city-level accuracy is plenty for a weather lookup.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    url: String,
}

impl IpGeolocator {
    pub fn new() -> Self {
        Self { url: IP_API_URL.to_string() }
    }

    pub fn with_url(url: String) -> Self {
        Self { url }
    }
}

impl Default for IpGeolocator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[async_trait]
impl Geolocator for IpGeolocator {
    fn available(&self) -> bool {
        true
    }

    async fn locate(&self) -> Result<(f64, f64), SkycastError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(GEO_TIMEOUT_SECS))
            .build()
            .map_err(|_| SkycastError::GeoDenied)?;

        let response = match client.get(&self.url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(error = %e, "geolocation request failed");
                return Err(SkycastError::GeoDenied);
            }
        };

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "geolocation returned non-success");
            return Err(SkycastError::GeoDenied);
        }

        let body: IpApiResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!(error = %e, "geolocation parse error");
                return Err(SkycastError::GeoDenied);
            }
        };

        match (body.status.as_deref(), body.lat, body.lon) {
            (Some("success") | None, Some(lat), Some(lon)) => Ok((lat, lon)),
            _ => Err(SkycastError::GeoDenied),
        }
    }
}

/// Voice capture by shelling out to a user-configured transcriber command
/// that prints one transcript line to stdout. No configured command means the
/// capability is unavailable.
#[derive(Debug, Clone)]
pub struct ExternalVoiceCapture {
    command: Option<String>,
}

impl ExternalVoiceCapture {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }
}

#[async_trait]
impl VoiceCapture for ExternalVoiceCapture {
    fn available(&self) -> bool {
        self.command.is_some()
    }

    async fn capture(&self) -> Result<String, SkycastError> {
        let command = self.command.as_deref().ok_or(SkycastError::VoiceUnsupported)?;

        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or(SkycastError::VoiceUnsupported)?;

        let output = tokio::process::Command::new(program)
            .args(parts)
            .output()
            .await
            .with_context(|| format!("Failed to run transcriber command: {program}"))
            .map_err(SkycastError::Voice)?;

        if !output.status.success() {
            return Err(SkycastError::Voice(anyhow!(
                "transcriber exited with {}",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let transcript = stdout.lines().next().unwrap_or("");
        let cleaned = clean_transcript(transcript);
        if cleaned.is_empty() {
            return Err(SkycastError::Voice(anyhow!("transcriber produced no transcript")));
        }

        Ok(cleaned)
    }
}

/// Strip trailing punctuation and surrounding whitespace from a transcript,
/// so "Paris." and "paris, " search cleanly.
pub fn clean_transcript(raw: &str) -> String {
    raw.trim().trim_end_matches(['.', ',', '!', '?']).trim_end().to_string()
}

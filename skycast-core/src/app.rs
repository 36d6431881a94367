use rand::Rng;

use crate::{
    capability::{Geolocator, VoiceCapture},
    clock::ClockState,
    error::SkycastError,
    model::{Unit, WeatherQuery, WeatherReport},
    provider::WeatherProvider,
    recent::RecentCities,
    store::{PrefStore, KEY_THEME, KEY_UNIT},
    theme::{self, Theme},
    view::WeatherView,
};

/// What the main display region currently shows. Weather and error content
/// are mutually exclusive; any fetch outcome replaces the whole screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Nothing fetched yet.
    Hidden,
    Weather(WeatherView),
    Error(String),
}

/// The application core: explicit state plus the fetch → render-or-error →
/// record-recent cycle. Collaborators (provider, store, capabilities) come in
/// as trait objects so every path tests against doubles.
pub struct App {
    provider: Box<dyn WeatherProvider>,
    store: Box<dyn PrefStore>,
    unit: Unit,
    theme: Theme,
    anchor: usize,
    clock: ClockState,
    recent: RecentCities,
    screen: Screen,
    latest_ticket: u64,
}

impl App {
    /// Build the app, restoring persisted unit, theme, and recent cities.
    pub fn new(provider: Box<dyn WeatherProvider>, store: Box<dyn PrefStore>) -> Self {
        let unit = store.get(KEY_UNIT).and_then(|s| Unit::parse(&s)).unwrap_or_default();
        let theme = store.get(KEY_THEME).and_then(|s| Theme::parse(&s)).unwrap_or_default();
        let recent = RecentCities::load(store.as_ref());

        Self {
            provider,
            store,
            unit,
            theme,
            anchor: theme::INITIAL_ANCHOR,
            clock: ClockState::local(),
            recent,
            screen: Screen::Hidden,
            latest_ticket: 0,
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Index into [`theme::EDGE_ANCHORS`] where the theme marker sits.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn clock(&self) -> ClockState {
        self.clock
    }

    pub fn recent(&self) -> &RecentCities {
        &self.recent
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Label for the unit toggle, advertising the other unit.
    pub fn unit_toggle_label(&self) -> &'static str {
        self.unit.toggle_label()
    }

    /// Label for the clock slot: the displayed location's time, or local time.
    pub fn clock_label(&self) -> String {
        match &self.screen {
            Screen::Weather(view) => view.clock_label.clone(),
            _ => "Local Time".to_string(),
        }
    }

    /// Free-text search. Empty input takes the error path without a request.
    pub async fn search(&mut self, input: &str) {
        let city = input.trim();
        if city.is_empty() {
            self.fail(SkycastError::EmptyInput);
            return;
        }
        self.fetch(WeatherQuery::City(city.to_string())).await;
    }

    /// One fetch attempt for `query`; the outcome lands on the screen.
    pub async fn fetch(&mut self, query: WeatherQuery) {
        let ticket = self.issue_ticket();
        let result = self.provider.current(&query, self.unit).await;
        self.apply(ticket, &query, result);
    }

    /// Reserve the next fetch ticket. Only the most recently issued ticket's
    /// response is applied; anything older is stale and discarded.
    pub fn issue_ticket(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.latest_ticket
    }

    /// Apply a fetch outcome. Success renders the report, seeds the clock
    /// with the location's offset, and records city queries in the recent
    /// list; failure takes the error path.
    pub fn apply(
        &mut self,
        ticket: u64,
        query: &WeatherQuery,
        result: Result<WeatherReport, SkycastError>,
    ) {
        if ticket != self.latest_ticket {
            tracing::debug!(ticket, latest = self.latest_ticket, "discarding stale response");
            return;
        }

        match result {
            Ok(report) => {
                self.clock = ClockState::with_offset(report.timezone_offset_secs);
                self.screen = Screen::Weather(WeatherView::from_report(&report));
                if let Some(city) = query.city() {
                    if let Err(e) = self.recent.record(city, self.store.as_mut()) {
                        tracing::warn!(error = %e, "failed to persist recent cities");
                    }
                }
            }
            Err(err) => self.fail(err),
        }
    }

    /// Error path: replaces the display with a message and resets the clock
    /// to device-local time. Idempotent.
    pub fn fail(&mut self, err: SkycastError) {
        self.clock = ClockState::local();
        self.screen = Screen::Error(err.to_string());
    }

    /// Flip the unit preference and persist it. Re-fetches the displayed
    /// location so the shown values pick up the new unit; does nothing else
    /// when the screen is hidden or showing an error.
    pub async fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
        if let Err(e) = self.store.set(KEY_UNIT, self.unit.as_str()) {
            tracing::warn!(error = %e, "failed to persist unit preference");
        }

        if let Screen::Weather(view) = &self.screen {
            let city = view.location_name.clone();
            self.fetch(WeatherQuery::City(city)).await;
        }
    }

    /// Flip the theme, persist it, and move the theme marker to a random
    /// edge anchor other than the current one.
    pub fn toggle_theme(&mut self, rng: &mut impl Rng) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set(KEY_THEME, self.theme.as_str()) {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
        self.anchor = theme::next_anchor(self.anchor, rng);
    }

    /// Geolocation search: one position request, then a coordinate fetch.
    pub async fn locate(&mut self, geo: &dyn Geolocator) {
        if !geo.available() {
            self.fail(SkycastError::GeoUnsupported);
            return;
        }
        match geo.locate().await {
            Ok((lat, lon)) => self.fetch(WeatherQuery::Coords { lat, lon }).await,
            Err(err) => self.fail(err),
        }
    }

    /// Voice search: capture one transcript and search it. Returns the
    /// transcript so the caller can echo it into the input slot.
    pub async fn voice_search(&mut self, voice: &dyn VoiceCapture) -> Option<String> {
        if !voice.available() {
            self.fail(SkycastError::VoiceUnsupported);
            return None;
        }
        match voice.capture().await {
            Ok(transcript) => {
                self.search(&transcript).await;
                Some(transcript)
            }
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }
}

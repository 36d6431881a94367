//! Core library for the `skycast` weather tool.
//!
//! This crate defines:
//! - The application state and the fetch → render-or-error → record-recent cycle
//! - Abstraction over the weather provider and platform capabilities
//! - Persisted preferences (unit, theme, recent cities) and clock arithmetic
//!
//! It is used by `skycast-cli`, but can also be reused by other frontends.

pub mod app;
pub mod capability;
pub mod clock;
pub mod config;
pub mod error;
pub mod icons;
pub mod model;
pub mod provider;
pub mod recent;
pub mod store;
pub mod theme;
pub mod view;

pub use app::{App, Screen};
pub use clock::ClockState;
pub use config::Config;
pub use error::SkycastError;
pub use model::{Unit, WeatherQuery, WeatherReport};
pub use provider::WeatherProvider;
pub use recent::RecentCities;
pub use store::{FilePrefStore, MemoryStore, PrefStore};
pub use theme::Theme;
pub use view::WeatherView;

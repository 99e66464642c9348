//! # hearth-sources
//!
//! External inputs for the morning briefing: current weather from Open-Meteo
//! and event descriptions from a static content host.

pub mod content;
pub mod weather;

pub use content::ContentClient;
pub use weather::{CurrentWeather, WeatherClient, WeatherCondition};

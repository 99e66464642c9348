//! # hearth-tracker
//!
//! Interactive checklist state for Hearth:
//! - `checklist`: parse task sections out of a briefing message
//! - `callback`: inline-button callback data encoding
//! - `state`: in-memory per-message completion sets
//! - `progress`: percentage and glyph progress bar
//! - `stats`: flat JSON daily totals for the evening summary

pub mod callback;
pub mod checklist;
pub mod progress;
pub mod state;
pub mod stats;

pub use callback::CallbackAction;
pub use checklist::{Category, Checklist};
pub use progress::{percentage, progress_bar, DEFAULT_BAR_LENGTH};
pub use state::{Completion, ToggleState};
pub use stats::{DayStats, StatsStore};

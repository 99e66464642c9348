//! # hearth-core
//!
//! Core types, traits, configuration, calendar rules, and error handling for Hearth.

pub mod calendar;
pub mod config;
pub mod error;
pub mod message;
pub mod traits;

//! # hearth-channels
//!
//! Messaging platform integration for Hearth.

pub mod telegram;

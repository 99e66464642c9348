use crate::calendar::EventRule;
use serde::{Deserialize, Serialize};

/// A family event placed by a monthly rule (e.g. third Saturday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringEvent {
    /// Stable identifier, used in logs.
    pub key: String,
    /// Display name in reminders.
    pub name: String,
    /// File fetched from the content host and appended to the reminder.
    pub file: String,
    pub rule: EventRule,
}

/// A birthday or anniversary, matched on (day, month) only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Birthday {
    pub name: String,
    pub day: u32,
    pub month: u32,
}

/// One entry of the weekly activity schedule.
///
/// Fields default to empty so a malformed entry is skipped at render time
/// instead of failing the whole config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub person: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub time: String,
}

impl Activity {
    pub fn is_complete(&self) -> bool {
        !self.person.is_empty() && !self.activity.is_empty() && !self.time.is_empty()
    }
}

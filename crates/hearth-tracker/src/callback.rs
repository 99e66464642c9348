//! Inline-button callback data.

use crate::checklist::Category;

/// What a checklist button asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Flip one task's completion.
    Toggle(Category, usize),
    /// Record progress and freeze the message.
    Save,
    /// Discard the checklist.
    Cancel,
    /// Section header button; no-op.
    Header,
}

impl CallbackAction {
    /// Parse callback data, e.g. `toggle_cant_do_3` or `save_progress`.
    ///
    /// The index is taken after the last underscore so categories may
    /// contain underscores themselves.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "save_progress" => return Some(Self::Save),
            "cancel_update" => return Some(Self::Cancel),
            "header" => return Some(Self::Header),
            _ => {}
        }
        let rest = data.strip_prefix("toggle_")?;
        let (key, idx) = rest.rsplit_once('_')?;
        let category = Category::from_key(key)?;
        let idx = idx.parse().ok()?;
        Some(Self::Toggle(category, idx))
    }

    /// Encode as callback data (at most 64 bytes in Telegram).
    pub fn to_data(self) -> String {
        match self {
            Self::Toggle(category, idx) => format!("toggle_{}_{idx}", category.key()),
            Self::Save => "save_progress".to_string(),
            Self::Cancel => "cancel_update".to_string(),
            Self::Header => "header".to_string(),
        }
    }
}

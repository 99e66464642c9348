//! Checklist parsing: task sections and bullet lines out of free message text.

use hearth_core::config::ChecklistMarkers;
use tracing::info;

/// Fixed checklist task groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Daytime tasks.
    Day,
    /// Things not to do today.
    CantDo,
    /// Evening tasks.
    Evening,
}

impl Category {
    /// Render order.
    pub const ALL: [Category; 3] = [Category::Day, Category::CantDo, Category::Evening];

    /// Key used in callback data.
    pub fn key(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::CantDo => "cant_do",
            Self::Evening => "evening",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Tasks grouped by category, in message order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    day: Vec<String>,
    cant_do: Vec<String>,
    evening: Vec<String>,
}

impl Checklist {
    pub fn tasks(&self, category: Category) -> &[String] {
        match category {
            Category::Day => &self.day,
            Category::CantDo => &self.cant_do,
            Category::Evening => &self.evening,
        }
    }

    pub fn push(&mut self, category: Category, task: impl Into<String>) {
        let list = match category {
            Category::Day => &mut self.day,
            Category::CantDo => &mut self.cant_do,
            Category::Evening => &mut self.evening,
        };
        list.push(task.into());
    }

    /// Total number of tasks across all categories.
    pub fn total(&self) -> usize {
        self.day.len() + self.cant_do.len() + self.evening.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Parse a briefing message into task sections.
    ///
    /// Header lines switch the active section (reset headers clear it) and
    /// are never tasks. Inside a section, bullet lines become tasks. Bullet
    /// lines outside any section are dropped, including ones that follow a
    /// header the markers do not recognise.
    pub fn parse(text: &str, markers: &ChecklistMarkers) -> Self {
        let mut checklist = Self::default();
        let mut current: Option<Category> = None;

        for raw in text.lines() {
            let line = raw.trim();
            let clean = line.replace("<b>", "").replace("</b>", "");

            if contains_all(&clean, &markers.day) {
                current = Some(Category::Day);
                continue;
            }
            if contains_any(&clean, &markers.cant_do) {
                current = Some(Category::CantDo);
                continue;
            }
            if contains_all(&clean, &markers.evening) {
                current = Some(Category::Evening);
                continue;
            }
            if contains_any(&clean, &markers.reset) {
                current = None;
                continue;
            }

            let Some(section) = current else {
                continue;
            };
            if let Some(rest) = line.strip_prefix(markers.bullet.as_str()) {
                let task = rest.trim();
                if !task.is_empty() {
                    checklist.push(section, task);
                }
            }
        }

        info!(
            "parsed checklist: day={}, cant_do={}, evening={}",
            checklist.day.len(),
            checklist.cant_do.len(),
            checklist.evening.len()
        );
        checklist
    }
}

fn contains_all(line: &str, phrases: &[String]) -> bool {
    !phrases.is_empty() && phrases.iter().all(|p| line.contains(p.as_str()))
}

fn contains_any(line: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| line.contains(p.as_str()))
}

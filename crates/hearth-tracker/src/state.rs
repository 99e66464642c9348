//! Per-message completion state. In memory only; lost on restart.

use crate::checklist::{Category, Checklist};
use std::collections::{BTreeSet, HashMap};

/// Completed task indices per (message id, category), plus the checklist
/// each tracked message was rendered from.
#[derive(Debug, Default)]
pub struct ToggleState {
    completed: HashMap<(i64, Category), BTreeSet<usize>>,
    checklists: HashMap<i64, Checklist>,
}

impl ToggleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the checklist a sent message was rendered from.
    pub fn register(&mut self, message_id: i64, checklist: Checklist) {
        self.checklists.insert(message_id, checklist);
    }

    pub fn checklist(&self, message_id: i64) -> Option<&Checklist> {
        self.checklists.get(&message_id)
    }

    /// Flip membership of `idx`. Returns whether it is now completed.
    pub fn toggle(&mut self, message_id: i64, category: Category, idx: usize) -> bool {
        let set = self.completed.entry((message_id, category)).or_default();
        if set.remove(&idx) {
            false
        } else {
            set.insert(idx);
            true
        }
    }

    /// Snapshot of one message's completion across all categories.
    pub fn completion(&self, message_id: i64) -> Completion {
        let mut done = HashMap::new();
        for category in Category::ALL {
            if let Some(set) = self.completed.get(&(message_id, category)) {
                done.insert(category, set.clone());
            }
        }
        Completion { done }
    }

    /// Drop all state for a message.
    pub fn forget(&mut self, message_id: i64) {
        self.completed.retain(|(id, _), _| *id != message_id);
        self.checklists.remove(&message_id);
    }

    /// Number of messages with any tracked state.
    pub fn tracked_messages(&self) -> usize {
        self.completed
            .keys()
            .map(|(id, _)| *id)
            .chain(self.checklists.keys().copied())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Completed indices of one message, per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    done: HashMap<Category, BTreeSet<usize>>,
}

impl Completion {
    pub fn is_done(&self, category: Category, idx: usize) -> bool {
        self.done
            .get(&category)
            .is_some_and(|set| set.contains(&idx))
    }

    /// Completed tasks that exist in `checklist`; stale indices are ignored.
    pub fn done_count(&self, checklist: &Checklist) -> usize {
        Category::ALL
            .into_iter()
            .map(|c| {
                (0..checklist.tasks(c).len())
                    .filter(|idx| self.is_done(c, *idx))
                    .count()
            })
            .sum()
    }
}

//! Checklist message text and its inline keyboard.

use crate::i18n::t;
use hearth_core::message::{Button, Keyboard};
use hearth_tracker::{
    percentage, progress_bar, CallbackAction, Category, Checklist, Completion, DEFAULT_BAR_LENGTH,
};

/// Button label length before truncation.
const BUTTON_TEXT_MAX: usize = 35;
/// Shorter for prohibited tasks, which carry the negation prefix.
const BUTTON_TEXT_MAX_NEGATED: usize = 32;

fn section_key(category: Category) -> &'static str {
    match category {
        Category::Day => "section_day",
        Category::CantDo => "section_cant_do",
        Category::Evening => "section_evening",
    }
}

fn button_key(category: Category) -> &'static str {
    match category {
        Category::Day => "button_day",
        Category::CantDo => "button_cant_do",
        Category::Evening => "button_evening",
    }
}

fn mark(done: bool) -> &'static str {
    if done {
        "✅"
    } else {
        "⬜"
    }
}

/// First `max` characters, with `...` appended when anything was cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Checklist body: title, one block per non-empty category, progress line.
pub fn render_checklist(
    lang: &str,
    checklist: &Checklist,
    completion: &Completion,
    title: &str,
) -> String {
    let not = t("not_prefix", lang);
    let mut sections = Vec::new();
    for category in Category::ALL {
        let tasks = checklist.tasks(category);
        if tasks.is_empty() {
            continue;
        }
        let mut block = format!("{}\n", t(section_key(category), lang));
        for (idx, task) in tasks.iter().enumerate() {
            let m = mark(completion.is_done(category, idx));
            if category == Category::CantDo {
                block.push_str(&format!("{m} {not} {task}\n"));
            } else {
                block.push_str(&format!("{m} {task}\n"));
            }
        }
        sections.push(block);
    }

    let total = checklist.total();
    let done = completion.done_count(checklist);
    let pct = percentage(done, total);
    let bar = progress_bar(pct, DEFAULT_BAR_LENGTH);

    format!(
        "{title}\n\n{}\n{} {bar} {done}/{total} ({pct}%)\n",
        sections.join("\n"),
        t("progress_label", lang)
    )
}

/// One header row per non-empty category, one row per task, then Save/Cancel.
pub fn checklist_keyboard(lang: &str, checklist: &Checklist, completion: &Completion) -> Keyboard {
    let not = t("not_prefix", lang);
    let mut rows = Vec::new();
    for category in Category::ALL {
        let tasks = checklist.tasks(category);
        if tasks.is_empty() {
            continue;
        }
        rows.push(vec![Button::new(
            t(button_key(category), lang),
            CallbackAction::Header.to_data(),
        )]);
        for (idx, task) in tasks.iter().enumerate() {
            let m = mark(completion.is_done(category, idx));
            let label = if category == Category::CantDo {
                format!("{m} {}. {not} {}", idx + 1, truncate(task, BUTTON_TEXT_MAX_NEGATED))
            } else {
                format!("{m} {}. {}", idx + 1, truncate(task, BUTTON_TEXT_MAX))
            };
            rows.push(vec![Button::new(
                label,
                CallbackAction::Toggle(category, idx).to_data(),
            )]);
        }
    }
    rows.push(vec![
        Button::new(t("button_save", lang), CallbackAction::Save.to_data()),
        Button::new(t("button_cancel", lang), CallbackAction::Cancel.to_data()),
    ]);
    Keyboard { rows }
}

/// Frozen version shown after Save: banner, results title, no keyboard.
pub fn render_results(lang: &str, checklist: &Checklist, completion: &Completion) -> String {
    format!(
        "{}\n\n{}",
        t("progress_saved_banner", lang),
        render_checklist(lang, checklist, completion, t("results_title", lang))
    )
}

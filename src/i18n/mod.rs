//! Internationalization: localized strings for briefings and the checklist.
//!
//! Uses a simple `t(key, lang)` function for static strings and the helpers
//! in `format` for strings with interpolation.
//! Supported languages: Russian (`ru`, default) and English (`en`, fallback).

mod format;


pub use format::*;

/// Return a localized static string for `key` in the given `lang`.
/// Falls back to English for unsupported languages, `???` for unknown keys.
pub fn t(key: &str, lang: &str) -> &'static str {
    match key {
        // --- Morning briefing ---
        "kids_header" => match lang {
            "ru" => "<b>👨‍👩‍👧‍👦 Занятия детей сегодня:</b>",
            _ => "<b>👨‍👩‍👧‍👦 Kids' activities today:</b>",
        },
        "dishes_header" => match lang {
            "ru" => "<b>🍽️ Посуда:</b>",
            _ => "<b>🍽️ Dishes:</b>",
        },
        "friday_cleaning" => match lang {
            "ru" => "<b>🧹 Сегодня пятница:</b>\n• Зачёт по чистоте комнаты <i>(20 min)</i>",
            _ => "<b>🧹 It's Friday:</b>\n• Room cleanliness check <i>(20 min)</i>",
        },
        "reminder_week" => match lang {
            "ru" => "🔔 <b>НАПОМИНАНИЕ (За 7 дней):</b>",
            _ => "🔔 <b>REMINDER (in 7 days):</b>",
        },
        "reminder_three_days" => match lang {
            "ru" => "🔔 <b>НАПОМИНАНИЕ (За 3 дня):</b>",
            _ => "🔔 <b>REMINDER (in 3 days):</b>",
        },
        "reminder_today" => match lang {
            "ru" => "🎉 <b>СЕГОДНЯ:</b>",
            _ => "🎉 <b>TODAY:</b>",
        },
        "birthdays_header" => match lang {
            "ru" => "🎂 <b>ЗАВТРА ДЕНЬ РОЖДЕНИЯ:</b>",
            _ => "🎂 <b>BIRTHDAYS TOMORROW:</b>",
        },
        "gratitude" => match lang {
            "ru" => "🌷Самое время получить семейную благодарность",
            _ => "🌷Time for family gratitude",
        },
        "games" => match lang {
            "ru" => "🏠Самое время поиграть в семейные игры и повеселиться",
            _ => "🏠Time to play family games and have fun",
        },
        "not_available" => "N/A",

        // --- Checklist ---
        "checklist_title" => match lang {
            "ru" => "<b>📋 Отметь выполненные задачи:</b>",
            _ => "<b>📋 Mark completed tasks:</b>",
        },
        "results_title" => match lang {
            "ru" => "<b>📋 Результаты:</b>",
            _ => "<b>📋 Results:</b>",
        },
        "progress_saved_banner" => match lang {
            "ru" => "<b>✅ Прогресс сохранён!</b>",
            _ => "<b>✅ Progress saved!</b>",
        },
        "progress_saved_toast" => match lang {
            "ru" => "Прогресс сохранён! ✅",
            _ => "Progress saved! ✅",
        },
        "update_cancelled_toast" => match lang {
            "ru" => "Обновление отменено",
            _ => "Update cancelled",
        },
        "update_cancelled" => match lang {
            "ru" => "❌ Обновление отменено",
            _ => "❌ Update cancelled",
        },
        "section_day" => match lang {
            "ru" => "<b>☀️ ДНЕВНЫЕ:</b>",
            _ => "<b>☀️ DAYTIME:</b>",
        },
        "section_cant_do" => match lang {
            "ru" => "<b>⛔ НЕЛЬЗЯ ДЕЛАТЬ:</b>",
            _ => "<b>⛔ DON'T:</b>",
        },
        "section_evening" => match lang {
            "ru" => "<b>🌙 ВЕЧЕРНИЕ:</b>",
            _ => "<b>🌙 EVENING:</b>",
        },
        "button_day" => match lang {
            "ru" => "☀️ ДНЕВНЫЕ ЗАДАЧИ",
            _ => "☀️ DAYTIME TASKS",
        },
        "button_cant_do" => match lang {
            "ru" => "⛔ НЕЛЬЗЯ ДЕЛАТЬ",
            _ => "⛔ DON'T DO",
        },
        "button_evening" => match lang {
            "ru" => "🌙 ВЕЧЕРНИЕ ЗАДАЧИ",
            _ => "🌙 EVENING TASKS",
        },
        "not_prefix" => match lang {
            "ru" => "НЕ",
            _ => "NO",
        },
        "progress_label" => match lang {
            "ru" => "<b>📊 Прогресс:</b>",
            _ => "<b>📊 Progress:</b>",
        },
        "button_save" => match lang {
            "ru" => "💾 Сохранить",
            _ => "💾 Save",
        },
        "button_cancel" => match lang {
            "ru" => "❌ Отмена",
            _ => "❌ Cancel",
        },

        // --- Daily summary ---
        "summary_excellent" => match lang {
            "ru" => "🎉 Отличная работа! Продолжайте в том же духе!",
            _ => "🎉 Excellent work! Keep it up!",
        },
        "summary_good" => match lang {
            "ru" => "👍 Хороший результат! Завтра будет ещё лучше!",
            _ => "👍 Good result! Tomorrow will be even better!",
        },
        "summary_retry" => match lang {
            "ru" => "💪 Завтра новый день! Постарайтесь сделать больше!",
            _ => "💪 Tomorrow is a new day! Try to do more!",
        },
        _ => "???",
    }
}

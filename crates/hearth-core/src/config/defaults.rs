//! Default value functions used by serde for config deserialization.

use super::RecurringEvent;
use crate::calendar::{EventRule, Occurrence};
use chrono::Weekday;

pub fn default_name() -> String {
    "Hearth".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_locale() -> String {
    "ru".to_string()
}

pub fn default_request_timeout() -> u64 {
    10
}

pub fn default_latitude() -> f64 {
    59.9311
}

pub fn default_longitude() -> f64 {
    30.3609
}

pub fn default_timezone() -> String {
    "Europe/Moscow".to_string()
}

pub fn default_city() -> String {
    "Санкт-Петербурге".to_string()
}

pub fn default_weather_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

pub fn default_content_base_url() -> String {
    "https://raw.githubusercontent.com/BRKME/Day/main".to_string()
}

pub fn default_port() -> u16 {
    8080
}

pub fn default_stats_path() -> String {
    "stats.json".to_string()
}

pub fn default_summary_time() -> String {
    "21:00".to_string()
}

pub fn default_poll_interval() -> u64 {
    1
}

pub fn default_error_delay() -> u64 {
    5
}

pub fn default_long_poll_timeout() -> u64 {
    30
}

pub fn default_day_markers() -> Vec<String> {
    vec!["Дневн".to_string(), "☀️".to_string()]
}

pub fn default_cant_do_markers() -> Vec<String> {
    vec![
        "⛔".to_string(),
        "⛔️".to_string(),
        "Нельзя делать".to_string(),
    ]
}

pub fn default_evening_markers() -> Vec<String> {
    vec!["Вечерние задачи".to_string()]
}

pub fn default_reset_markers() -> Vec<String> {
    [
        "Твоя миссия",
        "Мудрость",
        "Утренняя молитва",
        "СЕГОДНЯ",
        "События",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn default_bullet() -> String {
    "•".to_string()
}

pub fn default_events() -> Vec<RecurringEvent> {
    let event = |key: &str, name: &str, occurrence: Occurrence| RecurringEvent {
        key: key.to_string(),
        name: name.to_string(),
        file: format!("{key}.txt"),
        rule: EventRule::new(occurrence, Weekday::Sat),
    };
    vec![
        event(
            "tarelka",
            "Семейная традиция - Путешествие на тарелке",
            Occurrence::Last,
        ),
        event(
            "chronos",
            "Семейная традиция - Вечер воспоминаний. Хранители времени",
            Occurrence::Third,
        ),
        event(
            "new",
            "Семейная традиция - День нового",
            Occurrence::Second,
        ),
    ]
}

//! Morning briefing composition. Pure: every fetched input is passed in.

use crate::i18n::{self, t};
use chrono::{Datelike, NaiveDate, Weekday};
use hearth_core::calendar::{birthdays_tomorrow, EventReminder, ReminderTier};
use hearth_core::config::Config;
use hearth_sources::CurrentWeather;
use tracing::{error, info, warn};

/// A due event reminder with its description, when the fetch succeeded.
pub struct ReminderBlock<'a> {
    pub reminder: EventReminder<'a>,
    pub content: Option<String>,
}

fn tier_header(tier: ReminderTier, lang: &str) -> &'static str {
    match tier {
        ReminderTier::WeekBefore => t("reminder_week", lang),
        ReminderTier::ThreeDaysBefore => t("reminder_three_days", lang),
        ReminderTier::DayOf => t("reminder_today", lang),
    }
}

/// Today's kids activities, or `None` when there are none to show.
///
/// Incomplete entries are skipped one by one.
pub fn kids_schedule(config: &Config, weekday: Weekday, lang: &str) -> Option<String> {
    let activities = config.activities_for(weekday);
    if activities.is_empty() {
        info!("no kids activities for {weekday}");
        return None;
    }

    let mut block = format!("{}\n", t("kids_header", lang));
    let mut rendered = 0;
    for (idx, item) in activities.iter().enumerate() {
        if !item.is_complete() {
            error!("schedule entry {} for {weekday} is incomplete, skipping", idx + 1);
            continue;
        }
        block.push_str(&format!(
            "• {} — {} <i>({})</i>\n",
            item.person, item.activity, item.time
        ));
        rendered += 1;
    }

    if rendered == 0 {
        warn!("no usable kids activities for {weekday}");
        return None;
    }
    info!("kids schedule: {rendered}/{} entries", activities.len());
    Some(block)
}

/// Assemble the morning message in its fixed section order.
pub fn compose_briefing(
    config: &Config,
    today: NaiveDate,
    weather: Option<&CurrentWeather>,
    quote: Option<&str>,
    reminders: &[ReminderBlock<'_>],
) -> String {
    let lang = config.hearth.locale.as_str();
    let weekday = today.weekday();

    let mut content = i18n::greeting(lang, weekday, today.day(), today.month());
    content.push_str("\n\n");

    if let Some(w) = weather {
        content.push_str(&i18n::weather_block(
            lang,
            &config.weather.city,
            w.temperature,
            w.windspeed,
            w.condition,
        ));
        content.push('\n');
    }

    if let Some(quote) = quote {
        content.push_str(&format!("💭 {quote}\n\n"));
    }

    if config.notifier.include_kids_schedule {
        if let Some(block) = kids_schedule(config, weekday, lang) {
            content.push_str(&block);
            content.push('\n');
        }
    }

    if let Some(duty) = config.dishes_for(weekday) {
        content.push_str(&format!("{}\n• {duty}\n\n", t("dishes_header", lang)));
    }

    if weekday == Weekday::Fri {
        content.push_str(t("friday_cleaning", lang));
        content.push_str("\n\n");
    }

    for block in reminders {
        content.push_str(&format!(
            "\n{}\n<b>{}</b>\n",
            tier_header(block.reminder.tier, lang),
            block.reminder.event.name
        ));
        if let Some(ref text) = block.content {
            content.push_str(text);
            content.push('\n');
        }
    }

    let birthdays = birthdays_tomorrow(&config.birthdays, today);
    if !birthdays.is_empty() {
        content.push_str(&format!("\n{}\n", t("birthdays_header", lang)));
        for b in birthdays {
            content.push_str(&format!("🎈 {}\n", b.name));
        }
    }

    content
}

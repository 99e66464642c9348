//! Evening summary: when to send it and what it says.

use crate::i18n::{self, t};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use hearth_core::error::HearthError;
use hearth_tracker::{percentage, progress_bar, DayStats, DEFAULT_BAR_LENGTH};

/// Fires at most once per calendar day, on the first check at or after `at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySchedule {
    at: NaiveTime,
    last_sent: Option<NaiveDate>,
}

impl SummarySchedule {
    /// Parse `"HH:MM"`. A process started after that time waits for tomorrow.
    pub fn new(summary_time: &str, now: NaiveDateTime) -> Result<Self, HearthError> {
        let at = NaiveTime::parse_from_str(summary_time.trim(), "%H:%M").map_err(|e| {
            HearthError::Config(format!("invalid summary_time {summary_time:?}: {e}"))
        })?;
        let last_sent = (now.time() >= at).then(|| now.date());
        Ok(Self { at, last_sent })
    }

    /// True once per day when `now` has reached the configured time.
    pub fn due(&mut self, now: NaiveDateTime) -> bool {
        if now.time() < self.at || self.last_sent == Some(now.date()) {
            return false;
        }
        self.last_sent = Some(now.date());
        true
    }
}

/// Summary text for `date`, or `None` when nothing was recorded.
pub fn compose_summary(lang: &str, date: NaiveDate, stats: Option<DayStats>) -> Option<String> {
    let stats = stats.filter(|s| s.total > 0)?;
    let pct = percentage(stats.completed, stats.total);
    let bar = progress_bar(pct, DEFAULT_BAR_LENGTH);
    let verdict = if pct >= 80 {
        t("summary_excellent", lang)
    } else if pct >= 50 {
        t("summary_good", lang)
    } else {
        t("summary_retry", lang)
    };
    let mut text = i18n::summary_body(
        lang,
        &date.format("%Y-%m-%d").to_string(),
        stats.completed,
        stats.total,
        &bar,
        pct,
    );
    text.push_str(verdict);
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_fires_once_per_day() {
        let mut schedule = SummarySchedule::new("21:00", at(16, 9, 0)).unwrap();
        assert!(!schedule.due(at(16, 20, 59)));
        assert!(schedule.due(at(16, 21, 0)));
        assert!(!schedule.due(at(16, 21, 1)));
        assert!(!schedule.due(at(16, 23, 59)));
        assert!(!schedule.due(at(17, 8, 0)));
        assert!(schedule.due(at(17, 22, 30)));
    }

    #[test]
    fn test_late_start_waits_for_tomorrow() {
        let mut schedule = SummarySchedule::new("21:00", at(16, 22, 0)).unwrap();
        assert!(!schedule.due(at(16, 22, 1)));
        assert!(schedule.due(at(17, 21, 0)));
    }

    #[test]
    fn test_invalid_time_is_config_error() {
        let err = SummarySchedule::new("9pm", at(16, 9, 0)).unwrap_err();
        assert!(matches!(err, HearthError::Config(_)));
    }

    #[test]
    fn test_summary_verdicts() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let summary = |completed, total| {
            compose_summary("ru", date, Some(DayStats { total, completed }))
        };

        let excellent = summary(8, 10).unwrap();
        assert!(excellent.starts_with("<b>📊 Итоги дня (2026-10-16)</b>"));
        assert!(excellent.contains("Задач выполнено: 8/10"));
        assert!(excellent.contains("Прогресс: ▓▓▓▓▓▓▓▓░░ 80%"));
        assert!(excellent.ends_with("Продолжайте в том же духе!"));

        assert!(summary(1, 2).unwrap().contains("Хороший результат"));
        assert!(summary(1, 3).unwrap().contains("Завтра новый день"));
    }

    #[test]
    fn test_summary_skipped_without_tasks() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(compose_summary("ru", date, None), None);
        assert_eq!(
            compose_summary("ru", date, Some(DayStats { total: 0, completed: 0 })),
            None
        );
    }
}

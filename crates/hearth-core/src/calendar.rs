//! Calendar rules: Nth-weekday placement of recurring events, reminder tiers,
//! and birthday lookahead.

use crate::config::{Birthday, RecurringEvent};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed weekday name table: (weekday, English key, Russian locale name).
///
/// Schedule and dishes keys in the config resolve through this table only.
const WEEKDAY_NAMES: [(Weekday, &str, &str); 7] = [
    (Weekday::Mon, "monday", "понедельник"),
    (Weekday::Tue, "tuesday", "вторник"),
    (Weekday::Wed, "wednesday", "среда"),
    (Weekday::Thu, "thursday", "четверг"),
    (Weekday::Fri, "friday", "пятница"),
    (Weekday::Sat, "saturday", "суббота"),
    (Weekday::Sun, "sunday", "воскресенье"),
];

/// Resolve an English or Russian weekday name (case-insensitive).
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let lower = name.trim().to_lowercase();
    WEEKDAY_NAMES
        .iter()
        .find(|(_, en, ru)| *en == lower || *ru == lower)
        .map(|(wd, _, _)| *wd)
}

/// English lowercase key for a weekday (`"monday"`, ...).
pub fn weekday_key(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES
        .iter()
        .find(|(wd, _, _)| *wd == weekday)
        .map(|(_, en, _)| *en)
        .unwrap_or("monday")
}

/// Which occurrence of a weekday within a month a rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl Occurrence {
    fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Last => "last",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "first" => Some(Self::First),
            "second" => Some(Self::Second),
            "third" => Some(Self::Third),
            "fourth" => Some(Self::Fourth),
            "last" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Placement rule for a recurring event, e.g. `last_saturday` or `third_saturday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventRule {
    pub occurrence: Occurrence,
    pub weekday: Weekday,
}

impl EventRule {
    pub fn new(occurrence: Occurrence, weekday: Weekday) -> Self {
        Self {
            occurrence,
            weekday,
        }
    }

    /// Day of month this rule lands on, or `None` if the month lacks that occurrence.
    pub fn day_in(&self, year: i32, month: u32) -> Option<u32> {
        let days = weekday_days(year, month, self.weekday);
        match self.occurrence {
            Occurrence::Last => days.last().copied(),
            Occurrence::First => days.first().copied(),
            Occurrence::Second => days.get(1).copied(),
            Occurrence::Third => days.get(2).copied(),
            Occurrence::Fourth => days.get(3).copied(),
        }
    }

    /// Full date this rule lands on in the given month.
    pub fn date_in(&self, year: i32, month: u32) -> Option<NaiveDate> {
        self.day_in(year, month)
            .and_then(|day| NaiveDate::from_ymd_opt(year, month, day))
    }
}

impl fmt::Display for EventRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}",
            self.occurrence.as_str(),
            weekday_key(self.weekday)
        )
    }
}

impl FromStr for EventRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (occ, day) = s
            .split_once('_')
            .ok_or_else(|| format!("invalid event rule '{s}'"))?;
        let occurrence =
            Occurrence::parse(occ).ok_or_else(|| format!("unknown occurrence in rule '{s}'"))?;
        let weekday =
            weekday_from_name(day).ok_or_else(|| format!("unknown weekday in rule '{s}'"))?;
        Ok(Self::new(occurrence, weekday))
    }
}

impl TryFrom<String> for EventRule {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EventRule> for String {
    fn from(rule: EventRule) -> Self {
        rule.to_string()
    }
}

/// All days of `month` falling on `weekday`, in calendar order.
///
/// Empty for an invalid month.
pub fn weekday_days(year: i32, month: u32, weekday: Weekday) -> Vec<u32> {
    (1..=31)
        .map_while(|day| NaiveDate::from_ymd_opt(year, month, day))
        .filter(|date| date.weekday() == weekday)
        .map(|date| date.day())
        .collect()
}

/// How far ahead of a recurring event a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderTier {
    WeekBefore,
    ThreeDaysBefore,
    DayOf,
}

impl ReminderTier {
    /// Map a day offset (event − today) to a tier. Only 7, 3 and 0 fire.
    pub fn from_offset(days: i64) -> Option<Self> {
        match days {
            7 => Some(Self::WeekBefore),
            3 => Some(Self::ThreeDaysBefore),
            0 => Some(Self::DayOf),
            _ => None,
        }
    }
}

/// A recurring event whose reminder window is open today.
#[derive(Debug, Clone, PartialEq)]
pub struct EventReminder<'a> {
    pub event: &'a RecurringEvent,
    pub tier: ReminderTier,
    pub date: NaiveDate,
}

/// Evaluate every event's rule for today's month and keep those at offset 7, 3 or 0.
///
/// Missed windows are not caught up and next month's date is never consulted.
pub fn due_event_reminders(events: &[RecurringEvent], today: NaiveDate) -> Vec<EventReminder<'_>> {
    events
        .iter()
        .filter_map(|event| {
            let date = event.rule.date_in(today.year(), today.month())?;
            let offset = (date - today).num_days();
            ReminderTier::from_offset(offset).map(|tier| EventReminder { event, tier, date })
        })
        .collect()
}

/// Birthdays whose (day, month) equals tomorrow's, in config order.
pub fn birthdays_tomorrow(birthdays: &[Birthday], today: NaiveDate) -> Vec<&Birthday> {
    let Some(tomorrow) = today.checked_add_days(Days::new(1)) else {
        return Vec::new();
    };
    birthdays
        .iter()
        .filter(|b| b.day == tomorrow.day() && b.month == tomorrow.month())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(key: &str, rule: &str) -> RecurringEvent {
        RecurringEvent {
            key: key.to_string(),
            name: format!("{key} event"),
            file: format!("{key}.txt"),
            rule: rule.parse().unwrap(),
        }
    }

    #[test]
    fn test_last_saturday_in_final_week_for_every_month() {
        let rule: EventRule = "last_saturday".parse().unwrap();
        for year in 2000..2040 {
            for month in 1..=12 {
                let d = rule.date_in(year, month).unwrap();
                assert_eq!(d.weekday(), Weekday::Sat);
                let next = d + Days::new(7);
                assert_ne!(next.month(), month, "{d} is not the last Saturday");
            }
        }
    }

    #[test]
    fn test_nth_saturday_strictly_increasing() {
        for year in 2020..2030 {
            for month in 1..=12 {
                let days: Vec<Option<u32>> = [
                    Occurrence::First,
                    Occurrence::Second,
                    Occurrence::Third,
                    Occurrence::Fourth,
                ]
                .iter()
                .map(|o| EventRule::new(*o, Weekday::Sat).day_in(year, month))
                .collect();
                for pair in days.windows(2) {
                    if let (Some(a), Some(b)) = (pair[0], pair[1]) {
                        assert!(a < b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_known_saturdays_october_2026() {
        // October 2026: Saturdays fall on 3, 10, 17, 24, 31.
        assert_eq!(weekday_days(2026, 10, Weekday::Sat), vec![3, 10, 17, 24, 31]);
        let second: EventRule = "second_saturday".parse().unwrap();
        let third: EventRule = "third_saturday".parse().unwrap();
        let last: EventRule = "last_saturday".parse().unwrap();
        assert_eq!(second.day_in(2026, 10), Some(10));
        assert_eq!(third.day_in(2026, 10), Some(17));
        assert_eq!(last.day_in(2026, 10), Some(31));
    }

    #[test]
    fn test_missing_occurrence_returns_none() {
        // February 2026 has exactly four of every weekday.
        assert_eq!(weekday_days(2026, 2, Weekday::Mon).len(), 4);
        let fourth = EventRule::new(Occurrence::Fourth, Weekday::Mon);
        assert_eq!(fourth.day_in(2026, 2), Some(23));
        assert!(weekday_days(2026, 2, Weekday::Mon).get(4).is_none());
        assert_eq!(fourth.day_in(2026, 13), None);
        assert!(weekday_days(2026, 0, Weekday::Sat).is_empty());
    }

    #[test]
    fn test_rule_parse_and_display() {
        let rule: EventRule = "third_saturday".parse().unwrap();
        assert_eq!(rule, EventRule::new(Occurrence::Third, Weekday::Sat));
        assert_eq!(rule.to_string(), "third_saturday");
        assert!("fifth_saturday".parse::<EventRule>().is_err());
        assert!("last_caturday".parse::<EventRule>().is_err());
        assert!("saturday".parse::<EventRule>().is_err());
    }

    #[test]
    fn test_reminder_tier_offsets() {
        assert_eq!(ReminderTier::from_offset(7), Some(ReminderTier::WeekBefore));
        assert_eq!(
            ReminderTier::from_offset(3),
            Some(ReminderTier::ThreeDaysBefore)
        );
        assert_eq!(ReminderTier::from_offset(0), Some(ReminderTier::DayOf));
        for offset in [-7, -1, 1, 2, 4, 5, 6, 8, 14] {
            assert_eq!(ReminderTier::from_offset(offset), None);
        }
    }

    #[test]
    fn test_due_event_reminders() {
        let events = vec![
            event("new", "second_saturday"),
            event("chronos", "third_saturday"),
            event("tarelka", "last_saturday"),
        ];
        // Third Saturday (17th) is 3 days away, last Saturday (31st) is 17 days away.
        let reminders = due_event_reminders(&events, date(2026, 10, 14));
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].event.key, "chronos");
        assert_eq!(reminders[0].tier, ReminderTier::ThreeDaysBefore);

        // Second Saturday (10th) is today, third (17th) is a week away.
        let reminders = due_event_reminders(&events, date(2026, 10, 10));
        let tiers: Vec<_> = reminders
            .iter()
            .map(|r| (r.event.key.as_str(), r.tier))
            .collect();
        assert_eq!(
            tiers,
            vec![
                ("new", ReminderTier::DayOf),
                ("chronos", ReminderTier::WeekBefore)
            ]
        );

        // Five days before the 17th: nothing fires.
        assert!(due_event_reminders(&events[1..2], date(2026, 10, 12)).is_empty());
    }

    #[test]
    fn test_passed_event_does_not_fire() {
        let events = vec![event("new", "second_saturday")];
        // The 10th has passed; November's date is not consulted.
        assert!(due_event_reminders(&events, date(2026, 10, 13)).is_empty());
    }

    #[test]
    fn test_birthdays_tomorrow() {
        let birthdays = vec![
            Birthday {
                name: "Мама".into(),
                day: 14,
                month: 2,
            },
            Birthday {
                name: "Папа".into(),
                day: 4,
                month: 12,
            },
            Birthday {
                name: "Малюсик".into(),
                day: 1,
                month: 1,
            },
        ];
        let found = birthdays_tomorrow(&birthdays, date(2026, 2, 13));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Мама");

        // Year boundary.
        let found = birthdays_tomorrow(&birthdays, date(2026, 12, 31));
        assert_eq!(found[0].name, "Малюсик");

        assert!(birthdays_tomorrow(&birthdays, date(2026, 2, 14)).is_empty());
    }

    #[test]
    fn test_weekday_name_mapping() {
        assert_eq!(weekday_from_name("Friday"), Some(Weekday::Fri));
        assert_eq!(weekday_from_name("пятница"), Some(Weekday::Fri));
        assert_eq!(weekday_from_name("Воскресенье"), Some(Weekday::Sun));
        assert_eq!(weekday_from_name("funday"), None);
        assert_eq!(weekday_key(Weekday::Wed), "wednesday");
    }
}

//! Format helpers for strings with interpolation.

use super::t;
use chrono::Weekday;
use hearth_sources::WeatherCondition;

/// Capitalized weekday name.
pub fn weekday_name(lang: &str, weekday: Weekday) -> &'static str {
    match (lang, weekday) {
        ("ru", Weekday::Mon) => "Понедельник",
        ("ru", Weekday::Tue) => "Вторник",
        ("ru", Weekday::Wed) => "Среда",
        ("ru", Weekday::Thu) => "Четверг",
        ("ru", Weekday::Fri) => "Пятница",
        ("ru", Weekday::Sat) => "Суббота",
        ("ru", Weekday::Sun) => "Воскресенье",
        (_, Weekday::Mon) => "Monday",
        (_, Weekday::Tue) => "Tuesday",
        (_, Weekday::Wed) => "Wednesday",
        (_, Weekday::Thu) => "Thursday",
        (_, Weekday::Fri) => "Friday",
        (_, Weekday::Sat) => "Saturday",
        (_, Weekday::Sun) => "Sunday",
    }
}

/// Month name as used after a day number (genitive in Russian).
pub fn month_name(lang: &str, month: u32) -> &'static str {
    const RU: [&str; 12] = [
        "Января", "Февраля", "Марта", "Апреля", "Мая", "Июня", "Июля", "Августа", "Сентября",
        "Октября", "Ноября", "Декабря",
    ];
    const EN: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    let table = if lang == "ru" { &RU } else { &EN };
    month
        .checked_sub(1)
        .and_then(|i| table.get(i as usize))
        .copied()
        .unwrap_or("?")
}

/// Greeting header: weekday and `{day} {month}`.
pub fn greeting(lang: &str, weekday: Weekday, day: u32, month: u32) -> String {
    let name = weekday_name(lang, weekday);
    let month = month_name(lang, month);
    match lang {
        "ru" => format!("🌅 <b>Доброе Утро ! Сегодня «{name}» {day} {month}</b>"),
        _ => format!("🌅 <b>Good morning! Today is {name}, {month} {day}</b>"),
    }
}

/// Weather condition description.
pub fn weather_condition(lang: &str, condition: WeatherCondition) -> &'static str {
    use WeatherCondition::*;
    let (ru, en) = match condition {
        Clear => ("Ясно", "Clear"),
        MainlyClear => ("Малооблачно", "Mainly clear"),
        PartlyCloudy => ("Переменная облачность", "Partly cloudy"),
        Overcast => ("Облачно", "Overcast"),
        Fog => ("Туман", "Fog"),
        RimeFog => ("Изморозь", "Rime fog"),
        Drizzle => ("Морось", "Drizzle"),
        DenseDrizzle => ("Сильная морось", "Dense drizzle"),
        LightRain => ("Слабый дождь", "Light rain"),
        Rain => ("Дождь", "Rain"),
        HeavyRain => ("Сильный дождь", "Heavy rain"),
        LightSnow => ("Слабый снег", "Light snow"),
        Snow => ("Снег", "Snow"),
        HeavySnow => ("Сильный снег", "Heavy snow"),
        Thunderstorm => ("Гроза", "Thunderstorm"),
        Unknown => ("Неизвестно", "Unknown"),
    };
    if lang == "ru" {
        ru
    } else {
        en
    }
}

/// Weather block: header, temperature with description, wind.
pub fn weather_block(
    lang: &str,
    city: &str,
    temperature: Option<f64>,
    windspeed: Option<f64>,
    condition: WeatherCondition,
) -> String {
    let na = t("not_available", lang);
    let temp = temperature.map_or_else(|| na.to_string(), |v| v.to_string());
    let wind = windspeed.map_or_else(|| na.to_string(), |v| v.to_string());
    let cond = weather_condition(lang, condition);
    match lang {
        "ru" => format!(
            "🌤️ <b>Погода в {city}:</b>\n🌡️ {temp}°C • {cond}\n💨 Ветер: {wind} км/ч\n"
        ),
        _ => format!("🌤️ <b>Weather in {city}:</b>\n🌡️ {temp}°C • {cond}\n💨 Wind: {wind} km/h\n"),
    }
}

/// Sunday family council message with a link.
pub fn council_message(lang: &str, url: &str) -> String {
    match lang {
        "ru" => format!(
            "<b>📋 Семейный совет:</b>\n\n🔗 <a href='{url}'>Открыть структуру Семейного Совета</a>"
        ),
        _ => format!("<b>📋 Family council:</b>\n\n🔗 <a href='{url}'>Open the family council page</a>"),
    }
}

/// Daily summary header and counts.
pub fn summary_body(
    lang: &str,
    date: &str,
    completed: usize,
    total: usize,
    bar: &str,
    percentage: u32,
) -> String {
    match lang {
        "ru" => format!(
            "<b>📊 Итоги дня ({date})</b>\n\n\
             Задач выполнено: {completed}/{total}\n\
             Прогресс: {bar} {percentage}%\n\n"
        ),
        _ => format!(
            "<b>📊 Day summary ({date})</b>\n\n\
             Tasks completed: {completed}/{total}\n\
             Progress: {bar} {percentage}%\n\n"
        ),
    }
}

/// Liveness text for the health endpoint root.
pub fn service_running(lang: &str, name: &str) -> String {
    match lang {
        "ru" => format!("{name} работает ✅"),
        _ => format!("{name} is running ✅"),
    }
}

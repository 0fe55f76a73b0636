//! Display helpers: body previews, dates.

use chrono::{DateTime, Datelike, Utc, Weekday};
use store::{plain_text, Language};

/// Length of the plain-text preview shown on note cards.
pub const PREVIEW_LEN: usize = 100;

/// Plain text of `body` cut to `max` characters with a trailing `...`.
pub fn preview(body: &str, max: usize) -> String {
    let text = plain_text(body);
    if text.chars().count() <= max {
        return text;
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

/// Escape plain text typed into the editor and keep its line breaks as `<br>`.
pub fn text_to_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace("\r\n", "\n")
        .replace('\n', "<br>")
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

fn weekday_name(day: Weekday, language: Language) -> &'static str {
    match (language, day) {
        (Language::En, Weekday::Mon) => "Monday",
        (Language::En, Weekday::Tue) => "Tuesday",
        (Language::En, Weekday::Wed) => "Wednesday",
        (Language::En, Weekday::Thu) => "Thursday",
        (Language::En, Weekday::Fri) => "Friday",
        (Language::En, Weekday::Sat) => "Saturday",
        (Language::En, Weekday::Sun) => "Sunday",
        (Language::Id, Weekday::Mon) => "Senin",
        (Language::Id, Weekday::Tue) => "Selasa",
        (Language::Id, Weekday::Wed) => "Rabu",
        (Language::Id, Weekday::Thu) => "Kamis",
        (Language::Id, Weekday::Fri) => "Jumat",
        (Language::Id, Weekday::Sat) => "Sabtu",
        (Language::Id, Weekday::Sun) => "Minggu",
    }
}

/// Long date, e.g. `Thursday, April 14, 2022` or `Kamis, 14 April 2022`.
pub fn format_date(at: &DateTime<Utc>, language: Language) -> String {
    let weekday = weekday_name(at.weekday(), language);
    let month = at.month0() as usize;
    match language {
        Language::En => format!("{weekday}, {} {}, {}", MONTHS_EN[month], at.day(), at.year()),
        Language::Id => format!("{weekday}, {} {} {}", at.day(), MONTHS_ID[month], at.year()),
    }
}

//! Formatted date generation.
//!
//! Dates are drawn uniformly with the day clamped to 1-28, so every drawn
//! (year, month, day) combination is valid in every month. Rendering goes
//! through a tagged [`DateFormat`] rather than free-form format strings;
//! the Arabic variants render via the `ar_EG` chrono locale and are
//! converted to Eastern Arabic digits.

use chrono::{Locale, NaiveDate};
use rand::Rng;
use synth_core::schema::DateFormat;
use synth_core::Value;

/// Draw a uniform random date with year in the given inclusive range.
pub fn random_date<R: Rng>(rng: &mut R, start_year: i32, end_year: i32) -> NaiveDate {
    let year = rng.gen_range(start_year..=end_year);
    let month = rng.gen_range(1u32..=12);
    let day = rng.gen_range(1u32..=28);

    // Day <= 28 is valid in every month of every year.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Render a date in the given format.
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    let plain = |pattern: &str| date.format(pattern).to_string();
    let arabic = |pattern: &str| {
        to_eastern_arabic_numerals(&date.format_localized(pattern, Locale::ar_EG).to_string())
    };

    match format {
        DateFormat::Iso => plain("%Y-%m-%d"),
        DateFormat::SlashDmy => plain("%d/%m/%Y"),
        DateFormat::SlashMdy => plain("%m/%d/%Y"),
        DateFormat::SlashYmd => plain("%Y/%m/%d"),
        DateFormat::DashDmy => plain("%d-%m-%Y"),
        DateFormat::DashMdy => plain("%m-%d-%Y"),
        DateFormat::DotDmy => plain("%d.%m.%Y"),
        DateFormat::ShortSlashDmy => plain("%d/%m/%y"),
        DateFormat::ShortSlashMdy => plain("%m/%d/%y"),
        DateFormat::ShortSlashYmd => plain("%y/%m/%d"),
        DateFormat::ShortDashDmy => plain("%d-%m-%y"),
        DateFormat::ShortDashMdy => plain("%m-%d-%y"),
        DateFormat::ShortDashYmd => plain("%y-%m-%d"),
        DateFormat::ShortDotDmy => plain("%d.%m.%y"),
        DateFormat::ShortDotMdy => plain("%m.%d.%y"),
        DateFormat::ShortSpacedDmy => plain("%d %m %y"),
        DateFormat::MonthDayYear => plain("%B %d, %Y"),
        DateFormat::DayMonthYear => plain("%d %B %Y"),
        DateFormat::AbbrevMonthDayYear => plain("%b %d, %Y"),
        DateFormat::DayAbbrevMonth => plain("%d %b %Y"),
        DateFormat::WeekdayMonthDayYear => plain("%A, %B %d, %Y"),
        DateFormat::AbbrevWeekdayMonthDayYear => plain("%a, %b %d, %Y"),
        DateFormat::YearMonthDay => plain("%Y %B %d"),
        DateFormat::YearOnly => plain("%Y"),
        DateFormat::MonthYear => plain("%m/%Y"),
        DateFormat::AbbrevMonthYear => plain("%b/%Y"),
        DateFormat::DayMonth => plain("%d/%m"),
        DateFormat::DayMonthAbbrev => plain("%d/%b"),
        DateFormat::ArabicShort => to_eastern_arabic_numerals(&plain("%d/%m/%Y")),
        DateFormat::ArabicMedium => arabic("%-d %b %Y"),
        DateFormat::ArabicLong => arabic("%-d %B %Y"),
        DateFormat::ArabicFull => arabic("%A، %-d %B %Y"),
    }
}

/// Draw a date and render it through a randomly chosen format.
///
/// `formats` must be non-empty; the caller validates this at construction.
pub fn generate_formatted_date<R: Rng>(
    rng: &mut R,
    start_year: i32,
    end_year: i32,
    formats: &[DateFormat],
) -> Value {
    let date = random_date(rng, start_year, end_year);
    let format = formats
        .get(rng.gen_range(0..formats.len().max(1)))
        .copied()
        .unwrap_or(DateFormat::Iso);

    Value::Text(format_date(date, format))
}

/// Translate Western digits to Eastern Arabic numerals.
pub fn to_eastern_arabic_numerals(text: &str) -> String {
    const EASTERN: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => EASTERN[d as usize],
            _ => c,
        })
        .collect()
}

//! `dateTime` values as used by `<when>`, `<begin>` and `<end>`

use std::fmt;
use std::str::FromStr;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::{Error, Result};

/// Point in time at the precision it was written with.
///
/// The original text is kept and written back unchanged; the parsed value
/// backs the derived views.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DateTime {
    text: String,
    value: Instant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Instant {
    Year(i32),
    YearMonth(i32, Month),
    Date(Date),
    /// Date and time without a zone designator, read as UTC
    Floating(PrimitiveDateTime),
    Offset(OffsetDateTime),
}

impl DateTime {
    /// The text this value was parsed from
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True if the value carries a time of day
    pub const fn has_time(&self) -> bool {
        matches!(self.value, Instant::Floating(_) | Instant::Offset(_))
    }

    /// Seconds since the Unix epoch.
    ///
    /// Values without a zone are taken as UTC, dates resolve to midnight and
    /// partial dates to the first day of their period.
    pub fn unix_timestamp(&self) -> i64 {
        match self.value {
            Instant::Offset(datetime) => datetime.unix_timestamp(),
            Instant::Floating(datetime) => datetime.assume_utc().unix_timestamp(),
            Instant::Date(date) => date.midnight().assume_utc().unix_timestamp(),
            Instant::YearMonth(year, month) => first_day(year, month),
            Instant::Year(year) => first_day(year, Month::January),
        }
    }

    /// Date part, at the precision of the input
    pub fn xsd_date(&self) -> String {
        match self.value {
            Instant::Year(year) => format!("{year:04}"),
            Instant::YearMonth(year, month) => format!("{year:04}-{:02}", u8::from(month)),
            Instant::Date(date) => format_date(date),
            Instant::Floating(datetime) => format_date(datetime.date()),
            Instant::Offset(datetime) => format_date(datetime.to_offset(UtcOffset::UTC).date()),
        }
    }

    /// `hh:mm:ss`, or `None` when the input had no time of day
    pub fn xsd_time(&self) -> Option<String> {
        match self.value {
            Instant::Floating(datetime) => Some(format_time(datetime.time())),
            Instant::Offset(datetime) => {
                Some(format_time(datetime.to_offset(UtcOffset::UTC).time()))
            }
            Instant::Year(_) | Instant::YearMonth(..) | Instant::Date(_) => None,
        }
    }

    /// Combined view; zoned values are normalized to UTC with a `Z` suffix
    pub fn xsd_date_time(&self) -> String {
        match (self.value, self.xsd_time()) {
            (Instant::Offset(_), Some(time)) => format!("{}T{time}Z", self.xsd_date()),
            (_, Some(time)) => format!("{}T{time}", self.xsd_date()),
            (_, None) => self.xsd_date(),
        }
    }
}

fn first_day(year: i32, month: Month) -> i64 {
    Date::from_calendar_date(year, month, 1)
        .map(|date| date.midnight().assume_utc().unix_timestamp())
        .unwrap_or_default()
}

fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn format_time(time: time::Time) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

fn parse_instant(text: &str) -> Option<Instant> {
    if let Ok(datetime) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(Instant::Offset(datetime));
    }

    let floating = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let floating_frac =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    if let Ok(datetime) = PrimitiveDateTime::parse(text, &floating) {
        return Some(Instant::Floating(datetime));
    }
    if let Ok(datetime) = PrimitiveDateTime::parse(text, &floating_frac) {
        return Some(Instant::Floating(datetime));
    }

    if let Ok(date) = Date::parse(text, &format_description!("[year]-[month]-[day]")) {
        return Some(Instant::Date(date));
    }

    match text.split_once('-') {
        Some((year, month)) => {
            let year = parse_year(year)?;
            if month.len() != 2 {
                return None;
            }
            let month = Month::try_from(month.parse::<u8>().ok()?).ok()?;
            Some(Instant::YearMonth(year, month))
        }
        None => parse_year(text).map(Instant::Year),
    }
}

fn parse_year(text: &str) -> Option<i32> {
    if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let value = parse_instant(text).ok_or_else(|| Error::invalid_value("dateTime", s))?;
        Ok(Self {
            text: text.to_string(),
            value,
        })
    }
}

impl TryFrom<String> for DateTime {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DateTime> for String {
    fn from(value: DateTime) -> Self {
        value.text
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

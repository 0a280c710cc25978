//! Date helpers: ISO formatting and parsing, field extraction, truncation and
//! "now"-relative constructors.
//!
//! Functions that accept an `Option` pass absence straight through. The field
//! extractors take a plain [`Timestamp`]; callers holding an absent value have
//! to unwrap it first.
//!
//! The free functions work in [`Timezone::Local`] against the system clock.
//! [`Dates`] offers the same operations with an explicit zone and clock.

mod calendar;
mod clock;
mod format;

use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::DateError;
use crate::utils::{Timezone, debug_enabled, set_debug};

pub use calendar::{Calendar, Field};
pub use clock::{Clock, FixedClock, SystemClock};
pub use format::Layout;

/// A point in time, independent of any zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub const MIN: Timestamp = Timestamp(DateTime::<Utc>::MIN_UTC);
    pub const MAX: Timestamp = Timestamp(DateTime::<Utc>::MAX_UTC);

    /// Milliseconds since the Unix epoch; `None` outside chrono's range.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Timestamp)
    }

    pub fn as_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }

    pub fn in_zone(self, zone: Timezone) -> DateTime<FixedOffset> {
        zone.to_fixed_offset(self.0)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(value)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

/// Date operations bound to a zone and a clock.
#[derive(Debug, Clone, Copy)]
pub struct Dates<C = SystemClock> {
    zone: Timezone,
    clock: C,
}

impl Dates<SystemClock> {
    /// Host zone and wall clock.
    pub fn system() -> Self {
        Dates::new(Timezone::Local, SystemClock)
    }

    /// System clock in the configured zone. Also sets the debug switch to
    /// the config's `debug` value.
    pub fn from_config(config: &Config) -> Result<Self, DateError> {
        set_debug(config.debug);
        Ok(Dates::new(config.zone()?, SystemClock))
    }
}

impl Default for Dates<SystemClock> {
    fn default() -> Self {
        Dates::system()
    }
}

impl<C: Clock> Dates<C> {
    pub fn new(zone: Timezone, clock: C) -> Self {
        Dates { zone, clock }
    }

    pub fn zone(&self) -> Timezone {
        self.zone
    }

    pub fn format_as_date(&self, date: Option<Timestamp>) -> Option<String> {
        date.map(|date| Layout::Date.format(&date.in_zone(self.zone)))
    }

    pub fn format_as_date_time(&self, date: Option<Timestamp>) -> Option<String> {
        date.map(|date| Layout::DateTime.format(&date.in_zone(self.zone)))
    }

    pub fn format_as_date_time_with_millis(&self, date: Option<Timestamp>) -> Option<String> {
        date.map(|date| Layout::DateTimeWithMillis.format(&date.in_zone(self.zone)))
    }

    /// Formats the calendar's instant in this helper's zone.
    pub fn format_calendar_as_date_time(&self, calendar: Option<&Calendar>) -> Option<String> {
        self.format_as_date_time(calendar.map(Calendar::time))
    }

    /// Parses `yyyy-MM-dd` as midnight in this zone. Text after the date is
    /// ignored.
    pub fn parse_date(&self, input: Option<&str>) -> Result<Option<Timestamp>, DateError> {
        self.parse(input, Layout::Date)
    }

    /// Parses `yyyy-MM-dd'T'HH:mm:ss` as a wall-clock time in this zone. Text
    /// after the seconds is ignored.
    pub fn parse_date_time(&self, input: Option<&str>) -> Result<Option<Timestamp>, DateError> {
        self.parse(input, Layout::DateTime)
    }

    fn parse(&self, input: Option<&str>, layout: Layout) -> Result<Option<Timestamp>, DateError> {
        let Some(input) = input else {
            return Ok(None);
        };
        let local = layout.parse(input).map_err(|source| {
            if debug_enabled() {
                eprintln!("Failed to parse {input:?} as {layout}: {source}");
            }
            DateError::Parse {
                input: input.to_string(),
                layout,
                source,
            }
        })?;
        Ok(Some(Timestamp::from(self.zone.resolve(local)?)))
    }

    pub fn to_calendar(&self, date: Option<Timestamp>) -> Option<Calendar> {
        date.map(|date| Calendar::new(date, self.zone))
    }

    fn field_of(&self, date: Timestamp, field: Field) -> i32 {
        Calendar::new(date, self.zone).get(field)
    }

    pub fn year_of(&self, date: Timestamp) -> i32 {
        self.field_of(date, Field::Year)
    }

    /// 1-based: January is 1.
    pub fn month_of(&self, date: Timestamp) -> i32 {
        self.field_of(date, Field::Month)
    }

    pub fn day_of_month_of(&self, date: Timestamp) -> i32 {
        self.field_of(date, Field::DayOfMonth)
    }

    /// Sunday is 1, Saturday is 7.
    pub fn day_of_week_of(&self, date: Timestamp) -> i32 {
        self.field_of(date, Field::DayOfWeek)
    }

    pub fn hour_of_day(&self, date: Timestamp) -> i32 {
        self.field_of(date, Field::HourOfDay)
    }

    pub fn minute_of(&self, date: Timestamp) -> i32 {
        self.field_of(date, Field::Minute)
    }

    pub fn second_of(&self, date: Timestamp) -> i32 {
        self.field_of(date, Field::Second)
    }

    pub fn millisecond_of(&self, date: Timestamp) -> i32 {
        self.field_of(date, Field::Millisecond)
    }

    /// Local midnight of the same day, e.g. `2008-12-29T23:45:12` gives
    /// `2008-12-29T00:00:00`.
    ///
    /// Saturates to [`Timestamp::MIN`] when that midnight lies before the
    /// earliest representable instant.
    pub fn truncate_time(&self, date: Option<Timestamp>) -> Option<Timestamp> {
        let mut calendar = self.to_calendar(date)?;
        Some(match calendar.clear_time() {
            Ok(()) => calendar.time(),
            Err(e) => {
                if debug_enabled() {
                    eprintln!("Failed to truncate {}: {e}", calendar.time());
                }
                Timestamp::MIN
            }
        })
    }

    pub fn today(&self) -> Timestamp {
        self.clock.now()
    }

    /// Same wall-clock time one calendar day earlier. Saturates at
    /// [`Timestamp::MIN`].
    pub fn yesterday(&self) -> Timestamp {
        self.days_from_now(-1).unwrap_or(Timestamp::MIN)
    }

    /// Same wall-clock time one calendar day later. Saturates at
    /// [`Timestamp::MAX`].
    pub fn tomorrow(&self) -> Timestamp {
        self.days_from_now(1).unwrap_or(Timestamp::MAX)
    }

    fn days_from_now(&self, days: i32) -> Result<Timestamp, DateError> {
        let mut calendar = Calendar::new(self.clock.now(), self.zone);
        calendar.add(Field::DayOfMonth, days)?;
        Ok(calendar.time())
    }
}

/// Formats with `yyyy-MM-dd` in the local zone.
pub fn format_as_date(date: Option<Timestamp>) -> Option<String> {
    Dates::system().format_as_date(date)
}

/// Formats with `yyyy-MM-dd'T'HH:mm:ss` in the local zone.
pub fn format_as_date_time(date: Option<Timestamp>) -> Option<String> {
    Dates::system().format_as_date_time(date)
}

/// Formats with `yyyy-MM-dd'T'HH:mm:ss.SSS` in the local zone.
pub fn format_as_date_time_with_millis(date: Option<Timestamp>) -> Option<String> {
    Dates::system().format_as_date_time_with_millis(date)
}

pub fn format_calendar_as_date_time(calendar: Option<&Calendar>) -> Option<String> {
    Dates::system().format_calendar_as_date_time(calendar)
}

pub fn parse_date(input: Option<&str>) -> Result<Option<Timestamp>, DateError> {
    Dates::system().parse_date(input)
}

pub fn parse_date_time(input: Option<&str>) -> Result<Option<Timestamp>, DateError> {
    Dates::system().parse_date_time(input)
}

pub fn to_calendar(date: Option<Timestamp>) -> Option<Calendar> {
    Dates::system().to_calendar(date)
}

pub fn year_of(date: Timestamp) -> i32 {
    Dates::system().year_of(date)
}

pub fn month_of(date: Timestamp) -> i32 {
    Dates::system().month_of(date)
}

pub fn day_of_month_of(date: Timestamp) -> i32 {
    Dates::system().day_of_month_of(date)
}

pub fn day_of_week_of(date: Timestamp) -> i32 {
    Dates::system().day_of_week_of(date)
}

pub fn hour_of_day(date: Timestamp) -> i32 {
    Dates::system().hour_of_day(date)
}

pub fn minute_of(date: Timestamp) -> i32 {
    Dates::system().minute_of(date)
}

pub fn second_of(date: Timestamp) -> i32 {
    Dates::system().second_of(date)
}

pub fn millisecond_of(date: Timestamp) -> i32 {
    Dates::system().millisecond_of(date)
}

pub fn truncate_time(date: Option<Timestamp>) -> Option<Timestamp> {
    Dates::system().truncate_time(date)
}

pub fn today() -> Timestamp {
    Dates::system().today()
}

pub fn yesterday() -> Timestamp {
    Dates::system().yesterday()
}

pub fn tomorrow() -> Timestamp {
    Dates::system().tomorrow()
}

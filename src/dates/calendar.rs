use std::fmt;

use chrono::{
    DateTime, Datelike, Days, FixedOffset, Months, NaiveDateTime, NaiveTime, TimeDelta, Timelike,
};

use super::Timestamp;
use crate::error::DateError;
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    /// 1 = January
    Month,
    DayOfMonth,
    /// 1 = Sunday, 7 = Saturday
    DayOfWeek,
    /// 24-hour clock
    HourOfDay,
    Minute,
    Second,
    Millisecond,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::DayOfMonth => "day of month",
            Field::DayOfWeek => "day of week",
            Field::HourOfDay => "hour of day",
            Field::Minute => "minute",
            Field::Second => "second",
            Field::Millisecond => "millisecond",
        };
        f.write_str(name)
    }
}

/// An instant viewed through a zone, with per-field access.
///
/// Writes go through the zone's wall clock: changing the day keeps the local
/// time of day even when the UTC offset changes in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    instant: Timestamp,
    zone: Timezone,
}

impl Calendar {
    pub fn new(instant: Timestamp, zone: Timezone) -> Self {
        Calendar { instant, zone }
    }

    pub fn time(&self) -> Timestamp {
        self.instant
    }

    pub fn set_time(&mut self, instant: Timestamp) {
        self.instant = instant;
    }

    pub fn zone(&self) -> Timezone {
        self.zone
    }

    fn local(&self) -> DateTime<FixedOffset> {
        self.instant.in_zone(self.zone)
    }

    pub fn get(&self, field: Field) -> i32 {
        let local = self.local();
        match field {
            Field::Year => local.year(),
            Field::Month => local.month() as i32,
            Field::DayOfMonth => local.day() as i32,
            Field::DayOfWeek => local.weekday().number_from_sunday() as i32,
            Field::HourOfDay => local.hour() as i32,
            Field::Minute => local.minute() as i32,
            Field::Second => local.second() as i32,
            // leap seconds carry nanos past 1e9
            Field::Millisecond => (local.nanosecond() / 1_000_000).min(999) as i32,
        }
    }

    /// Sets one field, leaving the others as they read in this zone.
    ///
    /// Values outside the field's calendar range (month 13, day 31 in April,
    /// hour 24, ...) are rejected rather than rolled over.
    pub fn set(&mut self, field: Field, value: i32) -> Result<(), DateError> {
        let local = self.local().naive_local();
        let unsigned = u32::try_from(value).ok();
        let updated = match field {
            Field::Year => local.with_year(value),
            Field::Month => unsigned.and_then(|m| local.with_month(m)),
            Field::DayOfMonth => unsigned.and_then(|d| local.with_day(d)),
            Field::DayOfWeek => {
                if (1..=7).contains(&value) {
                    let current = i64::from(local.weekday().number_from_sunday());
                    local.checked_add_signed(TimeDelta::days(i64::from(value) - current))
                } else {
                    None
                }
            }
            Field::HourOfDay => unsigned.and_then(|h| local.with_hour(h)),
            Field::Minute => unsigned.and_then(|m| local.with_minute(m)),
            Field::Second => unsigned.and_then(|s| local.with_second(s)),
            Field::Millisecond => unsigned
                .filter(|ms| *ms < 1000)
                .and_then(|ms| local.with_nanosecond(ms * 1_000_000)),
        };
        let updated = updated.ok_or(DateError::FieldOutOfRange { field, value })?;
        self.instant = Timestamp::from(self.zone.resolve(updated)?);
        Ok(())
    }

    /// Moves the calendar by `amount` units of `field`.
    ///
    /// Day steps are calendar days, so across a DST change a day can be 23
    /// or 25 hours long. Month and year steps clamp the day of month (Jan 31
    /// plus one month is Feb 28/29). Time-of-day steps are fixed durations.
    pub fn add(&mut self, field: Field, amount: i32) -> Result<(), DateError> {
        let amount = i64::from(amount);
        match field {
            Field::Year => self.shift_local(|local| add_months(local, amount * 12)),
            Field::Month => self.shift_local(|local| add_months(local, amount)),
            Field::DayOfMonth | Field::DayOfWeek => {
                self.shift_local(|local| add_days(local, amount))
            }
            Field::HourOfDay => self.shift_instant(TimeDelta::try_hours(amount)),
            Field::Minute => self.shift_instant(TimeDelta::try_minutes(amount)),
            Field::Second => self.shift_instant(TimeDelta::try_seconds(amount)),
            Field::Millisecond => self.shift_instant(TimeDelta::try_milliseconds(amount)),
        }
    }

    /// Zeroes hour, minute, second and millisecond in this zone.
    pub fn clear_time(&mut self) -> Result<(), DateError> {
        self.shift_local(|local| Some(local.date().and_time(NaiveTime::MIN)))
    }

    fn shift_local(
        &mut self,
        shift: impl FnOnce(NaiveDateTime) -> Option<NaiveDateTime>,
    ) -> Result<(), DateError> {
        let shifted = shift(self.local().naive_local()).ok_or(DateError::Overflow)?;
        self.instant = Timestamp::from(self.zone.resolve(shifted)?);
        Ok(())
    }

    fn shift_instant(&mut self, delta: Option<TimeDelta>) -> Result<(), DateError> {
        let shifted = delta
            .and_then(|delta| self.instant.as_datetime().checked_add_signed(delta))
            .ok_or(DateError::Overflow)?;
        self.instant = Timestamp::from(shifted);
        Ok(())
    }
}

fn add_months(local: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months < 0 {
        local.checked_sub_months(magnitude)
    } else {
        local.checked_add_months(magnitude)
    }
}

fn add_days(local: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let magnitude = Days::new(days.unsigned_abs());
    if days < 0 {
        local.checked_sub_days(magnitude)
    } else {
        local.checked_add_days(magnitude)
    }
}

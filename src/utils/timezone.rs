use chrono::offset::{LocalResult, Offset};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

use crate::error::DateError;

/// Zone used to split an instant into calendar fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timezone {
    /// The host's zone, as reported by the operating system.
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    pub const UTC: Timezone = Timezone::Named(chrono_tz::UTC);

    pub fn parse(value: Option<&str>) -> Result<Self, DateError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::UTC);
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| DateError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    /// Maps a wall-clock time in this zone back to an instant.
    ///
    /// Ambiguous times (clocks going back) pick the earlier instant. Times
    /// skipped by a forward transition are read with the offset in force
    /// before the gap, which lands them after it, e.g. 02:30 on a spring
    /// forward night becomes 03:30.
    pub fn resolve(self, local: NaiveDateTime) -> Result<DateTime<Utc>, DateError> {
        let resolved = match self {
            Timezone::Local => resolve_in(&Local, local),
            Timezone::Named(tz) => resolve_in(&tz, local),
        };
        resolved.ok_or(DateError::Overflow)
    }
}

fn resolve_in<T: TimeZone>(tz: &T, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let before = local.checked_sub_signed(TimeDelta::days(1))?;
            let offset = tz.offset_from_utc_datetime(&before).fix();
            let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(
                offset.local_minus_utc(),
            )))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timezone::Local => f.write_str("local"),
            Timezone::Named(tz) => fmt::Display::fmt(tz, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn parse_none_returns_local() {
        assert_eq!(Timezone::parse(None).unwrap(), Timezone::Local);
    }

    #[test]
    fn parse_local_variants() {
        for raw in ["", "local", "LOCAL", "  Local  "] {
            assert_eq!(Timezone::parse(Some(raw)).unwrap(), Timezone::Local);
        }
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z", "  UTC  "] {
            assert_eq!(Timezone::parse(Some(raw)).unwrap(), Timezone::UTC);
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert_eq!(tz, Timezone::Named(chrono_tz::America::New_York));
        assert_eq!(tz.to_string(), "America/New_York");
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn to_fixed_offset_named_shifts_time() {
        let utc = "2026-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::Named(chrono_tz::America::New_York);
        let fixed = tz.to_fixed_offset(utc);
        // EDT is UTC-4 in June
        assert_eq!(fixed.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(fixed.format("%H:%M").to_string(), "08:00");
    }

    #[test]
    fn resolve_plain_wall_time() {
        let tz = Timezone::Named(chrono_tz::Asia::Shanghai);
        let utc = tz.resolve(naive(2026, 2, 12, 18, 0)).unwrap();
        assert_eq!(utc.to_rfc3339(), "2026-02-12T10:00:00+00:00");
    }

    #[test]
    fn resolve_skipped_time_moves_forward() {
        let tz = Timezone::Named(chrono_tz::America::New_York);
        let utc = tz.resolve(naive(2026, 3, 8, 2, 30)).unwrap();
        assert_eq!(utc.to_rfc3339(), "2026-03-08T07:30:00+00:00");
        assert_eq!(tz.to_fixed_offset(utc).format("%H:%M").to_string(), "03:30");
    }

    #[test]
    fn resolve_repeated_time_picks_earlier() {
        let tz = Timezone::Named(chrono_tz::America::New_York);
        let utc = tz.resolve(naive(2026, 11, 1, 1, 30)).unwrap();
        // still EDT (UTC-4) for the first 01:30
        assert_eq!(utc.to_rfc3339(), "2026-11-01T05:30:00+00:00");
    }
}

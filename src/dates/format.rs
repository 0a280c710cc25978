//! The three fixed ISO layouts.
//!
//! Each layout is compiled once into chrono format items and shared by every
//! caller. The items are immutable, so concurrent formatting and parsing need
//! no lock.

use std::fmt;
use std::sync::LazyLock;

use chrono::format::{Item, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, ParseError};

use crate::consts::{
    DATE_STRFTIME, DATE_TIME_STRFTIME, DATE_TIME_WITH_MS_STRFTIME, ISO_DATE_FORMAT,
    ISO_DATE_TIME_FORMAT, ISO_DATE_TIME_FORMAT_WITH_MS,
};

static DATE_ITEMS: LazyLock<Vec<Item<'static>>> = LazyLock::new(|| compile(DATE_STRFTIME));
static DATE_TIME_ITEMS: LazyLock<Vec<Item<'static>>> =
    LazyLock::new(|| compile(DATE_TIME_STRFTIME));
static DATE_TIME_WITH_MS_ITEMS: LazyLock<Vec<Item<'static>>> =
    LazyLock::new(|| compile(DATE_TIME_WITH_MS_STRFTIME));

fn compile(strftime: &'static str) -> Vec<Item<'static>> {
    StrftimeItems::new(strftime).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `yyyy-MM-dd`
    Date,
    /// `yyyy-MM-dd'T'HH:mm:ss`
    DateTime,
    /// `yyyy-MM-dd'T'HH:mm:ss.SSS`
    DateTimeWithMillis,
}

impl Layout {
    pub fn pattern(self) -> &'static str {
        match self {
            Layout::Date => ISO_DATE_FORMAT,
            Layout::DateTime => ISO_DATE_TIME_FORMAT,
            Layout::DateTimeWithMillis => ISO_DATE_TIME_FORMAT_WITH_MS,
        }
    }

    pub fn strftime(self) -> &'static str {
        match self {
            Layout::Date => DATE_STRFTIME,
            Layout::DateTime => DATE_TIME_STRFTIME,
            Layout::DateTimeWithMillis => DATE_TIME_WITH_MS_STRFTIME,
        }
    }

    fn items(self) -> &'static [Item<'static>] {
        match self {
            Layout::Date => DATE_ITEMS.as_slice(),
            Layout::DateTime => DATE_TIME_ITEMS.as_slice(),
            Layout::DateTimeWithMillis => DATE_TIME_WITH_MS_ITEMS.as_slice(),
        }
    }

    pub(crate) fn format(self, local: &DateTime<FixedOffset>) -> String {
        local.format_with_items(self.items().iter()).to_string()
    }

    /// Reads a wall-clock time from the start of `input`; anything after
    /// the layout is ignored. The date layout yields midnight.
    pub(crate) fn parse(self, input: &str) -> Result<NaiveDateTime, ParseError> {
        let mut parsed = Parsed::new();
        chrono::format::parse_and_remainder(&mut parsed, input, self.items().iter())?;
        match self {
            Layout::Date => Ok(parsed.to_naive_date()?.and_time(NaiveTime::MIN)),
            Layout::DateTime | Layout::DateTimeWithMillis => {
                parsed.to_naive_datetime_with_offset(0)
            }
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn sample() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2003, 4, 26, 3, 1, 2)
            .unwrap()
            + chrono::TimeDelta::milliseconds(999)
    }

    #[test]
    fn format_each_layout() {
        let local = sample();
        assert_eq!(Layout::Date.format(&local), "2003-04-26");
        assert_eq!(Layout::DateTime.format(&local), "2003-04-26T03:01:02");
        assert_eq!(
            Layout::DateTimeWithMillis.format(&local),
            "2003-04-26T03:01:02.999"
        );
    }

    #[test]
    fn millis_are_zero_padded() {
        let local = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2011, 1, 2, 9, 8, 7)
            .unwrap()
            + chrono::TimeDelta::milliseconds(5);
        assert_eq!(
            Layout::DateTimeWithMillis.format(&local),
            "2011-01-02T09:08:07.005"
        );
    }

    #[test]
    fn parse_date_layout_gives_midnight() {
        let parsed = Layout::Date.parse("2003-04-23").unwrap();
        let expected = NaiveDate::from_ymd_opt(2003, 4, 23)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_date_time_layout() {
        let parsed = Layout::DateTime.parse("2003-04-26T13:01:02").unwrap();
        let expected = NaiveDate::from_ymd_opt(2003, 4, 26)
            .unwrap()
            .and_hms_opt(13, 1, 2)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_rejects_other_layouts() {
        assert!(Layout::Date.parse("not-a-date").is_err());
        assert!(Layout::Date.parse("").is_err());
        assert!(Layout::DateTime.parse("2003-04-26").is_err());
        assert!(Layout::Date.parse("2003-13-01").is_err());
    }

    #[test]
    fn parse_ignores_text_after_layout() {
        let parsed = Layout::Date.parse("2003-04-26T13:01:02").unwrap();
        let expected = NaiveDate::from_ymd_opt(2003, 4, 26)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parsed, expected);
        let parsed = Layout::DateTime.parse("2003-04-26T13:01:02 UTC").unwrap();
        let expected = NaiveDate::from_ymd_opt(2003, 4, 26)
            .unwrap()
            .and_hms_opt(13, 1, 2)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn display_uses_pattern() {
        assert_eq!(Layout::DateTime.to_string(), "yyyy-MM-dd'T'HH:mm:ss");
        assert_eq!(Layout::DateTimeWithMillis.strftime(), "%Y-%m-%dT%H:%M:%S%.3f");
    }
}

use std::path::PathBuf;

use thiserror::Error;

use crate::dates::{Field, Layout};

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Invalid date \"{input}\" (expected {layout})")]
    Parse {
        input: String,
        layout: Layout,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("{field} out of range: {value}")]
    FieldOutOfRange { field: Field, value: i32 },

    #[error("Date arithmetic overflowed the supported range")]
    Overflow,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn parse_error() -> chrono::ParseError {
        chrono::NaiveDate::parse_from_str("abc", "%Y-%m-%d").unwrap_err()
    }

    #[test]
    fn date_error_display_parse() {
        let e = DateError::Parse {
            input: "abc".to_string(),
            layout: Layout::Date,
            source: parse_error(),
        };
        assert_eq!(e.to_string(), r#"Invalid date "abc" (expected yyyy-MM-dd)"#);
    }

    #[test]
    fn date_error_parse_keeps_cause() {
        let e = DateError::Parse {
            input: "abc".to_string(),
            layout: Layout::DateTime,
            source: parse_error(),
        };
        let cause = e.source().expect("parse error has a cause");
        assert!(cause.downcast_ref::<chrono::ParseError>().is_some());
    }

    #[test]
    fn date_error_display_timezone() {
        let e = DateError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn date_error_display_field() {
        let e = DateError::FieldOutOfRange {
            field: Field::HourOfDay,
            value: 25,
        };
        assert_eq!(e.to_string(), "hour of day out of range: 25");
    }

    #[test]
    fn config_error_display_read() {
        let e = ConfigError::Read {
            path: PathBuf::from("/nowhere/config.toml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(e.to_string().starts_with("Failed to read /nowhere/config.toml: "));
    }
}

//! Building blocks for assertion libraries: ISO date helpers and a
//! collection formatter.
//!
//! ```
//! use assert_util::collections::{self, FormatItem};
//! use assert_util::dates::{Dates, SystemClock};
//! use assert_util::utils::Timezone;
//!
//! let dates = Dates::new(Timezone::UTC, SystemClock);
//! let day = dates.parse_date(Some("2008-12-29")).unwrap();
//! assert_eq!(dates.format_as_date_time(day).as_deref(), Some("2008-12-29T00:00:00"));
//!
//! let items: [&dyn FormatItem; 2] = [&"First", &3];
//! assert_eq!(collections::format(Some(items)).as_deref(), Some("['First', 3]"));
//! ```

pub mod collections;
pub mod config;
pub mod consts;
pub mod dates;
pub mod error;
pub mod utils;

pub use config::Config;
pub use dates::{Calendar, Dates, Field, Layout, Timestamp};
pub use error::{ConfigError, DateError};
pub use utils::Timezone;

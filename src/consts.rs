/// ISO 8601 date layout, e.g. `2003-04-23`.
pub const ISO_DATE_FORMAT: &str = "yyyy-MM-dd";

/// ISO 8601 date-time layout, e.g. `2003-04-26T13:01:02`.
pub const ISO_DATE_TIME_FORMAT: &str = "yyyy-MM-dd'T'HH:mm:ss";

/// ISO 8601 date-time layout with milliseconds, e.g. `2003-04-26T03:01:02.999`.
pub const ISO_DATE_TIME_FORMAT_WITH_MS: &str = "yyyy-MM-dd'T'HH:mm:ss.SSS";

pub(crate) const DATE_STRFTIME: &str = "%Y-%m-%d";
pub(crate) const DATE_TIME_STRFTIME: &str = "%Y-%m-%dT%H:%M:%S";
pub(crate) const DATE_TIME_WITH_MS_STRFTIME: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Rendering of an absent item in formatted collections
pub const NULL: &str = "null";

//!

///
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

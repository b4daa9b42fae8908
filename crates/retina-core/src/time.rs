//! Wall-clock formatting shared by records and download filenames.

use jiff::Zoned;

/// Timestamp format stored on every metric and evaluation record.
pub const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Compact form used inside download filenames.
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn record_timestamp(at: &Zoned) -> String {
    at.strftime(RECORD_TIMESTAMP_FORMAT).to_string()
}

pub fn filename_timestamp(at: &Zoned) -> String {
    at.strftime(FILENAME_TIMESTAMP_FORMAT).to_string()
}

/// Current local time as a record timestamp.
pub fn now_record_timestamp() -> String {
    record_timestamp(&Zoned::now())
}

use chrono::{DateTime, Local};
use serde_json::{Map, Value};

/// A stored document: a flat JSON object, exactly as the store returns it.
pub type Record = Map<String, Value>;

/// Soft-delete flag. `false` is terminal for normal flows; inactive records
/// drop out of default listings but stay readable by direct lookup.
pub const IS_ACTIVE: &str = "isActive";

/// Optimistic-concurrency token, stamped on every mutation.
pub const LAST_UPDATE: &str = "lastUpdate";

/// Identity of the last writer.
pub const UPDATED_BY: &str = "updatedBy";

/// Format `dt` as `YYYY-MM-DD hh:mm:ss:mm` with the milliseconds truncated
/// to two digits. The layout is shared with the daily-report frontend and
/// must stay bit-exact.
pub fn format_timestamp(dt: DateTime<Local>) -> String {
    format!(
        "{}:{:02}",
        dt.format("%Y-%m-%d %H:%M:%S"),
        dt.timestamp_subsec_millis() / 10
    )
}

/// Timestamp for the current local time, used to stamp `lastUpdate`.
pub fn now_timestamp() -> String {
    format_timestamp(Local::now())
}

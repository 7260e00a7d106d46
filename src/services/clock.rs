//! Unix timestamps to display time at the tracker's fixed +01:00 offset.

use crate::domain::constants::UTC_OFFSET_SECS;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};

/// Convert unix seconds to a datetime at the static offset.
pub fn local_time(timestamp: i64) -> anyhow::Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(UTC_OFFSET_SECS).context("fixed UTC offset out of range")?;
    let utc = DateTime::from_timestamp(timestamp, 0)
        .with_context(|| format!("timestamp {timestamp} out of range"))?;
    Ok(utc.with_timezone(&offset))
}

/// Report format: `2023-11-14 23:13:20+01:00`.
pub fn format_local_time(time: &DateTime<FixedOffset>) -> String {
    time.format("%Y-%m-%d %H:%M:%S%:z").to_string()
}

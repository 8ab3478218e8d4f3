//! Bounds validation utilities
//!
//! Timestamp bounds and overflow-checked arithmetic used when computing
//! token lifetimes.

use crate::error::{Error, Result};
use crate::limits::{MAX_TIMESTAMP, MIN_TIMESTAMP};
use std::time::Duration;

/// Check if timestamp is within acceptable bounds
pub(crate) fn validate_timestamp_bounds(value: i64) -> Result<()> {
    if !(MIN_TIMESTAMP..=MAX_TIMESTAMP).contains(&value) {
        return Err(Error::TimestampOutOfBounds {
            value,
            min: MIN_TIMESTAMP,
            max: MAX_TIMESTAMP,
        });
    }
    Ok(())
}

/// Add a lifetime to a timestamp with overflow protection
///
/// Sub-second precision of `ttl` is truncated.
pub(crate) fn add_ttl(timestamp: i64, ttl: Duration) -> Result<i64> {
    let ttl_secs = i64::try_from(ttl.as_secs()).map_err(|_| Error::TimestampOverflow)?;
    timestamp
        .checked_add(ttl_secs)
        .ok_or(Error::TimestampOverflow)
}

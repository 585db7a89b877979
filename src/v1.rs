//! UUIDv1-related functionality
//!
//! A version 1 UUID stores a 60-bit count of 100-nanosecond intervals since the Gregorian reform
//! (1582-10-15T00:00:00Z), a 14-bit clock sequence, and a 48-bit node identifier:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|     clock_seq             |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use crate::Error;

/// Number of 100-nanosecond intervals between 1582-10-15 and 1970-01-01.
pub const GREGORIAN_OFFSET: u64 = 122_192_928_000_000_000;

/// Largest value of the 14-bit clock sequence.
pub(crate) const MAX_CLOCK_SEQ: u32 = (1 << 14) - 1;

const INTERVALS_PER_SEC: i128 = 10_000_000;
const NANOS_PER_INTERVAL: u32 = 100;
const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Converts a Unix timestamp into the 60-bit count of 100-nanosecond intervals since 1582-10-15.
///
/// Sub-interval nanoseconds are truncated.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the result is negative or does not fit in 60 bits, or if
/// `nanos` is not less than one billion.
///
/// # Examples
///
/// ```rust
/// use unique_id::v1::{timestamp_from_unix, GREGORIAN_OFFSET};
///
/// assert_eq!(timestamp_from_unix(0, 0), Ok(GREGORIAN_OFFSET));
/// assert_eq!(timestamp_from_unix(-12_219_292_800, 0), Ok(0));
/// assert!(timestamp_from_unix(-12_219_292_801, 0).is_err());
/// ```
pub fn timestamp_from_unix(seconds: i64, nanos: u32) -> Result<u64, Error> {
    if nanos >= NANOS_PER_SEC {
        return Err(Error::OutOfRange);
    }

    let intervals = seconds as i128 * INTERVALS_PER_SEC
        + (nanos / NANOS_PER_INTERVAL) as i128
        + GREGORIAN_OFFSET as i128;
    if (0..1 << 60).contains(&intervals) {
        Ok(intervals as u64)
    } else {
        Err(Error::OutOfRange)
    }
}

/// Splits a [`SystemTime`](std::time::SystemTime) into whole seconds and nanoseconds relative to
/// the Unix epoch, flooring times before the epoch.
#[cfg(feature = "std")]
pub(crate) fn split_system_time(time: std::time::SystemTime) -> Result<(i64, u32), Error> {
    use std::time::UNIX_EPOCH;
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => {
            let seconds = i64::try_from(d.as_secs()).map_err(|_| Error::OutOfRange)?;
            Ok((seconds, d.subsec_nanos()))
        }
        Err(err) => {
            let d = err.duration();
            let seconds = i64::try_from(d.as_secs()).map_err(|_| Error::OutOfRange)?;
            match d.subsec_nanos() {
                0 => Ok((-seconds, 0)),
                n => Ok((-seconds - 1, NANOS_PER_SEC - n)),
            }
        }
    }
}

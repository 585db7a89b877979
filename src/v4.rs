//! UUIDv4-related functionality

use crate::Uuid;

/// The version nibble value of a random UUID.
pub(crate) const VERSION: u8 = 4;

/// Creates a UUIDv4 object from 16 random bytes, overwriting the six version and variant bits.
///
/// # Examples
///
/// ```rust
/// use unique_id::v4::from_random_bytes;
///
/// let uuid = from_random_bytes([0xff; 16]);
/// assert_eq!(uuid.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
/// ```
pub fn from_random_bytes(bytes: [u8; 16]) -> Uuid {
    Uuid::with_version(bytes, VERSION)
}

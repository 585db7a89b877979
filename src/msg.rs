//! Conversions to and from the 16-byte message payload.
//!
//! Processes exchange identifiers inside a larger message envelope owned by the messaging layer.
//! The payload is byte-for-byte identical to [`Uuid::as_bytes`], so both directions are total.

#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

use crate::Uuid;

/// Returns the 16-byte message payload of a UUID.
pub const fn to_message_payload(uuid: Uuid) -> [u8; 16] {
    uuid.to_bytes()
}

/// Creates a UUID from a 16-byte message payload.
pub const fn from_message_payload(payload: [u8; 16]) -> Uuid {
    Uuid::from_bytes(payload)
}

/// A message carrying a universally unique identifier.
///
/// The default message holds the Nil UUID, meaning "absent" or "uninitialized".
///
/// # Examples
///
/// ```rust
/// use unique_id::{msg::UniqueId, Uuid};
///
/// let x: Uuid = "da7c242f-2efe-5175-9961-49cc621b80b9".parse()?;
/// let msg = UniqueId::from(x);
/// assert_eq!(msg.to_string(), "da7c242f-2efe-5175-9961-49cc621b80b9");
/// assert_eq!(Uuid::from(msg), x);
/// assert_eq!(UniqueId::default(), UniqueId::from(Uuid::NIL));
/// # Ok::<(), unique_id::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniqueId {
    /// The identifier as 16 big-endian bytes.
    pub uuid: [u8; 16],
}

impl From<Uuid> for UniqueId {
    fn from(src: Uuid) -> Self {
        Self {
            uuid: to_message_payload(src),
        }
    }
}

impl From<UniqueId> for Uuid {
    fn from(src: UniqueId) -> Self {
        from_message_payload(src.uuid)
    }
}

impl fmt::Display for UniqueId {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&from_message_payload(self.uuid), f)
    }
}

#[cfg(test)]
mod tests {
    use super::{from_message_payload, to_message_payload, UniqueId};
    use crate::{from_url, Uuid};

    /// Treats payload as the byte representation
    #[test]
    fn treats_payload_as_the_byte_representation() {
        assert_eq!(to_message_payload(Uuid::NIL), [0u8; 16]);
        assert_eq!(from_message_payload([0u8; 16]), Uuid::NIL);

        let e = from_url("http://openstreetmap.org/node/152370223");
        assert_eq!(&to_message_payload(e), e.as_bytes());
        assert_eq!(from_message_payload(to_message_payload(e)), e);
        assert_eq!(to_message_payload(from_message_payload([0xa5; 16])), [0xa5; 16]);
    }

    /// Creates equivalent messages from equal UUIDs
    #[test]
    fn creates_equivalent_messages_from_equal_uuids() {
        let s = "da7c242f-2efe-5175-9961-49cc621b80b9";
        let x = UniqueId::from(s.parse::<Uuid>().unwrap());
        let y = UniqueId::from(s.parse::<Uuid>().unwrap());
        assert_eq!(x, y);
        assert_eq!(x.to_string(), s);
        assert_eq!(Uuid::from(x).to_string(), s);
    }

    /// Distinguishes nil message from generated ones
    #[test]
    fn distinguishes_nil_message_from_generated_ones() {
        let nil = UniqueId::default();
        assert_eq!(nil, UniqueId::from(Uuid::NIL));
        assert_eq!(nil.to_string(), "00000000-0000-0000-0000-000000000000");
        assert_ne!(nil, UniqueId::from(from_url("http://openstreetmap.org/way/1")));
        #[cfg(feature = "global_gen")]
        assert_ne!(nil, UniqueId::from(crate::from_random()));
    }

    /// Serializes as a byte array
    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_a_byte_array() {
        use serde_test::{assert_tokens, Token};

        let msg = UniqueId { uuid: [7; 16] };
        let mut tokens = vec![
            Token::Struct {
                name: "UniqueId",
                len: 1,
            },
            Token::Str("uuid"),
            Token::Tuple { len: 16 },
        ];
        tokens.extend([Token::U8(7); 16]);
        tokens.extend([Token::TupleEnd, Token::StructEnd]);
        assert_tokens(&msg, &tokens);
    }
}

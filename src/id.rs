#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, ops, str};

use crate::Error;

/// Mask of the version nibble in byte 6.
pub(crate) const VERSION_MASK: u8 = 0xf0;

/// Mask of the two variant bits in byte 8.
pub(crate) const VARIANT_MASK: u8 = 0xc0;

/// The `10` variant bits defined by RFC 4122, placed at the top of byte 8.
pub(crate) const VARIANT_RFC4122: u8 = 0x80;

/// Represents a Universally Unique IDentifier.
///
/// The 16 bytes are stored in network (big-endian) order, so the derived ordering is the
/// lexicographic ordering of the byte sequence and of the canonical string.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The variant field of a UUID, determining the interpretation of the other bits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Variant {
    /// Reserved for NCS backward compatibility (`0xx`), including the Nil UUID.
    Ncs,
    /// The variant specified by RFC 4122 (`10x`).
    Rfc4122,
    /// Reserved for Microsoft backward compatibility (`110`).
    Microsoft,
    /// Reserved for future definition (`111`), including the Max UUID.
    Future,
}

/// The five fields of the RFC 4122 layout, decoded in host order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fields {
    /// The low field of the timestamp.
    pub time_low: u32,
    /// The middle field of the timestamp.
    pub time_mid: u16,
    /// The high field of the timestamp multiplexed with the version number.
    pub time_hi_and_version: u16,
    /// The high field of the clock sequence multiplexed with the variant.
    pub clock_seq_hi_and_reserved: u8,
    /// The low field of the clock sequence.
    pub clock_seq_low: u8,
    /// The spatially unique node identifier.
    pub node: [u8; 6],
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for X.500 distinguished names (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an object from a byte slice, failing unless the slice is exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_id::{Error, Uuid};
    ///
    /// assert_eq!(Uuid::from_slice(&[0u8; 16]), Ok(Uuid::NIL));
    /// assert_eq!(Uuid::from_slice(&[0u8; 15]), Err(Error::InvalidLength { len: 15 }));
    /// ```
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        <[u8; 16]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidLength { len: bytes.len() })
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.0
    }

    /// Returns true if `self` is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Equivalent to `src.parse::<Uuid>()`.
    pub fn parse_str(src: &str) -> Result<Self, Error> {
        src.parse()
    }

    /// Creates a version 1 UUID from a 60-bit count of 100-nanosecond intervals since
    /// 1582-10-15, a 14-bit clock sequence, and a 48-bit node identifier.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` or `clock_seq` does not fit in its field.
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: &[u8; 6]) -> Self {
        if timestamp >= 1 << 60 || clock_seq >= 1 << 14 {
            panic!("invalid field value");
        }

        Self([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x10 | (timestamp >> 56) as u8,
            (timestamp >> 48) as u8,
            VARIANT_RFC4122 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Overwrites the version nibble and the variant bits, keeping all other bits.
    pub(crate) fn with_version(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (version << 4) | (bytes[6] & !VERSION_MASK);
        bytes[8] = VARIANT_RFC4122 | (bytes[8] & !VARIANT_MASK);
        Self(bytes)
    }

    /// Returns the decoded RFC 4122 fields.
    pub const fn fields(&self) -> Fields {
        let b = &self.0;
        Fields {
            time_low: u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
            time_mid: u16::from_be_bytes([b[4], b[5]]),
            time_hi_and_version: u16::from_be_bytes([b[6], b[7]]),
            clock_seq_hi_and_reserved: b[8],
            clock_seq_low: b[9],
            node: [b[10], b[11], b[12], b[13], b[14], b[15]],
        }
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0b0000..=0b0111 => Variant::Ncs,
            0b1000..=0b1011 => Variant::Rfc4122,
            0b1100..=0b1101 => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    /// Returns the version field value of the UUID or `None` if `self` does not have the variant
    /// field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Rfc4122 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 60-bit count of 100-nanosecond intervals since 1582-10-15 stored in a version 1
    /// UUID, or `None` for other versions.
    pub const fn timestamp_v1(&self) -> Option<u64> {
        match self.version() {
            Some(1) => {
                let f = self.fields();
                Some(
                    ((f.time_hi_and_version as u64 & 0x0fff) << 48)
                        | ((f.time_mid as u64) << 32)
                        | f.time_low as u64,
                )
            }
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12
    /// canonical hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_id::Uuid;
    ///
    /// let x = "DA7C242F-2EFE-5175-9961-49CC621B80B9".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "da7c242f-2efe-5175-9961-49cc621b80b9");
    /// assert_eq!(format!("{}", y), "da7c242f-2efe-5175-9961-49cc621b80b9");
    /// # Ok::<(), unique_id::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[pos] = b'-';
                pos += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation, accepting upper-
    /// and lower-case digits.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: Error = Error::Parse;
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(ERR);
        }

        let mut dst = [0u8; 16];
        let mut iter = src.iter();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().and_then(|c| hex_value(*c)).ok_or(ERR)?;
            let lo = iter.next().and_then(|c| hex_value(*c)).ok_or(ERR)?;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next() != Some(&b'-') {
                return Err(ERR);
            }
        }
        Ok(Self(dst))
    }
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated 8-4-4-4-12 string
/// representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Error, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl de::Visitor<'_> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "6ba7b811-9dad-11d1-80b4-00c04fd430c8",
                    &[
                        107, 167, 184, 17, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200,
                    ],
                ),
                (
                    "ef362ac8-9659-5481-b954-88e9b741c8f9",
                    &[
                        239, 54, 42, 200, 150, 89, 84, 129, 185, 84, 136, 233, 183, 65, 200, 249,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}

//! UUIDv5-related functionality
//!
//! Name-based UUIDs are a pure function of a name space UUID and a name: the same pair always
//! yields the same UUID, on any machine and in any process. Matching features within each name
//! space therefore share an identifier. For example, Open Street Map objects are identified like
//! this:
//!
//! ```rust
//! use unique_id::v5::from_url_and_id;
//!
//! let node = from_url_and_id("http://openstreetmap.org/node/", 152370223);
//! let way = from_url_and_id("http://openstreetmap.org/way/", 1);
//! assert_eq!(node.to_string(), "8e0b7d8a-c433-5c42-be2e-fbd97ddff9ac");
//! assert_eq!(way.to_string(), "b3180681-b125-5e41-bd04-3c8b046175b4");
//! ```

use core::fmt::Write;

use sha1::{Digest, Sha1};

use crate::{Error, Uuid};

/// The version nibble value of a SHA-1 name-based UUID.
pub(crate) const VERSION: u8 = 5;

/// Generates a UUIDv5 object from a name space UUID and a name.
///
/// The SHA-1 digest of the 16 name space bytes followed by the name bytes is truncated to 16 bytes
/// and stamped with the version and variant bits.
///
/// # Examples
///
/// ```rust
/// use unique_id::{from_name, Uuid};
///
/// let uuid = from_name(Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
/// ```
pub fn from_name(namespace: Uuid, name: impl AsRef<[u8]>) -> Uuid {
    hash_name(&namespace, &[name.as_ref()])
}

/// Generates a UUIDv5 object from a URL in the [`Uuid::NAMESPACE_URL`] name space.
///
/// # Examples
///
/// ```rust
/// let uuid = unique_id::from_url("http://openstreetmap.org/node/1");
/// assert_eq!(uuid.to_string(), "ef362ac8-9659-5481-b954-88e9b741c8f9");
/// ```
pub fn from_url(url: &str) -> Uuid {
    from_name(Uuid::NAMESPACE_URL, url)
}

/// Generates a UUIDv5 object from a URL followed by the decimal representation of `id`, which is
/// unique within the URL.
pub fn from_url_and_id(url: &str, id: u64) -> Uuid {
    let mut digits = DecimalBuf::default();
    // u64::MAX has 20 digits, so writing never fails
    let _ = write!(digits, "{}", id);

    hash_name(&Uuid::NAMESPACE_URL, &[url.as_bytes(), digits.as_bytes()])
}

/// Generates a UUIDv5 object from a URL and a textual decimal identifier.
///
/// The identifier is normalized through integer parsing, so `"0001"` and `"1"` yield the same
/// UUID.
///
/// # Errors
///
/// Returns [`Error::InvalidId`] if `id` is not a non-negative decimal integer that fits in `u64`.
///
/// # Examples
///
/// ```rust
/// use unique_id::v5::{from_url_and_id, from_url_and_id_str};
///
/// let x = from_url_and_id_str("http://openstreetmap.org/node/", "0001")?;
/// assert_eq!(x, from_url_and_id("http://openstreetmap.org/node/", 1));
/// assert!(from_url_and_id_str("http://openstreetmap.org/way/", "xxx").is_err());
/// # Ok::<(), unique_id::Error>(())
/// ```
pub fn from_url_and_id_str(url: &str, id: &str) -> Result<Uuid, Error> {
    if id.is_empty() || !id.bytes().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidId);
    }
    id.parse()
        .map(|id| from_url_and_id(url, id))
        .map_err(|_| Error::InvalidId)
}

/// Computes the SHA-1 digest of the name space followed by the name parts, truncated to 16 bytes
/// and stamped with the version and variant bits.
fn hash_name(namespace: &Uuid, name: &[&[u8]]) -> Uuid {
    let mut hasher = Sha1::new();
    hasher.update(namespace.as_bytes());
    for part in name {
        hasher.update(part);
    }
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Uuid::with_version(bytes, VERSION)
}

/// Stack buffer that holds the decimal digits of a `u64`.
#[derive(Default)]
struct DecimalBuf {
    buf: [u8; 20],
    len: usize,
}

impl DecimalBuf {
    fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl Write for DecimalBuf {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let end = self.len + s.len();
        self.buf
            .get_mut(self.len..end)
            .ok_or(core::fmt::Error)?
            .copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{from_name, from_url, from_url_and_id, from_url_and_id_str};
    use crate::{Error, Uuid, Variant};

    /// Returns a collection of reference vectors for the URL name space
    fn prepare_cases() -> &'static [(&'static str, &'static str)] {
        &[
            (
                "http://openstreetmap.org/node/1",
                "ef362ac8-9659-5481-b954-88e9b741c8f9",
            ),
            (
                "http://openstreetmap.org/node/152370223",
                "8e0b7d8a-c433-5c42-be2e-fbd97ddff9ac",
            ),
            (
                "http://openstreetmap.org/way/1",
                "b3180681-b125-5e41-bd04-3c8b046175b4",
            ),
            (
                "http://ros.org/wiki/road_network/da7c242f-2efe-5175-9961-49cc621b80b9/812f1c08-a34b-5a21-92b9-18b2b0cf4950",
                "acaa906e-8411-5b45-a446-ccdc2fc39f29",
            ),
            ("", "1b4db7eb-4057-5ddf-91e0-36dec72071f5"),
        ]
    }

    /// Matches reference vectors
    #[test]
    fn matches_reference_vectors() {
        for (url, text) in prepare_cases() {
            assert_eq!(&from_url(url).to_string(), text);
            assert_eq!(&from_name(Uuid::NAMESPACE_URL, url).to_string(), text);
            assert_eq!(
                &from_name(Uuid::NAMESPACE_URL, url.as_bytes()).to_string(),
                text
            );
        }

        assert_eq!(
            from_name(Uuid::NAMESPACE_DNS, "python.org").to_string(),
            "886313e1-3b8a-5372-9b90-0c9aee199e5d"
        );
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for (url, _) in prepare_cases() {
            let e = from_url(url);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), Some(5));
        }
    }

    /// Is deterministic and scoped by name space
    #[test]
    fn is_deterministic_and_scoped_by_name_space() {
        let name = "http://openstreetmap.org/node/1";
        assert_eq!(from_url(name), from_url(name));
        assert_ne!(from_name(Uuid::NAMESPACE_DNS, name), from_url(name));
        assert_ne!(from_name(Uuid::NIL, name), from_url(name));
        assert_ne!(from_url(name), from_url("152370223"));
    }

    /// Yields distinct UUIDs for distinct random names
    #[test]
    fn yields_distinct_uuids_for_distinct_random_names() {
        use rand::{distributions::Alphanumeric, Rng};
        use std::collections::HashMap;

        let mut rng = rand::thread_rng();
        let mut seen = HashMap::new();
        for _ in 0..10_000 {
            let len = rng.gen_range(0..32);
            let name: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();
            let e = from_url(&name);
            if let Some(prev) = seen.insert(e, name.clone()) {
                assert_eq!(prev, name);
            }
        }
    }

    /// Appends decimal identifiers to URLs
    #[test]
    fn appends_decimal_identifiers_to_urls() {
        assert_eq!(
            from_url_and_id("http://openstreetmap.org/node/", 1),
            from_url("http://openstreetmap.org/node/1")
        );
        assert_eq!(
            from_url_and_id("http://openstreetmap.org/node/", 152370223).to_string(),
            "8e0b7d8a-c433-5c42-be2e-fbd97ddff9ac"
        );
        assert_eq!(
            from_url_and_id("", u64::MAX),
            from_url("18446744073709551615")
        );
        assert_ne!(
            from_url_and_id("http://openstreetmap.org/node/", 1),
            from_url_and_id("http://openstreetmap.org/way/", 1)
        );
    }

    /// Normalizes identifiers given as strings
    #[test]
    fn normalizes_identifiers_given_as_strings() {
        let expected = "ef362ac8-9659-5481-b954-88e9b741c8f9";
        for id in ["1", "0001", "01"] {
            let e = from_url_and_id_str("http://openstreetmap.org/node/", id).unwrap();
            assert_eq!(e.to_string(), expected);
        }
    }

    /// Returns error to invalid identifiers
    #[test]
    fn returns_error_to_invalid_identifiers() {
        for id in ["", "xxx", "-1", "+1", " 1", "1.0", "18446744073709551616"] {
            assert_eq!(
                from_url_and_id_str("http://openstreetmap.org/way/", id),
                Err(Error::InvalidId),
                "{:?}",
                id
            );
        }
    }
}

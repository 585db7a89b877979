//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::{sync, time};

use crate::{Error, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv4 object.
///
/// This function employs a process-wide generator seeded once from the operating system and
/// shared by all threads.
///
/// # Examples
///
/// ```rust
/// let uuid = unique_id::from_random();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
///
/// # Panics
///
/// Panics if the operating system entropy source is unavailable when the global generator is
/// first used.
pub fn from_random() -> Uuid {
    lock_global_gen().get_mut().generate_v4()
}

/// Generates a UUIDv1 object from a Unix timestamp split into whole `seconds` and `nanos`, and a
/// 48-bit `node` identifier.
///
/// The node is conventionally a hardware address, but any 48-bit value is acceptable. The 14-bit
/// clock sequence is drawn from the global generator on each call.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the timestamp precedes 1582-10-15, overflows the 60-bit time
/// field, or `nanos` is not less than one billion.
///
/// # Examples
///
/// ```rust
/// let node = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab];
/// let uuid = unique_id::from_time(1_000_000_000, 123_456_789, &node)?;
/// assert!(uuid.to_string().starts_with("83551687-a4c4-11d5-"));
/// assert!(uuid.to_string().ends_with("-0123456789ab"));
/// # Ok::<(), unique_id::Error>(())
/// ```
pub fn from_time(seconds: i64, nanos: u32, node: &[u8; 6]) -> Result<Uuid, Error> {
    lock_global_gen().get_mut().generate_v1(seconds, nanos, node)
}

/// Generates a UUIDv1 object from a [`SystemTime`](time::SystemTime) and a 48-bit `node`
/// identifier.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the time is not representable in a version 1 UUID.
///
/// # Examples
///
/// ```rust
/// let uuid = unique_id::from_system_time(std::time::SystemTime::now(), &[0x02; 6])?;
/// assert_eq!(uuid.version(), Some(1));
/// # Ok::<(), unique_id::Error>(())
/// ```
pub fn from_system_time(time: time::SystemTime, node: &[u8; 6]) -> Result<Uuid, Error> {
    lock_global_gen()
        .get_mut()
        .generate_v1_from_system_time(time, node)
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{Generator, Rng};

    /// The random number generator of the global generator.
    ///
    /// The global generator employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to emulate the
    /// strategy used by [`rand::rngs::ThreadRng`].
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl GlobalGenRng {
        fn from_os_rng() -> Self {
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("unique_id: could not initialize global generator");
            Self(ReseedingRng::new(core, 1024 * 64, OsRng))
        }
    }

    impl Rng for GlobalGenRng {
        fn next_u32(&mut self) -> u32 {
            rand::RngCore::next_u32(&mut self.0)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut self.0, dest)
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: Generator<GlobalGenRng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            #[cfg(feature = "tracing")]
            tracing::debug!(pid = std::process::id(), "seeding global UUID generator");

            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: Generator::new(GlobalGenRng::from_os_rng()),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`Generator`] instance, reseeding the
        /// generator on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}


#[cfg(test)]
mod tests_v1 {
    use super::{from_system_time, from_time};
    use crate::{Error, Variant};

    const NODE: [u8; 6] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab];

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^83551687-a4c4-11d5-[89ab][0-9a-f]{3}-0123456789ab$";
        let re = regex::Regex::new(pattern).unwrap();
        for _ in 0..1_000 {
            let e = from_time(1_000_000_000, 123_456_789, &NODE).unwrap();
            assert!(re.is_match(&e.to_string()));
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), Some(1));
        }
    }

    /// Randomizes clock sequence across calls
    #[test]
    fn randomizes_clock_sequence_across_calls() {
        use std::collections::HashSet;
        let s: HashSet<_> = (0..1_000)
            .map(|_| from_time(0, 0, &NODE).unwrap())
            .collect();
        // ~970 distinct values expected from 1,000 draws out of 16,384
        assert!(s.len() > 900);
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use crate::v1::GREGORIAN_OFFSET;
        use std::time::{SystemTime, UNIX_EPOCH};

        let now = SystemTime::now();
        let expected = (now.duration_since(UNIX_EPOCH).unwrap().as_nanos() / 100) as u64;
        let e = from_system_time(now, &NODE).unwrap();
        assert_eq!(e.timestamp_v1(), Some(expected + GREGORIAN_OFFSET));
    }

    /// Reports out-of-range timestamps
    #[test]
    fn reports_out_of_range_timestamps() {
        assert_eq!(from_time(-12_219_292_801, 0, &NODE), Err(Error::OutOfRange));
        assert_eq!(from_time(103_072_857_661, 0, &NODE), Err(Error::OutOfRange));
        assert_eq!(from_time(0, 1_000_000_000, &NODE), Err(Error::OutOfRange));
    }
}

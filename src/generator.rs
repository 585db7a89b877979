//! Random-number-driven generator and related types.

use crate::{v1, v4, Error, Uuid};

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait Rng {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Represents a generator of UUIDs that consume random bits, i.e. version 4 UUIDs and the clock
/// sequence of version 1 UUIDs.
///
/// The crate-level functions [`from_random`](crate::from_random) and
/// [`from_time`](crate::from_time) use a process-wide instance of this type. Construct one
/// explicitly to control the random number generator, e.g. to share a seeded one across threads
/// or to get reproducible output in tests.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use unique_id::Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate_v4(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: Rng> Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        v4::from_random_bytes(bytes)
    }

    /// Generates a new UUIDv1 object from a Unix timestamp split into whole `seconds` and
    /// `nanos`, and a 48-bit `node` identifier, drawing a fresh clock sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the timestamp precedes 1582-10-15, overflows the 60-bit
    /// time field, or `nanos` is not less than one billion.
    pub fn generate_v1(&mut self, seconds: i64, nanos: u32, node: &[u8; 6]) -> Result<Uuid, Error> {
        let timestamp = v1::timestamp_from_unix(seconds, nanos)?;
        let clock_seq = (self.rng.next_u32() & v1::MAX_CLOCK_SEQ) as u16;
        Ok(Uuid::from_fields_v1(timestamp, clock_seq, node))
    }

    /// Generates a new UUIDv1 object from a [`SystemTime`](std::time::SystemTime).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the time is not representable in a version 1 UUID.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn generate_v1_from_system_time(
        &mut self,
        time: std::time::SystemTime,
        node: &[u8; 6],
    ) -> Result<Uuid, Error> {
        let (seconds, nanos) = v1::split_system_time(time)?;
        self.generate_v1(seconds, nanos, node)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use unique_id::Generator;
///
/// Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: Rng> Iterator for Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_v4())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: Rng> core::iter::FusedIterator for Generator<R> {}

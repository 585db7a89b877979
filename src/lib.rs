//! Universally unique identifiers as defined by RFC 4122
//!
//! ```rust
//! use unique_id::{from_random, from_url, Uuid};
//!
//! let uuid = from_random();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = from_url("http://openstreetmap.org/node/1");
//! assert_eq!(uuid.to_string(), "ef362ac8-9659-5481-b954-88e9b741c8f9");
//! assert_eq!(uuid, "EF362AC8-9659-5481-B954-88E9B741C8F9".parse::<Uuid>()?);
//! # Ok::<(), unique_id::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Every UUID is a 16-byte value stored in network (big-endian) byte order:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  clock_seq_hi_and_low     |         node (0-1)            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field identifies the generation method: `0001` for time-based
//!   ([`from_time`]), `0100` for random ([`from_random`]), and `0101` for SHA-1 name-based
//!   ([`from_name`] and [`from_url`]).
//! - The 2-bit `var` field is set at `10`.
//! - The meaning of the remaining 122 bits depends on the version. Version 4 fills them with
//!   random bits, version 5 with a truncated SHA-1 digest of a name space UUID and a name, and
//!   version 1 with a 60-bit count of 100-nanosecond intervals since 1582-10-15, a random 14-bit
//!   clock sequence, and a 48-bit node identifier.
//!
//! # Crate features
//!
//! - `global_gen` (default): process-wide random generator behind [`from_random`] and
//!   [`from_time`]. Implies `std`.
//! - `std`: `String` conversions, [`std::error::Error`] and `SystemTime` support.
//! - `serde`: serialization as a string in human-readable formats and as bytes otherwise.
//! - `uuid`: conversions to and from [`uuid::Uuid`](https://docs.rs/uuid).
//! - `tracing`: debug events when the global generator is seeded.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, ParseError};

mod id;
pub use id::{Fields, Uuid, Variant};

pub mod generator;
pub use generator::Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{from_random, from_system_time, from_time};

pub mod msg;
pub use msg::{from_message_payload, to_message_payload};

pub mod v1;
pub mod v4;

pub mod v5;
pub use v5::{from_name, from_url};

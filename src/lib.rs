//! An implementation of RFC 4122 Universally Unique IDentifiers
//!
//! ```rust
//! use uuid4122::{ns, uuid4, uuid5};
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid5(ns::DNS, "example.com");
//! assert_eq!(uuid.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! All the constructors of this library write fields in the following layout, each multi-byte
//! field in big-endian order:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |      time_high        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field holds the [`Version`]: `0001` for time-based, `0011` for MD5 name-based,
//!   `0100` for random, and `0101` for SHA-1 name-based UUIDs.
//! - The 2-bit `var` field is set at `10`, the RFC 4122 [`Variant`].
//! - [`uuid1`] fills `time_low`, `time_mid`, and `time_high` with a 60-bit timestamp, `clock_seq`
//!   with a 14-bit clock sequence, and `node` with a 48-bit node ID, all supplied by the caller.
//! - [`uuid3`] and [`uuid5`] fill every non-constant bit with the MD5 or SHA-1 digest of a
//!   namespace UUID followed by a name, so the same inputs always yield the same UUID.
//! - [`uuid4`] fills every non-constant bit with random bits.
//!
//! # String representations
//!
//! A [`Uuid`] renders as 32 hex digits ([`Uuid::to_hex`]), as the canonical 8-4-4-4-12 form
//! ([`Display`](std::fmt::Display)), wrapped in braces ([`Uuid::to_msguid`]), or with a `urn:uuid:`
//! prefix ([`Uuid::to_urn`]). All use lowercase digits, and [`str::parse`] accepts any of them.
//!
//! ```rust
//! use uuid4122::Uuid;
//!
//! let x = Uuid::from_u64_pair(0x0001020304050607, 0x08090a0b0c0d0e0f);
//! assert_eq!(x.to_hex(), "000102030405060708090a0b0c0d0e0f");
//! assert_eq!(x.to_string(), "00010203-0405-0607-0809-0a0b0c0d0e0f");
//! assert_eq!(x.to_msguid(), "{00010203-0405-0607-0809-0a0b0c0d0e0f}");
//! assert_eq!(x.to_urn(), "urn:uuid:00010203-0405-0607-0809-0a0b0c0d0e0f");
//! assert_eq!(x.to_urn().parse(), Ok(x));
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables [`uuid4`], backed by a process-wide generator seeded once from the
//!   operating system. Without it, use [`V4Generator`] with a random number generator of your
//!   choice.
//!
//! Optional features:
//!
//! - `serde`: enables serialization/deserialization of [`Uuid`] via serde.
//! - `uuid`: enables conversion from/to the `uuid` crate's `Uuid` type.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{FromSliceError, ParseError};

mod id;
pub use id::Uuid;

mod version;
pub use version::{Variant, Version};

pub mod generator;
pub use generator::{RandSource, V4Generator};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::uuid4;

mod name;

pub mod ns;

mod v1;
pub use v1::{gregorian_timestamp, uuid1, uuid1_with_mac, GREGORIAN_UNIX_OFFSET};

mod v3;
pub use v3::{uuid3, uuid3_from_iter};

mod v5;
pub use v5::{uuid5, uuid5_from_iter};

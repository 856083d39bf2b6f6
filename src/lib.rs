//! Universally Unique Lexicographically Sortable Identifiers
//!
//! ```rust
//! use ulid128::ulid;
//!
//! let id = ulid()?;
//! println!("{}", id); // e.g. "01ARZ3NDEKTSV4RRFFQ69G5FAV"
//! println!("{:?}", id.to_bytes()); // as 16-byte big-endian array
//! println!("{}", id.to_u128()); // as 128-bit unsigned integer
//! # Ok::<(), ulid128::Error>(())
//! ```
//!
//! See [ULID Specification](https://github.com/ulid/spec).
//!
//! # Field and bit layout
//!
//! A ULID is 128 bits long:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                      32_bit_uint_time_high                    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |     16_bit_uint_time_low      |       16_bit_uint_random      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                       32_bit_uint_random                      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                       32_bit_uint_random                      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit time field holds the Unix timestamp in milliseconds, good until the year 10889.
//! - The remaining 80 bits are drawn from a random number generator.
//!
//! # Representations
//!
//! - Text: 26 characters of Crockford base32 (`0123456789ABCDEFGHJKMNPQRSTVWXYZ`), 10 for the
//!   timestamp followed by 16 for the random payload. Output is upper case; input is accepted
//!   in either case.
//! - Binary: 16 bytes, the 6-byte big-endian timestamp followed by the 10-byte big-endian
//!   random payload.
//! - Integer: an unsigned 128-bit value whose big-endian bytes are the binary form.
//!
//! ```rust
//! use ulid128::Ulid;
//!
//! let x: Ulid = "01ARYZ6S410000000000000000".parse()?;
//! assert_eq!(x.timestamp().as_millis(), 1469918176385);
//! assert_eq!(x.to_bytes()[..6], [1, 86, 61, 243, 100, 129]);
//! assert_eq!(Ulid::from(x.to_u128()), x);
//! # Ok::<(), ulid128::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: Enables the thread-local default generator behind [`ulid()`],
//!   [`Ulid::generate()`] and friends. Implies `std`.
//!
//! Optional features:
//!
//! - `std`: Enables features that depend on the standard library, such as reading the system
//!   clock. Without it the crate is `no_std`.
//! - `serde`: Enables serialization and deserialization of [`Ulid`] via serde.
//! - `uuid`: Enables conversion between [`Ulid`] and `uuid::Uuid`.
//! - `tracing`: Emits `tracing` spans from [`Generator`] methods.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod crockford;
pub mod generator;
pub mod roll;

mod error;
mod id;
mod random;
mod timestamp;

pub use error::Error;
pub use generator::{Generator, RandSource, TimeSource};
pub use id::Ulid;
pub use random::Random;
pub use timestamp::Timestamp;

#[cfg(feature = "std")]
pub use generator::StdSystemTime;

mod entry;
#[cfg(feature = "global_gen")]
pub use entry::{ulid, ulid_at, DefaultRng};

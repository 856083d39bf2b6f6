#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use crate::{crockford, generator::RandSource, roll, Error};
use fstr::FStr;

/// The 80-bit random payload of a ULID.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Random(u128);

impl Random {
    /// Number of bytes in the binary form.
    pub const BYTE_LEN: usize = 10;

    /// Number of characters in the text form.
    pub const TEXT_LEN: usize = 16;

    /// All 80 bits unset.
    pub const ZERO: Self = Self(0);

    /// All 80 bits set.
    pub const MAX: Self = Self((1 << 80) - 1);

    /// Draws 80 bits from `rng`, advancing its state.
    ///
    /// The upper 64 bits come from one `next_u64()` call and the lower 16 bits from the most
    /// significant half of one `next_u32()` call, so a seeded source always yields the same
    /// sequence of payloads.
    pub fn from_source<R: RandSource + ?Sized>(rng: &mut R) -> Self {
        let hi = rng.next_u64() as u128;
        let lo = (rng.next_u32() >> 16) as u128;
        Self((hi << 16) | lo)
    }

    /// Creates a payload from its integer value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueTooLarge`] if `bits` does not fit in 80 bits.
    pub const fn from_bits(bits: u128) -> Result<Self, Error> {
        if bits > Self::MAX.0 {
            Err(Error::ValueTooLarge)
        } else {
            Ok(Self(bits))
        }
    }

    /// Returns the integer value of the payload.
    pub const fn to_bits(&self) -> u128 {
        self.0
    }

    /// Returns the 10-byte big-endian binary form.
    pub fn to_bytes(&self) -> [u8; 10] {
        roll::unroll(self.0)
    }

    /// Creates a payload from its 10-byte big-endian binary form.
    pub const fn from_bytes(bytes: [u8; 10]) -> Self {
        Self(roll::roll(&bytes))
    }

    /// Returns the 16-character Crockford base32 form stored in a stack-allocated string.
    pub fn encode(&self) -> FStr<16> {
        crockford::encode(self.0)
    }
}

impl fmt::Display for Random {
    /// Returns the 16-character Crockford base32 representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Random {
    type Err = Error;

    /// Creates a payload from the 16-character Crockford base32 representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        // 16 symbols carry exactly 80 bits
        crockford::decode(src, Self::TEXT_LEN).map(Self)
    }
}

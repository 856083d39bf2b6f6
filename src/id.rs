#[cfg(not(feature = "std"))]
use core as std;

use std::{cmp, fmt, hash, str};

use crate::{roll, Error, Random, Timestamp};
use fstr::FStr;

/// Represents a Universally Unique Lexicographically Sortable Identifier.
///
/// A ULID pairs a 48-bit millisecond [`Timestamp`] with an 80-bit [`Random`] payload. Its binary
/// form is the 6-byte big-endian timestamp followed by the 10-byte big-endian payload; the text
/// and integer forms are both derived from that layout, so all three sort by timestamp first.
///
/// # Ordering
///
/// Equality covers all 128 bits, but [`PartialOrd`] compares the timestamps only. Two distinct
/// ULIDs created in the same millisecond are neither less nor greater than each other, and
/// `partial_cmp()` returns `None` for them. Use [`Ulid::total_cmp()`] where a total order is
/// needed, e.g. for sorting:
///
/// ```rust
/// use ulid128::Ulid;
///
/// let a: Ulid = "01ARYZ6S410000000000000001".parse()?;
/// let b: Ulid = "01ARYZ6S410000000000000002".parse()?;
/// assert!(!(a < b) && !(b < a) && a != b);
/// assert_eq!(a.partial_cmp(&b), None);
///
/// let mut v = vec![b, a];
/// v.sort_by(Ulid::total_cmp);
/// assert_eq!(v, [a, b]);
/// # Ok::<(), ulid128::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Ulid {
    timestamp: Timestamp,
    random: Random,
}

impl Ulid {
    /// Number of bytes in the binary form.
    pub const BYTE_LEN: usize = Timestamp::BYTE_LEN + Random::BYTE_LEN;

    /// Number of characters in the text form.
    pub const TEXT_LEN: usize = Timestamp::TEXT_LEN + Random::TEXT_LEN;

    /// Nil ULID (00000000000000000000000000)
    pub const NIL: Self = Self::from_parts(Timestamp::ZERO, Random::ZERO);

    /// Max ULID (7ZZZZZZZZZZZZZZZZZZZZZZZZZ)
    pub const MAX: Self = Self::from_parts(Timestamp::MAX, Random::MAX);

    /// Creates a ULID from its components.
    pub const fn from_parts(timestamp: Timestamp, random: Random) -> Self {
        Self { timestamp, random }
    }

    /// Returns the timestamp component.
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the random component.
    pub const fn random(&self) -> Random {
        self.random
    }

    /// Returns the 16-byte big-endian binary form.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; Self::BYTE_LEN];
        let (ts, rand) = bytes.split_at_mut(Timestamp::BYTE_LEN);
        ts.copy_from_slice(&self.timestamp.to_bytes());
        rand.copy_from_slice(&self.random.to_bytes());
        bytes
    }

    /// Creates a ULID from its 16-byte big-endian binary form.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut ts = [0u8; Timestamp::BYTE_LEN];
        let mut rand = [0u8; Random::BYTE_LEN];
        ts.copy_from_slice(&bytes[..Timestamp::BYTE_LEN]);
        rand.copy_from_slice(&bytes[Timestamp::BYTE_LEN..]);
        Self::from_parts(Timestamp::from_bytes(ts), Random::from_bytes(rand))
    }

    /// Reads a ULID from the first 16 bytes of `bytes`.
    ///
    /// Any bytes after the first 16 are left unread and unvalidated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientBytes`] if `bytes` is shorter than 16 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let head = bytes
            .get(..Self::BYTE_LEN)
            .ok_or(Error::InsufficientBytes {
                expected: Self::BYTE_LEN,
                actual: bytes.len(),
            })?;
        let mut buffer = [0u8; Self::BYTE_LEN];
        buffer.copy_from_slice(head);
        Ok(Self::from_bytes(buffer))
    }

    /// Returns the 26-character Crockford base32 string representation stored in a
    /// stack-allocated structure that can be dereferenced as `str` and
    /// [`Display`](fmt::Display)ed.
    ///
    /// The first 10 characters encode the timestamp and the last 16 the random payload, each
    /// zero-padded to its own width.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the canonical string
    /// representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulid128::Ulid;
    ///
    /// let x = "01aryz6s41tsv4rrffq69g5fav".parse::<Ulid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01ARYZ6S41TSV4RRFFQ69G5FAV");
    /// assert_eq!(format!("{}", y), "01ARYZ6S41TSV4RRFFQ69G5FAV");
    /// # Ok::<(), ulid128::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<26> {
        let mut buffer = [0u8; Self::TEXT_LEN];
        let (ts, rand) = buffer.split_at_mut(Timestamp::TEXT_LEN);
        ts.copy_from_slice(self.timestamp.encode().as_bytes());
        rand.copy_from_slice(self.random.encode().as_bytes());
        debug_assert!(buffer.is_ascii());
        // SAFETY: both halves are ASCII Crockford base32 strings
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the unsigned integer form, in `[0, 2^128 - 1]`.
    ///
    /// Integers compare in the same order as timestamps wherever timestamps differ.
    pub fn to_u128(&self) -> u128 {
        roll::roll(&self.to_bytes())
    }

    /// Creates a ULID from its unsigned integer form.
    pub fn from_u128(n: u128) -> Self {
        Self::from_bytes(roll::unroll(n))
    }

    /// Creates a ULID from an unsigned big-endian integer of any byte length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueTooLarge`] if the integer exceeds `2^128 - 1`.
    pub fn from_be_integer(bytes: &[u8]) -> Result<Self, Error> {
        roll::checked_roll(bytes)
            .map(Self::from_u128)
            .ok_or(Error::ValueTooLarge)
    }

    /// Creates a ULID from a decimal integer string, optionally signed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeValue`] if the value is below zero, [`Error::ValueTooLarge`] if it
    /// exceeds `2^128 - 1`, [`Error::InvalidCharacter`] on a non-digit, or
    /// [`Error::WrongLength`] if there is no digit at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulid128::{Error, Ulid};
    ///
    /// let x = Ulid::from_decimal("1777022036152677179952119794116853760")?;
    /// assert_eq!(x.to_string(), "01ARYZ6S410000000000000000");
    ///
    /// assert_eq!(Ulid::from_decimal("-1"), Err(Error::NegativeValue));
    /// assert_eq!(
    ///     Ulid::from_decimal("340282366920938463463374607431768211456"),
    ///     Err(Error::ValueTooLarge)
    /// );
    /// # Ok::<(), ulid128::Error>(())
    /// ```
    pub fn from_decimal(src: &str) -> Result<Self, Error> {
        let (negative, digits) = match src.as_bytes().first() {
            Some(b'-') => (true, &src[1..]),
            Some(b'+') => (false, &src[1..]),
            _ => (false, src),
        };
        if digits.is_empty() {
            return Err(Error::WrongLength {
                expected: 1,
                actual: 0,
            });
        }

        let offset = src.len() - digits.len();
        let non_digit = digits
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_digit());
        if let Some((index, character)) = non_digit {
            return Err(Error::InvalidCharacter {
                character,
                index: index + offset,
            });
        }
        if negative && digits.bytes().any(|b| b != b'0') {
            return Err(Error::NegativeValue);
        }

        digits
            .bytes()
            .try_fold(0u128, |acc, b| {
                acc.checked_mul(10)?.checked_add((b - b'0') as u128)
            })
            .map(Self::from_u128)
            .ok_or(Error::ValueTooLarge)
    }

    /// Compares all 128 bits, timestamp first, returning a total order consistent with equality.
    ///
    /// This is the order of the binary, integer and text forms.
    pub fn total_cmp(&self, other: &Self) -> cmp::Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| self.random.cmp(&other.random))
    }
}

impl PartialOrd for Ulid {
    /// Compares timestamps only, returning `None` for distinct ULIDs that share a timestamp.
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        match self.timestamp.cmp(&other.timestamp) {
            cmp::Ordering::Equal if self.random != other.random => None,
            ordering => Some(ordering),
        }
    }
}

impl hash::Hash for Ulid {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

impl fmt::Display for Ulid {
    /// Returns the 26-character canonical Crockford base32 string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Ulid {
    type Err = Error;

    /// Creates an object from the 26-character Crockford base32 string representation, ignoring
    /// case.
    ///
    /// The first 10 characters are decoded as the timestamp and the remaining 16 as the random
    /// payload. Timestamps beyond 48 bits fail with [`Error::TimestampOverflow`].
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let actual = src.chars().count();
        if actual != Self::TEXT_LEN {
            return Err(Error::WrongLength {
                expected: Self::TEXT_LEN,
                actual,
            });
        }

        let split = src
            .char_indices()
            .nth(Timestamp::TEXT_LEN)
            .map_or(src.len(), |(i, _)| i);
        let (ts, rand) = src.split_at(split);
        let timestamp = ts.parse()?;
        let random = rand.parse().map_err(|err| match err {
            Error::InvalidCharacter { character, index } => Error::InvalidCharacter {
                character,
                index: index + Timestamp::TEXT_LEN,
            },
            err => err,
        })?;
        Ok(Self::from_parts(timestamp, random))
    }
}

impl TryFrom<&str> for Ulid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Ulid> for [u8; 16] {
    fn from(src: Ulid) -> Self {
        src.to_bytes()
    }
}

impl From<[u8; 16]> for Ulid {
    fn from(src: [u8; 16]) -> Self {
        Self::from_bytes(src)
    }
}

impl TryFrom<&[u8]> for Ulid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl From<Ulid> for u128 {
    fn from(src: Ulid) -> Self {
        src.to_u128()
    }
}

impl From<u128> for Ulid {
    fn from(src: u128) -> Self {
        Self::from_u128(src)
    }
}

impl TryFrom<i128> for Ulid {
    type Error = Error;

    fn try_from(src: i128) -> Result<Self, Self::Error> {
        u128::try_from(src)
            .map(Self::from_u128)
            .map_err(|_| Error::NegativeValue)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Error, Ulid};

    impl From<Ulid> for String {
        fn from(src: Ulid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Ulid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Ulid;

    impl From<Ulid> for uuid::Uuid {
        fn from(src: Ulid) -> Self {
            uuid::Uuid::from_bytes(src.to_bytes())
        }
    }

    impl From<uuid::Uuid> for Ulid {
        fn from(src: uuid::Uuid) -> Self {
            Self::from_bytes(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Ulid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Ulid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(&self.to_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Ulid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Ulid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a ULID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(|_| de::Error::invalid_length(value.len(), &self))
        }
    }

}

#[cfg(feature = "std")]
#[cfg(test)]
mod tests {
    use super::Ulid;
    use crate::{Error, Random, Timestamp};
    use std::{cmp::Ordering, collections::HashSet};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u128), &'static str, u128)] {
        const MAX_UINT48: u64 = (1 << 48) - 1;
        const MAX_UINT80: u128 = (1 << 80) - 1;

        &[
            ((0, 0), "00000000000000000000000000", 0),
            (
                (1469918176385, 0),
                "01ARYZ6S410000000000000000",
                1777022036152677179952119794116853760,
            ),
            (
                (MAX_UINT48, 0),
                "7ZZZZZZZZZ0000000000000000",
                ((1 << 48) - 1) << 80,
            ),
            ((0, MAX_UINT80), "0000000000ZZZZZZZZZZZZZZZZ", (1 << 80) - 1),
            (
                (0x0123_4567_89ab, 0x0123_4567_89ab_cdef_0123),
                "014D2PF2DB04HMASW9NF6YY093",
                0x0123_4567_89ab_0123_4567_89ab_cdef_0123,
            ),
            ((MAX_UINT48, MAX_UINT80), "7ZZZZZZZZZZZZZZZZZZZZZZZZZ", u128::MAX),
        ]
    }

    fn from_fields(unix_ts_ms: u64, bits: u128) -> Ulid {
        Ulid::from_parts(
            Timestamp::from_millis(unix_ts_ms).unwrap(),
            Random::from_bits(bits).unwrap(),
        )
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for &(fs, text, int) in prepare_cases() {
            let e = from_fields(fs.0, fs.1);
            assert_eq!(Ok(e), text.parse());
            assert_eq!(Ok(e), text.to_lowercase().parse());
            assert_eq!(&e.encode() as &str, text);
            assert_eq!(&e.to_string(), text);
            assert_eq!(e.to_u128(), int);
            assert_eq!(Ulid::from(int), e);
        }
    }

    /// Lays out timestamp before random payload in binary form
    #[test]
    fn lays_out_timestamp_before_random_payload_in_binary_form() {
        for &(fs, _, _) in prepare_cases() {
            let e = from_fields(fs.0, fs.1);
            let bytes = e.to_bytes();
            assert_eq!(bytes[..6], fs.0.to_be_bytes()[2..]);
            assert_eq!(bytes[6..], fs.1.to_be_bytes()[6..]);
            assert_eq!(Ulid::from_bytes(bytes), e);
        }
    }

    /// Returns Nil and Max ULIDs
    #[test]
    fn returns_nil_and_max_ulids() {
        assert_eq!(&Ulid::NIL.encode() as &str, "00000000000000000000000000");
        assert_eq!(&Ulid::MAX.encode() as &str, "7ZZZZZZZZZZZZZZZZZZZZZZZZZ");
        assert_eq!(Ulid::NIL.to_bytes(), [0x00; 16]);
        assert_eq!(Ulid::MAX.to_bytes(), [0xff; 16]);
        assert_eq!(Ulid::default(), Ulid::NIL);
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 01ARYZ6S41TSV4RRFFQ69G5FAV",
            "01ARYZ6S41TSV4RRFFQ69G5FAV ",
            "01ARYZ6S41-TSV4RRFFQ69G5FAV",
            "01ARYZ6S41TSV4RRFFQ69G5FA",
            "01ARYZ6S41TSV4RRFFQ69G5FAVV",
            "01ARYZ6S41TSV4RRFFQ69G5FAU",
            "01ARYZ6S4LTSV4RRFFQ69G5FAV",
            "01ARYZ6S41TSV4RRFFQ69G5FA!",
            "81ARYZ6S41TSV4RRFFQ69G5FAV",
            "{1ARYZ6S41TSV4RRFFQ69G5FAV",
            "01ARYZ6S41TSV4RRFFQ69G5FAé",
        ];

        for e in cases {
            assert!(e.parse::<Ulid>().is_err(), "{e:?}");
        }
    }

    /// Reports wrong length and invalid character with context
    #[test]
    fn reports_wrong_length_and_invalid_character_with_context() {
        assert_eq!(
            "01ARYZ6S41000000000000000".parse::<Ulid>(),
            Err(Error::WrongLength {
                expected: 26,
                actual: 25
            })
        );
        assert_eq!(
            "01ARYZ6S41000000000000000000".parse::<Ulid>(),
            Err(Error::WrongLength {
                expected: 26,
                actual: 28
            })
        );
        assert_eq!(
            "01ARYZ6S4100000000000000000".parse::<Ulid>(),
            Err(Error::WrongLength {
                expected: 26,
                actual: 27
            })
        );
        assert_eq!(
            "01ARYZ6SI10000000000000000".parse::<Ulid>(),
            Err(Error::InvalidCharacter {
                character: 'I',
                index: 8
            })
        );
        assert_eq!(
            "01ARYZ6S4100000000000000I0".parse::<Ulid>(),
            Err(Error::InvalidCharacter {
                character: 'I',
                index: 24
            })
        );
        assert_eq!(
            "8ZZZZZZZZZ0000000000000000".parse::<Ulid>(),
            Err(Error::TimestampOverflow)
        );
    }

    /// Reads first 16 bytes and ignores the rest
    #[test]
    fn reads_first_16_bytes_and_ignores_the_rest() {
        let e = from_fields(0x0123_4567_89ab, 0x0123_4567_89ab_cdef_0123);
        let mut bytes = [0xee; 20];
        bytes[..16].copy_from_slice(&e.to_bytes());
        assert_eq!(Ulid::from_slice(&bytes), Ok(e));
        assert_eq!(Ulid::try_from(&bytes[..16]), Ok(e));

        assert_eq!(
            Ulid::from_slice(&bytes[..15]),
            Err(Error::InsufficientBytes {
                expected: 16,
                actual: 15
            })
        );
        assert_eq!(
            Ulid::from_slice(&[]),
            Err(Error::InsufficientBytes {
                expected: 16,
                actual: 0
            })
        );
    }

    /// Rejects integers outside 128-bit unsigned range
    #[test]
    fn rejects_integers_outside_128_bit_unsigned_range() {
        assert_eq!(Ulid::try_from(-1i128), Err(Error::NegativeValue));
        assert_eq!(Ulid::try_from(i128::MIN), Err(Error::NegativeValue));
        assert_eq!(Ulid::try_from(0i128), Ok(Ulid::NIL));
        assert_eq!(
            Ulid::try_from(i128::MAX).map(u128::from),
            Ok(i128::MAX as u128)
        );

        assert_eq!(Ulid::from_decimal("-1"), Err(Error::NegativeValue));
        assert_eq!(
            Ulid::from_decimal("-340282366920938463463374607431768211456"),
            Err(Error::NegativeValue)
        );
        assert_eq!(
            Ulid::from_decimal("340282366920938463463374607431768211456"),
            Err(Error::ValueTooLarge)
        );
        assert_eq!(
            Ulid::from_decimal("340282366920938463463374607431768211455"),
            Ok(Ulid::MAX)
        );
        assert_eq!(Ulid::from_decimal("-0"), Ok(Ulid::NIL));
        assert_eq!(Ulid::from_decimal("+0000"), Ok(Ulid::NIL));
        assert_eq!(
            Ulid::from_decimal("12a"),
            Err(Error::InvalidCharacter {
                character: 'a',
                index: 2
            })
        );
        assert_eq!(
            Ulid::from_decimal("-"),
            Err(Error::WrongLength {
                expected: 1,
                actual: 0
            })
        );

        let mut too_large = [0u8; 17];
        too_large[0] = 1;
        assert_eq!(Ulid::from_be_integer(&too_large), Err(Error::ValueTooLarge));
        too_large[0] = 0;
        too_large[16] = 42;
        assert_eq!(Ulid::from_be_integer(&too_large), Ok(Ulid::from(42u128)));
        assert_eq!(Ulid::from_be_integer(&[0xff; 16]), Ok(Ulid::MAX));
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for &(fs, _, _) in prepare_cases() {
            let e = from_fields(fs.0, fs.1);
            assert_eq!(Ulid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Ulid::from(u128::from(e)), e);
            assert_eq!(Ulid::from_decimal(&u128::from(e).to_string()), Ok(e));
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_lowercase().parse(), Ok(e));
            assert_eq!(Ulid::try_from(e.to_string()), Ok(e));
            assert_eq!(Ulid::try_from(String::from(e).to_lowercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Ulid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }

    /// Orders by timestamp only
    #[test]
    fn orders_by_timestamp_only() {
        let a = from_fields(1, (1 << 80) - 1);
        let b = from_fields(2, 0);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));

        let c = from_fields(2, 1);
        assert_ne!(b, c);
        assert!(!(b < c) && !(b > c));
        assert_eq!(b.partial_cmp(&c), None);
        assert_eq!(c.partial_cmp(&b), None);
        assert_eq!(b.partial_cmp(&b), Some(Ordering::Equal));
        assert!(b <= b);

        assert_eq!(b.total_cmp(&c), Ordering::Less);
        assert_eq!(c.total_cmp(&b), Ordering::Greater);
        assert_eq!(a.total_cmp(&c), Ordering::Less);
        assert_eq!(c.total_cmp(&c), Ordering::Equal);
    }

    /// Sorts integer and text forms by timestamp
    #[test]
    fn sorts_integer_and_text_forms_by_timestamp() {
        let cases = prepare_cases();
        for &(x, _, _) in cases {
            for &(y, _, _) in cases {
                let (a, b) = (from_fields(x.0, x.1), from_fields(y.0, y.1));
                if a.timestamp() < b.timestamp() {
                    assert!(a < b);
                    assert!(a.to_u128() < b.to_u128());
                    assert!(a.to_string() < b.to_string());
                }
                assert_eq!(a.total_cmp(&b), a.to_u128().cmp(&b.to_u128()));
                assert_eq!(a.total_cmp(&b), a.to_string().cmp(&b.to_string()));
                assert_eq!(a.total_cmp(&b), a.to_bytes().cmp(&b.to_bytes()));
            }
        }
    }

    /// Hashes consistently with equality
    #[test]
    fn hashes_consistently_with_equality() {
        use std::collections::hash_map::RandomState;
        use std::hash::BuildHasher;

        let state = RandomState::new();
        let x = from_fields(1469918176385, 42);
        let y: Ulid = "01ARYZ6S41000000000000001A".parse().unwrap();
        assert_eq!(x, y);
        assert_eq!(state.hash_one(x), state.hash_one(y));

        let s: HashSet<Ulid> = prepare_cases()
            .iter()
            .map(|&(fs, _, _)| from_fields(fs.0, fs.1))
            .chain([x, y, from_fields(1469918176385, 43)])
            .collect();
        assert_eq!(s.len(), prepare_cases().len() + 2);
    }
}

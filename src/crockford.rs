//! Fixed-width Crockford base32 encoding of unsigned integers.
//!
//! The alphabet omits `I`, `L`, `O` and `U`. Decoding is case-insensitive and, unlike general
//! Crockford base32, does not map the omitted letters onto digits: they are rejected.

use crate::Error;
use fstr::FStr;

/// The 32 symbols in ascending order of value.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const NO_VALUE: u8 = 0xff;

/// ASCII-indexed table mapping both letter cases to symbol values.
const DECODE_MAP: [u8; 128] = {
    let mut map = [NO_VALUE; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        let c = ALPHABET[i];
        map[c as usize] = i as u8;
        map[c.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    map
};

/// Returns the 5-bit value of `c`, or `None` if `c` is outside the alphabet.
pub const fn decode_char(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_MAP[c as usize] {
        NO_VALUE => None,
        v => Some(v),
    }
}

/// Encodes `value` into exactly `W` characters, zero-padded on the left.
///
/// The caller must make sure `value` fits in `5 * W` bits.
pub fn encode<const W: usize>(mut value: u128) -> FStr<W> {
    let mut buffer = [b'0'; W];
    for e in buffer.iter_mut().rev() {
        *e = ALPHABET[(value & 31) as usize];
        value >>= 5;
    }
    debug_assert_eq!(value, 0, "value does not fit in {} characters", W);
    debug_assert!(buffer.is_ascii());
    // SAFETY: every byte is drawn from the ASCII alphabet
    unsafe { FStr::from_inner_unchecked(buffer) }
}

/// Decodes exactly `width` characters into an integer, most significant symbol first.
///
/// `width` must not exceed 25 so the result fits in 128 bits.
///
/// # Errors
///
/// Returns [`Error::WrongLength`] if `text` is not `width` characters long, or
/// [`Error::InvalidCharacter`] at the first symbol outside the alphabet.
pub fn decode(text: &str, width: usize) -> Result<u128, Error> {
    debug_assert!(width <= 25);
    let actual = text.chars().count();
    if actual != width {
        return Err(Error::WrongLength {
            expected: width,
            actual,
        });
    }

    let mut acc = 0u128;
    for (index, character) in text.chars().enumerate() {
        let v = decode_char(character).ok_or(Error::InvalidCharacter { character, index })?;
        acc = (acc << 5) | v as u128;
    }
    Ok(acc)
}

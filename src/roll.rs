//! Conversion between big-endian byte sequences and unsigned integers.
//!
//! Rolling folds a byte sequence into an integer, first byte most significant; unrolling
//! produces a fixed number of bytes from an integer, zero-padded on the left.

/// Interprets `bytes` as an unsigned big-endian integer.
///
/// Any length is accepted. Bytes that would push the value past 128 bits are shifted out, so
/// only the lowest 128 bits of a longer input survive. Use [`checked_roll()`] to detect that.
///
/// # Examples
///
/// ```rust
/// use ulid128::roll::roll;
///
/// assert_eq!(roll(&[]), 0);
/// assert_eq!(roll(&[0x01, 0x00]), 256);
/// ```
pub const fn roll(bytes: &[u8]) -> u128 {
    let mut acc = 0u128;
    let mut i = 0;
    while i < bytes.len() {
        acc = (acc << 8) | bytes[i] as u128;
        i += 1;
    }
    acc
}

/// Interprets `bytes` as an unsigned big-endian integer, returning `None` if the value does not
/// fit in 128 bits.
///
/// Leading zero bytes do not count against the limit.
pub const fn checked_roll(bytes: &[u8]) -> Option<u128> {
    let mut i = 0;
    while i < bytes.len() && bytes.len() - i > 16 {
        if bytes[i] != 0 {
            return None;
        }
        i += 1;
    }
    let (_, tail) = bytes.split_at(i);
    Some(roll(tail))
}

/// Produces exactly `W` big-endian bytes from `n`, zero-padded on the left.
///
/// The caller must make sure `n` fits in `W` bytes; higher bytes are dropped otherwise.
///
/// # Examples
///
/// ```rust
/// use ulid128::roll::unroll;
///
/// assert_eq!(unroll::<4>(0x0102), [0, 0, 1, 2]);
/// ```
pub fn unroll<const W: usize>(n: u128) -> [u8; W] {
    let src = n.to_be_bytes();
    let mut dst = [0u8; W];
    if W >= src.len() {
        dst[W - src.len()..].copy_from_slice(&src);
    } else {
        debug_assert!(
            src[..src.len() - W].iter().all(|&e| e == 0),
            "value does not fit in {} bytes",
            W
        );
        dst.copy_from_slice(&src[src.len() - W..]);
    }
    dst
}

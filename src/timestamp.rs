#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use crate::{crockford, roll, Error};
use fstr::FStr;

/// A 48-bit count of milliseconds since the Unix epoch.
///
/// The upper bound, [`Timestamp::MAX`], falls in the year 10889.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Number of bytes in the binary form.
    pub const BYTE_LEN: usize = 6;

    /// Number of characters in the text form.
    pub const TEXT_LEN: usize = 10;

    /// The Unix epoch.
    pub const ZERO: Self = Self(0);

    /// The largest representable timestamp (2^48 - 1 milliseconds).
    pub const MAX: Self = Self((1 << 48) - 1);

    /// Creates a timestamp from milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOverflow`] if `unix_ts_ms` does not fit in 48 bits.
    pub const fn from_millis(unix_ts_ms: u64) -> Result<Self, Error> {
        if unix_ts_ms > Self::MAX.0 {
            Err(Error::TimestampOverflow)
        } else {
            Ok(Self(unix_ts_ms))
        }
    }

    /// Returns milliseconds since the Unix epoch.
    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    /// Returns the 6-byte big-endian binary form.
    pub fn to_bytes(&self) -> [u8; 6] {
        roll::unroll(self.0 as u128)
    }

    /// Creates a timestamp from its 6-byte big-endian binary form.
    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(roll::roll(&bytes) as u64)
    }

    /// Returns the 10-character Crockford base32 form stored in a stack-allocated string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulid128::Timestamp;
    ///
    /// let ts = Timestamp::from_millis(1469918176385)?;
    /// assert_eq!(ts.encode().as_str(), "01ARYZ6S41");
    /// # Ok::<(), ulid128::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<10> {
        crockford::encode(self.0 as u128)
    }
}

impl fmt::Display for Timestamp {
    /// Returns the 10-character Crockford base32 representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Timestamp {
    type Err = Error;

    /// Creates a timestamp from the 10-character Crockford base32 representation.
    ///
    /// Text beyond the 48-bit range (first character above `7`) fails with
    /// [`Error::TimestampOverflow`].
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let value = crockford::decode(src, Self::TEXT_LEN)?;
        Self::from_millis(value as u64)
    }
}

impl From<Timestamp> for u64 {
    fn from(src: Timestamp) -> Self {
        src.0
    }
}

impl TryFrom<u64> for Timestamp {
    type Error = Error;

    fn try_from(src: u64) -> Result<Self, Self::Error> {
        Self::from_millis(src)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Error, Timestamp};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    impl Timestamp {
        /// Returns the current wall-clock time truncated to the millisecond.
        ///
        /// # Errors
        ///
        /// Returns [`Error::TimestampOverflow`] if the system clock reads earlier than the Unix
        /// epoch or later than [`Timestamp::MAX`].
        pub fn now() -> Result<Self, Error> {
            Self::from_system_time(SystemTime::now())
        }

        /// Truncates `t` to millisecond precision.
        ///
        /// # Errors
        ///
        /// Returns [`Error::TimestampOverflow`] if `t` precedes the Unix epoch or lies
        /// 2^48 milliseconds or more after it.
        pub fn from_system_time(t: SystemTime) -> Result<Self, Error> {
            let elapsed = t
                .duration_since(UNIX_EPOCH)
                .map_err(|_| Error::TimestampOverflow)?;
            u64::try_from(elapsed.as_millis())
                .map_err(|_| Error::TimestampOverflow)
                .and_then(Self::from_millis)
        }

        /// Returns the instant this timestamp represents.
        pub fn to_system_time(&self) -> SystemTime {
            UNIX_EPOCH + Duration::from_millis(self.0)
        }
    }

    impl TryFrom<SystemTime> for Timestamp {
        type Error = Error;

        fn try_from(src: SystemTime) -> Result<Self, Self::Error> {
            Self::from_system_time(src)
        }
    }

    impl From<Timestamp> for SystemTime {
        fn from(src: Timestamp) -> Self {
            src.to_system_time()
        }
    }
}

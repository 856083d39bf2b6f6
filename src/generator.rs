//! ULID generator and the source traits it is parametric over.

use crate::{Error, Random, Timestamp, Ulid};

#[cfg(feature = "tracing")]
use tracing::instrument;

pub mod with_rand08;


/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;
}

/// A trait that defines the minimum system clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the current time truncated to the millisecond.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOverflow`] if the clock reading is not representable.
    fn now(&mut self) -> Result<Timestamp, Error>;
}

/// The default [`TimeSource`] that reads [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn now(&mut self) -> Result<Timestamp, Error> {
        Timestamp::now()
    }
}

/// Represents a ULID generator that owns its random number generator and system clock.
///
/// Each call draws a fresh 80-bit payload; no state is carried between calls other than that of
/// the sources, and IDs sharing a millisecond are not ordered among themselves. Since the
/// generator owns its sources, deterministic output is obtained by supplying seeded ones:
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use ulid128::{Generator, Timestamp};
///
/// let mut a = Generator::with_rand08(ChaCha8Rng::seed_from_u64(0));
/// let mut b = Generator::with_rand08(ChaCha8Rng::seed_from_u64(0));
///
/// let ts = Timestamp::from_millis(1469918176385)?;
/// assert_eq!(a.generate_at_timestamp(ts), b.generate_at_timestamp(ts));
/// # Ok::<(), ulid128::Error>(())
/// ```
///
/// The generator is not synchronized. Give each thread its own instance, or wrap a shared one
/// in a lock:
///
/// ```rust
/// use std::{sync, thread};
/// use ulid128::Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(Generator::with_rand08(rand::rngs::OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 let ulid = g.lock().unwrap().generate().unwrap();
///                 println!("{} by thread {}", ulid, i);
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T> {
    rng: R,
    time: T,
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator object with specified random number generator and system clock.
    pub const fn with_rand_and_time_sources(rng: R, time: T) -> Self {
        Self { rng, time }
    }

    /// Generates a new ULID from the current time of the clock and a fresh random payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOverflow`] if the clock reading is not representable.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&mut self) -> Result<Ulid, Error> {
        let timestamp = self.time.now()?;
        Ok(self.generate_at_timestamp(timestamp))
    }

    /// Generates a new ULID from the `timestamp` passed and a fresh random payload.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_at_timestamp(&mut self, timestamp: Timestamp) -> Ulid {
        Ulid::from_parts(timestamp, Random::from_source(&mut self.rng))
    }

    /// Returns a mutable reference to the random number generator.
    pub fn rand_source_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Returns a mutable reference to the system clock.
    pub fn time_source_mut(&mut self) -> &mut T {
        &mut self.time
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> Generator<R, StdSystemTime> {
    /// Creates a generator object with a specified random number generator and the system clock.
    pub const fn new(rng: R) -> Self {
        Self::with_rand_and_time_sources(rng, StdSystemTime)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Generates a new ULID from the instant `t` and a fresh random payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOverflow`] if `t` precedes the Unix epoch or lies 2^48
    /// milliseconds or more after it.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_at(&mut self, t: std::time::SystemTime) -> Result<Ulid, Error> {
        let timestamp = Timestamp::from_system_time(t)?;
        Ok(self.generate_at_timestamp(timestamp))
    }
}

/// Supports operations as an infinite iterator that produces a new ULID for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use ulid128::Generator;
///
/// Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e.unwrap()));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for Generator<R, T> {
    type Item = Result<Ulid, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> core::iter::FusedIterator for Generator<R, T> {}

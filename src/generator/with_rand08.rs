//! Integration with `rand` (v0.8) crate.

use super::{Generator, RandSource};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<T: RngCore> Generator<Adapter<T>, super::StdSystemTime> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate, reading the system clock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ulid128::Generator;
    ///
    /// let mut g = Generator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate()?);
    /// # Ok::<(), ulid128::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

impl<T: RngCore, S: super::TimeSource> Generator<Adapter<T>, S> {
    /// Creates a generator object with a specified [`RngCore`] from `rand` (v0.8) crate and a
    /// specified system clock.
    pub const fn with_rand08_and_time_source(rng: T, time: S) -> Self {
        Self::with_rand_and_time_sources(Adapter(rng), time)
    }
}

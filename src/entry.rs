//! Default random source and entry point functions

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::{cell::RefCell, time::SystemTime};

use crate::generator::{Generator, RandSource, StdSystemTime};
use crate::{Error, Random, Ulid};
use rand::rngs::{adapter::ReseedingRng, OsRng};
use rand::SeedableRng;
use rand_chacha::ChaCha12Core;

/// The default random number generator.
///
/// This type currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to emulate the
/// strategy used by [`rand::rngs::ThreadRng`]: seeded from the operating system and reseeded
/// after every 64 KiB of output.
#[derive(Debug)]
pub struct DefaultRng(ReseedingRng<ChaCha12Core, OsRng>);

impl DefaultRng {
    /// Creates a new instance seeded from the operating system.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot supply entropy.
    pub fn new() -> Self {
        Self(ReseedingRng::new(
            ChaCha12Core::from_entropy(),
            1024 * 64,
            OsRng,
        ))
    }
}

impl Default for DefaultRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandSource for DefaultRng {
    fn next_u32(&mut self) -> u32 {
        rand::RngCore::next_u32(&mut self.0)
    }

    fn next_u64(&mut self) -> u64 {
        rand::RngCore::next_u64(&mut self.0)
    }
}

impl Generator<DefaultRng, StdSystemTime> {
    /// Creates a generator object with the default random number generator and the system clock.
    pub fn with_default_rng() -> Self {
        Self::new(DefaultRng::new())
    }
}

thread_local! {
    static DEFAULT_GENERATOR: RefCell<Generator<DefaultRng, StdSystemTime>> = Default::default();
}

/// Runs `f` with the thread-local default generator, re-creating it first if the process has
/// forked since its last use.
fn with_default_generator<T>(f: impl FnOnce(&mut Generator<DefaultRng, StdSystemTime>) -> T) -> T {
    DEFAULT_GENERATOR.with(|g| {
        if unix_fork_safety::pid_changed() {
            #[cfg(feature = "tracing")]
            tracing::debug!("process id changed; reseeding default random source");
            g.replace(Default::default());
        }

        f(&mut g.borrow_mut())
    })
}

/// Generates a ULID object from the current time.
///
/// This function employs a thread-local generator, so concurrent callers on different threads
/// never share a random source. On Unix, this function re-creates the generator when the process
/// ID changes (i.e. upon process forks) to prevent collisions across processes.
///
/// # Errors
///
/// Returns [`Error::TimestampOverflow`] if the system clock reads earlier than the Unix epoch or
/// later than the year 10889.
///
/// # Examples
///
/// ```rust
/// let ulid = ulid128::ulid()?;
/// println!("{ulid}"); // e.g., "01ARZ3NDEKTSV4RRFFQ69G5FAV"
/// println!("{:?}", ulid.to_bytes()); // as 16-byte big-endian array
///
/// let ulid_string: String = ulid128::ulid()?.to_string();
/// # Ok::<(), ulid128::Error>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn ulid() -> Result<Ulid, Error> {
    with_default_generator(|g| g.generate())
}

/// Generates a ULID object from the instant `t`.
///
/// # Errors
///
/// Returns [`Error::TimestampOverflow`] if `t` precedes the Unix epoch or lies 2^48 milliseconds
/// or more after it.
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn ulid_at(t: SystemTime) -> Result<Ulid, Error> {
    with_default_generator(|g| g.generate_at(t))
}

impl Ulid {
    /// Generates a ULID object from the current time.
    ///
    /// See [`ulid()`] for the description.
    pub fn generate() -> Result<Self, Error> {
        ulid()
    }

    /// Generates a ULID object from the instant `t`.
    ///
    /// See [`ulid_at()`] for the description.
    pub fn generate_at(t: SystemTime) -> Result<Self, Error> {
        ulid_at(t)
    }
}

impl Random {
    /// Draws 80 bits from the thread-local default random source.
    pub fn new() -> Self {
        with_default_generator(|g| Random::from_source(g.rand_source_mut()))
    }
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Returns true if the process ID has changed since the last call on this thread.
    pub fn pid_changed() -> bool {
        PID.with(|last_pid| {
            let pid = process::id();
            pid != last_pid.replace(pid)
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn pid_changed() -> bool {
        false
    }
}

//! UUIDv4 generator and related types.

use crate::Uuid;

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`V4Generator`].
pub trait RandSource {
    /// Fills `dest` with uniformly distributed random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Represents a UUIDv4 generator that owns the random number generator it draws from.
///
/// The process-wide [`uuid4()`](crate::uuid4) function wraps one of these around a generator
/// seeded once per process. Constructing one explicitly lets callers supply their own source,
/// e.g., a seeded generator for reproducible tests. The generator holds no lock; the following
/// example shares one across threads using Rust's standard synchronization mechanism.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuid4122::V4Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V4Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// Draws 16 random bytes, then overwrites the top two bits of byte 8 with the RFC 4122
    /// variant `10` and the top four bits of byte 6 with the version `0100`.
    pub fn generate(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Uuid::from(bytes)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid4122::V4Generator;
///
/// V4Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> std::iter::FusedIterator for V4Generator<R> {}

#[cfg(test)]
mod tests {
    use super::{with_rand08, RandSource, V4Generator};
    use crate::{Variant, Version};
    use rand::{rngs::StdRng, SeedableRng};

    type SeededGen = V4Generator<with_rand08::Adapter<StdRng>>;

    /// Returns the same bytes for every call
    struct ConstSource(u8);

    impl RandSource for ConstSource {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0);
        }
    }

    /// Overwrites only version and variant bits of random bytes
    #[test]
    fn overwrites_only_version_and_variant_bits_of_random_bytes() {
        let e = V4Generator::new(ConstSource(0xff)).generate();
        assert_eq!(e.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");

        let e = V4Generator::new(ConstSource(0x00)).generate();
        assert_eq!(e.to_string(), "00000000-0000-4000-8000-000000000000");
        assert!(!e.is_nil());
    }

    /// Reproduces sequence from same seed
    #[test]
    fn reproduces_sequence_from_same_seed() {
        let a: Vec<_> = SeededGen::with_rand08(StdRng::seed_from_u64(42))
            .take(64)
            .collect();
        let b: Vec<_> = SeededGen::with_rand08(StdRng::seed_from_u64(42))
            .take(64)
            .collect();
        let c: Vec<_> = SeededGen::with_rand08(StdRng::seed_from_u64(43))
            .take(64)
            .collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        let g = V4Generator::with_rand08(rand::thread_rng());
        for e in g.take(1_000) {
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), Version::Random);
        }
    }
}

//! Default generator and entry point function.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
///
/// A poisoned lock is taken over as is; the generator state is a plain RNG that a panicking
/// holder cannot leave half-updated.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv4 object.
///
/// This function employs a process-wide generator that is seeded from the operating system once
/// per process and shared by all threads. Concurrent calls are serialized, so each call gets a
/// whole 16-byte draw of its own. On Unix, this function reseeds the generator when the process ID
/// changes (i.e., upon process forks) so that parent and child do not produce the same sequence.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().generate()
}

mod inner {
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use crate::generator::{RandSource, V4Generator};

    /// The random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Rng`] seeded from
    /// [`OsRng`](rand::rngs::OsRng), the same algorithm behind [`rand::rngs::StdRng`].
    #[derive(Debug)]
    pub struct GlobalGenRng(ChaCha12Rng);

    impl RandSource for GlobalGenRng {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut self.0, dest)
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: V4Generator<GlobalGenRng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let pid = std::process::id();
            tracing::debug!(pid, "seeding process-wide UUIDv4 generator");
            Self {
                #[cfg(unix)]
                pid,
                generator: V4Generator::new(GlobalGenRng(
                    ChaCha12Rng::from_rng(rand::rngs::OsRng)
                        .expect("uuid4122: could not initialize global generator"),
                )),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V4Generator`] instance, reseeding the
        /// generator on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut V4Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!(
                    parent = self.pid,
                    "process ID changed; reseeding UUIDv4 generator"
                );
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}

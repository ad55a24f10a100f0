use std::hash::{BuildHasherDefault, Hasher};

/// An implementation of Daniel J. Bernstein's classic string hash: the state starts at `5381` and
/// each input byte folds in as `state * 33 + byte`, wrapping on overflow.
///
/// The function is deterministic and unkeyed, which is exactly why it is this crate's default:
/// bucket placement, and with it bucket-order rendering, never changes between runs. The same
/// property means it offers no protection against crafted collisions, so callers exposed to
/// untrusted keys should plug in a keyed hasher instead.
#[derive(Debug, Clone)]
pub struct Djb2Hasher {
    state: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Djb2Hasher {
            state: 5381,
        }
    }
}

impl Hasher for Djb2Hasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            // state * 33 + byte, using the traditional shift-and-add form.
            self.state = (self.state << 5)
                .wrapping_add(self.state)
                .wrapping_add(*byte as u64);
        }
    }
}

/// A [`BuildHasher`](std::hash::BuildHasher) producing [`Djb2Hasher`]s, used as the default for
/// the crate's maps.
pub type Djb2 = BuildHasherDefault<Djb2Hasher>;

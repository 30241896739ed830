//! Folding a digest into a 32-bit stream seed.

use crate::digest;
use std::fmt;

/// Non-zero 32-bit seed for [`crate::stream::Xorshift32`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(u32);

impl Seed {
    /// Substitute for a zero fold; xorshift would otherwise emit zeros forever.
    pub const FALLBACK: Self = Self(0x9e37_79b9);

    /// Wrap a raw value, remapping zero to [`Seed::FALLBACK`].
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        if raw == 0 { Self::FALLBACK } else { Self(raw) }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// XOR-fold a byte buffer into a seed, reading big-endian words.
///
/// Words are read every 4 bytes while the step offset `i` is below the buffer
/// length, each from byte offset `i % (len - 3)`. For a 32-byte digest that is
/// the eight sequential words at 0, 4, ..., 28. Other lengths keep the same
/// offset arithmetic so results stay comparable with older outputs. Buffers
/// shorter than one word fold to [`Seed::FALLBACK`].
#[must_use]
pub fn fold_seed(buf: &[u8]) -> Seed {
    let len = buf.len();
    if len < 4 {
        return Seed::FALLBACK;
    }

    let modulus = len - 3;
    let folded = (0..len).step_by(4).fold(0u32, |acc, i| {
        let at = i % modulus;
        acc ^ u32::from_be_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
    });

    Seed::new(folded)
}

/// Digest the canonical key and fold it into a seed.
#[must_use]
pub fn seed_for(key: &str) -> Seed {
    let hash = digest::sha256(key);
    let seed = fold_seed(&hash);
    tracing::trace!(digest = %digest::to_hex(&hash), %seed, "seed derived");
    seed
}

//! The xorshift128+ random number generator.

use rand::{Error, RngCore, SeedableRng};

/// A stream of pseudo-random numbers generated using the xorshift+ technique
/// described here:
///
/// Vigna, Sebastiano (2014). "Further scramblings of Marsaglia's xorshift
/// generators". arXiv:1404.0390 (http://arxiv.org/abs/1404.0390)
///
/// The stream repeats every 2**128 - 1 calls. An all-zero state is a fixed
/// point of the recurrence, so the constructors replace it with a fixed
/// non-zero state.
///
/// This generator is not suitable as a cryptographically secure random number
/// generator.
///
/// Unlike the RNGs in the rand crate, this one implements Hash and serde's
/// Serialize and Deserialize traits, so a weight stream can be recorded and
/// replayed exactly.
#[derive(Debug, Hash, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct XorShift128Plus {
    state: [u64; 2]
}

/// Used in place of an all-zero seed.
const ZERO_SEED_REPLACEMENT: [u64; 2] = [0x9e37_79b9_7f4a_7c15, 0xbf58_476d_1ce4_e5b9];

impl XorShift128Plus {
    pub fn new(seed: [u64; 2]) -> XorShift128Plus {
        if seed == [0, 0] {
            XorShift128Plus { state: ZERO_SEED_REPLACEMENT }
        } else {
            XorShift128Plus { state: seed }
        }
    }

    /// Construct a generator from a single 64-bit seed, as handed to us by a
    /// user or an environment variable.
    pub fn from_u64(seed: u64) -> XorShift128Plus {
        XorShift128Plus::new([seed, !seed])
    }
}

impl RngCore for XorShift128Plus {
    fn next_u64(&mut self) -> u64 {
        let mut s1 = self.state[0];
        let s0 = self.state[1];
        self.state[0] = s0;
        s1 ^= s1 << 23;
        self.state[1] = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26);
        self.state[1].wrapping_add(s0)
    }

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() & 0xffff_ffff) as u32
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            let len = chunk.len();
            chunk.copy_from_slice(&bytes[..len]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift128Plus {
    type Seed = [u8; 16];

    fn from_seed(seed: [u8; 16]) -> XorShift128Plus {
        let mut low = [0; 8];
        let mut high = [0; 8];
        low.copy_from_slice(&seed[..8]);
        high.copy_from_slice(&seed[8..]);
        XorShift128Plus::new([u64::from_le_bytes(low), u64::from_le_bytes(high)])
    }
}

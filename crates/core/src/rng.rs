//! RNG module - seed-string keyed random stream
//!
//! Levels are addressed by arbitrary seed strings and must stay reproducible forever,
//! including levels that were shared before this engine existed. The stream is an
//! ARC4 keystream keyed by the seed's UTF-16 code units, turned into `f64` draws with
//! 52+ bits of precision.
//!
//! The draw order of the generator is part of the level format: every consumer must
//! pull values in exactly the same sequence.

const WIDTH: usize = 256;
const MASK: usize = WIDTH - 1;
/// Bytes taken for the initial numerator of each draw.
const CHUNKS: u32 = 6;
/// 2^52: a draw is extended until its numerator reaches this.
const SIGNIFICANCE: f64 = 4_503_599_627_370_496.0;
/// 2^53: numerators at or above this are halved back into exact `f64` range.
const OVERFLOW: f64 = 9_007_199_254_740_992.0;

/// Seeded ARC4 stream producing uniform `f64` values in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeedRng {
    s: [u8; WIDTH],
    i: usize,
    j: usize,
}

impl SeedRng {
    /// Create a stream keyed by `seed`.
    pub fn new(seed: &str) -> Self {
        let key = mix_key(seed);

        let mut s = [0u8; WIDTH];
        for (i, slot) in s.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut j = 0usize;
        for i in 0..WIDTH {
            let t = s[i];
            j = MASK & (j + key[i % key.len()] as usize + t as usize);
            s[i] = s[j];
            s[j] = t;
        }

        let mut rng = Self { s, i: 0, j: 0 };
        // The first keystream bytes are weak; discard one full table's worth.
        for _ in 0..WIDTH {
            rng.next_byte();
        }
        rng
    }

    /// Next keystream byte.
    pub fn next_byte(&mut self) -> u8 {
        self.i = MASK & (self.i + 1);
        let t = self.s[self.i];
        self.j = MASK & (self.j + t as usize);
        self.s[self.i] = self.s[self.j];
        self.s[self.j] = t;
        self.s[MASK & (self.s[self.i] as usize + t as usize)]
    }

    /// Next `count` keystream bytes as a big-endian integer (`count <= 8`).
    fn next_bytes(&mut self, count: u32) -> u64 {
        (0..count).fold(0u64, |acc, _| (acc << 8) | self.next_byte() as u64)
    }

    /// Next uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let mut n = self.next_bytes(CHUNKS) as f64;
        let mut d = (WIDTH as f64).powi(CHUNKS as i32);
        let mut x: u32 = 0;

        while n < SIGNIFICANCE {
            n = (n + x as f64) * WIDTH as f64;
            d *= WIDTH as f64;
            x = self.next_byte() as u32;
        }
        while n >= OVERFLOW {
            n /= 2.0;
            d /= 2.0;
            x >>= 1;
        }

        (n + x as f64) / d
    }

    /// Uniform integer in `[0, max)`, computed as `floor(next_f64() * max)`.
    pub fn next_below(&mut self, max: u32) -> u32 {
        (self.next_f64() * max as f64).floor() as u32
    }
}

/// Fold the seed into an ARC4 key.
///
/// Each UTF-16 code unit lands in slot `j mod 256`; once the seed wraps past 256 units
/// the previous slot contents are smeared into the new value. An empty seed yields the
/// single-byte key `[0]`.
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear: u32 = 0;

    for (j, unit) in seed.encode_utf16().enumerate() {
        let slot = MASK & j;
        let previous = key.get(slot).copied().unwrap_or(0) as u32;
        smear ^= previous * 19;
        let value = (MASK as u32 & smear.wrapping_add(unit as u32)) as u8;
        if slot < key.len() {
            key[slot] = value;
        } else {
            key.push(value);
        }
    }

    if key.is_empty() {
        key.push(0);
    }
    key
}

impl Default for SeedRng {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SeedRng::new("12345");
        let mut rng2 = SeedRng::new("12345");

        for _ in 0..100 {
            assert_eq!(rng1.next_f64().to_bits(), rng2.next_f64().to_bits());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SeedRng::new("12345");
        let mut rng2 = SeedRng::new("54321");

        assert_ne!(rng1.next_f64(), rng2.next_f64());
    }

    #[test]
    fn test_rng_known_vectors() {
        // Reference values shared with the web version of the game.
        let mut rng = SeedRng::new("hello.");
        assert_eq!(rng.next_f64(), 0.9282578795792454);
        assert_eq!(rng.next_f64(), 0.3752569768646784);

        let mut rng = SeedRng::new("1234");
        assert_eq!(rng.next_f64(), 0.3225458734183383);
        assert_eq!(rng.next_f64(), 0.4100721814170028);
        assert_eq!(rng.next_f64(), 0.9999126321672539);
    }

    #[test]
    fn test_rng_empty_seed() {
        let mut rng = SeedRng::new("");
        assert_eq!(rng.next_f64(), 0.23144008215179881);
        assert_eq!(rng.next_f64(), 0.27404636548159655);
    }

    #[test]
    fn test_rng_default_is_empty_seed() {
        let mut rng = SeedRng::default();
        let mut empty = SeedRng::new("");
        for _ in 0..16 {
            assert_eq!(rng.next_f64(), empty.next_f64());
        }
    }

    #[test]
    fn test_rng_non_ascii_seed_uses_utf16_units() {
        let mut rng = SeedRng::new("crateü€");
        assert_eq!(rng.next_f64(), 0.4811813075911784);
        assert_eq!(rng.next_f64(), 0.003190254366909619);
    }

    #[test]
    fn test_rng_long_seed_smears_key() {
        let seed = format!("{}yz", "x".repeat(300));
        let mut rng = SeedRng::new(&seed);
        assert_eq!(rng.next_f64(), 0.7832066137260364);
        assert_eq!(rng.next_f64(), 0.01982222395747031);
    }

    #[test]
    fn test_mix_key_short_seed_is_code_units() {
        assert_eq!(mix_key("1234"), vec![b'1', b'2', b'3', b'4']);
        assert_eq!(mix_key(""), vec![0]);
    }

    #[test]
    fn test_next_f64_in_unit_interval() {
        let mut rng = SeedRng::new("bounds");
        for _ in 0..10_000 {
            let r = rng.next_f64();
            assert!((0.0..1.0).contains(&r), "{} out of range", r);
        }
    }

    #[test]
    fn test_next_below_range() {
        let mut rng = SeedRng::new("range");
        for _ in 0..1000 {
            assert!(rng.next_below(9) < 9);
        }
    }
}

//! Park–Miller minimal standard generator.
//!
//! Every random decision in a sketch comes from one stream, so a seed fully
//! determines the palette, grid density and path geometry.

const MULTIPLIER: u64 = 16_807;
const MODULUS: u64 = 2_147_483_647;

/// Multiplicative LCG: `s <- s * 16807 mod (2^31 - 1)`.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Seeds the stream. The seed is reduced modulo `2^31 - 1` before first
    /// use; negative seeds wrap into the positive range.
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(MODULUS as i64) as u64,
        }
    }

    /// Advances the state and returns it scaled into `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// `floor(next_f64() * max)`, an integer in `[0, max)`.
    pub fn next_index(&mut self, max: usize) -> usize {
        (self.next_f64() * max as f64) as usize
    }
}

//! # Seeded Random Streams
//!
//! The generator only needs a stream of floats in `[0, 1)`. Any
//! [`RngCore`] provides one through [`SeededRandom`]. [`Mulberry32`] is the
//! canonical stream: a grille shared as a seed must be rebuilt with exactly
//! this sequence.

use rand::{Error, RngCore, SeedableRng};

/// Scale mapping a `u32` onto `[0, 1)`.
const U32_RANGE: f64 = 4_294_967_296.0;

/// A deterministic stream of floats in `[0, 1)`.
pub trait SeededRandom {
    /// Next float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> SeededRandom for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }
}

/// Mulberry32: a 32-bit state generator.
///
/// Small and fast. It is not cryptographic. Its only job here is to give
/// every platform the same sequence for the same seed.
///
/// ## Example
///
/// ```rust
/// use grille_gen::{Mulberry32, SeededRandom};
///
/// let mut a = Mulberry32::new(42);
/// let mut b = Mulberry32::new(42);
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// Create a stream from a seed.
    ///
    /// Only the low 32 bits of `seed` are used.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed as u32 }
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let a = self.state;
        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u32::from_le_bytes(seed),
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests;

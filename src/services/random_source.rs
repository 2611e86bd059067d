use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroize;

use crate::types::errors::GenerationError;

/// Source of cryptographically secure randomness for password generation.
pub trait RandomSource {
    /// Fills `dest` with random bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<(), GenerationError>;

    /// Returns a uniformly distributed index in `0..bound`.
    ///
    /// Uses rejection sampling so small pools carry no modulo bias.
    fn index_below(&self, bound: usize) -> Result<usize, GenerationError> {
        let bound = u32::try_from(bound)
            .ok()
            .filter(|b| *b > 0)
            .ok_or_else(|| GenerationError::RandomGeneration(format!("invalid range: 0..{}", bound)))?;

        let zone = (u32::MAX / bound) * bound;
        let mut buf = [0u8; 4];
        loop {
            self.fill(&mut buf)?;
            let value = u32::from_le_bytes(buf);
            if value < zone {
                buf.zeroize();
                return Ok((value % bound) as usize);
            }
        }
    }
}

/// Fisher-Yates shuffle driven by a `RandomSource`.
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &R, items: &mut [T]) -> Result<(), GenerationError> {
    for i in (1..items.len()).rev() {
        let j = rng.index_below(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

/// Operating system CSPRNG backed by `ring`.
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), GenerationError> {
        self.rng
            .fill(dest)
            .map_err(|_| GenerationError::RandomGeneration("system RNG unavailable".to_string()))
    }
}

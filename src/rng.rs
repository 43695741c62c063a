// src/rng.rs
use rand::rngs::OsRng;
use rand::RngCore;

/// A cryptographically secure source of uniformly distributed integers.
///
/// The generator draws charset indices through this trait and never from a
/// seeded or thread-local PRNG. Production code uses [`OsRandom`]; tests
/// substitute failing or deterministic doubles.
pub trait RandomSource {
    /// Whether the source can currently produce randomness. Checked once
    /// per generation call, before any draw.
    fn is_available(&self) -> bool {
        true
    }

    /// Draw one uniformly distributed `u32` over the full range of the type.
    fn try_next_u32(&mut self) -> Result<u32, rand_core::Error>;
}

/// The operating-system CSPRNG.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn is_available(&self) -> bool {
        let mut probe = [0u8; 1];
        OsRng.try_fill_bytes(&mut probe).is_ok()
    }

    fn try_next_u32(&mut self) -> Result<u32, rand_core::Error> {
        let mut buf = [0u8; 4];
        OsRng.try_fill_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_random_reports_available() {
        assert!(OsRandom.is_available());
    }

    #[test]
    fn os_random_draws() {
        let mut source = OsRandom;
        source.try_next_u32().expect("OS entropy draw failed");
        source.try_next_u32().expect("OS entropy draw failed");
    }
}

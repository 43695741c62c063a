// src/generators/mod.rs
pub mod charset;
pub mod password;

pub use charset::Charset;
pub use password::{generate_with_source, GeneratorError, Result, MAX_LENGTH, MIN_LENGTH};

use crate::models::GenerationOptions;
use crate::rng::{OsRandom, RandomSource};

/// Generator handle bound to a random source. `new()` binds the OS CSPRNG;
/// tests bind doubles through [`PasswordGenerator::with_source`].
pub struct PasswordGenerator<R: RandomSource = OsRandom> {
    source: R,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator { source: OsRandom }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn with_source(source: R) -> Self {
        PasswordGenerator { source }
    }

    pub fn generate(&mut self, options: &GenerationOptions) -> Result<String> {
        password::generate_with_source(options, &mut self.source)
    }
}

// Generate one password from the operating-system CSPRNG.
pub fn generate_password(options: &GenerationOptions) -> Result<String> {
    PasswordGenerator::new().generate(options)
}

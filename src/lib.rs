//! Secure password generation from a configurable character set.
//!
//! The core is a single pure function: build an ordered charset from fixed
//! alphabets, sample each position from the operating-system CSPRNG, and
//! return the password or a typed error. The `passforge` binary is a thin
//! front end that calls the core once and formats the result.
//!
//! # Example
//!
//! ```rust,no_run
//! use passforge::{generate_password, GenerationOptions};
//!
//! let options = GenerationOptions {
//!     length: 16,
//!     ..GenerationOptions::default()
//! };
//! let password = generate_password(&options).expect("generation failed");
//! assert_eq!(password.chars().count(), 16);
//! ```

// Internal modules
pub mod cli;
pub mod generators;
pub mod models;
pub mod rng;
pub mod utils;

// Public API
pub use generators::password::{GeneratorError, Result, MAX_LENGTH, MIN_LENGTH};
pub use generators::{generate_password, generate_with_source, Charset, PasswordGenerator};
pub use models::{GenerationOptions, GenerationReport, GenerationRequest};
pub use rng::{OsRandom, RandomSource};

// src/generators/password.rs
use thiserror::Error;

use crate::generators::charset::{is_ambiguous, Charset};
use crate::models::GenerationOptions;
use crate::rng::RandomSource;

/// Inclusive bounds on the requested password length. The upper bound is an
/// abuse guard, not a cryptographic limit.
pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 1000;

/// Fewest distinct charset characters generation will accept.
pub const MIN_DISTINCT_CHARS: usize = 10;

// Draws allowed per requested character, counting failed draws.
const DRAW_BUDGET_PER_CHAR: usize = 10;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid generation request: {0}")]
    InvalidArgument(String),

    #[error("length {0} is out of range (1..=1000)")]
    OutOfRange(i64),

    #[error("secure random source is unavailable in this environment")]
    EnvironmentUnavailable,

    #[error("character set is empty after exclusions")]
    EmptyCharset,

    #[error("character set has only {0} distinct characters, need at least 10")]
    InsufficientEntropy(usize),

    #[error("secure random source failed: {0}")]
    RandomSourceFailure(#[source] rand_core::Error),

    #[error("draw budget of {0} exhausted before the password was complete")]
    GenerationExhausted(usize),

    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(&'static str),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generate one password from `source`.
///
/// Validation runs before any randomness is consumed: length bounds, then
/// source availability, then the charset checks. The function performs no
/// I/O and no logging; apart from the draws it takes from `source` it is a
/// pure function of its options.
pub fn generate_with_source(
    options: &GenerationOptions,
    source: &mut dyn RandomSource,
) -> Result<String> {
    if options.length < MIN_LENGTH || options.length > MAX_LENGTH {
        return Err(GeneratorError::OutOfRange(options.length as i64));
    }

    if !source.is_available() {
        return Err(GeneratorError::EnvironmentUnavailable);
    }

    let charset = Charset::for_options(options);
    ensure_viable(&charset)?;

    let password = sample(options.length, &charset, source)?;
    verify(&password, options, &charset)?;

    Ok(password)
}

// The empty case is unreachable with the fixed base alphabets; the distinct
// floor keeps degenerate charsets from producing guessable output.
fn ensure_viable(charset: &Charset) -> Result<()> {
    if charset.is_empty() {
        return Err(GeneratorError::EmptyCharset);
    }

    let distinct = charset.distinct_len();
    if distinct < MIN_DISTINCT_CHARS {
        return Err(GeneratorError::InsufficientEntropy(distinct));
    }

    Ok(())
}

fn sample(length: usize, charset: &Charset, source: &mut dyn RandomSource) -> Result<String> {
    let budget = length * DRAW_BUDGET_PER_CHAR;
    let mut draws = 0;
    let mut succeeded = false;
    let mut last_failure = None;
    let mut password = String::with_capacity(length);

    while password.len() < length {
        if draws == budget {
            return Err(match last_failure {
                // Not one draw succeeded: the source is broken, not flaky.
                // Surface the root cause instead of a generic exhaustion.
                Some(cause) if !succeeded => GeneratorError::RandomSourceFailure(cause),
                _ => GeneratorError::GenerationExhausted(budget),
            });
        }

        draws += 1;
        match source.try_next_u32() {
            Ok(raw) => {
                succeeded = true;
                // Modulo reduction of a full 32-bit draw. The bias against a
                // charset of at most 83 characters is under 2e-8 per
                // position; rejection sampling would remove it but discards
                // successful draws, which the budget accounting forbids.
                let index = raw as usize % charset.len();
                password.push(charset.char_at(index));
            }
            Err(e) => last_failure = Some(e),
        }
    }

    Ok(password)
}

// Re-checks what construction already guarantees; a failure here is a logic
// defect in this module, never user error.
fn verify(password: &str, options: &GenerationOptions, charset: &Charset) -> Result<()> {
    if password.chars().count() != options.length {
        return Err(GeneratorError::InternalInvariantViolation(
            "output length does not match requested length",
        ));
    }

    if !password.chars().all(|c| charset.contains(c)) {
        return Err(GeneratorError::InternalInvariantViolation(
            "output contains a character outside the charset",
        ));
    }

    if options.readable_only && password.chars().any(is_ambiguous) {
        return Err(GeneratorError::InternalInvariantViolation(
            "ambiguous character in readable-mode output",
        ));
    }

    Ok(())
}

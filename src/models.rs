// src/models.rs
use serde::{Deserialize, Serialize};

use crate::generators::password::{GeneratorError, Result};

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_symbols: bool,
    pub readable_only: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_symbols: true,
            readable_only: false,
        }
    }
}

/// Raw request shape for callers feeding untyped input (JSON). Absent
/// fields take the [`GenerationOptions`] defaults on conversion; malformed
/// payloads fail with [`GeneratorError::InvalidArgument`] instead of being
/// coerced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationRequest {
    pub length: Option<i64>,
    pub include_symbols: Option<bool>,
    pub readable_only: Option<bool>,
}

impl GenerationRequest {
    /// Parse a JSON request. Rejects non-object payloads, non-integer
    /// lengths, non-boolean flags and unknown fields.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| GeneratorError::InvalidArgument(e.to_string()))
    }

    pub fn into_options(self) -> Result<GenerationOptions> {
        let defaults = GenerationOptions::default();

        let length = match self.length {
            None => defaults.length,
            // Negative lengths are below the minimum; the upper bound is
            // checked once, at generation time.
            Some(raw) => usize::try_from(raw).map_err(|_| GeneratorError::OutOfRange(raw))?,
        };

        Ok(GenerationOptions {
            length,
            include_symbols: self.include_symbols.unwrap_or(defaults.include_symbols),
            readable_only: self.readable_only.unwrap_or(defaults.readable_only),
        })
    }
}

/// Machine-readable generation report emitted by the CLI's JSON mode.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub password: String,
    pub length: usize,
    pub charset_size: usize,
    pub entropy_bits: f64,
    pub include_symbols: bool,
    pub readable_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let options = GenerationOptions::default();
        assert_eq!(options.length, 12);
        assert!(options.include_symbols);
        assert!(!options.readable_only);
    }

    #[test]
    fn empty_request_yields_default_options() {
        let options = GenerationRequest::from_json("{}").unwrap().into_options().unwrap();
        assert_eq!(options.length, 12);
        assert!(options.include_symbols);
        assert!(!options.readable_only);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let request =
            GenerationRequest::from_json(r#"{"length": 20, "include_symbols": false, "readable_only": true}"#)
                .unwrap();
        let options = request.into_options().unwrap();
        assert_eq!(options.length, 20);
        assert!(!options.include_symbols);
        assert!(options.readable_only);
    }

    #[test]
    fn string_length_is_invalid() {
        let err = GenerationRequest::from_json(r#"{"length": "12"}"#).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidArgument(_)));
    }

    #[test]
    fn fractional_length_is_invalid() {
        let err = GenerationRequest::from_json(r#"{"length": 12.5}"#).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidArgument(_)));
    }

    #[test]
    fn non_boolean_flag_is_invalid() {
        let err = GenerationRequest::from_json(r#"{"include_symbols": "yes"}"#).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidArgument(_)));

        let err = GenerationRequest::from_json(r#"{"readable_only": 1}"#).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidArgument(_)));
    }

    #[test]
    fn non_object_payload_is_invalid() {
        for input in ["null", "42", r#""length""#, "[1, 2]"] {
            let err = GenerationRequest::from_json(input).unwrap_err();
            assert!(matches!(err, GeneratorError::InvalidArgument(_)), "{input}");
        }
    }

    #[test]
    fn unknown_field_is_invalid() {
        let err = GenerationRequest::from_json(r#"{"lenght": 12}"#).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidArgument(_)));
    }

    #[test]
    fn negative_length_is_out_of_range() {
        let err = GenerationRequest::from_json(r#"{"length": -5}"#)
            .unwrap()
            .into_options()
            .unwrap_err();
        assert!(matches!(err, GeneratorError::OutOfRange(-5)));
    }
}

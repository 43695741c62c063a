// src/utils/format.rs

// Estimated entropy in bits: length × log2(charset size). Display-only;
// computed from the options, never from the generated secret.
pub fn entropy_bits(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Character classes present in a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

pub fn char_classes(password: &str) -> CharClasses {
    CharClasses {
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        digits: password.chars().any(|c| c.is_ascii_digit()),
        symbols: password.chars().any(|c| !c.is_ascii_alphanumeric()),
    }
}

// Map an entropy estimate to a display label.
pub fn strength_label(bits: f64) -> &'static str {
    if bits < 40.0 {
        "weak"
    } else if bits < 60.0 {
        "moderate"
    } else if bits < 80.0 {
        "strong"
    } else {
        "very strong"
    }
}

pub fn yes_no(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}

//! Length section - checks password minimum length.

use secrecy::SecretString;
use super::SectionResult;
use crate::charset::char_len;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// Length is counted in characters, so multi-byte input is not favoured.
pub fn length_section(password: &SecretString) -> SectionResult {
    if char_len(password) < MIN_LENGTH {
        return Some(format!(
            "Password should be at least {} characters long.",
            MIN_LENGTH
        ));
    }
    None
}

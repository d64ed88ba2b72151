//! Digit section.

use secrecy::SecretString;
use super::SectionResult;
use crate::charset::CharClasses;

pub fn digit_section(password: &SecretString) -> SectionResult {
    if !CharClasses::of_secret(password).digit {
        return Some("Password should contain at least one number (0-9).".to_string());
    }
    None
}

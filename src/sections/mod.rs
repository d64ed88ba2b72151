//! Password composition rules
//!
//! Each section checks one independent rule and contributes at most one
//! point to the score.

mod case_mix;
mod digit;
mod length;
mod symbol;

pub use case_mix::case_mix_section;
pub use digit::digit_section;
pub use length::length_section;
pub use symbol::symbol_section;

/// Result type for section evaluation functions.
/// - `Some(feedback)` - Rule failed, with a remediation hint
/// - `None` - Rule passed
pub type SectionResult = Option<String>;

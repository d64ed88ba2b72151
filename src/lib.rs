//! Password strength meter library
//!
//! Scores a password against four composition rules, estimates a coarse
//! brute-force crack time, and generates random strong passwords.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the interactive `pwd-meter` binary
//!
//! # Environment Variables
//!
//! - `PWD_METER_LENGTH`: Default length of generated passwords (default: 14)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{assess_password, generate_strong_password, CrackTimeBucket};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1".to_string().into());
//! let report = assess_password(&password);
//!
//! assert_eq!(report.evaluation.score.value(), 3);
//! assert_eq!(report.crack_time, CrackTimeBucket::SeveralYears);
//! println!("Strength: {}", report.evaluation.strength());
//!
//! let suggestion = generate_strong_password(14);
//! # let _ = suggestion;
//! ```

// Internal modules
mod charset;
mod config;
mod crack_time;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use charset::{CharClasses, GENERATOR_ALPHABET, SYMBOLS};
pub use config::{generated_length, parse_length, ConfigError, LENGTH_ENV};
pub use crack_time::{complexity, estimate_crack_time, seconds_to_crack, GUESSES_PER_SECOND};
pub use evaluator::{assess_password, evaluate_password_strength};
pub use generator::{
    generate_strong_password, generate_strong_password_with, DEFAULT_GENERATED_LENGTH,
};
pub use types::{
    CrackTimeBucket, PasswordEvaluation, PasswordReport, PasswordScore, PasswordStrength,
    MAX_SCORE,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;

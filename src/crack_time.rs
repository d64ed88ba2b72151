//! Brute-force crack-time heuristic.
//!
//! The search space is `complexity ^ length`, where complexity multiplies the
//! alphabet size of every character class present (26, 26, 10, 10). At one
//! billion guesses per second the resulting seconds are mapped onto a fixed
//! threshold ladder. This is an order-of-magnitude classifier, not an entropy
//! estimate.

use secrecy::SecretString;

use crate::charset::{char_len, CharClasses};
use crate::types::CrackTimeBucket;

const UPPER_SIZE: u32 = 26;
const LOWER_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SYMBOL_SIZE: u32 = 10;

/// Assumed attacker throughput, in guesses per second.
pub const GUESSES_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// Product of the alphabet sizes of the classes present.
///
/// Stays 1 when no recognized class occurs, in which case every length maps
/// to a search space of 1.
pub fn complexity(password: &SecretString) -> u32 {
    let classes = CharClasses::of_secret(password);
    let mut complexity = 1;
    if classes.upper {
        complexity *= UPPER_SIZE;
    }
    if classes.lower {
        complexity *= LOWER_SIZE;
    }
    if classes.digit {
        complexity *= DIGIT_SIZE;
    }
    if classes.symbol {
        complexity *= SYMBOL_SIZE;
    }
    complexity
}

/// Exact search space, or `None` when it does not fit in a `u128`.
fn search_space(complexity: u32, length: usize) -> Option<u128> {
    if complexity == 1 {
        return Some(1);
    }
    let exponent = u32::try_from(length).ok()?;
    u128::from(complexity).checked_pow(exponent)
}

/// Estimated seconds to exhaust the search space.
///
/// Returns `f64::INFINITY` when the space overflows a `u128`, which is far
/// beyond the last threshold.
pub fn seconds_to_crack(password: &SecretString) -> f64 {
    match search_space(complexity(password), char_len(password)) {
        Some(space) => space as f64 / GUESSES_PER_SECOND,
        None => f64::INFINITY,
    }
}

fn bucket_for_seconds(seconds: f64) -> CrackTimeBucket {
    if seconds < MINUTE {
        CrackTimeBucket::InstantlyCrackable
    } else if seconds < HOUR {
        CrackTimeBucket::FewMinutes
    } else if seconds < DAY {
        CrackTimeBucket::FewHours
    } else if seconds < YEAR {
        CrackTimeBucket::FewMonths
    } else {
        CrackTimeBucket::SeveralYears
    }
}

/// Maps a password onto one of five crack-time buckets.
pub fn estimate_crack_time(password: &SecretString) -> CrackTimeBucket {
    let seconds = seconds_to_crack(password);
    let bucket = bucket_for_seconds(seconds);

    #[cfg(feature = "tracing")]
    tracing::debug!(seconds, bucket = %bucket, "crack time estimated");

    bucket
}

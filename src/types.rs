//! Result types shared by the evaluator, the crack-time estimator and the front end.

use std::fmt;

/// Number of composition rules, and therefore the maximum score.
pub const MAX_SCORE: u8 = 4;

/// Count of passed composition rules, always in `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Builds a score from a passed-rule count, clamping to [`MAX_SCORE`].
    pub fn new(passed: u8) -> Self {
        Self(passed.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Width of the strength bar, in percent.
    pub fn percent(&self) -> u8 {
        self.0 * 25
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Display label for a score. Four entries; index is `min(score, 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    const TABLE: [PasswordStrength; 4] = [
        PasswordStrength::Weak,
        PasswordStrength::Moderate,
        PasswordStrength::Strong,
        PasswordStrength::VeryStrong,
    ];

    pub fn from_score(score: PasswordScore) -> Self {
        Self::TABLE[usize::from(score.value()).min(Self::TABLE.len() - 1)]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }

    /// Strength bar color as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "#ff4d4d",
            PasswordStrength::Moderate => "#ff944d",
            PasswordStrength::Strong => "#ffd633",
            PasswordStrength::VeryStrong => "#33cc33",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of the composition rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    /// Remediation hints for failed rules, in rule order.
    pub feedback: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }

    /// True when every rule passed.
    pub fn is_perfect(&self) -> bool {
        self.score.value() == MAX_SCORE
    }
}

/// Coarse brute-force crack-time range, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrackTimeBucket {
    InstantlyCrackable,
    FewMinutes,
    FewHours,
    FewMonths,
    SeveralYears,
}

impl CrackTimeBucket {
    pub fn label(&self) -> &'static str {
        match self {
            CrackTimeBucket::InstantlyCrackable => "Instantly Crackable",
            CrackTimeBucket::FewMinutes => "A Few Minutes",
            CrackTimeBucket::FewHours => "A Few Hours",
            CrackTimeBucket::FewMonths => "A Few Months",
            CrackTimeBucket::SeveralYears => "Several Years",
        }
    }
}

impl fmt::Display for CrackTimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the front end renders for one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReport {
    pub evaluation: PasswordEvaluation,
    pub crack_time: CrackTimeBucket,
}

//! Rule-based password strength meter.
//!
//! Counts how many character classes a password contains ("diversity") and
//! picks the highest tier whose diversity and length thresholds are met.

use crate::types::generator::StrengthRating;

/// Trait defining the strength-scoring function.
pub trait StrengthScorer {
    fn score(&self, password: &str) -> StrengthRating;
}

/// A rating tier and the thresholds needed to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthTier {
    pub rating: StrengthRating,
    pub min_diversity: usize,
    pub min_length: usize,
}

/// Tiers in ascending order.
pub const DEFAULT_TIERS: [StrengthTier; 4] = [
    StrengthTier { rating: StrengthRating::TooWeak, min_diversity: 0, min_length: 0 },
    StrengthTier { rating: StrengthRating::Weak, min_diversity: 2, min_length: 6 },
    StrengthTier { rating: StrengthRating::Medium, min_diversity: 4, min_length: 8 },
    StrengthTier { rating: StrengthRating::Strong, min_diversity: 4, min_length: 10 },
];

/// Character classes detected in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composition {
    pub lowercase: bool,
    pub uppercase: bool,
    pub number: bool,
    pub symbol: bool,
}

impl Composition {
    pub fn of(password: &str) -> Self {
        let mut found = Self::default();
        for c in password.chars() {
            match c {
                'a'..='z' => found.lowercase = true,
                'A'..='Z' => found.uppercase = true,
                '0'..='9' => found.number = true,
                c if c.is_ascii_punctuation() || c == ' ' => found.symbol = true,
                _ => {}
            }
        }
        found
    }

    pub fn diversity(&self) -> usize {
        [self.lowercase, self.uppercase, self.number, self.symbol]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

/// Default scorer using `DEFAULT_TIERS`.
pub struct RuleBasedScorer {
    tiers: Vec<StrengthTier>,
}

impl RuleBasedScorer {
    pub fn new() -> Self {
        Self {
            tiers: DEFAULT_TIERS.to_vec(),
        }
    }

    /// Uses custom tiers. The first tier must have zero thresholds so every
    /// password receives a rating.
    pub fn with_tiers(tiers: Vec<StrengthTier>) -> Self {
        Self { tiers }
    }
}

impl Default for RuleBasedScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl StrengthScorer for RuleBasedScorer {
    fn score(&self, password: &str) -> StrengthRating {
        let diversity = Composition::of(password).diversity();
        let length = password.chars().count();

        self.tiers
            .iter()
            .filter(|tier| diversity >= tier.min_diversity && length >= tier.min_length)
            .map(|tier| tier.rating)
            .max()
            .unwrap_or(StrengthRating::TooWeak)
    }
}

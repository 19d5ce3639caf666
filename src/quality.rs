//! Soil Quality Classification
//!
//! Maps (N, P, K) onto one of four ordinal quality tiers. Rules are checked
//! in table order and the first match wins; a sample that clears every rule
//! is `Excellent`. A rule only fires when all three nutrients sit strictly
//! below its bounds, so a value exactly on a bound falls through to the next
//! (higher) tier. Moisture plays no part.

use crate::validation::SoilSample;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Soil quality tier, ordered by agronomic desirability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl QualityTier {
    pub fn display_text(&self) -> &'static str {
        match self {
            QualityTier::Poor => "Poor",
            QualityTier::Moderate => "Moderate",
            QualityTier::Good => "Good",
            QualityTier::Excellent => "Excellent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QualityTier::Poor => "All three macronutrients are low",
            QualityTier::Moderate => "Nutrient levels support hardy crops",
            QualityTier::Good => "Nutrient levels support most field crops",
            QualityTier::Excellent => "At least one macronutrient is abundant",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Exclusive upper bounds on N, P and K for one tier rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRule {
    pub max_nitrogen: f64,
    pub max_phosphorus: f64,
    pub max_potassium: f64,
    pub tier: QualityTier,
}

impl TierRule {
    pub fn matches(&self, n: f64, p: f64, k: f64) -> bool {
        n < self.max_nitrogen && p < self.max_phosphorus && k < self.max_potassium
    }
}

/// Ordered cascade, first match wins
pub const TIER_RULES: [TierRule; 3] = [
    TierRule { max_nitrogen: 100.0, max_phosphorus: 30.0, max_potassium: 50.0, tier: QualityTier::Poor },
    TierRule { max_nitrogen: 200.0, max_phosphorus: 60.0, max_potassium: 100.0, tier: QualityTier::Moderate },
    TierRule { max_nitrogen: 350.0, max_phosphorus: 100.0, max_potassium: 200.0, tier: QualityTier::Good },
];

/// Tier assigned when no rule matches
pub const FALLBACK_TIER: QualityTier = QualityTier::Excellent;

/// Classify raw N/P/K (kg/ha)
pub fn classify_npk(n: f64, p: f64, k: f64) -> QualityTier {
    TIER_RULES
        .iter()
        .find(|rule| rule.matches(n, p, k))
        .map(|rule| rule.tier)
        .unwrap_or(FALLBACK_TIER)
}

/// Classify a validated sample
pub fn classify(sample: &SoilSample) -> QualityTier {
    let (n, p, k) = sample.npk();
    classify_npk(n, p, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(QualityTier::Poor < QualityTier::Moderate);
        assert!(QualityTier::Moderate < QualityTier::Good);
        assert!(QualityTier::Good < QualityTier::Excellent);
    }

    #[test]
    fn test_table_is_in_ascending_tier_order() {
        let tiers: Vec<QualityTier> = TIER_RULES.iter().map(|r| r.tier).collect();
        let mut sorted = tiers.clone();
        sorted.sort();
        assert_eq!(tiers, sorted);
        assert!(TIER_RULES.iter().all(|r| r.tier < FALLBACK_TIER));
    }

    #[test]
    fn test_basic_tiers() {
        assert_eq!(classify_npk(50.0, 20.0, 30.0), QualityTier::Poor);
        assert_eq!(classify_npk(150.0, 40.0, 80.0), QualityTier::Moderate);
        assert_eq!(classify_npk(300.0, 90.0, 150.0), QualityTier::Good);
        assert_eq!(classify_npk(400.0, 150.0, 250.0), QualityTier::Excellent);
    }

    #[test]
    fn test_boundaries_fall_to_higher_tier() {
        assert_eq!(classify_npk(100.0, 20.0, 30.0), QualityTier::Moderate);
        assert_eq!(classify_npk(50.0, 30.0, 30.0), QualityTier::Moderate);
        assert_eq!(classify_npk(50.0, 20.0, 50.0), QualityTier::Moderate);

        assert_eq!(classify_npk(200.0, 20.0, 30.0), QualityTier::Good);
        assert_eq!(classify_npk(50.0, 60.0, 30.0), QualityTier::Good);
        assert_eq!(classify_npk(50.0, 20.0, 100.0), QualityTier::Good);

        assert_eq!(classify_npk(350.0, 20.0, 30.0), QualityTier::Excellent);
        assert_eq!(classify_npk(50.0, 100.0, 30.0), QualityTier::Excellent);
        assert_eq!(classify_npk(50.0, 20.0, 200.0), QualityTier::Excellent);
    }

    #[test]
    fn test_single_abundant_nutrient_lifts_tier() {
        // Cascade is joint, not per nutrient: one high value skips the low tiers
        assert_eq!(classify_npk(0.0, 0.0, 250.0), QualityTier::Excellent);
        assert_eq!(classify_npk(0.0, 35.0, 0.0), QualityTier::Moderate);
    }

    #[test]
    fn test_moisture_is_ignored() {
        let dry = SoilSample::new(150.0, 40.0, 80.0, 0.0).unwrap();
        let wet = SoilSample::new(150.0, 40.0, 80.0, 100.0).unwrap();
        assert_eq!(classify(&dry), classify(&wet));
    }
}

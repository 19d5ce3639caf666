//! Recommendation Synthesis
//!
//! Builds the advisory part of an assessment from the quality tier and the
//! raw readings:
//! - Deficiency rules: each nutrient below its threshold adds an advice line
//!   and a fertilizer dosage (all rules are evaluated independently)
//! - Moisture rule: too dry or too wet, never both
//! - Crop suitability by tier
//! - Composite score: mean of four ratios to nominal targets, as a percentage
//!
//! The score is deliberately not capped at 100.

use crate::fields::Nutrient;
use crate::ph::round_half_up;
use crate::quality::QualityTier;
use crate::validation::SoilSample;
use serde::Serialize;
use std::collections::BTreeMap;

/// Advice emitted when no rule fires
pub const OPTIMAL_MESSAGE: &str = "Soil conditions are optimal. Maintain current practices.";

pub const DRY_MESSAGE: &str = "Increase irrigation frequency to maintain optimal moisture";
pub const WET_MESSAGE: &str = "Ensure proper drainage to prevent waterlogging";

/// Moisture below this (%) calls for irrigation
pub const DRY_THRESHOLD: f64 = 30.0;
/// Moisture above this (%) calls for drainage
pub const WET_THRESHOLD: f64 = 70.0;

/// Nutrient deficiency rule
#[derive(Debug, Clone, Copy)]
pub struct DeficiencyRule {
    pub nutrient: Nutrient,
    /// Rule fires when the reading is strictly below this (kg/ha)
    pub threshold: f64,
    /// Dosage tops the reading up to this level (kg/ha)
    pub target: f64,
    pub fertilizer: &'static str,
    pub advice: &'static str,
}

impl DeficiencyRule {
    pub fn fires(&self, value: f64) -> bool {
        value < self.threshold
    }

    /// Whole kg/ha needed to reach the target
    pub fn dosage_kg_ha(&self, value: f64) -> f64 {
        round_half_up(self.target - value, 0)
    }

    /// "Add 150 kg/ha of Urea"
    pub fn dosage_text(&self, value: f64) -> String {
        format!("Add {} kg/ha of {}", self.dosage_kg_ha(value), self.fertilizer)
    }
}

pub const DEFICIENCY_RULES: [DeficiencyRule; 3] = [
    DeficiencyRule {
        nutrient: Nutrient::Nitrogen,
        threshold: 150.0,
        target: 200.0,
        fertilizer: "Urea",
        advice: "Increase nitrogen levels through urea or organic compost",
    },
    DeficiencyRule {
        nutrient: Nutrient::Phosphorus,
        threshold: 50.0,
        target: 80.0,
        fertilizer: "DAP",
        advice: "Apply phosphorus-rich fertilizers like DAP",
    },
    DeficiencyRule {
        nutrient: Nutrient::Potassium,
        threshold: 80.0,
        target: 120.0,
        fertilizer: "MOP",
        advice: "Supplement with potassium using MOP fertilizer",
    },
];

/// Nominal targets the composite score is measured against: N, P, K (kg/ha), moisture (%)
pub const SCORE_TARGETS: [f64; 4] = [350.0, 100.0, 200.0, 60.0];

/// Sparse fertilizer plan, only deficient nutrients appear
pub type FertilizerPlan = BTreeMap<Nutrient, String>;

/// Advisory output of the synthesizer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Synthesis {
    pub recommendations: Vec<String>,
    pub fertilizer_plan: FertilizerPlan,
    pub suitable_crops: Vec<String>,
    pub overall_score: i64,
}

/// Crops suited to a quality tier, in display order
pub fn suitable_crops(tier: QualityTier) -> &'static [&'static str] {
    match tier {
        QualityTier::Excellent | QualityTier::Good => &["Rice", "Wheat", "Sugarcane", "Cotton"],
        QualityTier::Moderate => &["Pulses", "Maize", "Groundnut", "Soybean"],
        QualityTier::Poor => &["Millets", "Barley", "Mustard"],
    }
}

/// Irrigation / drainage advice, if any
pub fn moisture_advice(moisture: f64) -> Option<&'static str> {
    if moisture < DRY_THRESHOLD {
        Some(DRY_MESSAGE)
    } else if moisture > WET_THRESHOLD {
        Some(WET_MESSAGE)
    } else {
        None
    }
}

/// Composite health score (rounded percentage, uncapped)
pub fn overall_score(n: f64, p: f64, k: f64, m: f64) -> i64 {
    let [tn, tp, tk, tm] = SCORE_TARGETS;
    let mean_ratio = (n / tn + p / tp + k / tk + m / tm) / 4.0;
    round_half_up(mean_ratio * 100.0, 0) as i64
}

/// Synthesize advice for raw readings
pub fn synthesize_raw(tier: QualityTier, n: f64, p: f64, k: f64, m: f64) -> Synthesis {
    let mut recommendations = Vec::new();
    let mut fertilizer_plan = FertilizerPlan::new();

    for rule in &DEFICIENCY_RULES {
        let value = match rule.nutrient {
            Nutrient::Nitrogen => n,
            Nutrient::Phosphorus => p,
            Nutrient::Potassium => k,
        };
        if rule.fires(value) {
            recommendations.push(rule.advice.to_string());
            fertilizer_plan.insert(rule.nutrient, rule.dosage_text(value));
        }
    }

    if let Some(advice) = moisture_advice(m) {
        recommendations.push(advice.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(OPTIMAL_MESSAGE.to_string());
    }

    Synthesis {
        recommendations,
        fertilizer_plan,
        suitable_crops: suitable_crops(tier).iter().map(|c| c.to_string()).collect(),
        overall_score: overall_score(n, p, k, m),
    }
}

/// Synthesize advice for a validated sample
pub fn synthesize(tier: QualityTier, sample: &SoilSample) -> Synthesis {
    synthesize_raw(
        tier,
        sample.nitrogen(),
        sample.phosphorus(),
        sample.potassium(),
        sample.moisture(),
    )
}

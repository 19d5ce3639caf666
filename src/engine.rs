//! Soil Assessment Engine
//!
//! Validate → {Classify, Estimate} → Synthesize → `SoilAssessment`.
//!
//! Every call is independent and side-effect free; the engine keeps no state
//! between evaluations.

use crate::ph::estimate_ph;
use crate::quality::{classify, QualityTier};
use crate::recommendation::{synthesize, FertilizerPlan};
use crate::validation::{SampleInput, SoilSample, ValidationReport};
use serde::Serialize;
use tracing::debug;

/// Full assessment of one soil sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilAssessment {
    #[serde(rename = "soilQuality")]
    pub quality: QualityTier,

    /// One decimal place, within [4.5, 8.5]
    #[serde(rename = "estimatedPH")]
    pub estimated_ph: f64,

    #[serde(rename = "suitableCrops")]
    pub suitable_crops: Vec<String>,

    pub recommendations: Vec<String>,

    /// Only deficient nutrients appear
    #[serde(rename = "fertilizerRecommendation")]
    pub fertilizer_plan: FertilizerPlan,

    /// Rounded percentage; exceeds 100 when readings beat their targets
    #[serde(rename = "overallScore")]
    pub overall_score: i64,
}

/// Assess a validated sample
pub fn assess(sample: &SoilSample) -> SoilAssessment {
    let quality = classify(sample);
    let estimated_ph = estimate_ph(sample);
    let synthesis = synthesize(quality, sample);

    debug!(
        quality = %quality,
        estimated_ph,
        overall_score = synthesis.overall_score,
        deficiencies = synthesis.fertilizer_plan.len(),
        "soil sample assessed"
    );

    SoilAssessment {
        quality,
        estimated_ph,
        suitable_crops: synthesis.suitable_crops,
        recommendations: synthesis.recommendations,
        fertilizer_plan: synthesis.fertilizer_plan,
        overall_score: synthesis.overall_score,
    }
}

/// Validate a raw form and assess it
///
/// Nothing downstream of validation runs when the report has entries.
pub fn evaluate(input: &SampleInput) -> Result<SoilAssessment, ValidationReport> {
    let sample = SoilSample::from_input(input).map_err(|report| {
        debug!(invalid_fields = report.len(), "soil sample rejected");
        report
    })?;

    Ok(assess(&sample))
}

//! Soil pH Estimation
//!
//! Linear estimate from the N/P/K balance:
//!
//! ```text
//! raw = 6.5 + N/1000 - P/500 + K/600
//! pH  = clamp(round_1dp(raw), 4.5, 8.5)
//! ```
//!
//! Rounding happens before clamping. Rounding is half-up on the exact
//! binary value, so `6.25` becomes `6.3` while `6.05` (stored as
//! 6.0499999...) becomes `6.0`.

use crate::validation::SoilSample;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Neutral starting point of the estimate
pub const BASE_PH: f64 = 6.5;

pub const PH_MIN: f64 = 4.5;
pub const PH_MAX: f64 = 8.5;

/// Range most field crops prefer
pub const OPTIMAL_PH: RangeInclusive<f64> = 6.0..=7.0;

/// Decimal places kept on the estimate
pub const PH_DECIMALS: u32 = 1;

// Every f64 at or above 2^52 is already integral
const MAX_FRACTIONAL: f64 = 4_503_599_627_370_496.0;

/// Unrounded, unclamped estimate
pub fn raw_ph(n: f64, p: f64, k: f64) -> f64 {
    BASE_PH + n / 1000.0 - p / 500.0 + k / 600.0
}

/// Estimate pH from raw N/P/K (kg/ha)
pub fn estimate_ph_npk(n: f64, p: f64, k: f64) -> f64 {
    round_half_up(raw_ph(n, p, k), PH_DECIMALS).clamp(PH_MIN, PH_MAX)
}

/// Estimate pH for a validated sample
pub fn estimate_ph(sample: &SoilSample) -> f64 {
    let (n, p, k) = sample.npk();
    estimate_ph_npk(n, p, k)
}

/// Round to `decimals` places, ties toward +inf (as `Math.round` does),
/// judged on the exact binary value of `value`
///
/// `value * 10^decimals` is carried as an exact two-term product so a tie
/// is only seen when the stored value really sits on it. All engine inputs
/// are non-negative, where this is also plain decimal half-up.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= MAX_FRACTIONAL {
        return value;
    }

    // value * scale == scaled + error, exactly
    let error = value.mul_add(scale, -scaled);

    let mut lower = scaled.floor();
    if scaled == lower && error < 0.0 {
        lower -= 1.0;
    }

    let above_half = (scaled - (lower + 0.5)) + error;
    let rounded = if above_half >= 0.0 { lower + 1.0 } else { lower };
    rounded / scale
}

/// Where an estimate sits relative to the optimal band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhBand {
    Acidic,
    Optimal,
    Alkaline,
}

impl PhBand {
    pub fn from_ph(ph: f64) -> Self {
        if ph < *OPTIMAL_PH.start() {
            PhBand::Acidic
        } else if ph > *OPTIMAL_PH.end() {
            PhBand::Alkaline
        } else {
            PhBand::Optimal
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            PhBand::Acidic => "Acidic",
            PhBand::Optimal => "Optimal",
            PhBand::Alkaline => "Alkaline",
        }
    }
}

//! Soil Advisor Rust Implementation
//!
//! Soil-nutrient decision engine: given measured Nitrogen, Phosphorus,
//! Potassium (kg/ha) and soil moisture (%), it classifies soil quality,
//! estimates pH, computes a composite health score and emits fertilizer
//! and crop recommendations.
//!
//! Pipeline (one pure, synchronous call per sample):
//! - `validation`: raw form → `SoilSample` or `ValidationReport`
//! - `quality`: ordered N/P/K threshold cascade → `QualityTier`
//! - `ph`: linear pH estimate, rounded then clamped
//! - `recommendation`: deficiency rules, crops, composite score
//! - `engine`: glue producing a `SoilAssessment`
//!
//! Outer surfaces (`formatters`, `config`, the `soil_report` CLI and the
//! optional `api` feature) only adapt input and output.

pub mod fields;
pub mod validation;
pub mod quality;
pub mod ph;
pub mod recommendation;
pub mod engine;
pub mod formatters;
pub mod error;
pub mod config;
pub mod logging;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use fields::{Field, Nutrient};
pub use validation::{validate, SampleInput, SoilSample, ValidationReport};
pub use quality::{classify, QualityTier};
pub use ph::estimate_ph;
pub use recommendation::{synthesize, FertilizerPlan, Synthesis};
pub use engine::{assess, evaluate, SoilAssessment};
pub use error::SoilError;
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};

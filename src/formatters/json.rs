use crate::engine::SoilAssessment;

/// JSON formatter for soil assessments
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format assessment as pretty-printed JSON
    pub fn format(assessment: &SoilAssessment) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(assessment)
    }

    /// Format assessment as compact JSON (no whitespace)
    pub fn format_compact(assessment: &SoilAssessment) -> Result<String, serde_json::Error> {
        serde_json::to_string(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assess;
    use crate::validation::SoilSample;

    fn poor_assessment() -> SoilAssessment {
        assess(&SoilSample::new(50.0, 20.0, 30.0, 20.0).unwrap())
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&poor_assessment()).unwrap();

        assert!(json.contains("\"soilQuality\": \"Poor\""));
        assert!(json.contains("\"estimatedPH\": 6.6"));
        assert!(json.contains("\"overallScore\": 21"));
        assert!(json.contains("\"nitrogen\": \"Add 150 kg/ha of Urea\""));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&poor_assessment()).unwrap();

        // Compact format should have no newlines (except potentially in strings)
        assert!(!json.contains("\n  "));
        assert!(json.contains("\"suitableCrops\":[\"Millets\",\"Barley\",\"Mustard\"]"));
    }
}

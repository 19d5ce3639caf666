//! Input Validation
//!
//! Turns the raw four-field form (`SampleInput`) into a validated
//! `SoilSample`, or a `ValidationReport` naming every field that is missing
//! or outside its declared range.
//!
//! A field is flagged at most once: the "required" check short-circuits the
//! range check for that field.

use crate::fields::Field;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Raw soil form as typed by a user (text, possibly blank)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleInput {
    #[serde(default, deserialize_with = "text_or_number")]
    pub nitrogen: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub phosphorus: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub potassium: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub moisture: Option<String>,
}

impl SampleInput {
    /// Build a form from four text values
    pub fn from_text(nitrogen: &str, phosphorus: &str, potassium: &str, moisture: &str) -> Self {
        Self {
            nitrogen: Some(nitrogen.to_string()),
            phosphorus: Some(phosphorus.to_string()),
            potassium: Some(potassium.to_string()),
            moisture: Some(moisture.to_string()),
        }
    }

    /// Raw text for a field
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Nitrogen => self.nitrogen.as_deref(),
            Field::Phosphorus => self.phosphorus.as_deref(),
            Field::Potassium => self.potassium.as_deref(),
            Field::Moisture => self.moisture.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::Nitrogen => self.nitrogen = value,
            Field::Phosphorus => self.phosphorus = value,
            Field::Potassium => self.potassium = value,
            Field::Moisture => self.moisture = value,
        }
    }
}

/// JSON callers may send `"50"`, `50`, `null` or omit the key.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    }))
}

/// Field-level validation failures, empty when the sample is usable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("invalid soil sample: {}", join_messages(.errors))]
pub struct ValidationReport {
    errors: BTreeMap<Field, String>,
}

fn join_messages(errors: &BTreeMap<Field, String>) -> String {
    errors.values().cloned().collect::<Vec<_>>().join("; ")
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(|s| s.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Failures in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: String) {
        self.errors.insert(field, message);
    }
}

/// Validated soil measurements
///
/// Only obtainable through validation, so every value is finite and inside
/// its field's declared range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilSample {
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    moisture: f64,
}

impl SoilSample {
    /// Validate four numeric readings (kg/ha, kg/ha, kg/ha, %)
    pub fn new(
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
        moisture: f64,
    ) -> Result<Self, ValidationReport> {
        let mut report = ValidationReport::default();
        let mut values = [0.0; 4];

        for (slot, (field, value)) in values
            .iter_mut()
            .zip(Field::ALL.into_iter().zip([nitrogen, phosphorus, potassium, moisture]))
        {
            match check_range(field, value) {
                Ok(v) => *slot = v,
                Err(msg) => report.insert(field, msg),
            }
        }

        Self::from_checked(values, report)
    }

    /// Parse and validate a raw form
    pub fn from_input(input: &SampleInput) -> Result<Self, ValidationReport> {
        let mut report = ValidationReport::default();
        let mut values = [0.0; 4];

        for (slot, field) in values.iter_mut().zip(Field::ALL) {
            match check_text(field, input.get(field)) {
                Ok(v) => *slot = v,
                Err(msg) => report.insert(field, msg),
            }
        }

        Self::from_checked(values, report)
    }

    fn from_checked(values: [f64; 4], report: ValidationReport) -> Result<Self, ValidationReport> {
        if !report.is_empty() {
            return Err(report);
        }

        let [nitrogen, phosphorus, potassium, moisture] = values;
        Ok(Self {
            nitrogen,
            phosphorus,
            potassium,
            moisture,
        })
    }

    /// Nitrogen (kg/ha)
    pub fn nitrogen(&self) -> f64 {
        self.nitrogen
    }

    /// Phosphorus (kg/ha)
    pub fn phosphorus(&self) -> f64 {
        self.phosphorus
    }

    /// Potassium (kg/ha)
    pub fn potassium(&self) -> f64 {
        self.potassium
    }

    /// Soil moisture (%)
    pub fn moisture(&self) -> f64 {
        self.moisture
    }

    /// (N, P, K)
    pub fn npk(&self) -> (f64, f64, f64) {
        (self.nitrogen, self.phosphorus, self.potassium)
    }
}

/// Validate a raw form without building a sample
///
/// Returns an empty report iff all four fields are present and in range.
pub fn validate(input: &SampleInput) -> ValidationReport {
    SoilSample::from_input(input).err().unwrap_or_default()
}

fn check_text(field: Field, text: Option<&str>) -> Result<f64, String> {
    let text = match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(field.required_message()),
    };

    // Unparseable text is not inside the declared range either
    let value = text.parse::<f64>().map_err(|_| field.range_message())?;
    check_range(field, value)
}

fn check_range(field: Field, value: f64) -> Result<f64, String> {
    if value.is_finite() && field.valid_range().contains(&value) {
        Ok(value)
    } else {
        Err(field.range_message())
    }
}

/// Form keystroke filter: digits with at most one decimal point (or empty)
pub fn accepts_keystroke(text: &str) -> bool {
    let mut seen_point = false;
    text.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_point => {
            seen_point = true;
            true
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_produces_sample() {
        let input = SampleInput::from_text("50", "20", "30", "20");
        let sample = SoilSample::from_input(&input).unwrap();
        assert_eq!(sample.npk(), (50.0, 20.0, 30.0));
        assert_eq!(sample.moisture(), 20.0);
        assert!(validate(&input).is_empty());
    }

    #[test]
    fn test_missing_fields_are_required() {
        let input = SampleInput {
            nitrogen: None,
            phosphorus: Some("".to_string()),
            potassium: Some("   ".to_string()),
            moisture: Some("40".to_string()),
        };
        let report = validate(&input);

        assert_eq!(report.len(), 3);
        assert_eq!(report.get(Field::Nitrogen), Some("Nitrogen value is required"));
        assert_eq!(report.get(Field::Phosphorus), Some("Phosphorus value is required"));
        assert_eq!(report.get(Field::Potassium), Some("Potassium value is required"));
        assert!(!report.contains(Field::Moisture));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(SoilSample::new(0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(SoilSample::new(500.0, 200.0, 300.0, 100.0).is_ok());

        let report = SoilSample::new(500.1, -0.1, 300.5, 100.01).unwrap_err();
        assert_eq!(report.len(), 4);
        assert_eq!(report.get(Field::Moisture), Some("Moisture should be between 0-100%"));
    }

    #[test]
    fn test_non_numeric_text_is_out_of_range() {
        let input = SampleInput::from_text(".", "abc", "NaN", "inf");
        let report = validate(&input);
        assert_eq!(report.len(), 4);
        assert_eq!(report.get(Field::Nitrogen), Some("Nitrogen should be between 0-500 kg/ha"));
        assert_eq!(report.get(Field::Potassium), Some("Potassium should be between 0-300 kg/ha"));
    }

    #[test]
    fn test_report_iterates_in_form_order() {
        let input = SampleInput::from_text("", "900", "", "101");
        let fields: Vec<Field> = validate(&input).iter().map(|(f, _)| f).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn test_report_serializes_as_field_map() {
        let input = SampleInput {
            potassium: Some("350".to_string()),
            phosphorus: Some("10".to_string()),
            moisture: Some("10".to_string()),
            nitrogen: None,
        };
        let json = serde_json::to_value(validate(&input)).unwrap();
        assert_eq!(json["nitrogen"], "Nitrogen value is required");
        assert_eq!(json["potassium"], "Potassium should be between 0-300 kg/ha");
        assert!(json.get("phosphorus").is_none());
    }

    #[test]
    fn test_report_display_joins_messages() {
        let report = SoilSample::new(600.0, 10.0, 10.0, 120.0).unwrap_err();
        assert_eq!(
            report.to_string(),
            "invalid soil sample: Nitrogen should be between 0-500 kg/ha; Moisture should be between 0-100%"
        );
    }

    #[test]
    fn test_deserialize_numbers_and_strings() {
        let input: SampleInput = serde_json::from_str(
            r#"{"nitrogen": 120, "phosphorus": "45.5", "potassium": null}"#,
        )
        .unwrap();
        assert_eq!(input.nitrogen.as_deref(), Some("120"));
        assert_eq!(input.phosphorus.as_deref(), Some("45.5"));
        assert_eq!(input.potassium, None);
        assert_eq!(input.moisture, None);
    }

    #[test]
    fn test_accepts_keystroke() {
        assert!(accepts_keystroke(""));
        assert!(accepts_keystroke("120"));
        assert!(accepts_keystroke("12.5"));
        assert!(accepts_keystroke("."));
        assert!(!accepts_keystroke("1.2.3"));
        assert!(!accepts_keystroke("-5"));
        assert!(!accepts_keystroke("1e3"));
    }
}

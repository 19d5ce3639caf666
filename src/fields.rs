//! Measurement Fields
//!
//! The four soil readings a sample carries, with their form keys, labels,
//! units and declared valid ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// One of the four measured soil fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Nitrogen,
    Phosphorus,
    Potassium,
    Moisture,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [
        Field::Nitrogen,
        Field::Phosphorus,
        Field::Potassium,
        Field::Moisture,
    ];

    /// Form / JSON key
    pub fn key(&self) -> &'static str {
        match self {
            Field::Nitrogen => "nitrogen",
            Field::Phosphorus => "phosphorus",
            Field::Potassium => "potassium",
            Field::Moisture => "moisture",
        }
    }

    /// Capitalised label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::Nitrogen => "Nitrogen",
            Field::Phosphorus => "Phosphorus",
            Field::Potassium => "Potassium",
            Field::Moisture => "Moisture",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Field::Moisture => "%",
            _ => "kg/ha",
        }
    }

    /// Declared valid range (inclusive on both ends)
    pub fn valid_range(&self) -> RangeInclusive<f64> {
        match self {
            Field::Nitrogen => 0.0..=500.0,
            Field::Phosphorus => 0.0..=200.0,
            Field::Potassium => 0.0..=300.0,
            Field::Moisture => 0.0..=100.0,
        }
    }

    /// "Nitrogen value is required"
    pub fn required_message(&self) -> String {
        format!("{} value is required", self.label())
    }

    /// "Nitrogen should be between 0-500 kg/ha" / "Moisture should be between 0-100%"
    pub fn range_message(&self) -> String {
        let range = self.valid_range();
        let unit = match self {
            Field::Moisture => "%".to_string(),
            _ => format!(" {}", self.unit()),
        };
        format!(
            "{} should be between {:.0}-{:.0}{}",
            self.label(),
            range.start(),
            range.end(),
            unit
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Macronutrient that can receive a fertilizer dosage
///
/// Ordering follows N-P-K, which is also the order of a fertilizer plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];

    pub fn field(&self) -> Field {
        match self {
            Nutrient::Nitrogen => Field::Nitrogen,
            Nutrient::Phosphorus => Field::Phosphorus,
            Nutrient::Potassium => Field::Potassium,
        }
    }

    pub fn key(&self) -> &'static str {
        self.field().key()
    }

    pub fn label(&self) -> &'static str {
        self.field().label()
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_messages() {
        assert_eq!(Field::Nitrogen.range_message(), "Nitrogen should be between 0-500 kg/ha");
        assert_eq!(Field::Phosphorus.range_message(), "Phosphorus should be between 0-200 kg/ha");
        assert_eq!(Field::Potassium.range_message(), "Potassium should be between 0-300 kg/ha");
        assert_eq!(Field::Moisture.range_message(), "Moisture should be between 0-100%");
    }

    #[test]
    fn test_required_message() {
        assert_eq!(Field::Moisture.required_message(), "Moisture value is required");
    }

    #[test]
    fn test_nutrient_order_is_npk() {
        let mut shuffled = vec![Nutrient::Potassium, Nutrient::Nitrogen, Nutrient::Phosphorus];
        shuffled.sort();
        assert_eq!(shuffled, Nutrient::ALL.to_vec());
    }

    #[test]
    fn test_serde_keys() {
        assert_eq!(serde_json::to_string(&Field::Potassium).unwrap(), "\"potassium\"");
        assert_eq!(serde_json::to_string(&Nutrient::Nitrogen).unwrap(), "\"nitrogen\"");
    }
}

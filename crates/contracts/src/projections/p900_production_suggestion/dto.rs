use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One line of the suggested production report (`GET /production`).
///
/// Computed entirely server-side; `total_value` arrives pre-formatted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionSuggestion {
    pub code: String,
    pub product_name: String,
    /// Whole units; a float such as `4.0` is accepted and truncated
    #[serde(deserialize_with = "whole_units")]
    pub quantity: i64,
    pub total_value: String,
    pub unit_price: f64,
}

impl ProductionSuggestion {
    /// Value of the line recomputed from quantity and unit price
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

fn whole_units<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Units {
        Int(i64),
        Float(f64),
    }

    match Units::deserialize(deserializer)? {
        Units::Int(n) => Ok(n),
        Units::Float(f) if f.is_finite() && f.abs() <= i64::MAX as f64 => Ok(f.trunc() as i64),
        Units::Float(f) => Err(D::Error::custom(format!("quantity {f} is out of range"))),
    }
}

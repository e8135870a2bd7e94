use crate::domain::common::Identified;
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Stock level below which a material is flagged as running low
pub const LOW_STOCK_THRESHOLD: f64 = 10.0;

// ============================================================================
// Record
// ============================================================================

/// Raw material as returned by `GET /material`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(rename = "stockQuantity")]
    pub stock_quantity: f64,
}

impl RawMaterial {
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity < LOW_STOCK_THRESHOLD
    }
}

impl Identified for RawMaterial {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Create payload
// ============================================================================

/// Body of `POST /material`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRawMaterial {
    pub code: String,
    pub name: String,
    #[serde(rename = "stockQuantity")]
    pub stock_quantity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_quantity_uses_camel_case_on_the_wire() {
        let json = r#"{"id":"7","code":"M1","name":"Steel","stockQuantity":5}"#;
        let material: RawMaterial = serde_json::from_str(json).unwrap();
        assert_eq!(material.stock_quantity, 5.0);

        let body = serde_json::to_value(NewRawMaterial {
            code: "M2".into(),
            name: "Copper".into(),
            stock_quantity: 12.5,
        })
        .unwrap();
        assert_eq!(body["stockQuantity"], 12.5);
        assert!(body.get("stock_quantity").is_none());
    }

    #[test]
    fn test_low_stock_threshold_is_exclusive() {
        let mut material = RawMaterial {
            stock_quantity: 5.0,
            ..Default::default()
        };
        assert!(material.is_low_stock());

        material.stock_quantity = 10.0;
        assert!(!material.is_low_stock());

        material.stock_quantity = 15.0;
        assert!(!material.is_low_stock());
    }
}

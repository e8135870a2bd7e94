use crate::domain::common::Identified;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Finished product as returned by `GET /products`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub code: String,
    pub name: String,
    /// Unit price in BRL
    pub value: f64,
}

impl Identified for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Create payload
// ============================================================================

/// Body of `POST /products/{rawMaterialId}`.
///
/// `raw_material_quantity` is how much of the referenced raw material one
/// unit of the product consumes. The material id is part of the path and is
/// echoed in the body as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub value: f64,
    pub raw_material_quantity: f64,
    pub raw_material_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_list_from_backend() {
        let json = r#"[{"id":"1","code":"A1","name":"Bolt","value":2.5}]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id(), "1");
        assert_eq!(products[0].name, "Bolt");
        assert_eq!(products[0].value, 2.5);
    }

    #[test]
    fn test_new_product_carries_quantity() {
        let body = serde_json::to_value(NewProduct {
            code: "A2".into(),
            name: "Nut".into(),
            value: 0.75,
            raw_material_quantity: 3.0,
            raw_material_id: "7".into(),
        })
        .unwrap();
        assert_eq!(body["rawMaterialQuantity"], 3.0);
        assert_eq!(body["rawMaterialId"], "7");
        assert!(body.get("quantity").is_none());
        assert!(body.get("id").is_none());
    }
}

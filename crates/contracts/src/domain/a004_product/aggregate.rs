use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceFilter};
use crate::shared::attachment::is_allowed_attachment;

/// Catalog item that purchase lines reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,

    pub name: String,

    pub barcode: Option<String>,

    /// Unit of measure shown next to quantities, e.g. "pcs".
    pub unit: Option<String>,

    pub category_id: Option<i64>,

    /// Category name as resolved by the backend for display.
    pub category_name: Option<String>,

    /// Default buying price; pre-fills the unit price of a new purchase
    /// line when present.
    pub purchase_price: Option<f64>,

    pub sale_price: Option<f64>,

    /// Attached document (spec sheet), name only.
    pub attachment_name: Option<String>,

    pub description: Option<String>,
}

impl Resource for Product {
    type Filter = ProductFilter;
    type Dto = ProductDto;

    fn base_path() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Option<i64>,
    pub name: String,
    pub barcode: Option<String>,
    pub unit: Option<String>,
    pub category_id: Option<i64>,
    pub purchase_price: Option<f64>,
    pub sale_price: Option<f64>,
    pub attachment_name: Option<String>,
    pub description: Option<String>,
}

impl ProductDto {
    pub fn from_entity(entity: &Product) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name.clone(),
            barcode: entity.barcode.clone(),
            unit: entity.unit.clone(),
            category_id: entity.category_id,
            purchase_price: entity.purchase_price,
            sale_price: entity.sale_price,
            attachment_name: entity.attachment_name.clone(),
            description: entity.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".into());
        }
        if let Some(price) = self.purchase_price {
            if price < 0.0 {
                return Err("Purchase price cannot be negative".into());
            }
        }
        if let Some(price) = self.sale_price {
            if price < 0.0 {
                return Err("Sale price cannot be negative".into());
            }
        }
        if let Some(name) = &self.attachment_name {
            if !is_allowed_attachment(name) {
                return Err("Attachment must be a .pdf or .docx file".into());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl ResourceFilter for ProductFilter {
    fn active_count(&self) -> usize {
        [
            self.name.is_some(),
            self.barcode.is_some(),
            self.category_id.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_disallowed_attachment() {
        let dto = ProductDto {
            name: "Drill".to_string(),
            attachment_name: Some("manual.xlsx".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn negative_prices_rejected() {
        let dto = ProductDto {
            name: "Drill".to_string(),
            sale_price: Some(-1.0),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}

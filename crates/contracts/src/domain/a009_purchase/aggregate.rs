use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceFilter};
use crate::enums::payment_type::PaymentType;
use crate::enums::purchase_status::PurchaseStatus;

/// One received line of a purchase document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    pub id: Option<i64>,

    pub product_id: i64,

    /// Product name as resolved by the backend for display.
    pub product_name: Option<String>,

    pub quantity: u32,

    pub unit_price: f64,

    /// quantity × unitPrice as computed by the backend; the stored value
    /// is authoritative, the client only recomputes it while drafting.
    pub total_price: f64,
}

/// Purchase document: goods received from a supplier into a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: i64,

    /// Supplier invoice number, e.g. "INV-0042".
    pub invoice_number: Option<String>,

    pub supplier_id: i64,

    pub supplier_name: Option<String>,

    pub warehouse_id: i64,

    pub warehouse_name: Option<String>,

    /// Document date (YYYY-MM-DD).
    pub purchase_date: String,

    /// Line items; list responses may omit them.
    #[serde(default)]
    pub items: Vec<PurchaseItem>,

    pub total_amount: f64,

    pub paid_amount: f64,

    pub payment_type: Option<PaymentType>,

    pub status: PurchaseStatus,

    pub note: Option<String>,
}

impl Purchase {
    /// Outstanding balance of the stored document, never negative.
    pub fn remaining_amount(&self) -> f64 {
        (self.total_amount - self.paid_amount).max(0.0)
    }
}

impl Resource for Purchase {
    type Filter = PurchaseFilter;
    type Dto = PurchaseDto;

    fn base_path() -> &'static str {
        "purchases"
    }

    fn element_name() -> &'static str {
        "Purchase"
    }

    fn list_name() -> &'static str {
        "Purchases"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> String {
        self.invoice_number
            .clone()
            .unwrap_or_else(|| format!("Purchase #{}", self.id))
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Submitted line: raw inputs only, the backend derives the totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItemDto {
    pub product_id: i64,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Create/update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDto {
    pub id: Option<i64>,
    pub invoice_number: Option<String>,
    pub supplier_id: i64,
    pub warehouse_id: i64,
    pub purchase_date: String,
    pub items: Vec<PurchaseItemDto>,
    pub paid_amount: f64,
    pub payment_type: Option<PaymentType>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PurchaseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl ResourceFilter for PurchaseFilter {
    fn active_count(&self) -> usize {
        [
            self.invoice_number.is_some(),
            self.supplier_id.is_some(),
            self.warehouse_id.is_some(),
            self.status.is_some(),
            self.date_from.is_some(),
            self.date_to.is_some(),
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
    fn wire_format_uses_camel_case_and_status_codes() {
        let purchase = Purchase {
            id: 7,
            invoice_number: Some("INV-0042".to_string()),
            supplier_id: 3,
            supplier_name: Some("Acme Supply".to_string()),
            warehouse_id: 1,
            warehouse_name: Some("Main".to_string()),
            purchase_date: "2026-02-11".to_string(),
            items: vec![PurchaseItem {
                id: Some(19),
                product_id: 5,
                product_name: Some("Drill".to_string()),
                quantity: 2,
                unit_price: 10.0,
                total_price: 20.0,
            }],
            total_amount: 20.0,
            paid_amount: 5.0,
            payment_type: Some(PaymentType::Cash),
            status: PurchaseStatus::Pending,
            note: None,
        };

        let json = serde_json::to_value(&purchase).unwrap();
        assert_eq!(json["invoiceNumber"], "INV-0042");
        assert_eq!(json["totalAmount"], 20.0);
        assert_eq!(json["paidAmount"], 5.0);
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["paymentType"], "CASH");
        assert_eq!(json["items"][0]["productId"], 5);
        assert_eq!(json["items"][0]["unitPrice"], 10.0);
        assert_eq!(json["items"][0]["totalPrice"], 20.0);

        let back: Purchase = serde_json::from_value(json).unwrap();
        assert_eq!(back, purchase);
    }

    #[test]
    fn list_responses_may_omit_items() {
        let json = r#"{
            "id": 1,
            "invoiceNumber": null,
            "supplierId": 3,
            "supplierName": "Acme Supply",
            "warehouseId": 1,
            "warehouseName": "Main",
            "purchaseDate": "2026-02-11",
            "totalAmount": 50.0,
            "paidAmount": 50.0,
            "paymentType": "CARD",
            "status": "COMPLETED",
            "note": null
        }"#;
        let purchase: Purchase = serde_json::from_str(json).unwrap();
        assert!(purchase.items.is_empty());
        assert_eq!(purchase.remaining_amount(), 0.0);
    }

    #[test]
    fn stored_remaining_amount_is_clamped() {
        let json = r#"{
            "id": 2,
            "invoiceNumber": null,
            "supplierId": 3,
            "supplierName": null,
            "warehouseId": 1,
            "warehouseName": null,
            "purchaseDate": "2026-02-11",
            "totalAmount": 10.0,
            "paidAmount": 25.0,
            "paymentType": null,
            "status": "PENDING",
            "note": null
        }"#;
        let purchase: Purchase = serde_json::from_str(json).unwrap();
        assert_eq!(purchase.remaining_amount(), 0.0);
    }
}

use thiserror::Error;

use super::aggregate::{Purchase, PurchaseDto, PurchaseItemDto};
use crate::domain::a004_product::aggregate::Product;
use crate::enums::payment_type::PaymentType;

/// One editable line of a purchase being drafted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftItem {
    /// 0 until a product is picked.
    pub product_id: i64,

    pub product_name: String,

    pub quantity: u32,

    /// None until the user (or the product card) supplies a price.
    pub unit_price: Option<f64>,
}

impl DraftItem {
    /// quantity × price, with an unset price counting as zero so partial
    /// input never breaks the running totals.
    pub fn total_price(&self) -> f64 {
        self.quantity as f64 * self.unit_price.unwrap_or(0.0)
    }
}

/// Validation failure that blocks submission. The display text is the
/// message shown inline in the editor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("Select a supplier")]
    MissingSupplier,
    #[error("Select a warehouse")]
    MissingWarehouse,
    #[error("Add at least one item")]
    NoItems,
    #[error("Line {0}: select a product")]
    MissingProduct(usize),
    #[error("Line {0}: quantity must be greater than zero")]
    InvalidQuantity(usize),
    #[error("Line {0}: enter a unit price greater than zero")]
    InvalidUnitPrice(usize),
    #[error("Paid amount cannot be negative")]
    NegativePaid,
    #[error("Paid amount cannot exceed the total")]
    PaidOverTotal,
    #[error("Select a payment type for the paid amount")]
    MissingPaymentType,
}

/// Editing state of a purchase before submission.
///
/// All derived money values (line totals, document total, remaining
/// balance) are computed from the current items on every read and are
/// never stored, so they cannot drift from the inputs. The stored
/// document keeps the backend-computed amounts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PurchaseDraft {
    /// 0 until a supplier is chosen.
    pub supplier_id: i64,

    /// 0 until a warehouse is chosen.
    pub warehouse_id: i64,

    pub invoice_number: String,

    /// Document date (YYYY-MM-DD).
    pub purchase_date: String,

    pub items: Vec<DraftItem>,

    pub paid_amount: f64,

    pub payment_type: Option<PaymentType>,

    pub note: String,
}

impl PurchaseDraft {
    pub fn new(purchase_date: String) -> Self {
        Self {
            purchase_date,
            ..Default::default()
        }
    }

    /// Rebuild an editable draft from a stored document.
    pub fn from_purchase(purchase: &Purchase) -> Self {
        Self {
            supplier_id: purchase.supplier_id,
            warehouse_id: purchase.warehouse_id,
            invoice_number: purchase.invoice_number.clone().unwrap_or_default(),
            purchase_date: purchase.purchase_date.clone(),
            items: purchase
                .items
                .iter()
                .map(|item| DraftItem {
                    product_id: item.product_id,
                    product_name: item.product_name.clone().unwrap_or_default(),
                    quantity: item.quantity,
                    unit_price: Some(item.unit_price),
                })
                .collect(),
            paid_amount: purchase.paid_amount,
            payment_type: purchase.payment_type,
            note: purchase.note.clone().unwrap_or_default(),
        }
    }

    /// Append a fresh line: no product yet, quantity 1, price pending
    /// explicit entry.
    pub fn add_item(&mut self) {
        self.items.push(DraftItem {
            product_id: 0,
            product_name: String::new(),
            quantity: 1,
            unit_price: None,
        });
    }

    /// Plain positional removal; out-of-range indexes are ignored.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity;
        }
    }

    pub fn set_unit_price(&mut self, index: usize, unit_price: Option<f64>) {
        if let Some(item) = self.items.get_mut(index) {
            item.unit_price = unit_price;
        }
    }

    /// Point the line at a product. The catalog purchase price, when the
    /// card carries one, pre-fills the unit price; otherwise the previous
    /// entry stays.
    pub fn set_product(&mut self, index: usize, product: &Product) {
        if let Some(item) = self.items.get_mut(index) {
            item.product_id = product.id;
            item.product_name = product.name.clone();
            if let Some(price) = product.purchase_price {
                item.unit_price = Some(price);
            }
        }
    }

    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(DraftItem::total_price).sum()
    }

    /// Outstanding balance of the draft, never negative. Advisory only;
    /// the backend recomputes the authoritative value on submission.
    pub fn remaining_amount(&self) -> f64 {
        (self.total_amount() - self.paid_amount).max(0.0)
    }

    /// Pre-submit checks. The first failing rule wins; nothing is sent
    /// while this returns an error.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.supplier_id <= 0 {
            return Err(DraftError::MissingSupplier);
        }
        if self.warehouse_id <= 0 {
            return Err(DraftError::MissingWarehouse);
        }
        if self.items.is_empty() {
            return Err(DraftError::NoItems);
        }
        for (idx, item) in self.items.iter().enumerate() {
            if item.product_id <= 0 {
                return Err(DraftError::MissingProduct(idx + 1));
            }
            if item.quantity == 0 {
                return Err(DraftError::InvalidQuantity(idx + 1));
            }
            match item.unit_price {
                Some(price) if price > 0.0 => {}
                _ => return Err(DraftError::InvalidUnitPrice(idx + 1)),
            }
        }
        if self.paid_amount < 0.0 {
            return Err(DraftError::NegativePaid);
        }
        if self.paid_amount > self.total_amount() {
            return Err(DraftError::PaidOverTotal);
        }
        if self.paid_amount > 0.0 && self.payment_type.is_none() {
            return Err(DraftError::MissingPaymentType);
        }
        Ok(())
    }

    /// Submission payload. Carries raw inputs only; derived amounts are
    /// left to the backend.
    pub fn to_dto(&self, id: Option<i64>) -> PurchaseDto {
        PurchaseDto {
            id,
            invoice_number: none_if_blank(&self.invoice_number),
            supplier_id: self.supplier_id,
            warehouse_id: self.warehouse_id,
            purchase_date: self.purchase_date.clone(),
            items: self
                .items
                .iter()
                .map(|item| PurchaseItemDto {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price: item.unit_price.unwrap_or(0.0),
                })
                .collect(),
            paid_amount: self.paid_amount,
            payment_type: self.payment_type,
            note: none_if_blank(&self.note),
        }
    }
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::purchase_status::PurchaseStatus;

    fn draft_with_lines(lines: &[(u32, f64)]) -> PurchaseDraft {
        let mut draft = PurchaseDraft::new("2026-02-11".to_string());
        draft.supplier_id = 3;
        draft.warehouse_id = 1;
        for (idx, (quantity, price)) in lines.iter().enumerate() {
            draft.add_item();
            draft.items[idx].product_id = idx as i64 + 10;
            draft.items[idx].product_name = format!("Product {}", idx + 1);
            draft.set_quantity(idx, *quantity);
            draft.set_unit_price(idx, Some(*price));
        }
        draft
    }

    #[test]
    fn totals_follow_every_edit() {
        let mut draft = draft_with_lines(&[(2, 10.0), (4, 2.5)]);
        assert_eq!(draft.items[0].total_price(), 20.0);
        assert_eq!(draft.items[1].total_price(), 10.0);
        assert_eq!(draft.total_amount(), 30.0);

        draft.set_quantity(1, 2);
        assert_eq!(draft.items[1].total_price(), 5.0);
        assert_eq!(draft.total_amount(), 25.0);

        draft.set_unit_price(0, Some(1.0));
        assert_eq!(draft.total_amount(), 7.0);

        draft.remove_item(0);
        assert_eq!(draft.total_amount(), 5.0);

        draft.remove_item(0);
        assert_eq!(draft.total_amount(), 0.0);
    }

    #[test]
    fn new_items_start_neutral() {
        let mut draft = PurchaseDraft::new("2026-02-11".to_string());
        draft.add_item();
        let item = &draft.items[0];
        assert_eq!(item.product_id, 0);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price, None);
        assert_eq!(item.total_price(), 0.0);
        assert_eq!(draft.total_amount(), 0.0);
    }

    #[test]
    fn unset_price_counts_as_zero_in_totals() {
        let mut draft = draft_with_lines(&[(2, 10.0)]);
        draft.add_item();
        draft.set_quantity(1, 5);
        assert_eq!(draft.total_amount(), 20.0);
    }

    #[test]
    fn remaining_is_total_minus_paid_and_never_negative() {
        let mut draft = draft_with_lines(&[(2, 10.0), (1, 5.0)]);
        assert_eq!(draft.total_amount(), 25.0);

        draft.paid_amount = 20.0;
        assert_eq!(draft.remaining_amount(), 5.0);

        draft.paid_amount = 40.0;
        assert_eq!(draft.remaining_amount(), 0.0);
    }

    #[test]
    fn exact_payoff_leaves_zero_remaining() {
        let mut draft = draft_with_lines(&[(3, 7.0)]);
        draft.paid_amount = 21.0;
        draft.payment_type = Some(PaymentType::Cash);
        assert_eq!(draft.remaining_amount(), 0.0);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn validation_rejects_each_broken_rule() {
        let mut draft = PurchaseDraft::new("2026-02-11".to_string());
        assert_eq!(draft.validate(), Err(DraftError::MissingSupplier));

        draft.supplier_id = 3;
        assert_eq!(draft.validate(), Err(DraftError::MissingWarehouse));

        draft.warehouse_id = 1;
        assert_eq!(draft.validate(), Err(DraftError::NoItems));

        draft.add_item();
        assert_eq!(draft.validate(), Err(DraftError::MissingProduct(1)));

        draft.items[0].product_id = 10;
        draft.set_quantity(0, 0);
        assert_eq!(draft.validate(), Err(DraftError::InvalidQuantity(1)));

        draft.set_quantity(0, 2);
        assert_eq!(draft.validate(), Err(DraftError::InvalidUnitPrice(1)));

        draft.set_unit_price(0, Some(0.0));
        assert_eq!(draft.validate(), Err(DraftError::InvalidUnitPrice(1)));

        draft.set_unit_price(0, Some(10.0));
        draft.paid_amount = -1.0;
        assert_eq!(draft.validate(), Err(DraftError::NegativePaid));

        draft.paid_amount = 25.0;
        assert_eq!(draft.validate(), Err(DraftError::PaidOverTotal));

        draft.paid_amount = 15.0;
        assert_eq!(draft.validate(), Err(DraftError::MissingPaymentType));

        draft.payment_type = Some(PaymentType::Card);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn faulty_line_is_reported_by_position() {
        let mut draft = draft_with_lines(&[(2, 10.0), (1, 5.0)]);
        draft.items[1].product_id = 0;
        assert_eq!(draft.validate(), Err(DraftError::MissingProduct(2)));
    }

    #[test]
    fn picking_a_product_prefills_catalog_price() {
        let product = Product {
            id: 42,
            name: "Drill".to_string(),
            barcode: None,
            unit: Some("pcs".to_string()),
            category_id: None,
            category_name: None,
            purchase_price: Some(89.9),
            sale_price: Some(120.0),
            attachment_name: None,
            description: None,
        };

        let mut draft = PurchaseDraft::new("2026-02-11".to_string());
        draft.add_item();
        draft.set_product(0, &product);

        assert_eq!(draft.items[0].product_id, 42);
        assert_eq!(draft.items[0].product_name, "Drill");
        assert_eq!(draft.items[0].unit_price, Some(89.9));
    }

    #[test]
    fn product_without_catalog_price_keeps_entry_pending() {
        let product = Product {
            id: 43,
            name: "Custom part".to_string(),
            barcode: None,
            unit: None,
            category_id: None,
            category_name: None,
            purchase_price: None,
            sale_price: None,
            attachment_name: None,
            description: None,
        };

        let mut draft = PurchaseDraft::new("2026-02-11".to_string());
        draft.add_item();
        draft.set_product(0, &product);

        assert_eq!(draft.items[0].product_id, 43);
        assert_eq!(draft.items[0].unit_price, None);
    }

    #[test]
    fn dto_carries_raw_inputs_only() {
        let mut draft = draft_with_lines(&[(2, 10.0)]);
        draft.invoice_number = " INV-1 ".to_string();
        draft.paid_amount = 5.0;
        draft.payment_type = Some(PaymentType::Cash);

        let dto = draft.to_dto(Some(7));
        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.invoice_number.as_deref(), Some("INV-1"));
        assert_eq!(dto.items.len(), 1);
        assert_eq!(dto.items[0].product_id, 10);
        assert_eq!(dto.items[0].quantity, 2);
        assert_eq!(dto.items[0].unit_price, 10.0);

        let json = serde_json::to_value(&dto.items[0]).unwrap();
        assert!(json.get("totalPrice").is_none());
    }

    #[test]
    fn draft_round_trips_through_a_stored_document() {
        use crate::domain::a009_purchase::aggregate::{Purchase, PurchaseItem};

        let stored = Purchase {
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

        let draft = PurchaseDraft::from_purchase(&stored);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].unit_price, Some(10.0));
        assert_eq!(draft.total_amount(), 20.0);
        assert_eq!(draft.remaining_amount(), 15.0);
        assert!(draft.validate().is_ok());
    }
}

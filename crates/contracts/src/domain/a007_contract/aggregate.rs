use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceFilter};
use crate::shared::attachment::is_allowed_attachment;

/// Customer contract with an optional scanned document attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: i64,

    /// Contract number, e.g. "C-2026-014".
    pub number: String,

    pub customer_id: i64,

    /// Customer name as resolved by the backend for display.
    pub customer_name: Option<String>,

    /// Signing date (YYYY-MM-DD).
    pub start_date: String,

    pub end_date: Option<String>,

    pub amount: Option<f64>,

    pub currency_id: Option<i64>,

    pub currency_code: Option<String>,

    /// Attached document, name only.
    pub attachment_name: Option<String>,

    pub note: Option<String>,
}

impl Resource for Contract {
    type Filter = ContractFilter;
    type Dto = ContractDto;

    fn base_path() -> &'static str {
        "contracts"
    }

    fn element_name() -> &'static str {
        "Contract"
    }

    fn list_name() -> &'static str {
        "Contracts"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> String {
        self.number.clone()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDto {
    pub id: Option<i64>,
    pub number: String,
    pub customer_id: i64,
    pub start_date: String,
    pub end_date: Option<String>,
    pub amount: Option<f64>,
    pub currency_id: Option<i64>,
    pub attachment_name: Option<String>,
    pub note: Option<String>,
}

impl ContractDto {
    pub fn from_entity(entity: &Contract) -> Self {
        Self {
            id: Some(entity.id),
            number: entity.number.clone(),
            customer_id: entity.customer_id,
            start_date: entity.start_date.clone(),
            end_date: entity.end_date.clone(),
            amount: entity.amount,
            currency_id: entity.currency_id,
            attachment_name: entity.attachment_name.clone(),
            note: entity.note.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.number.trim().is_empty() {
            return Err("Contract number cannot be empty".into());
        }
        if self.customer_id <= 0 {
            return Err("Select a customer".into());
        }
        if self.start_date.trim().is_empty() {
            return Err("Start date is required".into());
        }
        if let (Some(end), start) = (&self.end_date, &self.start_date) {
            // ISO dates compare correctly as strings
            if end < start {
                return Err("End date cannot be before the start date".into());
            }
        }
        if let Some(amount) = self.amount {
            if amount < 0.0 {
                return Err("Amount cannot be negative".into());
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
pub struct ContractFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl ResourceFilter for ContractFilter {
    fn active_count(&self) -> usize {
        [
            self.number.is_some(),
            self.customer_id.is_some(),
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

    fn valid_dto() -> ContractDto {
        ContractDto {
            number: "C-2026-001".to_string(),
            customer_id: 4,
            start_date: "2026-01-15".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn end_date_must_follow_start() {
        let mut dto = valid_dto();
        dto.end_date = Some("2025-12-31".to_string());
        assert!(dto.validate().is_err());

        dto.end_date = Some("2026-06-30".to_string());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn attachment_extension_is_checked() {
        let mut dto = valid_dto();
        dto.attachment_name = Some("scan.pdf".to_string());
        assert!(dto.validate().is_ok());

        dto.attachment_name = Some("scan.png".to_string());
        assert!(dto.validate().is_err());
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceFilter};

/// Currency reference entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: i64,

    pub name: String,

    /// Short code shown in documents, e.g. "AZN".
    pub code: String,

    pub symbol: Option<String>,
}

impl Resource for Currency {
    type Filter = CurrencyFilter;
    type Dto = CurrencyDto;

    fn base_path() -> &'static str {
        "currencies"
    }

    fn element_name() -> &'static str {
        "Currency"
    }

    fn list_name() -> &'static str {
        "Currencies"
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
pub struct CurrencyDto {
    pub id: Option<i64>,
    pub name: String,
    pub code: String,
    pub symbol: Option<String>,
}

impl CurrencyDto {
    pub fn from_entity(entity: &Currency) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name.clone(),
            code: entity.code.clone(),
            symbol: entity.symbol.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".into());
        }
        if self.code.trim().is_empty() {
            return Err("Code cannot be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ResourceFilter for CurrencyFilter {
    fn active_count(&self) -> usize {
        [self.name.is_some(), self.code.is_some()]
            .into_iter()
            .filter(|set| *set)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_serializes_only_set_fields() {
        let filter = CurrencyFilter {
            name: Some("Manat".to_string()),
            code: None,
        };
        let body = serde_json::to_string(&filter).unwrap();
        assert_eq!(body, r#"{"name":"Manat"}"#);
        assert_eq!(filter.active_count(), 1);
        assert!(CurrencyFilter::default().is_empty());
    }

    #[test]
    fn dto_requires_name_and_code() {
        let mut dto = CurrencyDto {
            name: "Manat".to_string(),
            code: "AZN".to_string(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        dto.code = "  ".to_string();
        assert!(dto.validate().is_err());
    }
}

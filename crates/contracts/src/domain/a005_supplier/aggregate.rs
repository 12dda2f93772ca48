use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceFilter};

/// Counterparty goods are purchased from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: i64,

    pub name: String,

    pub contact_name: Option<String>,

    pub phone: Option<String>,

    pub email: Option<String>,

    pub address: Option<String>,
}

impl Resource for Supplier {
    type Filter = SupplierFilter;
    type Dto = SupplierDto;

    fn base_path() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

/// Create/update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDto {
    pub id: Option<i64>,
    pub name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl SupplierDto {
    pub fn from_entity(entity: &Supplier) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name.clone(),
            contact_name: entity.contact_name.clone(),
            phone: entity.phone.clone(),
            email: entity.email.clone(),
            address: entity.address.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".into());
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err("Email address is not valid".into());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ResourceFilter for SupplierFilter {
    fn active_count(&self) -> usize {
        [
            self.name.is_some(),
            self.phone.is_some(),
            self.email.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceFilter};

/// Counterparty contracts are signed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,

    pub name: String,

    pub phone: Option<String>,

    pub email: Option<String>,

    pub address: Option<String>,
}

impl Resource for Customer {
    type Filter = CustomerFilter;
    type Dto = CustomerDto;

    fn base_path() -> &'static str {
        "customers"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
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
pub struct CustomerDto {
    pub id: Option<i64>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl CustomerDto {
    pub fn from_entity(entity: &Customer) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name.clone(),
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
pub struct CustomerFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ResourceFilter for CustomerFilter {
    fn active_count(&self) -> usize {
        [self.name.is_some(), self.phone.is_some()]
            .into_iter()
            .filter(|set| *set)
            .count()
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceFilter};

/// Storage location goods are received into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: i64,

    pub name: String,

    pub address: Option<String>,

    pub phone: Option<String>,
}

impl Resource for Warehouse {
    type Filter = WarehouseFilter;
    type Dto = WarehouseDto;

    fn base_path() -> &'static str {
        "warehouses"
    }

    fn element_name() -> &'static str {
        "Warehouse"
    }

    fn list_name() -> &'static str {
        "Warehouses"
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
pub struct WarehouseDto {
    pub id: Option<i64>,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl WarehouseDto {
    pub fn from_entity(entity: &Warehouse) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name.clone(),
            address: entity.address.clone(),
            phone: entity.phone.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ResourceFilter for WarehouseFilter {
    fn active_count(&self) -> usize {
        [self.name.is_some(), self.address.is_some()]
            .into_iter()
            .filter(|set| *set)
            .count()
    }
}

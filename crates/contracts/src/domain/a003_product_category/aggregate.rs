use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceFilter};

/// Grouping node of the product catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: i64,

    pub name: String,

    pub description: Option<String>,
}

impl Resource for ProductCategory {
    type Filter = ProductCategoryFilter;
    type Dto = ProductCategoryDto;

    fn base_path() -> &'static str {
        "product-categories"
    }

    fn element_name() -> &'static str {
        "Product category"
    }

    fn list_name() -> &'static str {
        "Product categories"
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
pub struct ProductCategoryDto {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

impl ProductCategoryDto {
    pub fn from_entity(entity: &ProductCategory) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name.clone(),
            description: entity.description.clone(),
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
pub struct ProductCategoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ResourceFilter for ProductCategoryFilter {
    fn active_count(&self) -> usize {
        usize::from(self.name.is_some())
    }
}

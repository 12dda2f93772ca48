use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceFilter};

/// Operating expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,

    pub title: String,

    pub amount: f64,

    /// Expense date (YYYY-MM-DD).
    pub expense_date: String,

    pub note: Option<String>,
}

impl Resource for Expense {
    type Filter = ExpenseFilter;
    type Dto = ExpenseDto;

    fn base_path() -> &'static str {
        "expenses"
    }

    fn element_name() -> &'static str {
        "Expense"
    }

    fn list_name() -> &'static str {
        "Expenses"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

/// Create/update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDto {
    pub id: Option<i64>,
    pub title: String,
    pub amount: f64,
    pub expense_date: String,
    pub note: Option<String>,
}

impl ExpenseDto {
    pub fn from_entity(entity: &Expense) -> Self {
        Self {
            id: Some(entity.id),
            title: entity.title.clone(),
            amount: entity.amount,
            expense_date: entity.expense_date.clone(),
            note: entity.note.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".into());
        }
        if self.amount <= 0.0 {
            return Err("Amount must be greater than zero".into());
        }
        if self.expense_date.trim().is_empty() {
            return Err("Date is required".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl ResourceFilter for ExpenseFilter {
    fn active_count(&self) -> usize {
        [
            self.title.is_some(),
            self.date_from.is_some(),
            self.date_to.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

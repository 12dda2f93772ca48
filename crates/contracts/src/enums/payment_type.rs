use serde::{Deserialize, Serialize};

/// How the paid part of a purchase was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Cash,
    Card,
    BankTransfer,
}

impl PaymentType {
    /// Wire code of the payment type.
    pub fn code(&self) -> &'static str {
        match self {
            PaymentType::Cash => "CASH",
            PaymentType::Card => "CARD",
            PaymentType::BankTransfer => "BANK_TRANSFER",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentType::Cash => "Cash",
            PaymentType::Card => "Card",
            PaymentType::BankTransfer => "Bank transfer",
        }
    }

    /// All payment types, for selects.
    pub fn all() -> Vec<PaymentType> {
        vec![PaymentType::Cash, PaymentType::Card, PaymentType::BankTransfer]
    }

    /// Parse from a wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CASH" => Some(PaymentType::Cash),
            "CARD" => Some(PaymentType::Card),
            "BANK_TRANSFER" => Some(PaymentType::BankTransfer),
            _ => None,
        }
    }
}

impl ToString for PaymentType {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

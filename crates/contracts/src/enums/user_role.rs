use serde::{Deserialize, Serialize};

/// Access level of a dashboard account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    /// Wire code of the role.
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::User => "User",
        }
    }

    /// All roles, for selects.
    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Admin, UserRole::User]
    }

    /// Parse from a wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ADMIN" => Some(UserRole::Admin),
            "USER" => Some(UserRole::User),
            _ => None,
        }
    }
}

impl ToString for UserRole {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

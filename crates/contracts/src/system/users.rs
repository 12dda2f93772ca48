use serde::{Deserialize, Serialize};

use crate::domain::common::{Resource, ResourceFilter};
use crate::enums::user_role::UserRole;
use crate::shared::attachment::is_allowed_attachment;

/// Dashboard account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    pub username: String,

    pub full_name: Option<String>,

    pub email: Option<String>,

    pub role: UserRole,

    pub active: bool,

    /// Attached document (signed agreement), name only.
    pub attachment_name: Option<String>,
}

impl Resource for User {
    type Filter = UserFilter;
    type Dto = UserDto;

    fn base_path() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> String {
        self.username.clone()
    }
}

/// Create/update payload. `password` is required on create and, when left
/// empty on update, keeps the stored one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<i64>,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: UserRole,
    pub active: bool,
    pub attachment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Default for UserDto {
    fn default() -> Self {
        Self {
            id: None,
            username: String::new(),
            full_name: None,
            email: None,
            role: UserRole::User,
            active: true,
            attachment_name: None,
            password: None,
        }
    }
}

impl UserDto {
    pub fn from_entity(entity: &User) -> Self {
        Self {
            id: Some(entity.id),
            username: entity.username.clone(),
            full_name: entity.full_name.clone(),
            email: entity.email.clone(),
            role: entity.role,
            active: entity.active,
            attachment_name: entity.attachment_name.clone(),
            password: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username cannot be empty".into());
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err("Email address is not valid".into());
            }
        }
        match (&self.id, &self.password) {
            (None, None) => return Err("Password is required for a new user".into()),
            (_, Some(password)) if password.len() < 6 => {
                return Err("Password must be at least 6 characters".into())
            }
            _ => {}
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
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl ResourceFilter for UserFilter {
    fn active_count(&self) -> usize {
        [self.username.is_some(), self.role.is_some()]
            .into_iter()
            .filter(|set| *set)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_needs_a_password() {
        let dto = UserDto {
            username: "admin".to_string(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = UserDto {
            username: "admin".to_string(),
            password: Some("secret1".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn existing_user_keeps_password_when_blank() {
        let dto = UserDto {
            id: Some(4),
            username: "admin".to_string(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}

pub mod storage;

use contracts::enums::user_role::UserRole;
use contracts::system::auth::SessionUser;
use leptos::prelude::*;

/// Reactive handle on the signed-in session.
///
/// Provided once at the application root and injected everywhere through
/// [`use_session`], so components never reach for storage directly.
#[derive(Clone, Copy)]
pub struct Session {
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<SessionUser>>,
}

impl Session {
    /// Build the session from whatever localStorage still holds.
    pub fn restore() -> Self {
        Self {
            token: RwSignal::new(storage::load_token()),
            user: RwSignal::new(storage::load_user()),
        }
    }

    pub fn sign_in(&self, token: String, user: SessionUser) {
        storage::save_session(&token, &user);
        self.token.set(Some(token));
        self.user.set(Some(user));
    }

    /// Forget the token locally. The backend invalidates it by expiry,
    /// so there is no sign-out request to send.
    pub fn sign_out(&self) {
        storage::clear_session();
        self.token.set(None);
        self.user.set(None);
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .with(|u| u.as_ref().map(|u| u.role == UserRole::Admin).unwrap_or(false))
    }

    pub fn display_name(&self) -> String {
        self.user
            .with(|u| u.as_ref().map(|u| u.display_name().to_string()))
            .unwrap_or_else(|| "Guest".to_string())
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided in component tree")
}

use contracts::system::auth::SessionUser;
use web_sys::window;

const TOKEN_KEY: &str = "erp_session_token";
const USER_KEY: &str = "erp_session_user";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the bearer token and the signed-in user profile.
///
/// The profile is stored as JSON next to the token so a page reload can
/// restore the header chip without an extra round trip.
pub fn save_session(token: &str, user: &SessionUser) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

pub fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn load_user() -> Option<SessionUser> {
    let json = local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

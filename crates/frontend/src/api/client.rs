use contracts::domain::a009_purchase::aggregate::Purchase;
use contracts::domain::common::Resource;
use contracts::enums::purchase_status::PurchaseStatus;
use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::{Request, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::error::{parse_error_body, ApiError};
use crate::session::Session;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Typed gateway to the REST backend.
///
/// Every authenticated call reads the bearer token from the injected
/// [`Session`] first; with no token present the request is never issued
/// and the caller gets [`ApiError::Unauthorized`] straight away. A 401
/// answer resets the session, which routes the app back to the login
/// screen.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: Session,
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided in component tree")
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.session
            .token
            .get_untracked()
            .map(|token| format!("Bearer {}", token))
            .ok_or(ApiError::Unauthorized)
    }

    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.status() == 401 {
            self.session.sign_out();
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(parse_error_body(status, &body));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ========================================================================
    // Generic CRUD surface
    // ========================================================================

    /// POST `/{resource}/filter` with the sparse criteria body.
    pub async fn filter<T: Resource>(&self, filter: &T::Filter) -> Result<Vec<T>, ApiError> {
        let auth = self.bearer()?;
        let response = Request::post(&format!("{}/api/{}/filter", api_base(), T::base_path()))
            .header("Authorization", &auth)
            .json(filter)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        self.decode(response).await
    }

    pub async fn get<T: Resource>(&self, id: i64) -> Result<T, ApiError> {
        let auth = self.bearer()?;
        let response = Request::get(&format!("{}/api/{}/{}", api_base(), T::base_path(), id))
            .header("Authorization", &auth)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        self.decode(response).await
    }

    pub async fn create<T: Resource>(&self, dto: &T::Dto) -> Result<T, ApiError> {
        let auth = self.bearer()?;
        let response = Request::post(&format!("{}/api/{}", api_base(), T::base_path()))
            .header("Authorization", &auth)
            .json(dto)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        self.decode(response).await
    }

    pub async fn update<T: Resource>(&self, id: i64, dto: &T::Dto) -> Result<T, ApiError> {
        let auth = self.bearer()?;
        let response = Request::put(&format!("{}/api/{}/{}", api_base(), T::base_path(), id))
            .header("Authorization", &auth)
            .json(dto)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        self.decode(response).await
    }

    /// DELETE answers with an empty body, so nothing is decoded.
    pub async fn delete<T: Resource>(&self, id: i64) -> Result<(), ApiError> {
        let auth = self.bearer()?;
        let response = Request::delete(&format!("{}/api/{}/{}", api_base(), T::base_path(), id))
            .header("Authorization", &auth)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.check(response).await?;
        Ok(())
    }

    // ========================================================================
    // Non-CRUD endpoints
    // ========================================================================

    /// PUT `/purchases/{id}/status?status={CODE}`. The target status
    /// travels in the query string and the body stays empty.
    pub async fn set_purchase_status(
        &self,
        id: i64,
        status: PurchaseStatus,
    ) -> Result<Purchase, ApiError> {
        let auth = self.bearer()?;
        let url = format!(
            "{}/api/{}/{}/status?status={}",
            api_base(),
            Purchase::base_path(),
            id,
            status.code()
        );
        let response = Request::put(&url)
            .header("Authorization", &auth)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.check(response).await?;
        self.decode(response).await
    }

    /// The only unauthenticated call. A bare 401 becomes a credentials
    /// message instead of the session-expired text.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = Request::post(&format!("{}/api/auth/login", api_base()))
            .json(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(match parse_error_body(status, &body) {
                ApiError::Http(401) => ApiError::Rejected {
                    status: 401,
                    message: "Invalid username or password".to_string(),
                    field_errors: Default::default(),
                },
                other => other,
            });
        }
        self.decode(response).await
    }
}

use serde_json::{json, Value};

use crate::models::{AuthData, ProfileData, RegisterPayload};
use crate::services::{ApiError, Http};

pub async fn login(http: &Http, username: &str, password: &str) -> Result<AuthData, ApiError> {
    http.post(
        "/api/auth/login",
        &json!({ "username": username, "password": password }),
    )
    .await
}

pub async fn register(http: &Http, payload: &RegisterPayload) -> Result<AuthData, ApiError> {
    http.post("/api/auth/register", payload).await
}

pub async fn profile(http: &Http) -> Result<ProfileData, ApiError> {
    http.get("/api/auth/profile").await
}

/// Server side is stateless about logout; deleting the token locally is
/// what actually ends the session.
pub async fn logout(http: &Http) -> Result<Value, ApiError> {
    http.post("/api/auth/logout", &json!({})).await
}

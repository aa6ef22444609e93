//! Authentication Endpoints

use serde::Deserialize;
use serde_json::json;
use web_sys::AbortSignal;

use super::{error_for, get_json, post, ApiError};
use crate::models::CurrentUser;

/// `POST /login` payload on success.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<LoginUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    #[serde(rename = "isAuthenticated", default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
}

impl LoginResponse {
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_authenticated)
    }
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: String,
}

/// Ask the server who owns the current session cookie.
pub async fn current_user(signal: Option<&AbortSignal>) -> Result<CurrentUser, ApiError> {
    get_json("/current_user", signal).await
}

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let resp = post("/login")
        .json(&json!({ "username": username, "password": password }))?
        .send()
        .await?;
    if resp.ok() {
        resp.json().await.map_err(ApiError::from)
    } else {
        Err(error_for(resp).await)
    }
}

pub async fn logout() -> Result<(), ApiError> {
    let resp = post("/logout").json(&json!({}))?.send().await?;
    if resp.ok() {
        Ok(())
    } else {
        Err(error_for(resp).await)
    }
}

/// Create an account; the server answers 201 on success.
pub async fn register(username: &str, password: &str) -> Result<(), ApiError> {
    let resp = post("/register")
        .json(&json!({ "username": username, "password": password }))?
        .send()
        .await?;
    if resp.ok() {
        Ok(())
    } else {
        Err(error_for(resp).await)
    }
}

/// Change the logged-in user's password, returning the server's
/// acknowledgement message.
pub async fn change_password(current: &str, new: &str) -> Result<String, ApiError> {
    let resp = post("/change_password")
        .json(&json!({ "currentPassword": current, "newPassword": new }))?
        .send()
        .await?;
    if resp.ok() {
        let body: MessageBody = resp.json().await.map_err(ApiError::from)?;
        Ok(body.message)
    } else {
        Err(error_for(resp).await)
    }
}

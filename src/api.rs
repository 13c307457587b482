//! Users API
//!
//! The single remote call: fetch the initial user list.

use crate::error::FetchError;
use crate::models::User;

/// GET the users endpoint
pub async fn fetch_users(url: &str) -> Result<Vec<User>, FetchError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    parse_users(&body)
}

/// Decode a JSON array of users
pub fn parse_users(body: &str) -> Result<Vec<User>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

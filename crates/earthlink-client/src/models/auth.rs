//! Auth wire models

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignUpResponse {
    #[serde(alias = "userID", alias = "user_uid", alias = "uid")]
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateResponse {
    #[serde(rename = "userID", alias = "user_id")]
    pub user_id: String,
}

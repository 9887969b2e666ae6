//! Wire types for the auth API. Field names follow the server's camelCase JSON.

use serde::{Deserialize, Serialize};

/// Body of `POST /Auth/signin`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Successful `POST /Auth/signin` response.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SigninResponse {
    pub token: String,
}

/// Body of `POST /Auth/signup`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    /// ISO-8601 datetime, e.g. `1990-05-01T00:00:00.000Z`.
    pub date_of_birth: String,
    pub gender: String,
}

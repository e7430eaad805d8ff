pub mod login;
pub mod refresh;
pub mod register;

use crate::auth::IssuedToken;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Bearer token returned by login and refresh.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            expires_at: issued.expires_at,
        }
    }
}

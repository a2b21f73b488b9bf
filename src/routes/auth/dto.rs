use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::sea_orm_active_enums::RoleEnum;

/// OAuth2 password-flow form; `username` carries the email.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    #[schema(example = "user@dept.edu")]
    pub username: String,

    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub role: RoleEnum,
}

impl LoginResponse {
    pub fn bearer(access_token: String, expires_in: i64, role: RoleEnum) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
            role,
        }
    }
}

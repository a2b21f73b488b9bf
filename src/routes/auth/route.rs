use axum::{Json, Router, extract::State, routing::post};

use super::dto::{LoginForm, LoginResponse};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extractor::AppForm;
use crate::repositories::UserRepository;
use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Exchanges email and password for a bearer token.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 403, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    AppForm(form): AppForm<LoginForm>,
) -> AppResult<Json<LoginResponse>> {
    let user = UserRepository::new(&state.db)
        .find_by_email(form.username.trim())
        .await?;

    // Unknown email and wrong password are reported the same way.
    let user = match user {
        Some(user) if verify_password(&form.password, &user.password) => user,
        _ => {
            tracing::info!("rejected login attempt");
            return Err(AppError::InvalidCredentials);
        }
    };

    let expires_in = state.config.jwt_expires_in;
    let token = state.jwt.create_jwt(user.id, user.role, expires_in)?;

    tracing::info!(user_id = %user.id, role = user.role.as_str(), "user logged in");
    Ok(Json(LoginResponse::bearer(token, expires_in, user.role)))
}

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use uuid::Uuid;

use crate::entities::{sea_orm_active_enums::RoleEnum, user};
use crate::error::AppError;
use crate::repositories::UserRepository;
use crate::state::AppState;

/// `axum::Json` whose rejections are reported as `AppError::InvalidInput`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// The profile row a user is linked to, keyed by its own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Student(Uuid),
    Teacher(Uuid),
    Admin(Uuid),
}

impl Profile {
    pub fn id(&self) -> Uuid {
        match self {
            Profile::Student(id) | Profile::Teacher(id) | Profile::Admin(id) => *id,
        }
    }
}

/// The authenticated caller, resolved from the bearer token on every request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: user::Model,
    pub profile: Option<Profile>,
}

impl CurrentUser {
    pub fn id(&self) -> Uuid {
        self.user.id
    }

    pub fn role(&self) -> RoleEnum {
        self.user.role
    }

    pub fn student_id(&self) -> Option<Uuid> {
        match self.profile {
            Some(Profile::Student(id)) => Some(id),
            _ => None,
        }
    }

    pub fn teacher_id(&self) -> Option<Uuid> {
        match self.profile {
            Some(Profile::Teacher(id)) => Some(id),
            _ => None,
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::unauthenticated())?;

        let claims = state.jwt.decode_jwt(bearer.token()).map_err(|err| {
            tracing::debug!("rejected token: {}", err);
            AppError::unauthenticated()
        })?;

        let (user, profile) = UserRepository::new(&state.db)
            .find_with_profile(claims.sub)
            .await?
            .ok_or_else(AppError::unauthenticated)?;

        Ok(CurrentUser { user, profile })
    }
}

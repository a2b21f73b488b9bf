use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get},
};
use uuid::Uuid;

use super::dto::{ContactQueryParams, ContactRequest};
use crate::entities::contact_message;
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, AppQuery, CurrentUser};
use crate::policy::{self, ADMIN_ONLY};
use crate::repositories::ContactRepository;
use crate::routes::MessageResponse;
use crate::state::AppState;
use crate::utils::pagination::{Paged, Pagination};

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/contact", get(list_messages).post(submit_message))
        .route("/contact/{message_id}", delete(delete_message))
}

#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message received", body = contact_message::Model),
        (status = 400, description = "Missing or invalid field")
    ),
    tag = "Contact"
)]
pub async fn submit_message(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ContactRequest>,
) -> AppResult<(StatusCode, Json<contact_message::Model>)> {
    payload.validate()?;

    let message = ContactRepository::new(&state.db)
        .create(
            payload.first_name,
            payload.last_name,
            payload.email,
            payload.subject,
            payload.message,
        )
        .await?;
    tracing::info!(message_id = %message.id, "contact message received");

    Ok((StatusCode::CREATED, Json(message)))
}

#[utoipa::path(
    get,
    path = "/contact",
    params(ContactQueryParams),
    responses(
        (status = 200, description = "Contact messages page", body = Paged<contact_message::Model>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Contact"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppQuery(params): AppQuery<ContactQueryParams>,
) -> AppResult<Json<Paged<contact_message::Model>>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let pagination = Pagination::new(params.page, params.page_size)?;
    let (messages, total) = ContactRepository::new(&state.db)
        .find_all_with_pagination(pagination)
        .await?;

    Ok(Json(Paged::new(messages, total, pagination)))
}

#[utoipa::path(
    delete,
    path = "/contact/{message_id}",
    params(("message_id" = Uuid, Path, description = "Contact message id")),
    responses(
        (status = 200, description = "Message deleted", body = MessageResponse),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Message not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Contact"
)]
pub async fn delete_message(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(message_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let contact_repo = ContactRepository::new(&state.db);
    contact_repo
        .find_by_id(message_id)
        .await?
        .ok_or_else(|| AppError::not_found("Message not found"))?;
    contact_repo.delete(message_id).await?;

    Ok(Json(MessageResponse::new("Message deleted successfully")))
}

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
};
use sea_orm::TransactionTrait;
use uuid::Uuid;

use super::dto::{CreateEquipmentRequest, UpdateEquipmentRequest};
use crate::entities::{equipment, equipment_booking};
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, CurrentUser};
use crate::policy::{self, ADMIN_ONLY};
use crate::repositories::EquipmentRepository;
use crate::routes::MessageResponse;
use crate::state::AppState;
use crate::utils::patch::non_null;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/equipment", get(list_equipment).post(create_equipment))
        .route(
            "/equipment/{equipment_id}",
            put(update_equipment).delete(delete_equipment),
        )
        .route("/equipment/{equipment_id}/book", post(book_equipment))
        .route("/equipment/bookings/my", get(my_bookings))
        .route(
            "/equipment/bookings/{booking_id}/return",
            post(return_equipment),
        )
}

#[utoipa::path(
    post,
    path = "/equipment",
    request_body = CreateEquipmentRequest,
    responses(
        (status = 201, description = "Equipment added", body = equipment::Model),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Equipment"
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<CreateEquipmentRequest>,
) -> AppResult<(StatusCode, Json<equipment::Model>)> {
    policy::require_role(&caller, ADMIN_ONLY)?;
    let item = EquipmentRepository::new(&state.db)
        .create(payload.name, payload.availability)
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/equipment/{equipment_id}",
    params(("equipment_id" = Uuid, Path, description = "Equipment id")),
    request_body = UpdateEquipmentRequest,
    responses(
        (status = 200, description = "Equipment updated", body = equipment::Model),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Equipment not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Equipment"
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(equipment_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateEquipmentRequest>,
) -> AppResult<Json<equipment::Model>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let equipment_repo = EquipmentRepository::new(&state.db);
    let item = equipment_repo
        .find_by_id(equipment_id)
        .await?
        .ok_or_else(|| AppError::not_found("Equipment not found"))?;

    let updated = equipment_repo
        .update(
            item,
            non_null("name", payload.name)?,
            non_null("availability", payload.availability)?,
        )
        .await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/equipment/{equipment_id}",
    params(("equipment_id" = Uuid, Path, description = "Equipment id")),
    responses(
        (status = 200, description = "Equipment deleted", body = MessageResponse),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Equipment not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Equipment"
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(equipment_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let equipment_repo = EquipmentRepository::new(&state.db);
    equipment_repo
        .find_by_id(equipment_id)
        .await?
        .ok_or_else(|| AppError::not_found("Equipment not found"))?;
    let txn = state.db.begin().await?;
    EquipmentRepository::new(&txn).delete(equipment_id).await?;
    txn.commit().await?;

    Ok(Json(MessageResponse::new("Equipment deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/equipment",
    responses((status = 200, description = "All equipment", body = Vec<equipment::Model>)),
    security(("bearer_auth" = [])),
    tag = "Equipment"
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    _caller: CurrentUser,
) -> AppResult<Json<Vec<equipment::Model>>> {
    let items = EquipmentRepository::new(&state.db).find_all().await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/equipment/{equipment_id}/book",
    params(("equipment_id" = Uuid, Path, description = "Equipment id")),
    responses(
        (status = 201, description = "Equipment booked", body = equipment_booking::Model),
        (status = 403, description = "Student only"),
        (status = 404, description = "Equipment not found"),
        (status = 409, description = "Equipment is not available")
    ),
    security(("bearer_auth" = [])),
    tag = "Equipment"
)]
pub async fn book_equipment(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(equipment_id): AppPath<Uuid>,
) -> AppResult<(StatusCode, Json<equipment_booking::Model>)> {
    let student_id = policy::require_student(&caller)?;

    let txn = state.db.begin().await?;
    let equipment_repo = EquipmentRepository::new(&txn);
    let item = equipment_repo
        .find_by_id(equipment_id)
        .await?
        .ok_or_else(|| AppError::not_found("Equipment not found"))?;
    if !item.availability {
        return Err(AppError::conflict("Equipment is not available"));
    }

    let booking = equipment_repo.book(item, student_id).await?;
    txn.commit().await?;
    tracing::info!(booking_id = %booking.id, equipment_id = %equipment_id, "equipment booked");
    Ok((StatusCode::CREATED, Json(booking)))
}

#[utoipa::path(
    get,
    path = "/equipment/bookings/my",
    responses(
        (status = 200, description = "Caller's equipment bookings", body = Vec<equipment_booking::Model>),
        (status = 403, description = "Student only")
    ),
    security(("bearer_auth" = [])),
    tag = "Equipment"
)]
pub async fn my_bookings(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<Vec<equipment_booking::Model>>> {
    let student_id = policy::require_student(&caller)?;
    let bookings = EquipmentRepository::new(&state.db)
        .find_bookings_by_student(student_id)
        .await?;
    Ok(Json(bookings))
}

/// Only the student who booked the item may return it.
#[utoipa::path(
    post,
    path = "/equipment/bookings/{booking_id}/return",
    params(("booking_id" = Uuid, Path, description = "Equipment booking id")),
    responses(
        (status = 200, description = "Equipment returned", body = equipment_booking::Model),
        (status = 400, description = "Already returned"),
        (status = 403, description = "Not the borrower"),
        (status = 404, description = "Booking not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Equipment"
)]
pub async fn return_equipment(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(booking_id): AppPath<Uuid>,
) -> AppResult<Json<equipment_booking::Model>> {
    policy::require_student(&caller)?;

    let equipment_repo = EquipmentRepository::new(&state.db);
    let booking = equipment_repo
        .find_booking_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::not_found("Booking not found"))?;
    policy::require_owner(&caller, Some(booking.student_id))?;
    if booking.return_date.is_some() {
        return Err(AppError::invalid_input("Equipment already returned"));
    }

    let txn = state.db.begin().await?;
    let returned = EquipmentRepository::new(&txn).return_booking(booking).await?;
    txn.commit().await?;
    Ok(Json(returned))
}

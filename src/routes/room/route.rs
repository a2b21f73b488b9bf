use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use sea_orm::TransactionTrait;

use super::dto::{
    AddRoomRequest, BookRoomRequest, BookingQueryParams, RoomFilterParams,
    UpdateBookingStatusRequest,
};
use crate::entities::{room, room_booking};
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, AppQuery, CurrentUser};
use crate::policy::{self, ADMIN_ONLY, STAFF};
use crate::repositories::{BookingFilter, RoomFilter, RoomRepository};
use crate::routes::MessageResponse;
use crate::services::booking;
use crate::state::AppState;
use crate::utils::pagination::{Paged, Pagination};

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/room/add", post(add_room))
        .route("/room/all", get(list_rooms))
        .route("/room/filter", get(filter_rooms))
        .route("/room/book", post(book_room))
        .route("/room/booking/status", put(update_booking_status))
        .route("/room/bookings", get(list_bookings))
        .route("/room/{room_id}", delete(delete_room))
}

#[utoipa::path(
    post,
    path = "/room/add",
    request_body = AddRoomRequest,
    responses(
        (status = 201, description = "Room added", body = room::Model),
        (status = 400, description = "Room already exists"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Room"
)]
pub async fn add_room(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<AddRoomRequest>,
) -> AppResult<(StatusCode, Json<room::Model>)> {
    policy::require_role(&caller, ADMIN_ONLY)?;
    if payload.capacity <= 0 {
        return Err(AppError::invalid_input("capacity must be positive"));
    }

    let room_repo = RoomRepository::new(&state.db);
    if room_repo.find_by_id(payload.room_id).await?.is_some() {
        return Err(AppError::already_exists("Room already exists"));
    }

    let room = room_repo
        .create(payload.room_id, payload.location, payload.capacity)
        .await?;
    Ok((StatusCode::CREATED, Json(room)))
}

#[utoipa::path(
    get,
    path = "/room/all",
    responses(
        (status = 200, description = "All rooms", body = Vec<room::Model>),
        (status = 403, description = "Admin or teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Room"
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<Vec<room::Model>>> {
    policy::require_role(&caller, STAFF)?;
    let rooms = RoomRepository::new(&state.db).find_all().await?;
    Ok(Json(rooms))
}

/// Rooms matching location and capacity. With a date and time window, only
/// rooms with no approved booking overlapping it are returned.
#[utoipa::path(
    get,
    path = "/room/filter",
    params(RoomFilterParams),
    responses(
        (status = 200, description = "Matching rooms", body = Vec<room::Model>),
        (status = 400, description = "Incomplete or empty window"),
        (status = 403, description = "Admin or teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Room"
)]
pub async fn filter_rooms(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppQuery(params): AppQuery<RoomFilterParams>,
) -> AppResult<Json<Vec<room::Model>>> {
    policy::require_role(&caller, STAFF)?;
    let window = params.window()?;
    let filter = RoomFilter {
        location: params.location,
        min_capacity: params.min_capacity,
    };
    let rooms = booking::available_rooms(&state.db, &filter, window).await?;
    Ok(Json(rooms))
}

#[utoipa::path(
    post,
    path = "/room/book",
    request_body = BookRoomRequest,
    responses(
        (status = 201, description = "Room booked", body = room_booking::Model),
        (status = 400, description = "start_time must be before end_time"),
        (status = 403, description = "Admin or teacher only"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room is already booked for this time slot")
    ),
    security(("bearer_auth" = [])),
    tag = "Room"
)]
pub async fn book_room(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<BookRoomRequest>,
) -> AppResult<(StatusCode, Json<room_booking::Model>)> {
    let booking = booking::book_room(&state.db, &caller, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

#[utoipa::path(
    put,
    path = "/room/booking/status",
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = room_booking::Model),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Booking not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Room"
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<UpdateBookingStatusRequest>,
) -> AppResult<Json<room_booking::Model>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let room_repo = RoomRepository::new(&state.db);
    let booking = room_repo
        .find_booking_by_id(payload.booking_id)
        .await?
        .ok_or_else(|| AppError::not_found("Booking not found"))?;

    let updated = room_repo
        .update_booking_status(booking, payload.status)
        .await?;
    tracing::info!(booking_id = %updated.id, status = ?updated.status, "booking status changed");
    Ok(Json(updated))
}

#[utoipa::path(
    get,
    path = "/room/bookings",
    params(BookingQueryParams),
    responses(
        (status = 200, description = "Bookings page", body = Paged<room_booking::Model>),
        (status = 403, description = "Admin or teacher only")
    ),
    security(("bearer_auth" = [])),
    tag = "Room"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppQuery(params): AppQuery<BookingQueryParams>,
) -> AppResult<Json<Paged<room_booking::Model>>> {
    policy::require_role(&caller, STAFF)?;
    let pagination = Pagination::new(params.page, params.page_size)?;
    let filter = BookingFilter {
        room_id: params.room_id,
        date: params.date,
        status: params.status,
        user_id: params.mine.then(|| caller.id()),
    };

    let (bookings, total) = RoomRepository::new(&state.db)
        .find_bookings_with_pagination(filter, pagination)
        .await?;
    Ok(Json(Paged::new(bookings, total, pagination)))
}

#[utoipa::path(
    delete,
    path = "/room/{room_id}",
    params(("room_id" = i32, Path, description = "Room number")),
    responses(
        (status = 200, description = "Room deleted", body = MessageResponse),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Room not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Room"
)]
pub async fn delete_room(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(room_id): AppPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let room_repo = RoomRepository::new(&state.db);
    room_repo
        .find_by_id(room_id)
        .await?
        .ok_or_else(|| AppError::not_found("Room not found"))?;
    let txn = state.db.begin().await?;
    RoomRepository::new(&txn).delete(room_id).await?;
    txn.commit().await?;

    Ok(Json(MessageResponse::new("Room deleted successfully")))
}

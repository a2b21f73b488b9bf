use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::ApprovalStatusEnum;
use crate::error::{AppError, AppResult};
use crate::services::booking::{AvailabilityWindow, BookingRequest};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddRoomRequest {
    /// Room number, also used as the room id.
    #[schema(example = 5)]
    pub room_id: i32,
    pub location: String,
    pub capacity: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RoomFilterParams {
    /// Case-insensitive substring of the location.
    pub location: Option<String>,
    pub min_capacity: Option<i32>,
    pub date: Option<NaiveDate>,
    #[param(value_type = Option<String>, example = "10:00:00")]
    pub start_time: Option<NaiveTime>,
    #[param(value_type = Option<String>, example = "11:00:00")]
    pub end_time: Option<NaiveTime>,
}

impl RoomFilterParams {
    /// The window is all of `date`, `start_time` and `end_time`, or none.
    pub fn window(&self) -> AppResult<Option<AvailabilityWindow>> {
        match (self.date, self.start_time, self.end_time) {
            (Some(date), Some(start_time), Some(end_time)) => Ok(Some(AvailabilityWindow {
                date,
                start_time,
                end_time,
            })),
            (None, None, None) => Ok(None),
            _ => Err(AppError::invalid_input(
                "date, start_time and end_time must be given together",
            )),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookRoomRequest {
    #[schema(example = 5)]
    pub room_id: i32,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "11:00:00")]
    pub end_time: NaiveTime,
    pub booking_purpose: Option<String>,
}

impl From<BookRoomRequest> for BookingRequest {
    fn from(req: BookRoomRequest) -> Self {
        BookingRequest {
            room_id: req.room_id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            booking_purpose: req.booking_purpose,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatusRequest {
    pub booking_id: Uuid,
    pub status: ApprovalStatusEnum,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct BookingQueryParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub room_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub status: Option<ApprovalStatusEnum>,
    /// Only the caller's own bookings.
    #[serde(default)]
    pub mine: bool,
}

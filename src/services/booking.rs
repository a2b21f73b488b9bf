//! Room booking rules.
//!
//! Slots are half-open `[start, end)`: a booking ending at 10:00 does not
//! collide with one starting at 10:00. Only bookings whose status holds the
//! slot take part in conflict checks.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::ConnectionTrait;

use crate::entities::sea_orm_active_enums::ApprovalStatusEnum;
use crate::entities::{room, room_booking};
use crate::error::{AppError, AppResult};
use crate::extractor::CurrentUser;
use crate::policy::{self, STAFF};
use crate::repositories::{NewRoomBooking, RoomFilter, RoomRepository};

/// Status written on new bookings. It holds the slot immediately.
pub const NEW_BOOKING_STATUS: ApprovalStatusEnum = ApprovalStatusEnum::Approved;

pub fn overlaps(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
    a_start < b_end && b_start < a_end
}

pub fn validate_interval(start: NaiveTime, end: NaiveTime) -> AppResult<()> {
    if start >= end {
        return Err(AppError::invalid_input("start_time must be before end_time"));
    }
    Ok(())
}

/// First booking in `existing` that holds a slot overlapping `[start, end)`.
pub fn find_conflict(
    existing: &[room_booking::Model],
    start: NaiveTime,
    end: NaiveTime,
) -> Option<&room_booking::Model> {
    existing
        .iter()
        .filter(|b| b.status.is_active_hold())
        .find(|b| overlaps(b.start_time, b.end_time, start, end))
}

pub struct BookingRequest {
    pub room_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub booking_purpose: Option<String>,
}

/// Checks the room and the slot, then writes the booking.
///
/// The check and the insert are separate statements, so two concurrent
/// requests for the same slot can both pass the check.
pub async fn book_room<C: ConnectionTrait>(
    db: &C,
    caller: &CurrentUser,
    request: BookingRequest,
) -> AppResult<room_booking::Model> {
    policy::require_role(caller, STAFF)?;
    validate_interval(request.start_time, request.end_time)?;

    let rooms = RoomRepository::new(db);
    rooms
        .find_by_id(request.room_id)
        .await?
        .ok_or_else(|| AppError::not_found("Room not found."))?;

    let existing = rooms
        .find_active_bookings(Some(request.room_id), request.date)
        .await?;
    if let Some(conflict) = find_conflict(&existing, request.start_time, request.end_time) {
        tracing::warn!(
            room_id = request.room_id,
            date = %request.date,
            conflicting_booking = %conflict.id,
            "room booking conflict"
        );
        return Err(AppError::conflict("Room is already booked for this time slot."));
    }

    let booking = rooms
        .create_booking(NewRoomBooking {
            room_id: request.room_id,
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            booking_purpose: request.booking_purpose,
            status: NEW_BOOKING_STATUS,
            user_id: caller.id(),
        })
        .await?;

    tracing::info!(
        booking_id = %booking.id,
        room_id = booking.room_id,
        user_id = %booking.user_id,
        "room booked"
    );
    Ok(booking)
}

pub struct AvailabilityWindow {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Rooms matching `filter`; with a window, only those free for all of it.
pub async fn available_rooms<C: ConnectionTrait>(
    db: &C,
    filter: &RoomFilter,
    window: Option<AvailabilityWindow>,
) -> AppResult<Vec<room::Model>> {
    let rooms_repo = RoomRepository::new(db);
    let rooms = rooms_repo.find_filtered(filter).await?;

    let Some(window) = window else {
        return Ok(rooms);
    };
    validate_interval(window.start_time, window.end_time)?;

    let bookings = rooms_repo.find_active_bookings(None, window.date).await?;
    let available = rooms
        .into_iter()
        .filter(|room| {
            let held: Vec<_> = bookings
                .iter()
                .filter(|b| b.room_id == room.id)
                .cloned()
                .collect();
            find_conflict(&held, window.start_time, window.end_time).is_none()
        })
        .collect();
    Ok(available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn booking(start: NaiveTime, end: NaiveTime, status: ApprovalStatusEnum) -> room_booking::Model {
        room_booking::Model {
            id: Uuid::new_v4(),
            room_id: 5,
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            start_time: start,
            end_time: end,
            booking_purpose: None,
            status,
            booking_time: Utc::now().naive_utc(),
            user_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn overlap_is_half_open() {
        assert!(overlaps(t(9, 0), t(10, 0), t(9, 30), t(10, 30)));
        assert!(overlaps(t(9, 0), t(12, 0), t(10, 0), t(11, 0)));
        assert!(overlaps(t(10, 0), t(11, 0), t(9, 0), t(12, 0)));
        assert!(!overlaps(t(9, 0), t(10, 0), t(10, 0), t(11, 0)));
        assert!(!overlaps(t(10, 0), t(11, 0), t(9, 0), t(10, 0)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (t(8, 0), t(9, 0), t(8, 30), t(9, 30)),
            (t(8, 0), t(9, 0), t(9, 0), t(9, 30)),
            (t(8, 0), t(9, 0), t(13, 0), t(14, 0)),
        ];
        for (a, b, c, d) in cases {
            assert_eq!(overlaps(a, b, c, d), overlaps(c, d, a, b));
        }
    }

    #[test]
    fn empty_or_inverted_interval_is_invalid() {
        assert!(validate_interval(t(10, 0), t(10, 0)).is_err());
        assert!(validate_interval(t(11, 0), t(10, 0)).is_err());
        assert!(validate_interval(t(10, 0), t(10, 1)).is_ok());
    }

    #[test]
    fn only_active_holds_conflict() {
        let existing = vec![
            booking(t(9, 0), t(11, 0), ApprovalStatusEnum::Rejected),
            booking(t(9, 0), t(11, 0), ApprovalStatusEnum::Pending),
        ];
        assert!(find_conflict(&existing, t(10, 0), t(12, 0)).is_none());

        let held = vec![booking(t(9, 0), t(11, 0), ApprovalStatusEnum::Approved)];
        assert!(find_conflict(&held, t(10, 0), t(12, 0)).is_some());
        assert!(find_conflict(&held, t(11, 0), t(12, 0)).is_none());
    }

    #[test]
    fn new_bookings_hold_their_slot() {
        use sea_orm::Iterable;

        assert!(NEW_BOOKING_STATUS.is_active_hold());
        let holding: Vec<_> = ApprovalStatusEnum::iter()
            .filter(ApprovalStatusEnum::is_active_hold)
            .collect();
        assert_eq!(holding, ApprovalStatusEnum::ACTIVE_HOLDS);
    }
}

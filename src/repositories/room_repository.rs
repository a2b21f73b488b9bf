use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::contains_ci;
use crate::entities::sea_orm_active_enums::ApprovalStatusEnum;
use crate::entities::{room, room_booking};
use crate::utils::pagination::Pagination;

pub struct RoomRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, room_id: i32) -> Result<Option<room::Model>> {
        let room = room::Entity::find_by_id(room_id).one(self.db).await?;
        Ok(room)
    }

    pub async fn find_all(&self) -> Result<Vec<room::Model>> {
        let rooms = room::Entity::find()
            .order_by_asc(room::Column::Id)
            .all(self.db)
            .await?;
        Ok(rooms)
    }

    pub async fn find_filtered(&self, filter: &RoomFilter) -> Result<Vec<room::Model>> {
        let mut query = room::Entity::find();

        if let Some(location) = &filter.location {
            query = query.filter(contains_ci(room::Column::Location, location));
        }
        if let Some(min_capacity) = filter.min_capacity {
            query = query.filter(room::Column::Capacity.gte(min_capacity));
        }

        let rooms = query.order_by_asc(room::Column::Id).all(self.db).await?;
        Ok(rooms)
    }

    pub async fn create(&self, room_id: i32, location: String, capacity: i32) -> Result<room::Model> {
        let room_model = room::ActiveModel {
            id: Set(room_id),
            location: Set(location),
            capacity: Set(capacity),
        };

        let result = room_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn delete(&self, room_id: i32) -> Result<DeleteResult> {
        room_booking::Entity::delete_many()
            .filter(room_booking::Column::RoomId.eq(room_id))
            .exec(self.db)
            .await?;

        let result = room::Entity::delete_by_id(room_id).exec(self.db).await?;
        Ok(result)
    }

    /// Bookings on `date` that hold their slot, optionally for a single room.
    pub async fn find_active_bookings(
        &self,
        room_id: Option<i32>,
        date: NaiveDate,
    ) -> Result<Vec<room_booking::Model>> {
        let mut query = room_booking::Entity::find()
            .filter(room_booking::Column::Date.eq(date))
            .filter(
                room_booking::Column::Status.is_in(ApprovalStatusEnum::ACTIVE_HOLDS.iter().copied()),
            );

        if let Some(room_id) = room_id {
            query = query.filter(room_booking::Column::RoomId.eq(room_id));
        }

        let bookings = query
            .order_by_asc(room_booking::Column::StartTime)
            .all(self.db)
            .await?;
        Ok(bookings)
    }

    pub async fn find_booking_by_id(&self, booking_id: Uuid) -> Result<Option<room_booking::Model>> {
        let booking = room_booking::Entity::find_by_id(booking_id).one(self.db).await?;
        Ok(booking)
    }

    pub async fn create_booking(&self, new_booking: NewRoomBooking) -> Result<room_booking::Model> {
        let booking_model = room_booking::ActiveModel {
            id: Set(Uuid::new_v4()),
            room_id: Set(new_booking.room_id),
            date: Set(new_booking.date),
            start_time: Set(new_booking.start_time),
            end_time: Set(new_booking.end_time),
            booking_purpose: Set(new_booking.booking_purpose),
            status: Set(new_booking.status),
            booking_time: Set(Utc::now().naive_utc()),
            user_id: Set(new_booking.user_id),
        };

        let result = booking_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update_booking_status(
        &self,
        booking: room_booking::Model,
        status: ApprovalStatusEnum,
    ) -> Result<room_booking::Model> {
        let mut active_model: room_booking::ActiveModel = booking.into();
        active_model.status = Set(status);
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    pub async fn find_bookings_with_pagination(
        &self,
        filter: BookingFilter,
        pagination: Pagination,
    ) -> Result<(Vec<room_booking::Model>, u64)> {
        let mut query = room_booking::Entity::find();

        if let Some(room_id) = filter.room_id {
            query = query.filter(room_booking::Column::RoomId.eq(room_id));
        }
        if let Some(date) = filter.date {
            query = query.filter(room_booking::Column::Date.eq(date));
        }
        if let Some(status) = filter.status {
            query = query.filter(room_booking::Column::Status.eq(status));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(room_booking::Column::UserId.eq(user_id));
        }

        let total = query.clone().count(self.db).await?;

        let bookings = query
            .order_by_asc(room_booking::Column::Date)
            .order_by_asc(room_booking::Column::StartTime)
            .order_by_asc(room_booking::Column::Id)
            .limit(pagination.page_size)
            .offset(pagination.offset())
            .all(self.db)
            .await?;

        Ok((bookings, total))
    }
}

pub struct NewRoomBooking {
    pub room_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub booking_purpose: Option<String>,
    pub status: ApprovalStatusEnum,
    pub user_id: Uuid,
}

#[derive(Debug, Default)]
pub struct RoomFilter {
    pub location: Option<String>,
    pub min_capacity: Option<i32>,
}

#[derive(Debug, Default)]
pub struct BookingFilter {
    pub room_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub status: Option<ApprovalStatusEnum>,
    pub user_id: Option<Uuid>,
}

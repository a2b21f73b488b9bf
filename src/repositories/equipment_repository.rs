use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{equipment, equipment_booking};

pub struct EquipmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EquipmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, equipment_id: Uuid) -> Result<Option<equipment::Model>> {
        let item = equipment::Entity::find_by_id(equipment_id).one(self.db).await?;
        Ok(item)
    }

    pub async fn find_all(&self) -> Result<Vec<equipment::Model>> {
        let items = equipment::Entity::find()
            .order_by_asc(equipment::Column::Name)
            .order_by_asc(equipment::Column::Id)
            .all(self.db)
            .await?;
        Ok(items)
    }

    pub async fn create(&self, name: String, availability: bool) -> Result<equipment::Model> {
        let item = equipment::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            availability: Set(availability),
        };

        let result = item.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        item: equipment::Model,
        name: Option<String>,
        availability: Option<bool>,
    ) -> Result<equipment::Model> {
        let mut active_model: equipment::ActiveModel = item.clone().into();

        if let Some(name) = name {
            active_model.name = Set(name);
        }
        if let Some(availability) = availability {
            active_model.availability = Set(availability);
        }

        if !active_model.is_changed() {
            return Ok(item);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    pub async fn delete(&self, equipment_id: Uuid) -> Result<DeleteResult> {
        equipment_booking::Entity::delete_many()
            .filter(equipment_booking::Column::EquipmentId.eq(equipment_id))
            .exec(self.db)
            .await?;

        let result = equipment::Entity::delete_by_id(equipment_id).exec(self.db).await?;
        Ok(result)
    }

    pub async fn find_booking_by_id(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<equipment_booking::Model>> {
        let booking = equipment_booking::Entity::find_by_id(booking_id).one(self.db).await?;
        Ok(booking)
    }

    pub async fn find_bookings_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<equipment_booking::Model>> {
        let bookings = equipment_booking::Entity::find()
            .filter(equipment_booking::Column::StudentId.eq(student_id))
            .order_by_desc(equipment_booking::Column::BookingTime)
            .all(self.db)
            .await?;
        Ok(bookings)
    }

    /// Records the booking and marks the item unavailable.
    pub async fn book(
        &self,
        item: equipment::Model,
        student_id: Uuid,
    ) -> Result<equipment_booking::Model> {
        let booking = equipment_booking::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            equipment_id: Set(item.id),
            booking_time: Set(Utc::now().naive_utc()),
            return_date: Set(None),
        }
        .insert(self.db)
        .await?;

        let mut active_item: equipment::ActiveModel = item.into();
        active_item.availability = Set(false);
        active_item.update(self.db).await?;

        Ok(booking)
    }

    /// Stamps the return and makes the item available again.
    pub async fn return_booking(
        &self,
        booking: equipment_booking::Model,
    ) -> Result<equipment_booking::Model> {
        let equipment_id = booking.equipment_id;
        let mut active_booking: equipment_booking::ActiveModel = booking.into();
        active_booking.return_date = Set(Some(Utc::now().naive_utc()));
        let returned = active_booking.update(self.db).await?;

        equipment::ActiveModel {
            id: Set(equipment_id),
            availability: Set(true),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(returned)
    }
}

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::EventCategoryEnum;
use crate::entities::{event, event_registration};
use crate::utils::pagination::Pagination;

pub struct EventRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, event_id: Uuid) -> Result<Option<event::Model>> {
        let event = event::Entity::find_by_id(event_id).one(self.db).await?;
        Ok(event)
    }

    pub async fn create(&self, new_event: NewEvent) -> Result<event::Model> {
        let event_model = event::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(new_event.title),
            date: Set(new_event.date),
            start_time: Set(new_event.start_time),
            end_time: Set(new_event.end_time),
            location: Set(new_event.location),
            description: Set(new_event.description),
            detailed_description: Set(new_event.detailed_description),
            category: Set(new_event.category),
            organizer: Set(new_event.organizer),
            registration_deadline: Set(new_event.registration_deadline),
            contact_email: Set(new_event.contact_email),
            max_attendees: Set(new_event.max_attendees),
            current_attendees: Set(0),
            registration_open: Set(new_event.registration_open),
            image: Set(new_event.image),
            tags: Set(serde_json::json!(new_event.tags)),
        };

        let result = event_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, event: event::Model, updates: EventUpdate) -> Result<event::Model> {
        let mut active_model: event::ActiveModel = event.clone().into();

        if let Some(title) = updates.title {
            active_model.title = Set(title);
        }
        if let Some(date) = updates.date {
            active_model.date = Set(date);
        }
        if let Some(start_time) = updates.start_time {
            active_model.start_time = Set(start_time);
        }
        if let Some(end_time) = updates.end_time {
            active_model.end_time = Set(end_time);
        }
        if let Some(location) = updates.location {
            active_model.location = Set(location);
        }
        if let Some(description) = updates.description {
            active_model.description = Set(description);
        }
        if let Some(detailed_description) = updates.detailed_description {
            active_model.detailed_description = Set(detailed_description);
        }
        if let Some(category) = updates.category {
            active_model.category = Set(category);
        }
        if let Some(organizer) = updates.organizer {
            active_model.organizer = Set(organizer);
        }
        if let Some(registration_deadline) = updates.registration_deadline {
            active_model.registration_deadline = Set(registration_deadline);
        }
        if let Some(contact_email) = updates.contact_email {
            active_model.contact_email = Set(contact_email);
        }
        if let Some(max_attendees) = updates.max_attendees {
            active_model.max_attendees = Set(max_attendees);
        }
        if let Some(current_attendees) = updates.current_attendees {
            active_model.current_attendees = Set(current_attendees);
        }
        if let Some(registration_open) = updates.registration_open {
            active_model.registration_open = Set(registration_open);
        }
        if let Some(image) = updates.image {
            active_model.image = Set(image);
        }
        if let Some(tags) = updates.tags {
            active_model.tags = Set(serde_json::json!(tags));
        }

        if !active_model.is_changed() {
            return Ok(event);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    pub async fn delete(&self, event_id: Uuid) -> Result<DeleteResult> {
        let result = event::Entity::delete_by_id(event_id).exec(self.db).await?;
        Ok(result)
    }

    pub async fn find_all_with_pagination(
        &self,
        category: Option<EventCategoryEnum>,
        pagination: Pagination,
    ) -> Result<(Vec<event::Model>, u64)> {
        let mut query = event::Entity::find();

        if let Some(category) = category {
            query = query.filter(event::Column::Category.eq(category));
        }

        let total = query.clone().count(self.db).await?;

        let events = query
            .order_by_asc(event::Column::Date)
            .order_by_asc(event::Column::StartTime)
            .order_by_asc(event::Column::Id)
            .limit(pagination.page_size)
            .offset(pagination.offset())
            .all(self.db)
            .await?;

        Ok((events, total))
    }

    pub async fn create_registration(
        &self,
        registration: NewEventRegistration,
    ) -> Result<event_registration::Model> {
        let registration_model = event_registration::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(registration.name),
            email: Set(registration.email),
            roll: Set(registration.roll),
            registration_id: Set(registration.registration_id),
            batch_no: Set(registration.batch_no),
            phone: Set(registration.phone),
            registration_fee: Set(registration.registration_fee),
            created_at: Set(Utc::now().naive_utc()),
        };

        let result = registration_model.insert(self.db).await?;
        Ok(result)
    }
}

pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub description: String,
    pub detailed_description: String,
    pub category: EventCategoryEnum,
    pub organizer: String,
    pub registration_deadline: Option<NaiveDate>,
    pub contact_email: String,
    pub max_attendees: i32,
    pub registration_open: bool,
    pub image: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Default)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub category: Option<EventCategoryEnum>,
    pub organizer: Option<String>,
    pub registration_deadline: Option<Option<NaiveDate>>,
    pub contact_email: Option<String>,
    pub max_attendees: Option<i32>,
    pub current_attendees: Option<i32>,
    pub registration_open: Option<bool>,
    pub image: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
}

pub struct NewEventRegistration {
    pub name: String,
    pub email: String,
    pub roll: Option<String>,
    pub registration_id: Option<String>,
    pub batch_no: Option<String>,
    pub phone: Option<String>,
    pub registration_fee: Option<String>,
}

//! `SeaORM` Entity for events table

use super::sea_orm_active_enums::EventCategoryEnum;
use chrono::{NaiveDate, NaiveTime};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "events")]
#[schema(as = Event)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub detailed_description: String,
    pub category: EventCategoryEnum,
    pub organizer: String,
    pub registration_deadline: Option<NaiveDate>,
    pub contact_email: String,
    pub max_attendees: i32,
    pub current_attendees: i32,
    pub registration_open: bool,
    pub image: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub tags: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` Entity for notices table

use super::sea_orm_active_enums::NoticeCategoryEnum;
use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "notices")]
#[schema(as = Notice)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub detailed_description: String,
    pub category: NoticeCategoryEnum,
    pub pdf_file: Option<String>,
    pub date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub author: String,
    pub location: Option<String>,
    pub time: Option<String>,
    pub is_archived: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` Entity for courses table

use super::sea_orm_active_enums::CourseTypeEnum;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "courses")]
#[schema(as = Course)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub title: String,
    pub credit: i32,
    pub course_type: CourseTypeEnum,
    pub year: String,
    pub semester: String,
    pub degree: String,
    pub active: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub teacher_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Teacher,
    #[sea_orm(has_many = "super::exam_schedule::Entity")]
    ExamSchedule,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::exam_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamSchedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

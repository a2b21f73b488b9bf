//! `SeaORM` Entity for teachers table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "teachers")]
#[schema(as = Teacher)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Option<Uuid>,
    #[sea_orm(unique)]
    pub registration_number: String,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub department: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub profile_pic: Option<String>,
    pub research_profile: Option<String>,
    pub socials_linkedin: Option<String>,
    pub socials_github: Option<String>,
    pub socials_twitter: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::education::Entity")]
    Education,
    #[sea_orm(has_many = "super::experience::Entity")]
    Experience,
    #[sea_orm(has_many = "super::award::Entity")]
    Award,
    #[sea_orm(has_many = "super::publication::Entity")]
    Publication,
    #[sea_orm(has_many = "super::routine::Entity")]
    Routine,
    #[sea_orm(has_many = "super::course::Entity")]
    Course,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::education::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Education.def()
    }
}

impl Related<super::experience::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experience.def()
    }
}

impl Related<super::award::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Award.def()
    }
}

impl Related<super::publication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publication.def()
    }
}

impl Related<super::routine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Routine.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` Entity for rooms table
//!
//! The primary key is the room number assigned by an admin.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "rooms")]
#[schema(as = Room)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub location: String,
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_booking::Entity")]
    RoomBooking,
}

impl Related<super::room_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomBooking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

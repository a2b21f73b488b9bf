//! `SeaORM` Entity for equipment table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "equipment")]
#[schema(as = Equipment)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub availability: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::equipment_booking::Entity")]
    EquipmentBooking,
}

impl Related<super::equipment_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EquipmentBooking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

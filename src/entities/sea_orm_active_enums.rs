//! `SeaORM` active enums, stored as short strings so the schema stays portable.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RoleEnum {
    #[sea_orm(string_value = "Student")]
    Student,
    #[sea_orm(string_value = "Teacher")]
    Teacher,
    #[sea_orm(string_value = "Admin")]
    Admin,
}

impl RoleEnum {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleEnum::Student => "Student",
            RoleEnum::Teacher => "Teacher",
            RoleEnum::Admin => "Admin",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CourseTypeEnum {
    #[sea_orm(string_value = "General")]
    General,
    #[sea_orm(string_value = "Core")]
    Core,
    #[sea_orm(string_value = "Elective")]
    Elective,
}

/// Lifecycle shared by room bookings and meetings.
///
/// Only `Approved` bookings hold their time slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatusEnum {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl ApprovalStatusEnum {
    /// Statuses that hold a time slot. Conflict queries and in-memory checks both read this.
    pub const ACTIVE_HOLDS: &[ApprovalStatusEnum] = &[ApprovalStatusEnum::Approved];

    pub fn is_active_hold(&self) -> bool {
        Self::ACTIVE_HOLDS.contains(self)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum NoticeCategoryEnum {
    #[sea_orm(string_value = "academic")]
    Academic,
    #[sea_orm(string_value = "general")]
    General,
    #[sea_orm(string_value = "administrative")]
    Administrative,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum EventCategoryEnum {
    #[sea_orm(string_value = "workshop")]
    Workshop,
    #[sea_orm(string_value = "hackathon")]
    Hackathon,
    #[sea_orm(string_value = "seminar")]
    Seminar,
    #[sea_orm(string_value = "career")]
    Career,
    #[sea_orm(string_value = "bootcamp")]
    Bootcamp,
    #[sea_orm(string_value = "competition")]
    Competition,
}

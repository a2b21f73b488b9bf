use serde::Deserialize;
use utoipa::ToSchema;

use crate::utils::patch::{Patch, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEquipmentRequest {
    #[schema(example = "Projector")]
    pub name: String,
    #[serde(default = "default_availability")]
    pub availability: bool,
}

fn default_availability() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEquipmentRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<bool>)]
    pub availability: Patch<bool>,
}

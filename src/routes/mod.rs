pub mod admin;
pub mod auth;
pub mod award;
pub mod contact;
pub mod course;
pub mod education;
pub mod equipment;
pub mod event;
pub mod exam;
pub mod experience;
pub mod files;
pub mod health;
pub mod meetings;
pub mod notice;
pub mod publication;
pub mod results;
pub mod room;
pub mod student;
pub mod teacher;

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppResult;
use crate::repositories::ResultUpdate;
use crate::utils::patch::{Patch, non_null, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateResultRequest {
    pub student_id: Uuid,
    #[schema(example = "3-1")]
    pub semester: String,
    /// Free-form course and grade listing.
    pub courses: String,
    #[schema(example = "3.75")]
    pub grade: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateResultRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub semester: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub courses: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub grade: Patch<String>,
}

impl UpdateResultRequest {
    pub fn into_update(self) -> AppResult<ResultUpdate> {
        Ok(ResultUpdate {
            semester: non_null("semester", self.semester)?,
            courses: non_null("courses", self.courses)?,
            grade: non_null("grade", self.grade)?,
        })
    }
}

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::CourseTypeEnum;
use crate::error::AppResult;
use crate::repositories::{CourseSort, CourseUpdate, NewCourse};
use crate::utils::pagination::SortOrder;
use crate::utils::patch::{Patch, non_null, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    #[schema(example = "CSE101")]
    pub code: String,
    pub title: String,
    pub credit: i32,
    pub course_type: CourseTypeEnum,
    pub year: String,
    pub semester: String,
    pub degree: String,
    #[serde(default = "default_active")]
    pub active: bool,
    pub content: Option<String>,
    pub teacher_id: Option<Uuid>,
}

fn default_active() -> bool {
    true
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        NewCourse {
            code: req.code,
            title: req.title,
            credit: req.credit,
            course_type: req.course_type,
            year: req.year,
            semester: req.semester,
            degree: req.degree,
            active: req.active,
            content: req.content,
            teacher_id: req.teacher_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub code: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub credit: Patch<i32>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<CourseTypeEnum>)]
    pub course_type: Patch<CourseTypeEnum>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub year: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub semester: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub degree: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<bool>)]
    pub active: Patch<bool>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub content: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Uuid>)]
    pub teacher_id: Patch<Uuid>,
}

impl UpdateCourseRequest {
    /// True when the request touches anything besides `content`.
    pub fn touches_metadata(&self) -> bool {
        self.code.is_some()
            || self.title.is_some()
            || self.credit.is_some()
            || self.course_type.is_some()
            || self.year.is_some()
            || self.semester.is_some()
            || self.degree.is_some()
            || self.active.is_some()
            || self.teacher_id.is_some()
    }

    pub fn into_update(self) -> AppResult<CourseUpdate> {
        Ok(CourseUpdate {
            code: non_null("code", self.code)?,
            title: non_null("title", self.title)?,
            credit: non_null("credit", self.credit)?,
            course_type: non_null("course_type", self.course_type)?,
            year: non_null("year", self.year)?,
            semester: non_null("semester", self.semester)?,
            degree: non_null("degree", self.degree)?,
            active: non_null("active", self.active)?,
            content: self.content,
            teacher_id: self.teacher_id,
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CourseQueryParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub year: Option<String>,
    pub semester: Option<String>,
    /// Case-insensitive substring of the course code.
    pub code: Option<String>,
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub course_type: Option<CourseTypeEnum>,
    pub sort_by: Option<CourseSort>,
    #[serde(default)]
    #[param(value_type = Option<SortOrder>)]
    pub order: SortOrder,
}

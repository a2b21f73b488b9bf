use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::{course, exam_schedule};
use crate::error::AppResult;
use crate::repositories::{ExamUpdate, NewExam};
use crate::utils::patch::{Patch, non_null, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateExamRequest {
    pub date: NaiveDate,
    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "13:00:00")]
    pub end_time: NaiveTime,
    pub course_id: Option<Uuid>,
    pub room_no: String,
    pub invigilator: String,
    pub semester: String,
}

impl From<CreateExamRequest> for NewExam {
    fn from(req: CreateExamRequest) -> Self {
        NewExam {
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            course_id: req.course_id,
            room_no: req.room_no,
            invigilator: req.invigilator,
            semester: req.semester,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateExamRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<NaiveDate>)]
    pub date: Patch<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub start_time: Patch<NaiveTime>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub end_time: Patch<NaiveTime>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Uuid>)]
    pub course_id: Patch<Uuid>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub room_no: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub invigilator: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub semester: Patch<String>,
}

impl UpdateExamRequest {
    pub fn into_update(self) -> AppResult<ExamUpdate> {
        Ok(ExamUpdate {
            date: non_null("date", self.date)?,
            start_time: non_null("start_time", self.start_time)?,
            end_time: non_null("end_time", self.end_time)?,
            course_id: self.course_id,
            room_no: non_null("room_no", self.room_no)?,
            invigilator: non_null("invigilator", self.invigilator)?,
            semester: non_null("semester", self.semester)?,
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExamQueryParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub semester: Option<String>,
    pub room_no: Option<String>,
    /// Case-insensitive substring of the invigilator's name.
    pub invigilator: Option<String>,
    /// Case-insensitive substring of the course title.
    pub course_title: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExamResponse {
    #[serde(flatten)]
    pub exam: exam_schedule::Model,
    pub course_code: Option<String>,
    pub course_title: Option<String>,
}

impl From<(exam_schedule::Model, Option<course::Model>)> for ExamResponse {
    fn from((exam, course): (exam_schedule::Model, Option<course::Model>)) -> Self {
        let (course_code, course_title) = match course {
            Some(course) => (Some(course.code), Some(course.title)),
            None => (None, None),
        };
        ExamResponse {
            exam,
            course_code,
            course_title,
        }
    }
}

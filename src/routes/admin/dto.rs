use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;
use crate::repositories::{NewStudent, NewTeacher, StudentUpdate, TeacherUpdate};
use crate::utils::patch::{Patch, non_null, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminSignupRequest {
    pub name: String,
    #[schema(example = "admin@dept.edu")]
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminSignupResponse {
    pub message: String,
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAdminRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub phone: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub password: Patch<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddStudentRequest {
    #[schema(example = "2019331001")]
    pub registration_number: String,
    pub email: String,
    pub name: String,
    pub session: Option<String>,
    pub hall: Option<String>,
    pub degree: Option<String>,
    pub semester: Option<String>,
}

impl From<AddStudentRequest> for NewStudent {
    fn from(req: AddStudentRequest) -> Self {
        NewStudent {
            registration_number: req.registration_number,
            email: req.email,
            name: req.name,
            session: req.session,
            hall: req.hall,
            degree: req.degree,
            semester: req.semester,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddTeacherRequest {
    pub registration_number: String,
    pub email: String,
    pub name: String,
    pub department: String,
}

impl From<AddTeacherRequest> for NewTeacher {
    fn from(req: AddTeacherRequest) -> Self {
        NewTeacher {
            registration_number: req.registration_number,
            email: req.email,
            name: req.name,
            department: req.department,
        }
    }
}

/// Admin edit of pre-approved student metadata. Omitted fields are kept.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStudentMetaRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub registration_number: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub email: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub session: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub hall: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub degree: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub semester: Patch<String>,
}

impl UpdateStudentMetaRequest {
    pub fn into_update(self) -> AppResult<StudentUpdate> {
        Ok(StudentUpdate {
            registration_number: non_null("registration_number", self.registration_number)?,
            email: non_null("email", self.email)?,
            name: non_null("name", self.name)?,
            session: self.session,
            hall: self.hall,
            degree: self.degree,
            semester: self.semester,
            ..Default::default()
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTeacherMetaRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub registration_number: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub email: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub department: Patch<String>,
}

impl UpdateTeacherMetaRequest {
    pub fn into_update(self) -> AppResult<TeacherUpdate> {
        Ok(TeacherUpdate {
            registration_number: non_null("registration_number", self.registration_number)?,
            email: non_null("email", self.email)?,
            name: non_null("name", self.name)?,
            department: non_null("department", self.department)?,
            ..Default::default()
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct StudentQueryParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub semester: Option<String>,
    pub session: Option<String>,
    /// Case-insensitive match on name, email or registration number.
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TeacherQueryParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub department: Option<String>,
    pub search: Option<String>,
}

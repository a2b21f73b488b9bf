use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::repositories::{EducationUpdate, NewEducation};
use crate::utils::patch::{Patch, non_null, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddEducationRequest {
    pub degree_name: String,
    pub major: Option<String>,
    pub institution: String,
    pub year: Option<String>,
}

impl From<AddEducationRequest> for NewEducation {
    fn from(req: AddEducationRequest) -> Self {
        NewEducation {
            degree_name: req.degree_name,
            major: req.major,
            institution: req.institution,
            year: req.year,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEducationRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub degree_name: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub major: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub institution: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub year: Patch<String>,
}

impl UpdateEducationRequest {
    pub fn into_update(self) -> AppResult<EducationUpdate> {
        Ok(EducationUpdate {
            degree_name: non_null("degree_name", self.degree_name)?,
            major: self.major,
            institution: non_null("institution", self.institution)?,
            year: self.year,
        })
    }
}

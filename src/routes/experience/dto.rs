use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::repositories::{ExperienceUpdate, NewExperience};
use crate::utils::patch::{Patch, non_null, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddExperienceRequest {
    pub title: String,
    pub organization: String,
    pub duration: Option<String>,
    pub year: Option<String>,
}

impl From<AddExperienceRequest> for NewExperience {
    fn from(req: AddExperienceRequest) -> Self {
        NewExperience {
            title: req.title,
            organization: req.organization,
            duration: req.duration,
            year: req.year,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateExperienceRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub organization: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub duration: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub year: Patch<String>,
}

impl UpdateExperienceRequest {
    pub fn into_update(self) -> AppResult<ExperienceUpdate> {
        Ok(ExperienceUpdate {
            title: non_null("title", self.title)?,
            organization: non_null("organization", self.organization)?,
            duration: self.duration,
            year: self.year,
        })
    }
}

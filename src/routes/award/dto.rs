use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::repositories::{AwardUpdate, NewAward};
use crate::utils::patch::{Patch, non_null, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddAwardRequest {
    pub title: String,
    pub award_type: Option<String>,
    pub description: Option<String>,
    pub year: Option<String>,
}

impl From<AddAwardRequest> for NewAward {
    fn from(req: AddAwardRequest) -> Self {
        NewAward {
            title: req.title,
            award_type: req.award_type,
            description: req.description,
            year: req.year,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAwardRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub award_type: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub year: Patch<String>,
}

impl UpdateAwardRequest {
    pub fn into_update(self) -> AppResult<AwardUpdate> {
        Ok(AwardUpdate {
            title: non_null("title", self.title)?,
            award_type: self.award_type,
            description: self.description,
            year: self.year,
        })
    }
}

use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::repositories::{NewPublication, PublicationUpdate};
use crate::utils::patch::{Patch, non_null, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddPublicationRequest {
    pub publication_type: Option<String>,
    pub title: String,
    pub url: Option<String>,
}

impl From<AddPublicationRequest> for NewPublication {
    fn from(req: AddPublicationRequest) -> Self {
        NewPublication {
            publication_type: req.publication_type,
            title: req.title,
            url: req.url,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePublicationRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub publication_type: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub url: Patch<String>,
}

impl UpdatePublicationRequest {
    pub fn into_update(self) -> AppResult<PublicationUpdate> {
        Ok(PublicationUpdate {
            publication_type: self.publication_type,
            title: non_null("title", self.title)?,
            url: self.url,
        })
    }
}

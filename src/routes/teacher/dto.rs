use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entities::{award, education, experience, publication, teacher};
use crate::error::AppResult;
use crate::repositories::TeacherUpdate;
use crate::services::signup::SignupRequest;
use crate::utils::patch::{Patch, non_null, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct TeacherSignupRequest {
    #[schema(example = "teacher@dept.edu")]
    pub email: String,
    pub registration_number: String,
    pub password: String,
}

impl From<TeacherSignupRequest> for SignupRequest {
    fn from(req: TeacherSignupRequest) -> Self {
        SignupRequest {
            email: req.email,
            registration_number: req.registration_number,
            password: req.password,
        }
    }
}

/// Fields a teacher may edit on their own profile.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMyTeacherProfileRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub bio: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub phone: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub profile_pic: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub research_profile: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub socials_linkedin: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub socials_github: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub socials_twitter: Patch<String>,
}

impl UpdateMyTeacherProfileRequest {
    pub fn into_update(self) -> AppResult<TeacherUpdate> {
        Ok(TeacherUpdate {
            name: non_null("name", self.name)?,
            bio: self.bio,
            title: self.title,
            phone: self.phone,
            profile_pic: self.profile_pic,
            research_profile: self.research_profile,
            socials_linkedin: self.socials_linkedin,
            socials_github: self.socials_github,
            socials_twitter: self.socials_twitter,
            ..Default::default()
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TeacherDirectoryParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub department: Option<String>,
    /// Case-insensitive match on name, email or registration number.
    pub search: Option<String>,
}

/// Public profile with the teacher's education, experience, awards and
/// publications.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherProfileResponse {
    #[serde(flatten)]
    pub teacher: teacher::Model,
    pub education: Vec<education::Model>,
    pub experience: Vec<experience::Model>,
    pub awards: Vec<award::Model>,
    pub publications: Vec<publication::Model>,
}

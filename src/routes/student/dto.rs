use serde::Deserialize;
use utoipa::ToSchema;

use crate::repositories::StudentUpdate;
use crate::services::signup::SignupRequest;
use crate::utils::patch::{Patch, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentSignupRequest {
    #[schema(example = "student@dept.edu")]
    pub email: String,
    #[schema(example = "2019331001")]
    pub registration_number: String,
    pub password: String,
}

impl From<StudentSignupRequest> for SignupRequest {
    fn from(req: StudentSignupRequest) -> Self {
        SignupRequest {
            email: req.email,
            registration_number: req.registration_number,
            password: req.password,
        }
    }
}

/// Fields a student may edit on their own profile.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMyStudentProfileRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub hall: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub father_name: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub mother_name: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub phone: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub address: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub profile_pic: Patch<String>,
}

impl From<UpdateMyStudentProfileRequest> for StudentUpdate {
    fn from(req: UpdateMyStudentProfileRequest) -> Self {
        StudentUpdate {
            hall: req.hall,
            father_name: req.father_name,
            mother_name: req.mother_name,
            phone: req.phone,
            address: req.address,
            profile_pic: req.profile_pic,
            ..Default::default()
        }
    }
}

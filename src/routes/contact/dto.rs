use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    /// Every field must carry some text once trimmed.
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::invalid_input(format!("{name} must not be empty")));
            }
        }
        if !self.email.contains('@') {
            return Err(AppError::invalid_input("Invalid email address"));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ContactQueryParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
            subject: "Admission".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn complete_message_is_accepted() {
        assert!(request("jane@example.com", "Hello").validate().is_ok());
    }

    #[test]
    fn blank_field_or_bad_email_is_rejected() {
        assert!(request("jane@example.com", "   ").validate().is_err());
        assert!(request("not-an-email", "Hello").validate().is_err());
    }
}

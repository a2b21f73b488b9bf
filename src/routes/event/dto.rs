use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::entities::sea_orm_active_enums::EventCategoryEnum;
use crate::error::{AppError, AppResult};
use crate::repositories::{EventUpdate, NewEvent, NewEventRegistration};
use crate::utils::upload::FormData;

/// Multipart body of `POST /event/create`. On update every field is optional.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct EventForm {
    pub title: String,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "16:00:00")]
    pub end_time: NaiveTime,
    pub location: String,
    pub description: String,
    pub detailed_description: String,
    pub category: EventCategoryEnum,
    pub organizer: String,
    pub registration_deadline: Option<NaiveDate>,
    pub contact_email: String,
    pub max_attendees: i32,
    pub registration_open: Option<bool>,
    /// Comma-separated, or a JSON array of strings.
    #[schema(example = "ai,ml")]
    pub tags: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

/// Accepts `a, b` as well as `["a","b"]`. Blank entries are dropped.
pub fn parse_tags(raw: &str) -> AppResult<Vec<String>> {
    let raw = raw.trim();
    let tags: Vec<String> = if raw.starts_with('[') {
        serde_json::from_str(raw)
            .map_err(|_| AppError::invalid_input("tags must be a list of strings"))?
    } else {
        raw.split(',').map(str::to_string).collect()
    };
    Ok(tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect())
}

fn tags_field(form: &FormData) -> AppResult<Option<Vec<String>>> {
    form.text("tags").map(parse_tags).transpose()
}

pub fn new_event(form: &FormData, image: Option<String>) -> AppResult<NewEvent> {
    let start_time: NaiveTime = form.parse_required("start_time")?;
    let end_time: NaiveTime = form.parse_required("end_time")?;
    if start_time >= end_time {
        return Err(AppError::invalid_input("start_time must be before end_time"));
    }
    let max_attendees: i32 = form.parse_required("max_attendees")?;
    if max_attendees < 0 {
        return Err(AppError::invalid_input("max_attendees cannot be negative"));
    }

    Ok(NewEvent {
        title: form.required("title")?,
        date: form.parse_required("date")?,
        start_time,
        end_time,
        location: form.required("location")?,
        description: form.required("description")?,
        detailed_description: form.required("detailed_description")?,
        category: form
            .parse_enum("category")?
            .ok_or_else(|| AppError::invalid_input("category is required"))?,
        organizer: form.required("organizer")?,
        registration_deadline: form.parse("registration_deadline")?,
        contact_email: form.required("contact_email")?,
        max_attendees,
        registration_open: form.parse("registration_open")?.unwrap_or(true),
        image,
        tags: tags_field(form)?.unwrap_or_default(),
    })
}

pub fn event_update(form: &FormData, image: Option<String>) -> AppResult<EventUpdate> {
    Ok(EventUpdate {
        title: form.text("title").map(str::to_string),
        date: form.parse("date")?,
        start_time: form.parse("start_time")?,
        end_time: form.parse("end_time")?,
        location: form.text("location").map(str::to_string),
        description: form.text("description").map(str::to_string),
        detailed_description: form.text("detailed_description").map(str::to_string),
        category: form.parse_enum("category")?,
        organizer: form.text("organizer").map(str::to_string),
        registration_deadline: form.parse::<NaiveDate>("registration_deadline")?.map(Some),
        contact_email: form.text("contact_email").map(str::to_string),
        max_attendees: form.parse("max_attendees")?,
        current_attendees: form.parse("current_attendees")?,
        registration_open: form.parse("registration_open")?,
        image: image.map(Some),
        tags: tags_field(form)?,
    })
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct EventQueryParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub category: Option<EventCategoryEnum>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EventRegistrationRequest {
    pub name: String,
    pub email: String,
    pub roll: Option<String>,
    pub registration_id: Option<String>,
    pub batch_no: Option<String>,
    pub phone: Option<String>,
    pub registration_fee: Option<String>,
}

impl From<EventRegistrationRequest> for NewEventRegistration {
    fn from(req: EventRegistrationRequest) -> Self {
        NewEventRegistration {
            name: req.name,
            email: req.email,
            roll: req.roll,
            registration_id: req.registration_id,
            batch_no: req.batch_no,
            phone: req.phone,
            registration_fee: req.registration_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_accept_csv_and_json() {
        assert_eq!(parse_tags("ai, ml ,,web").unwrap(), vec!["ai", "ml", "web"]);
        assert_eq!(parse_tags(r#"["ai", " ml "]"#).unwrap(), vec!["ai", "ml"]);
        assert!(parse_tags("").unwrap().is_empty());
        assert!(parse_tags("[1, 2]").is_err());
    }

    #[test]
    fn inverted_event_times_are_rejected() {
        let mut form = FormData::default();
        for (k, v) in [
            ("title", "Hackday"),
            ("date", "2025-04-01"),
            ("start_time", "16:00:00"),
            ("end_time", "10:00:00"),
            ("location", "Lab 1"),
            ("description", "d"),
            ("detailed_description", "dd"),
            ("category", "hackathon"),
            ("organizer", "Club"),
            ("contact_email", "club@dept.edu"),
            ("max_attendees", "50"),
        ] {
            form.fields.insert(k.to_string(), v.to_string());
        }
        assert!(new_event(&form, None).is_err());

        form.fields.insert("end_time".to_string(), "18:00:00".to_string());
        let event = new_event(&form, None).unwrap();
        assert!(event.registration_open);
        assert!(event.tags.is_empty());
    }
}

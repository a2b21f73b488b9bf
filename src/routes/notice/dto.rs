use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::entities::sea_orm_active_enums::NoticeCategoryEnum;
use crate::error::{AppError, AppResult};
use crate::repositories::{NewNotice, NoticeUpdate};
use crate::utils::upload::FormData;

/// Multipart body of `POST /notice/create`. On update every field is optional.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct NoticeForm {
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub category: NoticeCategoryEnum,
    pub date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub author: String,
    pub location: Option<String>,
    pub time: Option<String>,
    /// Only read on update.
    pub is_archived: Option<bool>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub pdf_file: Option<Vec<u8>>,
}

pub fn new_notice(form: &FormData, pdf_file: Option<String>) -> AppResult<NewNotice> {
    Ok(NewNotice {
        title: form.required("title")?,
        description: form.required("description")?,
        detailed_description: form.required("detailed_description")?,
        category: form
            .parse_enum("category")?
            .ok_or_else(|| AppError::invalid_input("category is required"))?,
        pdf_file,
        date: form.parse_required("date")?,
        expiry_date: form.parse("expiry_date")?,
        author: form.required("author")?,
        location: form.text("location").map(str::to_string),
        time: form.text("time").map(str::to_string),
    })
}

/// Fields present in the form are applied, absent ones are kept.
pub fn notice_update(form: &FormData, pdf_file: Option<String>) -> AppResult<NoticeUpdate> {
    Ok(NoticeUpdate {
        title: form.text("title").map(str::to_string),
        description: form.text("description").map(str::to_string),
        detailed_description: form.text("detailed_description").map(str::to_string),
        category: form.parse_enum("category")?,
        pdf_file: pdf_file.map(Some),
        date: form.parse("date")?,
        expiry_date: form.parse::<NaiveDate>("expiry_date")?.map(Some),
        author: form.text("author").map(str::to_string),
        location: form.text("location").map(|s| Some(s.to_string())),
        time: form.text("time").map(|s| Some(s.to_string())),
        is_archived: form.parse("is_archived")?,
    })
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NoticeQueryParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub category: Option<NoticeCategoryEnum>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormData {
        let mut form = FormData::default();
        for (k, v) in pairs {
            form.fields.insert(k.to_string(), v.to_string());
        }
        form
    }

    #[test]
    fn new_notice_requires_core_fields() {
        let partial = form(&[("title", "Exam routine")]);
        assert!(new_notice(&partial, None).is_err());

        let full = form(&[
            ("title", "Exam routine"),
            ("description", "Final exams"),
            ("detailed_description", "Routine for the final exams"),
            ("category", "academic"),
            ("date", "2025-03-01"),
            ("author", "Office"),
        ]);
        let notice = new_notice(&full, Some("a.pdf".to_string())).unwrap();
        assert_eq!(notice.category, NoticeCategoryEnum::Academic);
        assert_eq!(notice.pdf_file.as_deref(), Some("a.pdf"));
        assert!(notice.expiry_date.is_none());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let bad = form(&[("category", "sports")]);
        assert!(notice_update(&bad, None).is_err());
    }

    #[test]
    fn update_only_touches_present_fields() {
        let update = notice_update(&form(&[("is_archived", "true")]), None).unwrap();
        assert_eq!(update.is_archived, Some(true));
        assert!(update.title.is_none());
        assert!(update.pdf_file.is_none());
    }
}

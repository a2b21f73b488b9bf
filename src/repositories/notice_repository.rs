use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::notice;
use crate::entities::sea_orm_active_enums::NoticeCategoryEnum;
use crate::utils::pagination::Pagination;

pub struct NoticeRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoticeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, notice_id: Uuid) -> Result<Option<notice::Model>> {
        let notice = notice::Entity::find_by_id(notice_id).one(self.db).await?;
        Ok(notice)
    }

    pub async fn create(&self, new_notice: NewNotice) -> Result<notice::Model> {
        let notice_model = notice::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(new_notice.title),
            description: Set(new_notice.description),
            detailed_description: Set(new_notice.detailed_description),
            category: Set(new_notice.category),
            pdf_file: Set(new_notice.pdf_file),
            date: Set(new_notice.date),
            expiry_date: Set(new_notice.expiry_date),
            author: Set(new_notice.author),
            location: Set(new_notice.location),
            time: Set(new_notice.time),
            is_archived: Set(false),
        };

        let result = notice_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, notice: notice::Model, updates: NoticeUpdate) -> Result<notice::Model> {
        let mut active_model: notice::ActiveModel = notice.clone().into();

        if let Some(title) = updates.title {
            active_model.title = Set(title);
        }
        if let Some(description) = updates.description {
            active_model.description = Set(description);
        }
        if let Some(detailed_description) = updates.detailed_description {
            active_model.detailed_description = Set(detailed_description);
        }
        if let Some(category) = updates.category {
            active_model.category = Set(category);
        }
        if let Some(pdf_file) = updates.pdf_file {
            active_model.pdf_file = Set(pdf_file);
        }
        if let Some(date) = updates.date {
            active_model.date = Set(date);
        }
        if let Some(expiry_date) = updates.expiry_date {
            active_model.expiry_date = Set(expiry_date);
        }
        if let Some(author) = updates.author {
            active_model.author = Set(author);
        }
        if let Some(location) = updates.location {
            active_model.location = Set(location);
        }
        if let Some(time) = updates.time {
            active_model.time = Set(time);
        }
        if let Some(is_archived) = updates.is_archived {
            active_model.is_archived = Set(is_archived);
        }

        if !active_model.is_changed() {
            return Ok(notice);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    pub async fn delete(&self, notice_id: Uuid) -> Result<DeleteResult> {
        let result = notice::Entity::delete_by_id(notice_id).exec(self.db).await?;
        Ok(result)
    }

    /// Public listing: archived notices are left out, newest first.
    pub async fn find_published(
        &self,
        category: Option<NoticeCategoryEnum>,
        pagination: Pagination,
    ) -> Result<(Vec<notice::Model>, u64)> {
        let mut query = notice::Entity::find().filter(notice::Column::IsArchived.eq(false));

        if let Some(category) = category {
            query = query.filter(notice::Column::Category.eq(category));
        }

        let total = query.clone().count(self.db).await?;

        let notices = query
            .order_by_desc(notice::Column::Date)
            .order_by_asc(notice::Column::Id)
            .limit(pagination.page_size)
            .offset(pagination.offset())
            .all(self.db)
            .await?;

        Ok((notices, total))
    }
}

pub struct NewNotice {
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub category: NoticeCategoryEnum,
    pub pdf_file: Option<String>,
    pub date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub author: String,
    pub location: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Default)]
pub struct NoticeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub detailed_description: Option<String>,
    pub category: Option<NoticeCategoryEnum>,
    pub pdf_file: Option<Option<String>>,
    pub date: Option<NaiveDate>,
    pub expiry_date: Option<Option<NaiveDate>>,
    pub author: Option<String>,
    pub location: Option<Option<String>>,
    pub time: Option<Option<String>>,
    pub is_archived: Option<bool>,
}

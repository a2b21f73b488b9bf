use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::contact_message;
use crate::utils::pagination::Pagination;

pub struct ContactRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContactRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, message_id: Uuid) -> Result<Option<contact_message::Model>> {
        let message = contact_message::Entity::find_by_id(message_id).one(self.db).await?;
        Ok(message)
    }

    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        subject: String,
        message: String,
    ) -> Result<contact_message::Model> {
        let message_model = contact_message::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(first_name),
            last_name: Set(last_name),
            email: Set(email),
            subject: Set(subject),
            message: Set(message),
            created_at: Set(Utc::now().naive_utc()),
        };

        let result = message_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn find_all_with_pagination(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<contact_message::Model>, u64)> {
        let query = contact_message::Entity::find();
        let total = query.clone().count(self.db).await?;

        let messages = query
            .order_by_desc(contact_message::Column::CreatedAt)
            .order_by_asc(contact_message::Column::Id)
            .limit(pagination.page_size)
            .offset(pagination.offset())
            .all(self.db)
            .await?;

        Ok((messages, total))
    }

    pub async fn delete(&self, message_id: Uuid) -> Result<DeleteResult> {
        let result = contact_message::Entity::delete_by_id(message_id).exec(self.db).await?;
        Ok(result)
    }
}

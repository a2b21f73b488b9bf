use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::admin;

pub struct AdminRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<admin::Model>> {
        let admin = admin::Entity::find()
            .filter(admin::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;
        Ok(admin)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        name: String,
        email: String,
        phone: String,
        password: String,
    ) -> Result<admin::Model> {
        let admin_model = admin::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            name: Set(name),
            email: Set(email),
            phone: Set(phone),
            password: Set(password),
        };

        let result = admin_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, admin: admin::Model, updates: AdminUpdate) -> Result<admin::Model> {
        let mut active_model: admin::ActiveModel = admin.clone().into();

        if let Some(name) = updates.name {
            active_model.name = Set(name);
        }
        if let Some(phone) = updates.phone {
            active_model.phone = Set(phone);
        }
        if let Some(password) = updates.password {
            active_model.password = Set(password);
        }

        if !active_model.is_changed() {
            return Ok(admin);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }
}

/// `password` is already hashed.
#[derive(Debug, Default)]
pub struct AdminUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

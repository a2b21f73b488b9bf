use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::{admin, room_booking, student, teacher, user};
use crate::extractor::Profile;
use crate::repositories::{StudentRepository, TeacherRepository};

pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<user::Model>> {
        let user = user::Entity::find_by_id(user_id).one(self.db).await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        let user = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db)
            .await?;
        Ok(user)
    }

    /// Loads a user together with the profile row its role points at.
    pub async fn find_with_profile(
        &self,
        user_id: Uuid,
    ) -> Result<Option<(user::Model, Option<Profile>)>> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let profile = match user.role {
            RoleEnum::Student => student::Entity::find()
                .filter(student::Column::UserId.eq(user.id))
                .one(self.db)
                .await?
                .map(|s| Profile::Student(s.id)),
            RoleEnum::Teacher => teacher::Entity::find()
                .filter(teacher::Column::UserId.eq(user.id))
                .one(self.db)
                .await?
                .map(|t| Profile::Teacher(t.id)),
            RoleEnum::Admin => admin::Entity::find()
                .filter(admin::Column::UserId.eq(user.id))
                .one(self.db)
                .await?
                .map(|a| Profile::Admin(a.id)),
        };

        Ok(Some((user, profile)))
    }

    pub async fn create(&self, email: String, password: String, role: RoleEnum) -> Result<user::Model> {
        let user_model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password: Set(password),
            role: Set(role),
            created_at: Set(Utc::now().naive_utc()),
        };

        let result = user_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update_password(&self, user_id: Uuid, password: String) -> Result<()> {
        user::ActiveModel {
            id: Set(user_id),
            password: Set(password),
            ..Default::default()
        }
        .update(self.db)
        .await?;
        Ok(())
    }

    pub async fn update_email(&self, user_id: Uuid, email: String) -> Result<()> {
        user::ActiveModel {
            id: Set(user_id),
            email: Set(email),
            ..Default::default()
        }
        .update(self.db)
        .await?;
        Ok(())
    }

    /// Removes the account together with the profile linked to it.
    pub async fn delete(&self, user_id: Uuid) -> Result<DeleteResult> {
        let students = student::Entity::find()
            .filter(student::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;
        for s in students {
            StudentRepository::new(self.db).delete(s.id).await?;
        }

        let teachers = teacher::Entity::find()
            .filter(teacher::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;
        for t in teachers {
            TeacherRepository::new(self.db).delete(t.id).await?;
        }

        room_booking::Entity::delete_many()
            .filter(room_booking::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        admin::Entity::delete_many()
            .filter(admin::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        let result = user::Entity::delete_by_id(user_id).exec(self.db).await?;
        Ok(result)
    }
}

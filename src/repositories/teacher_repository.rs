use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, sea_query::Expr,
};
use uuid::Uuid;

use super::contains_ci;
use crate::entities::{award, course, education, experience, publication, routine, teacher};
use crate::utils::pagination::Pagination;

pub struct TeacherRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeacherRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, teacher_id: Uuid) -> Result<Option<teacher::Model>> {
        let teacher = teacher::Entity::find_by_id(teacher_id).one(self.db).await?;
        Ok(teacher)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<teacher::Model>> {
        let teacher = teacher::Entity::find()
            .filter(teacher::Column::Email.eq(email))
            .one(self.db)
            .await?;
        Ok(teacher)
    }

    pub async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<Option<teacher::Model>> {
        let teacher = teacher::Entity::find()
            .filter(teacher::Column::RegistrationNumber.eq(registration_number))
            .one(self.db)
            .await?;
        Ok(teacher)
    }

    pub async fn find_for_signup(
        &self,
        email: &str,
        registration_number: &str,
    ) -> Result<Option<teacher::Model>> {
        let teacher = teacher::Entity::find()
            .filter(teacher::Column::Email.eq(email))
            .filter(teacher::Column::RegistrationNumber.eq(registration_number))
            .one(self.db)
            .await?;
        Ok(teacher)
    }

    /// Links the profile to `user_id` only if it is still unclaimed.
    pub async fn claim(&self, teacher_id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = teacher::Entity::update_many()
            .col_expr(teacher::Column::UserId, Expr::value(user_id))
            .filter(teacher::Column::Id.eq(teacher_id))
            .filter(teacher::Column::UserId.is_null())
            .exec(self.db)
            .await?;
        Ok(result.rows_affected == 1)
    }

    pub async fn create(&self, new_teacher: NewTeacher) -> Result<teacher::Model> {
        let teacher_model = teacher::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(None),
            registration_number: Set(new_teacher.registration_number),
            email: Set(new_teacher.email),
            name: Set(new_teacher.name),
            department: Set(new_teacher.department),
            bio: Set(None),
            title: Set(None),
            phone: Set(None),
            profile_pic: Set(None),
            research_profile: Set(None),
            socials_linkedin: Set(None),
            socials_github: Set(None),
            socials_twitter: Set(None),
        };

        let result = teacher_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, teacher: teacher::Model, updates: TeacherUpdate) -> Result<teacher::Model> {
        let mut active_model: teacher::ActiveModel = teacher.clone().into();

        if let Some(registration_number) = updates.registration_number {
            active_model.registration_number = Set(registration_number);
        }
        if let Some(email) = updates.email {
            active_model.email = Set(email);
        }
        if let Some(name) = updates.name {
            active_model.name = Set(name);
        }
        if let Some(department) = updates.department {
            active_model.department = Set(department);
        }
        if let Some(bio) = updates.bio {
            active_model.bio = Set(bio);
        }
        if let Some(title) = updates.title {
            active_model.title = Set(title);
        }
        if let Some(phone) = updates.phone {
            active_model.phone = Set(phone);
        }
        if let Some(profile_pic) = updates.profile_pic {
            active_model.profile_pic = Set(profile_pic);
        }
        if let Some(research_profile) = updates.research_profile {
            active_model.research_profile = Set(research_profile);
        }
        if let Some(socials_linkedin) = updates.socials_linkedin {
            active_model.socials_linkedin = Set(socials_linkedin);
        }
        if let Some(socials_github) = updates.socials_github {
            active_model.socials_github = Set(socials_github);
        }
        if let Some(socials_twitter) = updates.socials_twitter {
            active_model.socials_twitter = Set(socials_twitter);
        }

        if !active_model.is_changed() {
            return Ok(teacher);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    /// Deletes the profile and its owned rows. Courses are kept and unassigned.
    pub async fn delete(&self, teacher_id: Uuid) -> Result<DeleteResult> {
        education::Entity::delete_many()
            .filter(education::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;
        experience::Entity::delete_many()
            .filter(experience::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;
        award::Entity::delete_many()
            .filter(award::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;
        publication::Entity::delete_many()
            .filter(publication::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;
        routine::Entity::delete_many()
            .filter(routine::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;
        course::Entity::update_many()
            .col_expr(course::Column::TeacherId, Expr::value(Option::<Uuid>::None))
            .filter(course::Column::TeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;

        let result = teacher::Entity::delete_by_id(teacher_id).exec(self.db).await?;
        Ok(result)
    }

    pub async fn find_all_with_pagination(
        &self,
        filter: TeacherFilter,
        pagination: Pagination,
    ) -> Result<(Vec<teacher::Model>, u64)> {
        let mut query = teacher::Entity::find();

        if let Some(department) = filter.department {
            query = query.filter(contains_ci(teacher::Column::Department, &department));
        }
        if let Some(search) = filter.search {
            query = query.filter(
                contains_ci(teacher::Column::Name, &search)
                    .or(contains_ci(teacher::Column::Email, &search))
                    .or(contains_ci(teacher::Column::RegistrationNumber, &search)),
            );
        }

        let total = query.clone().count(self.db).await?;

        let teachers = query
            .order_by_asc(teacher::Column::Name)
            .order_by_asc(teacher::Column::Id)
            .limit(pagination.page_size)
            .offset(pagination.offset())
            .all(self.db)
            .await?;

        Ok((teachers, total))
    }
}

pub struct NewTeacher {
    pub registration_number: String,
    pub email: String,
    pub name: String,
    pub department: String,
}

#[derive(Debug, Default)]
pub struct TeacherUpdate {
    pub registration_number: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub bio: Option<Option<String>>,
    pub title: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub profile_pic: Option<Option<String>>,
    pub research_profile: Option<Option<String>>,
    pub socials_linkedin: Option<Option<String>>,
    pub socials_github: Option<Option<String>>,
    pub socials_twitter: Option<Option<String>>,
}

#[derive(Debug, Default)]
pub struct TeacherFilter {
    pub department: Option<String>,
    pub search: Option<String>,
}

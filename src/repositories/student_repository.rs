use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, sea_query::Expr,
};
use uuid::Uuid;

use super::contains_ci;
use crate::entities::{assignment, equipment_booking, payment, result, student};
use crate::utils::pagination::Pagination;

pub struct StudentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, student_id: Uuid) -> Result<Option<student::Model>> {
        let student = student::Entity::find_by_id(student_id).one(self.db).await?;
        Ok(student)
    }

    pub async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<Option<student::Model>> {
        let student = student::Entity::find()
            .filter(student::Column::RegistrationNumber.eq(registration_number))
            .one(self.db)
            .await?;
        Ok(student)
    }

    /// Pre-approved profile matching both identifiers, claimed or not.
    pub async fn find_for_signup(
        &self,
        email: &str,
        registration_number: &str,
    ) -> Result<Option<student::Model>> {
        let student = student::Entity::find()
            .filter(student::Column::Email.eq(email))
            .filter(student::Column::RegistrationNumber.eq(registration_number))
            .one(self.db)
            .await?;
        Ok(student)
    }

    /// Links the profile to `user_id` only if it is still unclaimed.
    /// Returns false when another signup got there first.
    pub async fn claim(&self, student_id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = student::Entity::update_many()
            .col_expr(student::Column::UserId, Expr::value(user_id))
            .filter(student::Column::Id.eq(student_id))
            .filter(student::Column::UserId.is_null())
            .exec(self.db)
            .await?;
        Ok(result.rows_affected == 1)
    }

    pub async fn create(&self, new_student: NewStudent) -> Result<student::Model> {
        let student_model = student::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(None),
            registration_number: Set(new_student.registration_number),
            email: Set(new_student.email),
            name: Set(new_student.name),
            session: Set(new_student.session),
            hall: Set(new_student.hall),
            degree: Set(new_student.degree),
            semester: Set(new_student.semester),
            father_name: Set(None),
            mother_name: Set(None),
            phone: Set(None),
            address: Set(None),
            profile_pic: Set(None),
        };

        let result = student_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, student: student::Model, updates: StudentUpdate) -> Result<student::Model> {
        let mut active_model: student::ActiveModel = student.clone().into();

        if let Some(registration_number) = updates.registration_number {
            active_model.registration_number = Set(registration_number);
        }
        if let Some(email) = updates.email {
            active_model.email = Set(email);
        }
        if let Some(name) = updates.name {
            active_model.name = Set(name);
        }
        if let Some(session) = updates.session {
            active_model.session = Set(session);
        }
        if let Some(hall) = updates.hall {
            active_model.hall = Set(hall);
        }
        if let Some(degree) = updates.degree {
            active_model.degree = Set(degree);
        }
        if let Some(semester) = updates.semester {
            active_model.semester = Set(semester);
        }
        if let Some(father_name) = updates.father_name {
            active_model.father_name = Set(father_name);
        }
        if let Some(mother_name) = updates.mother_name {
            active_model.mother_name = Set(mother_name);
        }
        if let Some(phone) = updates.phone {
            active_model.phone = Set(phone);
        }
        if let Some(address) = updates.address {
            active_model.address = Set(address);
        }
        if let Some(profile_pic) = updates.profile_pic {
            active_model.profile_pic = Set(profile_pic);
        }

        if !active_model.is_changed() {
            return Ok(student);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    /// Deletes the profile and every row the student owns.
    pub async fn delete(&self, student_id: Uuid) -> Result<DeleteResult> {
        result::Entity::delete_many()
            .filter(result::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;
        assignment::Entity::delete_many()
            .filter(assignment::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;
        payment::Entity::delete_many()
            .filter(payment::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;
        equipment_booking::Entity::delete_many()
            .filter(equipment_booking::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        let result = student::Entity::delete_by_id(student_id).exec(self.db).await?;
        Ok(result)
    }

    pub async fn find_all_with_pagination(
        &self,
        filter: StudentFilter,
        pagination: Pagination,
    ) -> Result<(Vec<student::Model>, u64)> {
        let mut query = student::Entity::find();

        if let Some(semester) = filter.semester {
            query = query.filter(student::Column::Semester.eq(semester));
        }
        if let Some(session) = filter.session {
            query = query.filter(student::Column::Session.eq(session));
        }
        if let Some(search) = filter.search {
            query = query.filter(
                contains_ci(student::Column::Name, &search)
                    .or(contains_ci(student::Column::Email, &search))
                    .or(contains_ci(student::Column::RegistrationNumber, &search)),
            );
        }

        let total = query.clone().count(self.db).await?;

        let students = query
            .order_by_asc(student::Column::RegistrationNumber)
            .limit(pagination.page_size)
            .offset(pagination.offset())
            .all(self.db)
            .await?;

        Ok((students, total))
    }
}

pub struct NewStudent {
    pub registration_number: String,
    pub email: String,
    pub name: String,
    pub session: Option<String>,
    pub hall: Option<String>,
    pub degree: Option<String>,
    pub semester: Option<String>,
}

/// Outer `None` leaves a column untouched; nullable columns take `Some(None)` to clear.
#[derive(Debug, Default)]
pub struct StudentUpdate {
    pub registration_number: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub session: Option<Option<String>>,
    pub hall: Option<Option<String>>,
    pub degree: Option<Option<String>>,
    pub semester: Option<Option<String>>,
    pub father_name: Option<Option<String>>,
    pub mother_name: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub profile_pic: Option<Option<String>>,
}

#[derive(Debug, Default)]
pub struct StudentFilter {
    pub semester: Option<String>,
    pub session: Option<String>,
    pub search: Option<String>,
}

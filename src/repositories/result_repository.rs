use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::result;

pub struct ResultRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResultRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, result_id: Uuid) -> Result<Option<result::Model>> {
        let row = result::Entity::find_by_id(result_id).one(self.db).await?;
        Ok(row)
    }

    pub async fn find_by_student(&self, student_id: Uuid) -> Result<Vec<result::Model>> {
        let rows = result::Entity::find()
            .filter(result::Column::StudentId.eq(student_id))
            .order_by_asc(result::Column::Semester)
            .order_by_asc(result::Column::Id)
            .all(self.db)
            .await?;
        Ok(rows)
    }

    pub async fn create(
        &self,
        student_id: Uuid,
        semester: String,
        courses: String,
        grade: String,
    ) -> Result<result::Model> {
        let result_model = result::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            semester: Set(semester),
            courses: Set(courses),
            grade: Set(grade),
        };

        let row = result_model.insert(self.db).await?;
        Ok(row)
    }

    pub async fn update(&self, row: result::Model, updates: ResultUpdate) -> Result<result::Model> {
        let mut active_model: result::ActiveModel = row.clone().into();

        if let Some(semester) = updates.semester {
            active_model.semester = Set(semester);
        }
        if let Some(courses) = updates.courses {
            active_model.courses = Set(courses);
        }
        if let Some(grade) = updates.grade {
            active_model.grade = Set(grade);
        }

        if !active_model.is_changed() {
            return Ok(row);
        }
        let updated = active_model.update(self.db).await?;
        Ok(updated)
    }

    pub async fn delete(&self, result_id: Uuid) -> Result<DeleteResult> {
        let deleted = result::Entity::delete_by_id(result_id).exec(self.db).await?;
        Ok(deleted)
    }
}

#[derive(Debug, Default)]
pub struct ResultUpdate {
    pub semester: Option<String>,
    pub courses: Option<String>,
    pub grade: Option<String>,
}

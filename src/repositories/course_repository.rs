use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, sea_query::Expr,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::contains_ci;
use crate::entities::sea_orm_active_enums::CourseTypeEnum;
use crate::entities::{course, exam_schedule, routine};
use crate::utils::pagination::{Pagination, SortOrder};

pub struct CourseRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, course_id: Uuid) -> Result<Option<course::Model>> {
        let course = course::Entity::find_by_id(course_id).one(self.db).await?;
        Ok(course)
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<course::Model>> {
        let course = course::Entity::find()
            .filter(course::Column::Code.eq(code))
            .one(self.db)
            .await?;
        Ok(course)
    }

    pub async fn find_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<course::Model>> {
        let courses = course::Entity::find()
            .filter(course::Column::TeacherId.eq(teacher_id))
            .order_by_asc(course::Column::Code)
            .all(self.db)
            .await?;
        Ok(courses)
    }

    pub async fn create(&self, new_course: NewCourse) -> Result<course::Model> {
        let course_model = course::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(new_course.code),
            title: Set(new_course.title),
            credit: Set(new_course.credit),
            course_type: Set(new_course.course_type),
            year: Set(new_course.year),
            semester: Set(new_course.semester),
            degree: Set(new_course.degree),
            active: Set(new_course.active),
            content: Set(new_course.content),
            teacher_id: Set(new_course.teacher_id),
        };

        let result = course_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, course: course::Model, updates: CourseUpdate) -> Result<course::Model> {
        let mut active_model: course::ActiveModel = course.clone().into();

        if let Some(code) = updates.code {
            active_model.code = Set(code);
        }
        if let Some(title) = updates.title {
            active_model.title = Set(title);
        }
        if let Some(credit) = updates.credit {
            active_model.credit = Set(credit);
        }
        if let Some(course_type) = updates.course_type {
            active_model.course_type = Set(course_type);
        }
        if let Some(year) = updates.year {
            active_model.year = Set(year);
        }
        if let Some(semester) = updates.semester {
            active_model.semester = Set(semester);
        }
        if let Some(degree) = updates.degree {
            active_model.degree = Set(degree);
        }
        if let Some(active) = updates.active {
            active_model.active = Set(active);
        }
        if let Some(content) = updates.content {
            active_model.content = Set(content);
        }
        if let Some(teacher_id) = updates.teacher_id {
            active_model.teacher_id = Set(teacher_id);
        }

        if !active_model.is_changed() {
            return Ok(course);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    /// Exams and routine slots that referenced the course are kept, unlinked.
    pub async fn delete(&self, course_id: Uuid) -> Result<DeleteResult> {
        exam_schedule::Entity::update_many()
            .col_expr(exam_schedule::Column::CourseId, Expr::value(Option::<Uuid>::None))
            .filter(exam_schedule::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;
        routine::Entity::update_many()
            .col_expr(routine::Column::CourseId, Expr::value(Option::<Uuid>::None))
            .filter(routine::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        let result = course::Entity::delete_by_id(course_id).exec(self.db).await?;
        Ok(result)
    }

    pub async fn find_all_with_pagination(
        &self,
        filter: CourseFilter,
        pagination: Pagination,
    ) -> Result<(Vec<course::Model>, u64)> {
        let mut query = course::Entity::find();

        if let Some(year) = filter.year {
            query = query.filter(course::Column::Year.eq(year));
        }
        if let Some(semester) = filter.semester {
            query = query.filter(course::Column::Semester.eq(semester));
        }
        if let Some(code) = filter.code {
            query = query.filter(contains_ci(course::Column::Code, &code));
        }
        if let Some(title) = filter.title {
            query = query.filter(contains_ci(course::Column::Title, &title));
        }
        if let Some(course_type) = filter.course_type {
            query = query.filter(course::Column::CourseType.eq(course_type));
        }

        let total = query.clone().count(self.db).await?;

        let column = match filter.sort_by {
            Some(CourseSort::Semester) => course::Column::Semester,
            _ => course::Column::Year,
        };
        let courses = query
            .order_by(column, filter.order.into())
            .order_by_asc(course::Column::Code)
            .limit(pagination.page_size)
            .offset(pagination.offset())
            .all(self.db)
            .await?;

        Ok((courses, total))
    }
}

pub struct NewCourse {
    pub code: String,
    pub title: String,
    pub credit: i32,
    pub course_type: CourseTypeEnum,
    pub year: String,
    pub semester: String,
    pub degree: String,
    pub active: bool,
    pub content: Option<String>,
    pub teacher_id: Option<Uuid>,
}

#[derive(Debug, Default)]
pub struct CourseUpdate {
    pub code: Option<String>,
    pub title: Option<String>,
    pub credit: Option<i32>,
    pub course_type: Option<CourseTypeEnum>,
    pub year: Option<String>,
    pub semester: Option<String>,
    pub degree: Option<String>,
    pub active: Option<bool>,
    pub content: Option<Option<String>>,
    pub teacher_id: Option<Option<Uuid>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CourseSort {
    Year,
    Semester,
}

#[derive(Debug, Default)]
pub struct CourseFilter {
    pub year: Option<String>,
    pub semester: Option<String>,
    pub code: Option<String>,
    pub title: Option<String>,
    pub course_type: Option<CourseTypeEnum>,
    pub sort_by: Option<CourseSort>,
    pub order: SortOrder,
}

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::contains_ci;
use crate::entities::{course, exam_schedule};
use crate::utils::pagination::Pagination;

pub struct ExamRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, exam_id: Uuid) -> Result<Option<exam_schedule::Model>> {
        let exam = exam_schedule::Entity::find_by_id(exam_id).one(self.db).await?;
        Ok(exam)
    }

    pub async fn create(&self, new_exam: NewExam) -> Result<exam_schedule::Model> {
        let exam_model = exam_schedule::ActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(new_exam.date),
            start_time: Set(new_exam.start_time),
            end_time: Set(new_exam.end_time),
            course_id: Set(new_exam.course_id),
            room_no: Set(new_exam.room_no),
            invigilator: Set(new_exam.invigilator),
            semester: Set(new_exam.semester),
        };

        let result = exam_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        exam: exam_schedule::Model,
        updates: ExamUpdate,
    ) -> Result<exam_schedule::Model> {
        let mut active_model: exam_schedule::ActiveModel = exam.clone().into();

        if let Some(date) = updates.date {
            active_model.date = Set(date);
        }
        if let Some(start_time) = updates.start_time {
            active_model.start_time = Set(start_time);
        }
        if let Some(end_time) = updates.end_time {
            active_model.end_time = Set(end_time);
        }
        if let Some(course_id) = updates.course_id {
            active_model.course_id = Set(course_id);
        }
        if let Some(room_no) = updates.room_no {
            active_model.room_no = Set(room_no);
        }
        if let Some(invigilator) = updates.invigilator {
            active_model.invigilator = Set(invigilator);
        }
        if let Some(semester) = updates.semester {
            active_model.semester = Set(semester);
        }

        if !active_model.is_changed() {
            return Ok(exam);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    pub async fn delete(&self, exam_id: Uuid) -> Result<DeleteResult> {
        let result = exam_schedule::Entity::delete_by_id(exam_id).exec(self.db).await?;
        Ok(result)
    }

    /// Exams joined with their course, if it still exists.
    pub async fn find_all_with_pagination(
        &self,
        filter: ExamFilter,
        pagination: Pagination,
    ) -> Result<(Vec<(exam_schedule::Model, Option<course::Model>)>, u64)> {
        let mut query = exam_schedule::Entity::find().find_also_related(course::Entity);

        if let Some(semester) = filter.semester {
            query = query.filter(exam_schedule::Column::Semester.eq(semester));
        }
        if let Some(room_no) = filter.room_no {
            query = query.filter(exam_schedule::Column::RoomNo.eq(room_no));
        }
        if let Some(invigilator) = filter.invigilator {
            query = query.filter(contains_ci(exam_schedule::Column::Invigilator, &invigilator));
        }
        if let Some(course_title) = filter.course_title {
            query = query.filter(contains_ci(course::Column::Title, &course_title));
        }

        let total = query.clone().count(self.db).await?;

        let exams = query
            .order_by_asc(exam_schedule::Column::Date)
            .order_by_asc(exam_schedule::Column::StartTime)
            .order_by_asc(exam_schedule::Column::Id)
            .limit(pagination.page_size)
            .offset(pagination.offset())
            .all(self.db)
            .await?;

        Ok((exams, total))
    }
}

pub struct NewExam {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub course_id: Option<Uuid>,
    pub room_no: String,
    pub invigilator: String,
    pub semester: String,
}

#[derive(Debug, Default)]
pub struct ExamUpdate {
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub course_id: Option<Option<Uuid>>,
    pub room_no: Option<String>,
    pub invigilator: Option<String>,
    pub semester: Option<String>,
}

#[derive(Debug, Default)]
pub struct ExamFilter {
    pub semester: Option<String>,
    pub room_no: Option<String>,
    pub invigilator: Option<String>,
    pub course_title: Option<String>,
}

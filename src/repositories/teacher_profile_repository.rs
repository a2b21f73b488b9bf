//! Rows a teacher owns on their public profile.

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{award, education, experience, publication};

pub struct EducationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EducationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<education::Model>> {
        let row = education::Entity::find_by_id(id).one(self.db).await?;
        Ok(row)
    }

    pub async fn find_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<education::Model>> {
        let rows = education::Entity::find()
            .filter(education::Column::TeacherId.eq(teacher_id))
            .order_by_asc(education::Column::DegreeName)
            .order_by_asc(education::Column::Id)
            .all(self.db)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, teacher_id: Uuid, new: NewEducation) -> Result<education::Model> {
        let active_model = education::ActiveModel {
            id: Set(Uuid::new_v4()),
            degree_name: Set(new.degree_name),
            major: Set(new.major),
            institution: Set(new.institution),
            year: Set(new.year),
            teacher_id: Set(teacher_id),
        };

        let result = active_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, row: education::Model, updates: EducationUpdate) -> Result<education::Model> {
        let mut active_model: education::ActiveModel = row.clone().into();

        if let Some(degree_name) = updates.degree_name {
            active_model.degree_name = Set(degree_name);
        }
        if let Some(major) = updates.major {
            active_model.major = Set(major);
        }
        if let Some(institution) = updates.institution {
            active_model.institution = Set(institution);
        }
        if let Some(year) = updates.year {
            active_model.year = Set(year);
        }

        if !active_model.is_changed() {
            return Ok(row);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult> {
        let result = education::Entity::delete_by_id(id).exec(self.db).await?;
        Ok(result)
    }
}

pub struct NewEducation {
    pub degree_name: String,
    pub major: Option<String>,
    pub institution: String,
    pub year: Option<String>,
}

#[derive(Debug, Default)]
pub struct EducationUpdate {
    pub degree_name: Option<String>,
    pub major: Option<Option<String>>,
    pub institution: Option<String>,
    pub year: Option<Option<String>>,
}

pub struct ExperienceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExperienceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<experience::Model>> {
        let row = experience::Entity::find_by_id(id).one(self.db).await?;
        Ok(row)
    }

    pub async fn find_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<experience::Model>> {
        let rows = experience::Entity::find()
            .filter(experience::Column::TeacherId.eq(teacher_id))
            .order_by_asc(experience::Column::Title)
            .order_by_asc(experience::Column::Id)
            .all(self.db)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, teacher_id: Uuid, new: NewExperience) -> Result<experience::Model> {
        let active_model = experience::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(new.title),
            organization: Set(new.organization),
            duration: Set(new.duration),
            year: Set(new.year),
            teacher_id: Set(teacher_id),
        };

        let result = active_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, row: experience::Model, updates: ExperienceUpdate) -> Result<experience::Model> {
        let mut active_model: experience::ActiveModel = row.clone().into();

        if let Some(title) = updates.title {
            active_model.title = Set(title);
        }
        if let Some(organization) = updates.organization {
            active_model.organization = Set(organization);
        }
        if let Some(duration) = updates.duration {
            active_model.duration = Set(duration);
        }
        if let Some(year) = updates.year {
            active_model.year = Set(year);
        }

        if !active_model.is_changed() {
            return Ok(row);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult> {
        let result = experience::Entity::delete_by_id(id).exec(self.db).await?;
        Ok(result)
    }
}

pub struct NewExperience {
    pub title: String,
    pub organization: String,
    pub duration: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Default)]
pub struct ExperienceUpdate {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub duration: Option<Option<String>>,
    pub year: Option<Option<String>>,
}

pub struct AwardRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AwardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<award::Model>> {
        let row = award::Entity::find_by_id(id).one(self.db).await?;
        Ok(row)
    }

    pub async fn find_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<award::Model>> {
        let rows = award::Entity::find()
            .filter(award::Column::TeacherId.eq(teacher_id))
            .order_by_asc(award::Column::Title)
            .order_by_asc(award::Column::Id)
            .all(self.db)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, teacher_id: Uuid, new: NewAward) -> Result<award::Model> {
        let active_model = award::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(new.title),
            award_type: Set(new.award_type),
            description: Set(new.description),
            year: Set(new.year),
            teacher_id: Set(teacher_id),
        };

        let result = active_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, row: award::Model, updates: AwardUpdate) -> Result<award::Model> {
        let mut active_model: award::ActiveModel = row.clone().into();

        if let Some(title) = updates.title {
            active_model.title = Set(title);
        }
        if let Some(award_type) = updates.award_type {
            active_model.award_type = Set(award_type);
        }
        if let Some(description) = updates.description {
            active_model.description = Set(description);
        }
        if let Some(year) = updates.year {
            active_model.year = Set(year);
        }

        if !active_model.is_changed() {
            return Ok(row);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult> {
        let result = award::Entity::delete_by_id(id).exec(self.db).await?;
        Ok(result)
    }
}

pub struct NewAward {
    pub title: String,
    pub award_type: Option<String>,
    pub description: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Default)]
pub struct AwardUpdate {
    pub title: Option<String>,
    pub award_type: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub year: Option<Option<String>>,
}

pub struct PublicationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PublicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<publication::Model>> {
        let row = publication::Entity::find_by_id(id).one(self.db).await?;
        Ok(row)
    }

    pub async fn find_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<publication::Model>> {
        let rows = publication::Entity::find()
            .filter(publication::Column::TeacherId.eq(teacher_id))
            .order_by_asc(publication::Column::Title)
            .order_by_asc(publication::Column::Id)
            .all(self.db)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, teacher_id: Uuid, new: NewPublication) -> Result<publication::Model> {
        let active_model = publication::ActiveModel {
            id: Set(Uuid::new_v4()),
            publication_type: Set(new.publication_type),
            title: Set(new.title),
            url: Set(new.url),
            teacher_id: Set(teacher_id),
        };

        let result = active_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, row: publication::Model, updates: PublicationUpdate) -> Result<publication::Model> {
        let mut active_model: publication::ActiveModel = row.clone().into();

        if let Some(publication_type) = updates.publication_type {
            active_model.publication_type = Set(publication_type);
        }
        if let Some(title) = updates.title {
            active_model.title = Set(title);
        }
        if let Some(url) = updates.url {
            active_model.url = Set(url);
        }

        if !active_model.is_changed() {
            return Ok(row);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult> {
        let result = publication::Entity::delete_by_id(id).exec(self.db).await?;
        Ok(result)
    }
}

pub struct NewPublication {
    pub publication_type: Option<String>,
    pub title: String,
    pub url: Option<String>,
}

#[derive(Debug, Default)]
pub struct PublicationUpdate {
    pub publication_type: Option<Option<String>>,
    pub title: Option<String>,
    pub url: Option<Option<String>>,
}

use std::str::FromStr;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::contains_ci;
use crate::entities::meeting;
use crate::entities::sea_orm_active_enums::ApprovalStatusEnum;
use crate::utils::pagination::{Pagination, SortOrder};

pub struct MeetingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MeetingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, meeting_id: Uuid) -> Result<Option<meeting::Model>> {
        let meeting = meeting::Entity::find_by_id(meeting_id).one(self.db).await?;
        Ok(meeting)
    }

    pub async fn create(&self, new_meeting: NewMeeting) -> Result<meeting::Model> {
        let meeting_model = meeting::ActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(new_meeting.date),
            time: Set(new_meeting.time),
            topic: Set(new_meeting.topic),
            host_name: Set(new_meeting.host_name),
            location: Set(new_meeting.location),
            status: Set(new_meeting.status),
        };

        let result = meeting_model.insert(self.db).await?;
        Ok(result)
    }

    pub async fn update(&self, meeting: meeting::Model, updates: MeetingUpdate) -> Result<meeting::Model> {
        let mut active_model: meeting::ActiveModel = meeting.clone().into();

        if let Some(date) = updates.date {
            active_model.date = Set(date);
        }
        if let Some(time) = updates.time {
            active_model.time = Set(time);
        }
        if let Some(topic) = updates.topic {
            active_model.topic = Set(topic);
        }
        if let Some(host_name) = updates.host_name {
            active_model.host_name = Set(host_name);
        }
        if let Some(location) = updates.location {
            active_model.location = Set(location);
        }
        if let Some(status) = updates.status {
            active_model.status = Set(status);
        }

        if !active_model.is_changed() {
            return Ok(meeting);
        }
        let result = active_model.update(self.db).await?;
        Ok(result)
    }

    pub async fn delete(&self, meeting_id: Uuid) -> Result<DeleteResult> {
        let result = meeting::Entity::delete_by_id(meeting_id).exec(self.db).await?;
        Ok(result)
    }

    pub async fn find_all_with_pagination(
        &self,
        filter: MeetingFilter,
        pagination: Pagination,
    ) -> Result<(Vec<meeting::Model>, u64)> {
        let mut query = meeting::Entity::find();

        if let Some(date) = filter.date {
            query = query.filter(meeting::Column::Date.eq(date));
        }
        if let Some(time) = filter.time {
            query = query.filter(meeting::Column::Time.eq(time));
        }
        if let Some(host_name) = filter.host_name {
            query = query.filter(contains_ci(meeting::Column::HostName, &host_name));
        }
        if let Some(location) = filter.location {
            query = query.filter(contains_ci(meeting::Column::Location, &location));
        }
        if let Some(topic) = filter.topic {
            query = query.filter(contains_ci(meeting::Column::Topic, &topic));
        }
        if let Some(status) = filter.status {
            query = query.filter(meeting::Column::Status.eq(status));
        }

        let total = query.clone().count(self.db).await?;

        if let Some(sort) = filter.sort_by {
            query = query.order_by(sort.column(), filter.order.into());
        }
        let meetings = query
            .order_by_asc(meeting::Column::Date)
            .order_by_asc(meeting::Column::Time)
            .order_by_asc(meeting::Column::Id)
            .limit(pagination.page_size)
            .offset(pagination.offset())
            .all(self.db)
            .await?;

        Ok((meetings, total))
    }
}

pub struct NewMeeting {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub topic: String,
    pub host_name: String,
    pub location: String,
    pub status: ApprovalStatusEnum,
}

#[derive(Debug, Default)]
pub struct MeetingUpdate {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub topic: Option<String>,
    pub host_name: Option<String>,
    pub location: Option<String>,
    pub status: Option<ApprovalStatusEnum>,
}

/// Columns a meeting listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingSort {
    Date,
    Time,
    Topic,
    HostName,
    Location,
    Status,
}

impl MeetingSort {
    fn column(self) -> meeting::Column {
        match self {
            MeetingSort::Date => meeting::Column::Date,
            MeetingSort::Time => meeting::Column::Time,
            MeetingSort::Topic => meeting::Column::Topic,
            MeetingSort::HostName => meeting::Column::HostName,
            MeetingSort::Location => meeting::Column::Location,
            MeetingSort::Status => meeting::Column::Status,
        }
    }
}

impl FromStr for MeetingSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(MeetingSort::Date),
            "time" => Ok(MeetingSort::Time),
            "topic" => Ok(MeetingSort::Topic),
            "host_name" => Ok(MeetingSort::HostName),
            "location" => Ok(MeetingSort::Location),
            "status" => Ok(MeetingSort::Status),
            other => Err(format!("Invalid sort_by field: {other}")),
        }
    }
}

#[derive(Debug, Default)]
pub struct MeetingFilter {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub host_name: Option<String>,
    pub location: Option<String>,
    pub topic: Option<String>,
    pub status: Option<ApprovalStatusEnum>,
    pub sort_by: Option<MeetingSort>,
    pub order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_outside_allow_list_are_rejected() {
        assert_eq!("host_name".parse::<MeetingSort>().unwrap(), MeetingSort::HostName);
        assert_eq!("status".parse::<MeetingSort>().unwrap(), MeetingSort::Status);
        assert!("id; DROP TABLE meetings".parse::<MeetingSort>().is_err());
        assert!("HostName".parse::<MeetingSort>().is_err());
    }
}

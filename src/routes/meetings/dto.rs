use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::entities::sea_orm_active_enums::ApprovalStatusEnum;
use crate::error::AppResult;
use crate::repositories::{MeetingUpdate, NewMeeting};
use crate::utils::pagination::SortOrder;
use crate::utils::patch::{Patch, non_null, nullable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMeetingRequest {
    pub date: NaiveDate,
    #[schema(value_type = String, example = "14:30:00")]
    pub time: NaiveTime,
    pub topic: String,
    pub host_name: String,
    pub location: String,
    pub status: Option<ApprovalStatusEnum>,
}

impl From<CreateMeetingRequest> for NewMeeting {
    fn from(req: CreateMeetingRequest) -> Self {
        NewMeeting {
            date: req.date,
            time: req.time,
            topic: req.topic,
            host_name: req.host_name,
            location: req.location,
            status: req.status.unwrap_or(ApprovalStatusEnum::Pending),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMeetingRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<NaiveDate>)]
    pub date: Patch<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub time: Patch<NaiveTime>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub topic: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub host_name: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub location: Patch<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<ApprovalStatusEnum>)]
    pub status: Patch<ApprovalStatusEnum>,
}

impl UpdateMeetingRequest {
    pub fn into_update(self) -> AppResult<MeetingUpdate> {
        Ok(MeetingUpdate {
            date: non_null("date", self.date)?,
            time: non_null("time", self.time)?,
            topic: non_null("topic", self.topic)?,
            host_name: non_null("host_name", self.host_name)?,
            location: non_null("location", self.location)?,
            status: non_null("status", self.status)?,
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MeetingQueryParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    #[serde(alias = "date_filter")]
    pub date: Option<NaiveDate>,
    #[serde(alias = "time_filter")]
    #[param(value_type = Option<String>)]
    pub time: Option<NaiveTime>,
    pub host_name: Option<String>,
    pub location: Option<String>,
    pub topic: Option<String>,
    pub status: Option<ApprovalStatusEnum>,
    /// One of `date`, `time`, `topic`, `host_name`, `location`, `status`.
    pub sort_by: Option<String>,
    #[serde(default, alias = "sort_order")]
    #[param(value_type = Option<SortOrder>)]
    pub order: SortOrder,
}

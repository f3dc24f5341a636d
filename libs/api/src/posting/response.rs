use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WriterResp {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
}

impl From<UserEntity> for WriterResp {
    fn from(value: UserEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            avatar: value.avatar,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostingResp {
    pub id: String,
    pub title: String,
    pub writer: Option<WriterResp>,
    pub created_at: String,
    pub start_date: String,
    pub end_date: String,
    pub days: i32,
    pub period: String,
    pub season: String,
    pub headcount: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub theme: Vec<String>,
    pub with_who: Vec<String>,
    pub vehicle: Option<String>,
    pub thumbnail: Option<String>,
    pub liked_count: u64,
    pub is_liked: bool,
    pub report_count: u64,
    pub is_reported: bool,
}

fn labels<T: Label>(values: Option<Vec<T>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .map(|x| x.label().to_string())
        .collect()
}

fn label<T: Label>(value: Option<T>) -> Option<String> {
    value.map(|x| x.label().to_string())
}

impl From<PostingDetailEntity> for PostingResp {
    fn from(value: PostingDetailEntity) -> Self {
        let posting = value.posting;
        Self {
            id: posting.id,
            title: posting.title,
            writer: value.writer.map(WriterResp::from),
            created_at: posting.created_at.and_utc().to_rfc3339(),
            start_date: posting.start_date.to_string(),
            end_date: posting.end_date.to_string(),
            days: posting.days,
            period: posting.period.label().to_string(),
            season: posting.season.label().to_string(),
            headcount: label(posting.headcount),
            budget: label(posting.budget),
            location: label(posting.location),
            theme: labels(posting.theme),
            with_who: labels(posting.with_who),
            vehicle: label(posting.vehicle),
            thumbnail: posting.thumbnail,
            liked_count: value.liked_count,
            is_liked: false,
            report_count: 0,
            is_reported: false,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostingSummaryResp {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub writer: Option<WriterResp>,
    pub created_at: String,
    pub period: String,
    pub season: String,
    pub location: Option<String>,
    pub theme: Vec<String>,
    pub liked_count: u64,
}

impl From<PostingDetailEntity> for PostingSummaryResp {
    fn from(value: PostingDetailEntity) -> Self {
        let posting = value.posting;
        Self {
            id: posting.id,
            title: posting.title,
            thumbnail: posting.thumbnail,
            writer: value.writer.map(WriterResp::from),
            created_at: posting.created_at.and_utc().to_rfc3339(),
            period: posting.period.label().to_string(),
            season: posting.season.label().to_string(),
            location: label(posting.location),
            theme: labels(posting.theme),
            liked_count: value.liked_count,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetPostingsResp {
    pub postings: Vec<PostingSummaryResp>,
}

#[derive(Serialize, ToSchema)]
pub struct GetTitlesResp {
    pub titles: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ToggleLikeResp {
    pub liked: bool,
}

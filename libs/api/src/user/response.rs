use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResp {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserEntity> for UserResp {
    fn from(value: UserEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            avatar: value.avatar,
            created_at: value.created_at.and_utc().to_rfc3339(),
            updated_at: value.updated_at.and_utc().to_rfc3339(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetMyPostingsResp {
    pub postings: Vec<MyPostingResp>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MyPostingResp {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub created_at: String,
    pub start_date: String,
    pub end_date: String,
    pub period: String,
    pub season: String,
}

impl From<PostingEntity> for MyPostingResp {
    fn from(value: PostingEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            thumbnail: value.thumbnail,
            created_at: value.created_at.and_utc().to_rfc3339(),
            start_date: value.start_date.to_string(),
            end_date: value.end_date.to_string(),
            period: value.period.label().to_string(),
            season: value.season.label().to_string(),
        }
    }
}

use anyhow::anyhow;
use chrono::NaiveDate;
use entity::{
    category::{
        Budget, Headcount, Location, Period, Season, Sorting, Theme, Vehicle,
        WithWho,
    },
    posting::{PostingFilter, PostingInput, PostingPatch},
    prelude::*,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::Pagination;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostingRequest {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub headcount: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub theme: Option<Vec<String>>,
    pub with_who: Option<Vec<String>>,
    pub vehicle: Option<String>,
}

impl From<CreatePostingRequest> for PostingInput {
    fn from(value: CreatePostingRequest) -> Self {
        Self {
            title: value.title,
            start_date: value.start_date,
            end_date: value.end_date,
            headcount: value.headcount,
            budget: value.budget,
            location: value.location,
            theme: value.theme,
            with_who: value.with_who,
            vehicle: value.vehicle,
        }
    }
}

#[derive(Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostingRequest {
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub headcount: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub theme: Option<Vec<String>>,
    pub with_who: Option<Vec<String>>,
    pub vehicle: Option<String>,
}

impl From<UpdatePostingRequest> for PostingPatch {
    fn from(value: UpdatePostingRequest) -> Self {
        Self {
            title: value.title,
            start_date: value.start_date,
            end_date: value.end_date,
            headcount: value.headcount,
            budget: value.budget,
            location: value.location,
            theme: value.theme,
            with_who: value.with_who,
            vehicle: value.vehicle,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateThumbnailRequest {
    pub thumbnail: String,
}

#[derive(Deserialize, IntoParams, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetPostingsParam {
    pub keyword: Option<String>,
    /// `최신순` or `좋아요순`
    pub sorting: Option<String>,
    /// 1-based page number
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub budget: Option<String>,
    pub headcount: Option<String>,
    #[serde(default)]
    pub location: Vec<String>,
    pub period: Option<String>,
    #[serde(default)]
    pub season: Vec<String>,
    pub vehicle: Option<String>,
    #[serde(default)]
    pub theme: Vec<String>,
    #[serde(default)]
    pub with_who: Vec<String>,
}

fn parse<T: Label>(label: Option<&str>) -> anyhow::Result<Option<T>> {
    label
        .map(|x| T::from_label(x).ok_or_else(|| anyhow!("unknown label: {x}")))
        .transpose()
}

fn parse_all<T: Label>(labels: &[String]) -> anyhow::Result<Vec<T>> {
    labels
        .iter()
        .map(|x| T::from_label(x).ok_or_else(|| anyhow!("unknown label: {x}")))
        .collect()
}

impl GetPostingsParam {
    pub fn into_filter(
        self,
        pagination: &Pagination,
    ) -> anyhow::Result<PostingFilter> {
        let limit = self
            .limit
            .unwrap_or(pagination.default_limit)
            .min(pagination.max_limit);
        // The skipped row count must fit Postgres' bigint OFFSET.
        let last_page = (i64::MAX as u64 / limit.max(1)).max(1);

        Ok(PostingFilter {
            sorting: parse::<Sorting>(self.sorting.as_deref())?
                .unwrap_or_default(),
            offset: self.offset.unwrap_or(1).clamp(1, last_page),
            limit,
            budget: parse::<Budget>(self.budget.as_deref())?,
            headcount: parse::<Headcount>(self.headcount.as_deref())?,
            locations: parse_all::<Location>(&self.location)?,
            period: parse::<Period>(self.period.as_deref())?,
            seasons: parse_all::<Season>(&self.season)?,
            vehicle: parse::<Vehicle>(self.vehicle.as_deref())?,
            themes: parse_all::<Theme>(&self.theme)?,
            with_whos: parse_all::<WithWho>(&self.with_who)?,
            keyword: self.keyword.unwrap_or_default(),
        })
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetTitlesParam {
    pub keyword: String,
}

#[cfg(test)]
mod test {
    use super::*;

    fn pagination() -> Pagination {
        Pagination {
            default_limit: 10,
            max_limit: 50,
        }
    }

    #[test]
    fn test_into_filter_defaults() {
        // Act
        let filter = GetPostingsParam::default()
            .into_filter(&pagination())
            .unwrap();

        // Assert
        assert_eq!(filter.keyword, "");
        assert_eq!(filter.sorting, Sorting::Newest);
        assert_eq!(filter.offset, 1);
        assert_eq!(filter.limit, 10);
        assert_eq!(filter.budget, None);
        assert!(filter.locations.is_empty());
    }

    #[test]
    fn test_into_filter_parses_labels() {
        // Arrange
        let param = GetPostingsParam {
            sorting: Some("좋아요순".to_string()),
            limit: Some(100),
            budget: Some("500만원 이상".to_string()),
            location: vec!["서울".to_string(), "부산".to_string()],
            season: vec!["겨울".to_string()],
            with_who: vec!["반려동물".to_string()],
            ..Default::default()
        };

        // Act
        let filter = param.into_filter(&pagination()).unwrap();

        // Assert
        assert_eq!(filter.sorting, Sorting::MostLiked);
        assert_eq!(filter.limit, 50);
        assert_eq!(filter.budget, Some(Budget::Over5M));
        assert_eq!(filter.locations, vec![Location::Seoul, Location::Busan]);
        assert_eq!(filter.seasons, vec![Season::Winter]);
        assert_eq!(filter.with_whos, vec![WithWho::Pets]);
    }

    #[test]
    fn test_into_filter_clamps_far_pages() {
        // Arrange
        let param = GetPostingsParam {
            offset: Some(u64::MAX),
            ..Default::default()
        };

        // Act
        let filter = param.into_filter(&pagination()).unwrap();

        // Assert
        assert!(filter.skip() <= i64::MAX as u64);
        assert!(filter.skip() > 0);
    }

    #[test]
    fn test_into_filter_rejects_unknown_label() {
        let param = GetPostingsParam {
            theme: vec!["힐링".to_string(), "우주".to_string()],
            ..Default::default()
        };

        assert!(param.into_filter(&pagination()).is_err());
    }

    #[test]
    fn test_deserialize_create_request() {
        // Arrange
        let body = r#"{
            "title": "부산 여행",
            "startDate": "2024-06-01",
            "endDate": "2024-06-03",
            "headcount": "2명",
            "theme": ["맛집"],
            "withWho": ["친구", "가족"]
        }"#;

        // Act
        let request = serde_json::from_str::<CreatePostingRequest>(body);

        // Assert
        let input = PostingInput::from(request.unwrap());
        assert_eq!(input.start_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(input.with_who.map(|x| x.len()), Some(2));
        assert_eq!(input.budget, None);
    }
}

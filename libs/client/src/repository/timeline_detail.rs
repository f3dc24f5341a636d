use std::future::Future;

use tracing::info;

use crate::{
    domain::{PlaceList, TimelineDetailInfo},
    dto::{
        PlaceListResponseDTO, TimelineDetailRequestDTO,
        TimelineDetailResponseDTO,
    },
    endpoint::TimelineDetailEndPoint,
    network::NetworkType,
    ClientError,
};

pub trait TimelineDetailRepository {
    fn fetch_timeline_detail_info(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<TimelineDetailInfo, ClientError>> + Send;

    fn create_timeline(
        &self,
        request: TimelineDetailRequestDTO,
    ) -> impl Future<Output = Result<TimelineDetailInfo, ClientError>> + Send;

    fn fetch_place_list(
        &self,
        keyword: &str,
        offset: i64,
    ) -> impl Future<Output = Result<PlaceList, ClientError>> + Send;

    /// Returns true once the server accepted the deletion.
    fn delete_timeline(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<bool, ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct TimelineDetailRepositoryImpl<N> {
    network: N,
}

impl<N: NetworkType> TimelineDetailRepositoryImpl<N> {
    pub fn new(network: N) -> Self {
        Self { network }
    }
}

impl<N: NetworkType> TimelineDetailRepository
    for TimelineDetailRepositoryImpl<N>
{
    async fn fetch_timeline_detail_info(
        &self,
        id: &str,
    ) -> Result<TimelineDetailInfo, ClientError> {
        let endpoint = TimelineDetailEndPoint::SpecificTimeline(id.to_string());

        let dto = self
            .network
            .request::<_, TimelineDetailResponseDTO>(&endpoint)
            .await?;

        Ok(dto.to_domain())
    }

    async fn create_timeline(
        &self,
        request: TimelineDetailRequestDTO,
    ) -> Result<TimelineDetailInfo, ClientError> {
        let endpoint = TimelineDetailEndPoint::CreateTimeline(request);

        let dto = self
            .network
            .request::<_, TimelineDetailResponseDTO>(&endpoint)
            .await?;

        info!(task = "create timeline", id = %dto.id);

        Ok(dto.to_domain())
    }

    async fn fetch_place_list(
        &self,
        keyword: &str,
        offset: i64,
    ) -> Result<PlaceList, ClientError> {
        let endpoint =
            TimelineDetailEndPoint::FetchPlaceList(keyword.to_string(), offset);

        let dto = self
            .network
            .request::<_, PlaceListResponseDTO>(&endpoint)
            .await?;

        Ok(dto.to_domain())
    }

    async fn delete_timeline(&self, id: &str) -> Result<bool, ClientError> {
        let endpoint = TimelineDetailEndPoint::DeleteTimeline(id.to_string());

        self.network.send(&endpoint).await?;
        info!(task = "delete timeline", id);

        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::repository::fake::FakeNetwork;

    fn detail() -> serde_json::Value {
        json!({
            "id": "7",
            "posting": "p1",
            "title": "해운대 산책",
            "day": 1,
            "description": "바다 보면서 걷기",
            "image": "https://cdn.example.com/7.jpg",
            "coordX": null,
            "coordY": null,
            "date": "2024-07-01",
            "place": null,
            "time": "10:00",
            "isOwner": true,
        })
    }

    #[tokio::test]
    async fn test_fetch_detail() {
        // Arrange
        let repository = TimelineDetailRepositoryImpl::new(
            FakeNetwork::default().with("GET /timelines/7", detail()),
        );

        // Act
        let info = repository.fetch_timeline_detail_info("7").await.unwrap();

        // Assert
        assert_eq!(info.title, "해운대 산책");
        assert!(info.is_owner);
    }

    #[tokio::test]
    async fn test_create_posts_to_collection() {
        let repository = TimelineDetailRepositoryImpl::new(
            FakeNetwork::default().with("POST /timelines", detail()),
        );

        let info = repository
            .create_timeline(TimelineDetailRequestDTO::default())
            .await
            .unwrap();

        assert_eq!(info.id, "7");
        assert_eq!(repository.network.calls(), vec!["POST /timelines"]);
    }

    #[tokio::test]
    async fn test_fetch_place_list() {
        // Arrange
        let repository = TimelineDetailRepositoryImpl::new(
            FakeNetwork::default().with(
                "GET /timelines/map",
                json!({
                    "places": [{
                        "title": "해운대해수욕장",
                        "address": "부산 해운대구",
                        "mapX": 129.16,
                        "mapY": 35.16,
                    }],
                    "isLastPage": true,
                }),
            ),
        );

        // Act
        let places = repository.fetch_place_list("해운대", 1).await.unwrap();

        // Assert
        assert_eq!(places.places.len(), 1);
        assert_eq!(places.places[0].title, "해운대해수욕장");
        assert!(places.is_last_page);
    }

    #[tokio::test]
    async fn test_delete_failure_is_an_error() {
        let repository = TimelineDetailRepositoryImpl::new(FakeNetwork::default());

        let deleted = repository.delete_timeline("7").await;

        assert!(matches!(
            deleted,
            Err(ClientError::FailedStatusCode { .. })
        ));
    }
}

use std::future::Future;

use crate::{
    domain::TimelineDetailInfo, repository::TimelineDetailRepository,
    ClientError,
};

pub trait TimelineDetailUseCase {
    fn fetch_timeline_detail(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<TimelineDetailInfo, ClientError>> + Send;

    fn delete_timeline(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<bool, ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct TimelineDetailUseCaseImpl<R> {
    repository: R,
}

impl<R: TimelineDetailRepository + Sync> TimelineDetailUseCaseImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: TimelineDetailRepository + Sync> TimelineDetailUseCase
    for TimelineDetailUseCaseImpl<R>
{
    async fn fetch_timeline_detail(
        &self,
        id: &str,
    ) -> Result<TimelineDetailInfo, ClientError> {
        self.repository.fetch_timeline_detail_info(id).await
    }

    async fn delete_timeline(&self, id: &str) -> Result<bool, ClientError> {
        self.repository.delete_timeline(id).await
    }
}

use std::future::Future;

use tracing::info;

use crate::{
    cache::ProfileCache, domain::Profile, dto::UserResponseDTO,
    endpoint::UserEndPoint, network::NetworkType, ClientError,
};

pub trait UserRepository {
    /// The cached profile, fetched and cached on first use.
    fn fetch_user_info(
        &self,
    ) -> impl Future<Output = Result<Profile, ClientError>> + Send;

    fn update_user_info(
        &self,
        name: &str,
        image_url: Option<String>,
    ) -> impl Future<Output = Result<Profile, ClientError>> + Send;

    fn check_duplication(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<bool, ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct UserRepositoryImpl<N> {
    network: N,
    cache: ProfileCache,
}

impl<N: NetworkType> UserRepositoryImpl<N> {
    pub fn new(network: N, cache: ProfileCache) -> Self {
        Self { network, cache }
    }
}

impl<N: NetworkType> UserRepository for UserRepositoryImpl<N> {
    async fn fetch_user_info(&self) -> Result<Profile, ClientError> {
        if let Some(profile) = self.cache.get().await {
            return Ok(profile);
        }

        let profile = self
            .network
            .request::<_, UserResponseDTO>(&UserEndPoint::RequestUserInfo)
            .await?
            .to_domain();

        self.cache.set(profile.clone()).await?;

        Ok(profile)
    }

    async fn update_user_info(
        &self,
        name: &str,
        image_url: Option<String>,
    ) -> Result<Profile, ClientError> {
        let endpoint = UserEndPoint::UpdateUserInfo {
            name: name.to_string(),
            avatar: image_url,
        };

        let profile = self
            .network
            .request::<_, UserResponseDTO>(&endpoint)
            .await?
            .to_domain();

        self.cache.set(profile.clone()).await?;
        info!(task = "update profile", name = %profile.name);

        Ok(profile)
    }

    async fn check_duplication(&self, name: &str) -> Result<bool, ClientError> {
        self.network
            .request::<_, bool>(&UserEndPoint::CheckDuplicatedName(
                name.to_string(),
            ))
            .await
    }
}

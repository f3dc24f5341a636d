use std::{path::PathBuf, sync::Arc};

use tokio::sync::RwLock;
use tracing::warn;

use crate::{domain::Profile, response::IntoResponse, ClientError};

/// Holds the signed-in profile. With a file attached the profile survives
/// restarts; a file that cannot be read or parsed counts as empty.
#[derive(Debug, Clone, Default)]
pub struct ProfileCache {
    profile: Arc<RwLock<Option<Profile>>>,
    file: Option<PathBuf>,
}

impl ProfileCache {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub async fn with_file(file: PathBuf) -> Self {
        let profile = match tokio::fs::read_to_string(&file).await {
            Ok(text) => serde_json::from_str::<Profile>(&text)
                .map_err(|e| {
                    warn!(task = "load profile cache", error = %e);
                })
                .ok(),
            Err(_) => None,
        };

        Self {
            profile: Arc::new(RwLock::new(profile)),
            file: Some(file),
        }
    }

    pub async fn get(&self) -> Option<Profile> {
        self.profile.read().await.clone()
    }

    pub async fn set(&self, profile: Profile) -> Result<(), ClientError> {
        let mut cached = self.profile.write().await;

        if let Some(file) = &self.file {
            let text = serde_json::to_string(&profile)
                .into_response("failed to encode profile")?;
            tokio::fs::write(file, text)
                .await
                .into_response("failed to write profile cache")?;
        }

        *cached = Some(profile);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "바다사람".to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_in_memory() {
        let cache = ProfileCache::in_memory();
        assert_eq!(cache.get().await, None);

        cache.set(profile()).await.unwrap();
        assert_eq!(cache.get().await, Some(profile()));
    }

    #[tokio::test]
    async fn test_file_survives_reload() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("profile.json");
        let cache = ProfileCache::with_file(file.clone()).await;

        // Act
        cache.set(profile()).await.unwrap();
        let reloaded = ProfileCache::with_file(file).await;

        // Assert
        assert_eq!(reloaded.get().await, Some(profile()));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("profile.json");
        std::fs::write(&file, "not json").unwrap();

        let cache = ProfileCache::with_file(file).await;

        assert_eq!(cache.get().await, None);
    }
}

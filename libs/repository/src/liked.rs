use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait,
    IntoActiveModel,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct LikedRepository {
    db: Arc<DatabaseConnection>,
}

impl LikedRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<liked::Model> for LikedEntity {
    fn from(value: liked::Model) -> Self {
        LikedEntity {
            posting_id: value.posting_id,
            user_id: value.user_id,
            is_deleted: value.is_deleted,
            created_at: value.created_at,
        }
    }
}

impl LikedRepository {
    pub async fn find(
        &self,
        posting_id: &str,
        user_id: &str,
    ) -> anyhow::Result<Option<LikedEntity>> {
        let liked = Liked::find_by_id((posting_id.to_string(), user_id.to_string()))
            .one(self.db.as_ref())
            .await?;

        Ok(liked.map(LikedEntity::from))
    }

    /// Flips the user's like on a posting. Returns whether it is liked now.
    pub async fn toggle(
        &self,
        posting_id: &str,
        user_id: &str,
    ) -> anyhow::Result<bool> {
        let liked = Liked::find_by_id((posting_id.to_string(), user_id.to_string()))
            .one(self.db.as_ref())
            .await?;

        let Some(liked) = liked else {
            let model = liked::ActiveModel {
                posting_id: ActiveValue::Set(posting_id.to_string()),
                user_id: ActiveValue::Set(user_id.to_string()),
                is_deleted: ActiveValue::Set(false),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            };
            model.insert(self.db.as_ref()).await?;

            return Ok(true);
        };

        let is_deleted = !liked.is_deleted;
        let mut model = liked.into_active_model();
        model.is_deleted = ActiveValue::Set(is_deleted);
        model.update(self.db.as_ref()).await?;

        Ok(!is_deleted)
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDateTime;
    use sea_orm::{DbBackend, MockDatabase};

    use super::*;

    fn model(is_deleted: bool) -> liked::Model {
        liked::Model {
            posting_id: "posting".to_string(),
            user_id: "user".to_string(),
            is_deleted,
            created_at: NaiveDateTime::default(),
        }
    }

    #[tokio::test]
    async fn test_toggle_inserts_first_like() {
        // Arrange
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![], vec![model(false)]])
            .into_connection();
        let repository = LikedRepository::new(Arc::new(db));

        // Act
        let liked = repository.toggle("posting", "user").await.unwrap();

        // Assert
        assert!(liked);
    }

    #[tokio::test]
    async fn test_toggle_cancels_active_like() {
        // Arrange
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![model(false)], vec![model(true)]])
            .into_connection();
        let repository = LikedRepository::new(Arc::new(db));

        // Act
        let liked = repository.toggle("posting", "user").await.unwrap();

        // Assert
        assert!(!liked);
    }

    #[tokio::test]
    async fn test_toggle_restores_cancelled_like() {
        // Arrange
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![model(true)], vec![model(false)]])
            .into_connection();
        let repository = LikedRepository::new(Arc::new(db));

        // Act
        let liked = repository.toggle("posting", "user").await.unwrap();

        // Assert
        assert!(liked);
    }
}

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<user::Model> for UserEntity {
    fn from(value: user::Model) -> Self {
        UserEntity {
            id: value.id,
            name: value.name,
            avatar: value.avatar,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<UserEntity> for user::ActiveModel {
    fn from(value: UserEntity) -> Self {
        Self {
            id: ActiveValue::Set(value.id),
            name: ActiveValue::Set(value.name),
            avatar: ActiveValue::Set(value.avatar),
            created_at: if value.created_at == NaiveDateTime::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at)
            },
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
    }
}

impl UserRepository {
    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> anyhow::Result<Option<UserEntity>> {
        let user = User::find_by_id(id).one(self.db.as_ref()).await?;

        Ok(user.map(UserEntity::from))
    }

    pub async fn exists_name(&self, name: &str) -> anyhow::Result<bool> {
        let count = User::find()
            .filter(user::Column::Name.eq(name))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    /// Inserts the user, or overwrites name and avatar when the id exists.
    pub async fn save(&self, user: UserEntity) -> anyhow::Result<UserEntity> {
        let model = User::insert(user::ActiveModel::from(user))
            .on_conflict(
                sea_query::OnConflict::column(user::Column::Id)
                    .update_columns([
                        user::Column::Name,
                        user::Column::Avatar,
                        user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db.as_ref())
            .await?;

        Ok(UserEntity::from(model))
    }
}

#[cfg(test)]
mod test {
    use sea_orm::{DbBackend, MockDatabase};

    use super::*;

    #[test]
    fn test_new_user_gets_created_at() {
        // Arrange
        let user = UserEntity {
            id: "user".to_string(),
            name: "여행자".to_string(),
            ..Default::default()
        };

        // Act
        let model = user::ActiveModel::from(user);

        // Assert
        let ActiveValue::Set(created_at) = model.created_at else {
            panic!("created_at should be set");
        };
        assert_ne!(created_at, NaiveDateTime::default());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        // Arrange
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![user::Model {
                id: "user".to_string(),
                name: "여행자".to_string(),
                avatar: None,
                created_at: NaiveDateTime::default(),
                updated_at: NaiveDateTime::default(),
            }]])
            .into_connection();
        let repository = UserRepository::new(Arc::new(db));

        // Act
        let user = repository.find_by_id("user").await.unwrap();

        // Assert
        assert_eq!(user.map(|x| x.name), Some("여행자".to_string()));
    }
}

use std::{collections::HashMap, sync::Arc};

use entity::{
    category::{
        Budget, Headcount, Location, Period, Season, Sorting, Theme, Vehicle,
        WithWho,
    },
    posting::PostingFilter,
    prelude::*,
};
use sea_orm::{
    sea_query::{
        extension::postgres::PgBinOper, Expr, Func, IntoCondition, SimpleExpr,
    },
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};
use serde_json::{json, Value};

use crate::active_models::{prelude::*, *};

#[derive(Clone, Debug)]
pub struct PostingRepository {
    db: Arc<DatabaseConnection>,
}

impl PostingRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(FromQueryResult)]
struct LikedCount {
    posting_id: String,
    liked_count: i64,
}

fn to_indices<T: Label>(values: &[T]) -> Value {
    json!(values.iter().map(|x| x.index()).collect::<Vec<_>>())
}

fn from_indices<T: Label>(value: Value) -> Vec<T> {
    serde_json::from_value::<Vec<i16>>(value)
        .unwrap_or_default()
        .into_iter()
        .filter_map(T::from_index)
        .collect()
}

impl From<posting::Model> for PostingEntity {
    fn from(value: posting::Model) -> Self {
        Self {
            id: value.id,
            writer: value.writer,
            title: value.title,
            created_at: value.created_at,
            start_date: value.start_date,
            end_date: value.end_date,
            days: value.days,
            period: Period::from_index(value.period).unwrap_or_default(),
            season: Season::from_index(value.season).unwrap_or_default(),
            headcount: value.headcount.and_then(Headcount::from_index),
            budget: value.budget.and_then(Budget::from_index),
            location: value.location.and_then(Location::from_index),
            theme: value.theme.map(from_indices::<Theme>),
            with_who: value.with_who.map(from_indices::<WithWho>),
            vehicle: value.vehicle.and_then(Vehicle::from_index),
            thumbnail: value.thumbnail,
        }
    }
}

impl From<PostingEntity> for posting::ActiveModel {
    fn from(value: PostingEntity) -> Self {
        Self {
            id: ActiveValue::set(value.id),
            writer: ActiveValue::set(value.writer),
            title: ActiveValue::set(value.title),
            created_at: ActiveValue::set(value.created_at),
            start_date: ActiveValue::set(value.start_date),
            end_date: ActiveValue::set(value.end_date),
            days: ActiveValue::set(value.days),
            period: ActiveValue::set(value.period.index()),
            season: ActiveValue::set(value.season.index()),
            headcount: ActiveValue::set(value.headcount.map(Label::index)),
            budget: ActiveValue::set(value.budget.map(Label::index)),
            location: ActiveValue::set(value.location.map(Label::index)),
            theme: ActiveValue::set(value.theme.as_deref().map(to_indices)),
            with_who: ActiveValue::set(
                value.with_who.as_deref().map(to_indices),
            ),
            vehicle: ActiveValue::set(value.vehicle.map(Label::index)),
            thumbnail: ActiveValue::set(value.thumbnail),
        }
    }
}

/// `column @> '[index]'` for any of `values`.
fn contains_any<T: Label>(column: posting::Column, values: &[T]) -> Condition {
    values.iter().fold(Condition::any(), |cond, x| {
        cond.add(
            Expr::col((Posting, column))
                .binary(PgBinOper::Contains, Expr::val(json!([x.index()]))),
        )
    })
}

fn equals_any<T: Label>(column: posting::Column, values: &[T]) -> Condition {
    values
        .iter()
        .fold(Condition::any(), |cond, x| cond.add(column.eq(x.index())))
}

pub(crate) fn filtered_query(filter: &PostingFilter) -> Select<Posting> {
    let mut query = Posting::find()
        .filter(posting::Column::Title.contains(filter.keyword.as_str()));

    if let Some(budget) = filter.budget {
        query = query.filter(posting::Column::Budget.eq(budget.index()));
    }

    if let Some(headcount) = filter.headcount {
        query = query.filter(posting::Column::Headcount.eq(headcount.index()));
    }

    if !filter.locations.is_empty() {
        query =
            query.filter(equals_any(posting::Column::Location, &filter.locations));
    }

    if let Some(period) = filter.period {
        query = query.filter(posting::Column::Period.eq(period.index()));
    }

    if !filter.seasons.is_empty() {
        query = query.filter(equals_any(posting::Column::Season, &filter.seasons));
    }

    if let Some(vehicle) = filter.vehicle {
        query = query.filter(posting::Column::Vehicle.eq(vehicle.index()));
    }

    if !filter.themes.is_empty() {
        query = query.filter(contains_any(posting::Column::Theme, &filter.themes));
    }

    if !filter.with_whos.is_empty() {
        query =
            query.filter(contains_any(posting::Column::WithWho, &filter.with_whos));
    }

    query = match filter.sorting {
        Sorting::MostLiked => query
            .join(
                JoinType::LeftJoin,
                posting::Relation::Liked.def().on_condition(|_left, right| {
                    Expr::col((right, liked::Column::IsDeleted))
                        .eq(false)
                        .into_condition()
                }),
            )
            .group_by(posting::Column::Id)
            .order_by_desc(SimpleExpr::from(Func::count(Expr::col((
                Liked,
                liked::Column::PostingId,
            )))))
            .order_by_desc(posting::Column::CreatedAt),
        Sorting::Newest => query.order_by_desc(posting::Column::CreatedAt),
    };

    query.offset(filter.skip()).limit(filter.limit)
}

impl PostingRepository {
    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> anyhow::Result<Option<PostingEntity>> {
        let posting = Posting::find_by_id(id).one(self.db.as_ref()).await?;

        Ok(posting.map(PostingEntity::from))
    }

    /// A posting with its writer and active like count.
    pub async fn find_one(
        &self,
        id: &str,
    ) -> anyhow::Result<Option<PostingDetailEntity>> {
        let found = Posting::find_by_id(id)
            .find_also_related(User)
            .one(self.db.as_ref())
            .await?;

        let Some((posting, writer)) = found else {
            return Ok(None);
        };

        let liked_count = Liked::find()
            .filter(liked::Column::PostingId.eq(id))
            .filter(liked::Column::IsDeleted.eq(false))
            .count(self.db.as_ref())
            .await?;

        Ok(Some(PostingDetailEntity {
            posting: PostingEntity::from(posting),
            writer: writer.map(UserEntity::from),
            liked_count,
        }))
    }

    pub async fn find_all(
        &self,
        filter: &PostingFilter,
    ) -> anyhow::Result<Vec<PostingDetailEntity>> {
        let postings = filtered_query(filter).all(self.db.as_ref()).await?;

        let posting_ids: Vec<_> = postings.iter().map(|x| x.id.clone()).collect();
        let writer_ids: Vec<_> =
            postings.iter().map(|x| x.writer.clone()).collect();

        let writers: HashMap<_, _> = User::find()
            .filter(user::Column::Id.is_in(writer_ids))
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|x| (x.id.clone(), UserEntity::from(x)))
            .collect();

        let liked_counts: HashMap<_, _> = Liked::find()
            .select_only()
            .column(liked::Column::PostingId)
            .column_as(liked::Column::UserId.count(), "liked_count")
            .filter(liked::Column::PostingId.is_in(posting_ids))
            .filter(liked::Column::IsDeleted.eq(false))
            .group_by(liked::Column::PostingId)
            .into_model::<LikedCount>()
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|x| (x.posting_id, x.liked_count))
            .collect();

        let results = postings
            .into_iter()
            .map(|x| PostingDetailEntity {
                writer: writers.get(&x.writer).cloned(),
                liked_count: liked_counts
                    .get(&x.id)
                    .copied()
                    .unwrap_or_default() as u64,
                posting: PostingEntity::from(x),
            })
            .collect();

        Ok(results)
    }

    /// Titles starting with `keyword`, for autocompletion.
    pub async fn find_all_by_title(
        &self,
        keyword: &str,
    ) -> anyhow::Result<Vec<String>> {
        let titles = Posting::find()
            .select_only()
            .column(posting::Column::Title)
            .filter(posting::Column::Title.starts_with(keyword))
            .order_by_asc(posting::Column::Title)
            .into_tuple::<String>()
            .all(self.db.as_ref())
            .await?;

        Ok(titles)
    }

    pub async fn find_all_by_writer(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Vec<PostingEntity>> {
        let postings = Posting::find()
            .filter(posting::Column::Writer.eq(user_id))
            .order_by_desc(posting::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(postings.into_iter().map(PostingEntity::from).collect())
    }

    pub async fn save(
        &self,
        posting: PostingEntity,
    ) -> anyhow::Result<PostingEntity> {
        let model = Posting::insert(posting::ActiveModel::from(posting))
            .exec_with_returning(self.db.as_ref())
            .await?;

        Ok(PostingEntity::from(model))
    }

    pub async fn update(
        &self,
        posting: PostingEntity,
    ) -> anyhow::Result<PostingEntity> {
        let model = Posting::update(posting::ActiveModel::from(posting))
            .exec(self.db.as_ref())
            .await?;

        Ok(PostingEntity::from(model))
    }

    pub async fn update_thumbnail(
        &self,
        id: &str,
        thumbnail: &str,
    ) -> anyhow::Result<()> {
        Posting::update_many()
            .col_expr(posting::Column::Thumbnail, Expr::value(thumbnail))
            .filter(posting::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<()> {
        Posting::delete_by_id(id).exec(self.db.as_ref()).await?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, NaiveDateTime};
    use sea_orm::{DbBackend, MockDatabase, QueryTrait};

    use super::*;

    fn sql(filter: &PostingFilter) -> String {
        filtered_query(filter).build(DbBackend::Postgres).to_string()
    }

    fn filter() -> PostingFilter {
        PostingFilter {
            offset: 1,
            limit: 10,
            ..Default::default()
        }
    }

    fn model() -> posting::Model {
        posting::Model {
            id: "7b3f0cfa-3a43-4c7e-9d3c-0f4e1c7b8a11".to_string(),
            writer: "writer".to_string(),
            title: "제주 한 달 살기".to_string(),
            created_at: NaiveDateTime::default(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            days: 30,
            period: 5,
            season: 1,
            headcount: Some(1),
            budget: None,
            location: Some(16),
            theme: Some(json!([0, 4])),
            with_who: Some(json!([])),
            vehicle: Some(0),
            thumbnail: None,
        }
    }

    #[test]
    fn test_default_query() {
        // Act
        let sql = sql(&filter());
        let (_, predicates) = sql.split_once(" WHERE ").unwrap();

        // Assert
        assert!(predicates.contains(r#""posting"."title" LIKE '%%'"#));
        assert!(sql.contains(r#"ORDER BY "posting"."created_at" DESC"#));
        assert!(sql.contains("LIMIT 10 OFFSET 0"));
        assert!(!sql.contains("GROUP BY"));
        assert!(!predicates.contains(r#""posting"."budget" ="#));
        assert!(!predicates.contains(" AND "));
    }

    #[test]
    fn test_equality_filters() {
        // Arrange
        let filter = PostingFilter {
            keyword: "제주".to_string(),
            budget: Some(Budget::Under100K),
            headcount: Some(Headcount::Two),
            period: Some(Period::ThreeDays),
            vehicle: Some(Vehicle::Walk),
            ..filter()
        };

        // Act
        let sql = sql(&filter);

        // Assert
        assert!(sql.contains(r#""posting"."title" LIKE '%제주%'"#));
        assert!(sql.contains(r#""posting"."budget" = 0"#));
        assert!(sql.contains(r#""posting"."headcount" = 1"#));
        assert!(sql.contains(r#""posting"."period" = 2"#));
        assert!(sql.contains(r#""posting"."vehicle" = 3"#));
    }

    #[test]
    fn test_membership_filters() {
        // Arrange
        let filter = PostingFilter {
            locations: vec![Location::Busan, Location::Jeju],
            seasons: vec![Season::Summer],
            ..filter()
        };

        // Act
        let sql = sql(&filter);

        // Assert
        assert!(sql.contains(
            r#"("posting"."location" = 1 OR "posting"."location" = 16)"#
        ));
        assert!(sql.contains(r#""posting"."season" = 1"#));
    }

    #[test]
    fn test_json_containment_filters() {
        // Arrange
        let filter = PostingFilter {
            themes: vec![Theme::Food, Theme::Nature],
            with_whos: vec![WithWho::Pets],
            ..filter()
        };

        // Act
        let sql = sql(&filter);

        // Assert
        assert!(sql.contains(r#""posting"."theme" @> '[1]'"#));
        assert!(sql.contains(r#""posting"."theme" @> '[4]'"#));
        assert!(sql.contains(" OR "));
        assert!(sql.contains(r#""posting"."with_who" @> '[5]'"#));
    }

    #[test]
    fn test_like_sorting() {
        // Arrange
        let filter = PostingFilter {
            sorting: Sorting::MostLiked,
            ..filter()
        };

        // Act
        let sql = sql(&filter);

        // Assert
        assert!(sql.contains(r#"LEFT JOIN "liked""#));
        assert!(sql.contains(r#""liked"."is_deleted" = FALSE"#));
        assert!(sql.contains(r#"GROUP BY "posting"."id""#));
        assert!(sql.contains(r#"ORDER BY COUNT("liked"."posting_id") DESC"#));
    }

    #[test]
    fn test_pagination_is_one_based() {
        // Arrange
        let filter = PostingFilter {
            offset: 3,
            limit: 20,
            ..filter()
        };

        // Act
        let sql = sql(&filter);

        // Assert
        assert!(sql.contains("LIMIT 20 OFFSET 40"));
    }

    #[test]
    fn test_model_into_entity() {
        // Act
        let posting = PostingEntity::from(model());

        // Assert
        assert_eq!(posting.period, Period::OverMonth);
        assert_eq!(posting.season, Season::Summer);
        assert_eq!(posting.headcount, Some(Headcount::Two));
        assert_eq!(posting.budget, None);
        assert_eq!(posting.location, Some(Location::Jeju));
        assert_eq!(posting.theme, Some(vec![Theme::Healing, Theme::Nature]));
        assert_eq!(posting.with_who, Some(vec![]));
        assert_eq!(posting.vehicle, Some(Vehicle::Car));
    }

    #[test]
    fn test_entity_into_active_model() {
        // Arrange
        let posting = PostingEntity::from(model());

        // Act
        let active_model = posting::ActiveModel::from(posting);

        // Assert
        assert_eq!(active_model.theme, ActiveValue::set(Some(json!([0, 4]))));
        assert_eq!(active_model.location, ActiveValue::set(Some(16)));
        assert_eq!(active_model.period, ActiveValue::set(5));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        // Arrange
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![model()], vec![]])
            .into_connection();
        let repository = PostingRepository::new(Arc::new(db));

        // Act
        let found = repository.find_by_id("7b3f0cfa").await.unwrap();
        let missing = repository.find_by_id("missing").await.unwrap();

        // Assert
        assert_eq!(found.map(|x| x.title), Some("제주 한 달 살기".to_string()));
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_find_all_attaches_writer_and_likes() {
        // Arrange
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![model()]])
            .append_query_results([vec![user::Model {
                id: "writer".to_string(),
                name: "제주사람".to_string(),
                avatar: None,
                created_at: NaiveDateTime::default(),
                updated_at: NaiveDateTime::default(),
            }]])
            .append_query_results([vec![std::collections::BTreeMap::from([
                ("posting_id", model().id.into()),
                ("liked_count", sea_orm::Value::from(3i64)),
            ])]])
            .into_connection();
        let repository = PostingRepository::new(Arc::new(db));

        // Act
        let postings = repository.find_all(&filter()).await.unwrap();

        // Assert
        assert_eq!(postings.len(), 1);
        assert_eq!(
            postings[0].writer.as_ref().map(|x| x.name.as_str()),
            Some("제주사람")
        );
        assert_eq!(postings[0].liked_count, 3);
    }
}

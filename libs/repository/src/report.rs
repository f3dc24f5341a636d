use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, Insert, PaginatorTrait, QueryFilter,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct ReportRepository {
    db: Arc<DatabaseConnection>,
}

impl ReportRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<report::Model> for ReportEntity {
    fn from(value: report::Model) -> Self {
        ReportEntity {
            posting_id: value.posting_id,
            reporter: value.reporter,
            created_at: value.created_at,
        }
    }
}

impl ReportRepository {
    pub async fn find(
        &self,
        posting_id: &str,
        reporter: &str,
    ) -> anyhow::Result<Option<ReportEntity>> {
        let report =
            Report::find_by_id((posting_id.to_string(), reporter.to_string()))
                .one(self.db.as_ref())
                .await?;

        Ok(report.map(ReportEntity::from))
    }

    pub async fn count(&self, posting_id: &str) -> anyhow::Result<u64> {
        let count = Report::find()
            .filter(report::Column::PostingId.eq(posting_id))
            .count(self.db.as_ref())
            .await?;

        Ok(count)
    }

    /// Records the report. Returns false when the reporter had already
    /// reported the posting.
    pub async fn save(
        &self,
        posting_id: &str,
        reporter: &str,
    ) -> anyhow::Result<bool> {
        let rows_affected = insert_once(posting_id, reporter)
            .exec_without_returning(self.db.as_ref())
            .await?;

        Ok(rows_affected > 0)
    }
}

fn insert_once(
    posting_id: &str,
    reporter: &str,
) -> Insert<report::ActiveModel> {
    let model = report::ActiveModel {
        posting_id: ActiveValue::Set(posting_id.to_string()),
        reporter: ActiveValue::Set(reporter.to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    Report::insert(model).on_conflict(
        OnConflict::columns([report::Column::PostingId, report::Column::Reporter])
            .do_nothing()
            .to_owned(),
    )
}

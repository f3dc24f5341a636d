use sea_orm_migration::prelude::*;

use crate::m20231121_000002_create_posting_table::Posting;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Posting::Table)
                    .name("idx_posting_created_at")
                    .col(Posting::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Posting::Table)
                    .name("idx_posting_writer")
                    .col(Posting::Writer)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(Posting::Table)
                    .name("idx_posting_writer")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .table(Posting::Table)
                    .name("idx_posting_created_at")
                    .to_owned(),
            )
            .await
    }
}

use sea_orm_migration::prelude::*;

use crate::{
    m20231121_000001_create_user_table::User,
    m20231121_000002_create_posting_table::Posting,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Report::Table).to_owned())
            .await
    }
}

/// One row per (posting, reporter).
fn table() -> TableCreateStatement {
    Table::create()
        .table(Report::Table)
        .if_not_exists()
        .primary_key(
            Index::create().col(Report::PostingId).col(Report::Reporter),
        )
        .col(ColumnDef::new(Report::PostingId).string_len(36).not_null())
        .col(ColumnDef::new(Report::Reporter).string().not_null())
        .col(ColumnDef::new(Report::CreatedAt).date_time().not_null())
        .foreign_key(
            ForeignKeyCreateStatement::new()
                .name("fk_report_posting_id")
                .from(Report::Table, Report::PostingId)
                .to(Posting::Table, Posting::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKeyCreateStatement::new()
                .name("fk_report_reporter")
                .from(Report::Table, Report::Reporter)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Report {
    Table,
    PostingId,
    Reporter,
    CreatedAt,
}

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
            .drop_table(Table::drop().table(Liked::Table).to_owned())
            .await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(Liked::Table)
        .if_not_exists()
        .primary_key(
            Index::create().col(Liked::PostingId).col(Liked::UserId),
        )
        .col(ColumnDef::new(Liked::PostingId).string_len(36).not_null())
        .col(ColumnDef::new(Liked::UserId).string().not_null())
        .col(
            ColumnDef::new(Liked::IsDeleted)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(Liked::CreatedAt).date_time().not_null())
        .foreign_key(
            ForeignKeyCreateStatement::new()
                .name("fk_liked_posting_id")
                .from(Liked::Table, Liked::PostingId)
                .to(Posting::Table, Posting::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKeyCreateStatement::new()
                .name("fk_liked_user_id")
                .from(Liked::Table, Liked::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
pub enum Liked {
    Table,
    PostingId,
    UserId,
    IsDeleted,
    CreatedAt,
}

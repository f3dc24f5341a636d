use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

/// The id is the token subject, whose length depends on the identity
/// provider.
fn table() -> TableCreateStatement {
    Table::create()
        .table(User::Table)
        .if_not_exists()
        .col(ColumnDef::new(User::Id).string().not_null().primary_key())
        .col(ColumnDef::new(User::Name).string().not_null().unique_key())
        .col(ColumnDef::new(User::Avatar).string())
        .col(ColumnDef::new(User::CreatedAt).date_time().not_null())
        .col(ColumnDef::new(User::UpdatedAt).date_time().not_null())
        .to_owned()
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Avatar,
    CreatedAt,
    UpdatedAt,
}

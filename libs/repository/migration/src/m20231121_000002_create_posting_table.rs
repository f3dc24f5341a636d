use sea_orm_migration::prelude::*;

use crate::m20231121_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posting::Table).to_owned())
            .await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(Posting::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Posting::Id)
                .string_len(36)
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Posting::Writer).string().not_null())
        .col(ColumnDef::new(Posting::Title).string().not_null())
        .col(
            ColumnDef::new(Posting::CreatedAt)
                .date_time()
                .not_null(),
        )
        .col(ColumnDef::new(Posting::StartDate).date().not_null())
        .col(ColumnDef::new(Posting::EndDate).date().not_null())
        .col(ColumnDef::new(Posting::Days).integer().not_null())
        .col(ColumnDef::new(Posting::Period).small_integer().not_null())
        .col(ColumnDef::new(Posting::Season).small_integer().not_null())
        .col(ColumnDef::new(Posting::Headcount).small_integer())
        .col(ColumnDef::new(Posting::Budget).small_integer())
        .col(ColumnDef::new(Posting::Location).small_integer())
        .col(ColumnDef::new(Posting::Theme).json_binary())
        .col(ColumnDef::new(Posting::WithWho).json_binary())
        .col(ColumnDef::new(Posting::Vehicle).small_integer())
        .col(ColumnDef::new(Posting::Thumbnail).string())
        .foreign_key(
            ForeignKeyCreateStatement::new()
                .name("fk_posting_writer")
                .from(Posting::Table, Posting::Writer)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
pub enum Posting {
    Table,
    Id,
    Writer,
    Title,
    CreatedAt,
    StartDate,
    EndDate,
    Days,
    Period,
    Season,
    Headcount,
    Budget,
    Location,
    Theme,
    WithWho,
    Vehicle,
    Thumbnail,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_writer_fits_any_user_id() {
        // Act
        let sql = table().to_string(PostgresQueryBuilder);

        // Assert
        assert!(sql.contains(r#""writer" varchar NOT NULL"#));
        assert!(sql.contains(r#""id" varchar(36) NOT NULL PRIMARY KEY"#));
    }
}

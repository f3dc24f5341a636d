pub use sea_orm_migration::prelude::*;

mod m20231121_000001_create_user_table;
mod m20231121_000002_create_posting_table;
mod m20231121_000003_create_liked_table;
mod m20231128_000004_create_index_at_posting;
mod m20231205_000005_create_report_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231121_000001_create_user_table::Migration),
            Box::new(m20231121_000002_create_posting_table::Migration),
            Box::new(m20231121_000003_create_liked_table::Migration),
            Box::new(m20231128_000004_create_index_at_posting::Migration),
            Box::new(m20231205_000005_create_report_table::Migration),
        ]
    }
}

use std::sync::Arc;

pub use error::RepositoryError;
use error::WithMessage;
use liked::LikedRepository;
use migration::Migrator;
use migration::MigratorTrait;
use posting::PostingRepository;
use report::ReportRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use user::UserRepository;

mod active_models;
mod error;
pub mod liked;
pub mod posting;
pub mod report;
pub mod user;

#[derive(Clone, Debug)]
pub struct Repository {
    pub posting: PostingRepository,
    pub user: UserRepository,
    pub liked: LikedRepository,
    pub report: ReportRepository,
}

impl Repository {
    /// Connects, runs pending migrations and builds every repository.
    pub async fn new(db_url: &str) -> Result<Self, RepositoryError> {
        let db = init_db(db_url).await?;

        Ok(Self::from_connection(db))
    }

    /// Every repository shares one connection pool.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let db = Arc::new(db);

        Self {
            posting: PostingRepository::new(Arc::clone(&db)),
            user: UserRepository::new(Arc::clone(&db)),
            liked: LikedRepository::new(Arc::clone(&db)),
            report: ReportRepository::new(db),
        }
    }
}

async fn init_db(db_url: &str) -> Result<DatabaseConnection, RepositoryError> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .with_message("in database connect")?;

    Migrator::up(&db, None)
        .await
        .with_message("in migrator up")?;

    Ok(db)
}

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::info;

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    pub async fn new(uri: &str, max_connections: u32) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(uri);
        options.max_connections(max_connections).sqlx_logging(false);
        Self::connect(options).await
    }

    /// Private SQLite database living in a single pooled connection. Every
    /// call gets an empty, fully migrated schema.
    pub async fn in_memory() -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        Self::connect(options).await
    }

    pub async fn connect(options: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let db = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Migrations finished.");
        Ok(Self { database_connection: db })
    }

    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.database_connection.begin().await
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.database_connection
    }
}

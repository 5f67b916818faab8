use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;

pub mod port_repository;
pub mod queries;
pub mod seed;
#[cfg(feature = "sqlite")]
pub mod sqlite_repo;
pub mod voyage_repository;

pub use port_repository::{PgPortRepository, PortRepository};
#[cfg(feature = "sqlite")]
pub use sqlite_repo::SqliteStore;
pub use voyage_repository::{PgVoyageRepository, VoyageOrder, VoyageRepository};

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Handle on the backing database. Opened once at startup, handed to the
/// repositories, and closed on shutdown.
#[derive(Clone)]
pub enum Store {
    Postgres(PgPool),
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteStore),
}

impl Store {
    /// Connect and bring the schema up to date. `sqlite:` URLs select the
    /// embedded store, anything else is treated as PostgreSQL.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        if database_url.starts_with("sqlite:") {
            return Self::connect_sqlite(database_url).await;
        }

        let pool = create_pool(database_url).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Store::Postgres(pool))
    }

    #[cfg(feature = "sqlite")]
    async fn connect_sqlite(database_url: &str) -> Result<Self, sqlx::Error> {
        use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // An in-memory database lives and dies with the one connection that created it
        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = pool_options.connect_with(options).await?;
        SqliteStore::create_schema(&pool).await?;
        Ok(Store::Sqlite(SqliteStore::new(pool)))
    }

    #[cfg(not(feature = "sqlite"))]
    async fn connect_sqlite(_database_url: &str) -> Result<Self, sqlx::Error> {
        Err(sqlx::Error::Configuration(
            "SQLite support is not compiled in; enable the `sqlite` feature".into(),
        ))
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Store::Postgres(_) => "postgres",
            #[cfg(feature = "sqlite")]
            Store::Sqlite(_) => "sqlite",
        }
    }

    pub fn port_repository(&self) -> Arc<dyn PortRepository> {
        match self {
            Store::Postgres(pool) => Arc::new(PgPortRepository::new(pool.clone())),
            #[cfg(feature = "sqlite")]
            Store::Sqlite(store) => Arc::new(store.clone()),
        }
    }

    pub fn voyage_repository(&self) -> Arc<dyn VoyageRepository> {
        match self {
            Store::Postgres(pool) => Arc::new(PgVoyageRepository::new(pool.clone())),
            #[cfg(feature = "sqlite")]
            Store::Sqlite(store) => Arc::new(store.clone()),
        }
    }

    /// Wait for checked-out connections to return, then close the pool.
    pub async fn close(&self) {
        match self {
            Store::Postgres(pool) => pool.close().await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(store) => store.pool().close().await,
        }
    }
}

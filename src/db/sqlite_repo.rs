use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{NewVoyage, Port, Voyage};

use super::port_repository::{PortRepository, RawPortRow};
use super::voyage_repository::{storable_timestamp, RawVoyageRow, VoyageOrder, VoyageRepository};

// ---------------------------------------------------------------------------
// Row types (SQLite-specific)
// ---------------------------------------------------------------------------

#[derive(sqlx::FromRow)]
struct SqlitePortRow {
    id: String,
    name: String,
    country: String,
    lat: f64,
    lng: f64,
}

impl SqlitePortRow {
    fn into_port(self) -> Port {
        RawPortRow {
            id: parse_id(&self.id, &self.name),
            name: self.name,
            country: self.country,
            lat: self.lat,
            lng: self.lng,
        }
        .into_port()
    }
}

#[derive(sqlx::FromRow)]
struct SqliteVoyageRow {
    id: String,
    departure_port: String,
    destination_port: String,
    parameters: String,
    route: String,
    distance: i64,
    estimated_time: i64,
    fuel_consumption: i64,
    created_at_us: i64, // microseconds since the Unix epoch
    status: String,
    savings: i64,
    efficiency: i64,
}

impl SqliteVoyageRow {
    fn into_voyage(self) -> Voyage {
        let id = parse_id(&self.id, "voyage");

        let parameters = serde_json::from_str(&self.parameters).unwrap_or_else(|e| {
            tracing::warn!("Invalid parameters JSON for voyage {}: {}", id, e);
            Default::default()
        });

        let route = serde_json::from_str(&self.route).unwrap_or_else(|e| {
            tracing::warn!("Invalid route JSON for voyage {}: {}", id, e);
            Vec::new()
        });

        let created_at =
            OffsetDateTime::from_unix_timestamp_nanos(self.created_at_us as i128 * 1_000)
                .unwrap_or_else(|e| {
                    tracing::warn!("Invalid timestamp for voyage {}: {}", id, e);
                    OffsetDateTime::UNIX_EPOCH
                });

        RawVoyageRow {
            id,
            departure_port: self.departure_port,
            destination_port: self.destination_port,
            parameters,
            route,
            distance: self.distance,
            estimated_time: self.estimated_time,
            fuel_consumption: self.fuel_consumption,
            created_at,
            status: self.status,
            savings: self.savings,
            efficiency: self.efficiency,
        }
        .into_voyage()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_id(raw: &str, owner: &str) -> Uuid {
    raw.parse::<Uuid>().unwrap_or_else(|_| {
        tracing::warn!("Invalid UUID '{}' for '{}', using nil", raw, owner);
        Uuid::nil()
    })
}

fn to_json_text<T: serde::Serialize>(value: &T, column: &str) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| AppError::Internal(format!("Failed to encode voyage {}: {}", column, e)))
}

const VOYAGE_COLUMNS: &str = "id, departure_port, destination_port, parameters, route,
    distance, estimated_time, fuel_consumption, created_at_us, status, savings, efficiency";

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Ports and voyages in a single SQLite database.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the SQLite schema. Idempotent.
    pub async fn create_schema(pool: &SqlitePool) -> std::result::Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS ports (
                rowid INTEGER PRIMARY KEY,
                id TEXT UNIQUE NOT NULL,
                name TEXT UNIQUE NOT NULL,
                country TEXT NOT NULL,
                lat REAL NOT NULL,
                lng REAL NOT NULL
            )",
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS voyages (
                rowid INTEGER PRIMARY KEY,
                id TEXT UNIQUE NOT NULL,
                departure_port TEXT NOT NULL,
                destination_port TEXT NOT NULL,
                parameters TEXT NOT NULL,
                route TEXT NOT NULL,
                distance INTEGER NOT NULL DEFAULT 0,
                estimated_time INTEGER NOT NULL DEFAULT 0,
                fuel_consumption INTEGER NOT NULL DEFAULT 0,
                created_at_us INTEGER NOT NULL,
                status TEXT NOT NULL DEFAULT 'completed',
                savings INTEGER NOT NULL DEFAULT 0,
                efficiency INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_voyages_created_at ON voyages(created_at_us DESC)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PortRepository for SqliteStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Port>> {
        let row = sqlx::query_as::<_, SqlitePortRow>(
            "SELECT id, name, country, lat, lng FROM ports WHERE name = ?1 LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SqlitePortRow::into_port))
    }

    async fn find_all(&self) -> Result<Vec<Port>> {
        let rows = sqlx::query_as::<_, SqlitePortRow>(
            "SELECT id, name, country, lat, lng FROM ports ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SqlitePortRow::into_port).collect())
    }

    async fn replace_all(&self, ports: &[Port]) -> Result<usize> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM ports").execute(&mut *tx).await?;

        for port in ports {
            sqlx::query(
                "INSERT INTO ports (id, name, country, lat, lng) VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(port.id.to_string())
            .bind(&port.name)
            .bind(&port.country)
            .bind(port.coordinates.lat)
            .bind(port.coordinates.lng)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(ports.len())
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ports")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl VoyageRepository for SqliteStore {
    async fn insert(&self, voyage: NewVoyage) -> Result<Voyage> {
        let mut voyage = voyage;
        voyage.created_at = storable_timestamp(voyage.created_at);
        let id = Uuid::new_v4();
        let created_at_us = (voyage.created_at.unix_timestamp_nanos() / 1_000) as i64;

        sqlx::query(
            "INSERT INTO voyages (id, departure_port, destination_port, parameters, route,
                                  distance, estimated_time, fuel_consumption, created_at_us,
                                  status, savings, efficiency)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        )
        .bind(id.to_string())
        .bind(&voyage.departure_port)
        .bind(&voyage.destination_port)
        .bind(to_json_text(&voyage.parameters, "parameters")?)
        .bind(to_json_text(&voyage.route, "route")?)
        .bind(voyage.distance)
        .bind(voyage.estimated_time)
        .bind(voyage.fuel_consumption)
        .bind(created_at_us)
        .bind(voyage.status.as_str())
        .bind(voyage.savings)
        .bind(voyage.efficiency)
        .execute(&self.pool)
        .await?;

        Ok(Voyage::from_new(id, voyage))
    }

    async fn find_all(&self, order: VoyageOrder) -> Result<Vec<Voyage>> {
        let order_clause = match order {
            VoyageOrder::Insertion => "ORDER BY rowid",
            VoyageOrder::NewestFirst => "ORDER BY created_at_us DESC, rowid DESC",
        };
        let sql = format!("SELECT {VOYAGE_COLUMNS} FROM voyages {order_clause}");

        let rows = sqlx::query_as::<_, SqliteVoyageRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(SqliteVoyageRow::into_voyage).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Voyage>> {
        let sql = format!("SELECT {VOYAGE_COLUMNS} FROM voyages WHERE id = ?1");

        let row = sqlx::query_as::<_, SqliteVoyageRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(SqliteVoyageRow::into_voyage))
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM voyages")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
#[path = "sqlite_repo_tests.rs"]
mod sqlite_repo_tests;

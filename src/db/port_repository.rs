use crate::error::Result;
use crate::models::{Coordinates, Port};
use async_trait::async_trait;
use uuid::Uuid;

/// Raw port fields read from a row, before coordinate validation.
/// Both the PostgreSQL and SQLite stores build one of these.
pub(super) struct RawPortRow {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

impl RawPortRow {
    pub fn into_port(self) -> Port {
        let coordinates = Coordinates::new(self.lat, self.lng).unwrap_or_else(|e| {
            tracing::error!(
                "Invalid coordinates for port '{}' (id: {}): {}. Using fallback.",
                self.name,
                self.id,
                e
            );
            Coordinates { lat: 0.0, lng: 0.0 }
        });

        Port {
            id: self.id,
            name: self.name,
            country: self.country,
            coordinates,
        }
    }
}

#[async_trait]
pub trait PortRepository: Send + Sync {
    /// Exact, case-sensitive match on the port name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Port>>;

    /// All ports in the order they were written.
    async fn find_all(&self) -> Result<Vec<Port>>;

    /// Delete every port and write `ports` in their place, atomically.
    /// Returns the number of ports written.
    async fn replace_all(&self, ports: &[Port]) -> Result<usize>;

    async fn count(&self) -> Result<i64>;
}

pub struct PgPortRepository {
    pool: sqlx::PgPool,
}

impl PgPortRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortRepository for PgPortRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Port>> {
        Ok(super::queries::find_port_by_name(&self.pool, name).await?)
    }

    async fn find_all(&self) -> Result<Vec<Port>> {
        Ok(super::queries::find_all_ports(&self.pool).await?)
    }

    async fn replace_all(&self, ports: &[Port]) -> Result<usize> {
        Ok(super::queries::replace_all_ports(&self.pool, ports).await?)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ports")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

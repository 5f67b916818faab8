use crate::error::Result;
use crate::models::{NewVoyage, OptimizationParameters, Voyage, VoyageStatus, Waypoint};
use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

/// Order in which [`VoyageRepository::find_all`] returns voyages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoyageOrder {
    /// Oldest write first
    Insertion,
    /// Descending `created_at`, ties broken by newest write
    NewestFirst,
}

/// Raw voyage fields read from a row, before validation.
pub(super) struct RawVoyageRow {
    pub id: Uuid,
    pub departure_port: String,
    pub destination_port: String,
    pub parameters: OptimizationParameters,
    pub route: Vec<Waypoint>,
    pub distance: i64,
    pub estimated_time: i64,
    pub fuel_consumption: i64,
    pub created_at: OffsetDateTime,
    pub status: String,
    pub savings: i64,
    pub efficiency: i64,
}

impl RawVoyageRow {
    pub fn into_voyage(self) -> Voyage {
        let status: VoyageStatus = self.status.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid status '{}' for voyage {}, defaulting to completed",
                self.status,
                self.id
            );
            VoyageStatus::Completed
        });

        Voyage {
            id: self.id,
            departure_port: self.departure_port,
            destination_port: self.destination_port,
            parameters: self.parameters,
            route: self.route,
            distance: self.distance,
            estimated_time: self.estimated_time,
            fuel_consumption: self.fuel_consumption,
            created_at: self.created_at,
            status,
            savings: self.savings,
            efficiency: self.efficiency,
        }
    }
}

/// Timestamps are stored with microsecond precision; trim before writing so the
/// returned voyage matches what a later read yields.
pub(super) fn storable_timestamp(ts: OffsetDateTime) -> OffsetDateTime {
    let utc = ts.to_offset(time::UtcOffset::UTC);
    let micros = utc.nanosecond() / 1_000 * 1_000;
    utc.replace_nanosecond(micros).unwrap_or(utc)
}

#[async_trait]
pub trait VoyageRepository: Send + Sync {
    /// Store a new voyage under a freshly generated id.
    async fn insert(&self, voyage: NewVoyage) -> Result<Voyage>;

    async fn find_all(&self, order: VoyageOrder) -> Result<Vec<Voyage>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Voyage>>;

    async fn count(&self) -> Result<i64>;
}

pub struct PgVoyageRepository {
    pool: sqlx::PgPool,
}

impl PgVoyageRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoyageRepository for PgVoyageRepository {
    async fn insert(&self, voyage: NewVoyage) -> Result<Voyage> {
        let mut voyage = voyage;
        voyage.created_at = storable_timestamp(voyage.created_at);
        let id = super::queries::insert_voyage(&self.pool, &voyage).await?;
        Ok(Voyage::from_new(id, voyage))
    }

    async fn find_all(&self, order: VoyageOrder) -> Result<Vec<Voyage>> {
        Ok(super::queries::find_all_voyages(&self.pool, order).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Voyage>> {
        Ok(super::queries::find_voyage_by_id(&self.pool, id).await?)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM voyages")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

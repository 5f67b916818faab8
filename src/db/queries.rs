use crate::models::{NewVoyage, OptimizationParameters, Port, Voyage, Waypoint};
use sqlx::types::Json;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::port_repository::RawPortRow;
use super::voyage_repository::{RawVoyageRow, VoyageOrder};

#[derive(sqlx::FromRow)]
struct PortRow {
    id: Uuid,
    name: String,
    country: String,
    lat: f64,
    lng: f64,
}

impl PortRow {
    fn into_port(self) -> Port {
        RawPortRow {
            id: self.id,
            name: self.name,
            country: self.country,
            lat: self.lat,
            lng: self.lng,
        }
        .into_port()
    }
}

#[derive(sqlx::FromRow)]
struct VoyageRow {
    id: Uuid,
    departure_port: String,
    destination_port: String,
    parameters: Json<OptimizationParameters>,
    route: Json<Vec<Waypoint>>,
    distance: i64,
    estimated_time: i64,
    fuel_consumption: i64,
    created_at: OffsetDateTime,
    status: String,
    savings: i64,
    efficiency: i64,
}

impl VoyageRow {
    fn into_voyage(self) -> Voyage {
        RawVoyageRow {
            id: self.id,
            departure_port: self.departure_port,
            destination_port: self.destination_port,
            parameters: self.parameters.0,
            route: self.route.0,
            distance: self.distance,
            estimated_time: self.estimated_time,
            fuel_consumption: self.fuel_consumption,
            created_at: self.created_at,
            status: self.status,
            savings: self.savings,
            efficiency: self.efficiency,
        }
        .into_voyage()
    }
}

const VOYAGE_COLUMNS: &str = "id, departure_port, destination_port, parameters, route,
    distance, estimated_time, fuel_consumption, created_at, status, savings, efficiency";

pub async fn find_port_by_name(pool: &PgPool, name: &str) -> Result<Option<Port>, sqlx::Error> {
    let row = sqlx::query_as::<_, PortRow>(
        "SELECT id, name, country, lat, lng FROM ports WHERE name = $1 LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(PortRow::into_port))
}

pub async fn find_all_ports(pool: &PgPool) -> Result<Vec<Port>, sqlx::Error> {
    let rows =
        sqlx::query_as::<_, PortRow>("SELECT id, name, country, lat, lng FROM ports ORDER BY seq")
            .fetch_all(pool)
            .await?;

    Ok(rows.into_iter().map(PortRow::into_port).collect())
}

pub async fn insert_port(pool: &PgPool, port: &Port) -> Result<Uuid, sqlx::Error> {
    let result: (Uuid,) = sqlx::query_as(
        "INSERT INTO ports (id, name, country, lat, lng) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(port.id)
    .bind(&port.name)
    .bind(&port.country)
    .bind(port.coordinates.lat)
    .bind(port.coordinates.lng)
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

pub async fn replace_all_ports(pool: &PgPool, ports: &[Port]) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM ports").execute(&mut *tx).await?;

    for port in ports {
        sqlx::query("INSERT INTO ports (id, name, country, lat, lng) VALUES ($1, $2, $3, $4, $5)")
            .bind(port.id)
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

pub async fn insert_voyage(pool: &PgPool, voyage: &NewVoyage) -> Result<Uuid, sqlx::Error> {
    let result: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO voyages (id, departure_port, destination_port, parameters, route,
                             distance, estimated_time, fuel_consumption, created_at,
                             status, savings, efficiency)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&voyage.departure_port)
    .bind(&voyage.destination_port)
    .bind(Json(&voyage.parameters))
    .bind(Json(&voyage.route))
    .bind(voyage.distance)
    .bind(voyage.estimated_time)
    .bind(voyage.fuel_consumption)
    .bind(voyage.created_at)
    .bind(voyage.status.as_str())
    .bind(voyage.savings)
    .bind(voyage.efficiency)
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

pub async fn find_all_voyages(
    pool: &PgPool,
    order: VoyageOrder,
) -> Result<Vec<Voyage>, sqlx::Error> {
    let order_clause = match order {
        VoyageOrder::Insertion => "ORDER BY seq",
        VoyageOrder::NewestFirst => "ORDER BY created_at DESC, seq DESC",
    };
    let sql = format!("SELECT {VOYAGE_COLUMNS} FROM voyages {order_clause}");

    let rows = sqlx::query_as::<_, VoyageRow>(&sql).fetch_all(pool).await?;
    Ok(rows.into_iter().map(VoyageRow::into_voyage).collect())
}

pub async fn find_voyage_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Voyage>, sqlx::Error> {
    let sql = format!("SELECT {VOYAGE_COLUMNS} FROM voyages WHERE id = $1");

    let row = sqlx::query_as::<_, VoyageRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(VoyageRow::into_voyage))
}

use crate::db::PortRepository;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, Port};

/// The reference port catalog offered by the mobile client.
const REFERENCE_PORTS: &[(&str, &str, f64, f64)] = &[
    ("Port of Sydney", "Australia", -33.8688, 151.2093),
    ("Port of Tokyo", "Japan", 35.6762, 139.6503),
    ("Port of Hamburg", "Germany", 53.5511, 9.9937),
    ("Port of Singapore", "Singapore", 1.3521, 103.8198),
    ("Port of Rotterdam", "Netherlands", 51.9244, 4.4777),
    ("Port of Shanghai", "China", 31.2304, 121.4737),
    ("Port of Los Angeles", "USA", 34.0522, -118.2437),
    ("Port of New York", "USA", 40.7128, -74.0060),
    ("Port of Dubai", "UAE", 25.2048, 55.2708),
    ("Port of Hong Kong", "Hong Kong", 22.3193, 114.1694),
];

pub fn reference_ports() -> std::result::Result<Vec<Port>, String> {
    REFERENCE_PORTS
        .iter()
        .map(|&(name, country, lat, lng)| {
            let coordinates =
                Coordinates::new(lat, lng).map_err(|e| format!("{}: {}", name, e))?;
            Ok(Port::new(name, country, coordinates))
        })
        .collect()
}

/// Replace whatever ports are stored with the reference catalog.
pub async fn seed_reference_ports(ports: &dyn PortRepository) -> Result<usize> {
    let catalog = reference_ports().map_err(AppError::Internal)?;
    let written = ports.replace_all(&catalog).await?;
    tracing::info!("Seeded {} ports", written);
    Ok(written)
}

use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named maritime location. Ports are written by the seeding tool and are
/// read-only everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Port {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
}

impl Port {
    pub fn new(name: &str, country: &str, coordinates: Coordinates) -> Self {
        Port {
            id: Uuid::new_v4(),
            name: name.to_string(),
            country: country.to_string(),
            coordinates,
        }
    }
}

use crate::config::InterpolationMode;
use crate::models::{Coordinates, Waypoint};
use geo::{Haversine, InterpolatePoint};

/// Build the route polyline between two ports.
///
/// Returns `resolution + 1` points; the first and last are exact copies of
/// `departure` and `destination`. A resolution of 0 is treated as 1.
///
/// `Linear` interpolates latitude and longitude independently, which is what
/// the map view has always drawn. It does not take the short way across the
/// antimeridian. `GreatCircle` places the intermediate points on the great
/// circle used for the voyage distance.
pub fn interpolate(
    departure: Coordinates,
    destination: Coordinates,
    resolution: usize,
    mode: InterpolationMode,
) -> Vec<Waypoint> {
    let segments = resolution.max(1);
    let mut route = Vec::with_capacity(segments + 1);

    route.push(Waypoint::from(departure));
    for i in 1..segments {
        let fraction = i as f64 / segments as f64;
        let point = match mode {
            InterpolationMode::Linear => lerp(departure, destination, fraction),
            InterpolationMode::GreatCircle => slerp(departure, destination, fraction),
        };
        route.push(point);
    }
    route.push(Waypoint::from(destination));

    route
}

fn lerp(from: Coordinates, to: Coordinates, fraction: f64) -> Waypoint {
    Waypoint {
        latitude: from.lat + (to.lat - from.lat) * fraction,
        longitude: from.lng + (to.lng - from.lng) * fraction,
    }
}

fn slerp(from: Coordinates, to: Coordinates, fraction: f64) -> Waypoint {
    // Identical endpoints have no defined great circle
    if from == to {
        return Waypoint::from(from);
    }
    let point = Haversine.point_at_ratio_between(from.to_point(), to.to_point(), fraction);
    Waypoint {
        latitude: point.y(),
        longitude: point.x(),
    }
}

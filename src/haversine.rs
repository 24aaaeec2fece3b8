//! Haversine distance and pairwise distance matrices.
//!
//! Great-circle distance over task coordinates. Straight-line estimates
//! ignore field access roads but are deterministic and always available.

use crate::task::FieldTask;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (lat, lon) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Pairwise distance matrix over the given tasks, in kilometers.
///
/// `matrix[i][j]` is the haversine distance from task i to task j. The
/// diagonal is pinned to exactly 0.0 rather than computed, so identical
/// coordinates never produce floating-point near-zero noise.
pub fn distance_matrix(tasks: &[FieldTask]) -> Vec<Vec<f64>> {
    let n = tasks.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for (i, from) in tasks.iter().enumerate() {
        for (j, to) in tasks.iter().enumerate() {
            if i != j {
                matrix[i][j] = haversine_km(from.location(), to.location());
            }
        }
    }

    matrix
}

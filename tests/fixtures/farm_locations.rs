//! Real eastern-Nebraska farmland coordinates for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap around Saunders and Lancaster
//! counties. Sites are a few kilometers apart, matching the scale of a
//! single equipment unit's working day.

use field_route_planner::task::FieldTask;

/// A named field site with coordinates.
#[derive(Debug, Clone)]
pub struct FieldSite {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl FieldSite {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }
}

// ============================================================================
// Row-crop fields (Saunders County)
// ============================================================================

pub const ROW_CROP_FIELDS: &[FieldSite] = &[
    FieldSite::new("Wahoo Creek east quarter", 41.2114, -96.6203),
    FieldSite::new("Ithaca bottom ground", 41.1617, -96.5388),
    FieldSite::new("Memphis lake pivot", 41.0936, -96.4311),
    FieldSite::new("Ashland river field", 41.0390, -96.3692),
    FieldSite::new("Ceresco north half", 41.0589, -96.6442),
    FieldSite::new("Valparaiso upland", 41.0811, -96.8317),
];

// ============================================================================
// Hay and pasture ground (Lancaster County)
// ============================================================================

pub const PASTURE_SITES: &[FieldSite] = &[
    FieldSite::new("Raymond hay meadow", 40.9581, -96.7842),
    FieldSite::new("Davey pasture", 40.9847, -96.6683),
    FieldSite::new("Waverly creek bottom", 40.9172, -96.5281),
];

/// Build optimizer tasks from a slice of sites, ids `f0`, `f1`, ...
pub fn tasks_from_sites(sites: &[FieldSite]) -> Vec<FieldTask> {
    sites
        .iter()
        .enumerate()
        .map(|(i, site)| FieldTask::new(format!("f{}", i), site.lat, site.lon))
        .collect()
}

//! Field task input type.
//!
//! Tasks are supplied per optimization call and are not persisted here.
//! Encoding/decoding happens at the boundary (when receiving a request or
//! sending a plan to the frontend).

use serde::{Deserialize, Serialize};

/// A unit of field work to visit, identified by coordinates.
///
/// `estimated_hours` and `operator_id` are carried through the plan but only
/// the operator of the first routed task influences scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTask {
    pub task_id: String,
    /// Latitude in WGS84 degrees.
    pub lat: f64,
    /// Longitude in WGS84 degrees.
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<String>,
}

impl FieldTask {
    pub fn new(task_id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            task_id: task_id.into(),
            lat,
            lon,
            estimated_hours: None,
            operator_id: None,
        }
    }

    /// Location coordinates (lat, lon).
    pub fn location(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Whether both coordinates are finite numbers.
    ///
    /// NaN or infinite coordinates would poison the distance matrix, so they
    /// are rejected before any geometry runs.
    pub fn has_valid_coordinates(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

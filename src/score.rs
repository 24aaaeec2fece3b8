//! Composite route scoring.
//!
//! Combines travel distance with fuel, wear, and operator-risk signals into
//! one weighted number. Lower is better. Scoring is descriptive: only raw
//! distance drives the search, so a route is never re-optimized against its
//! own score.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::task::FieldTask;
use crate::tour::route_cost;
use crate::traits::{
    FALLBACK_BEHAVIOR_SCORE, FALLBACK_HEALTH_SCORE, FALLBACK_HOURLY_FUEL_LPH,
    FALLBACK_OPERATOR_RISK, SignalProvider,
};

/// Assumed in-field travel speed for converting distance to hours.
pub const ASSUMED_SPEED_KMPH: f64 = 15.0;

/// Fractional weights for the composite score.
///
/// Conventionally sum to 1.0 but are not required to; they are applied as
/// given, without normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub distance: f64,
    pub fuel: f64,
    pub wear: f64,
    pub operator: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: 0.50,
            fuel: 0.25,
            wear: 0.15,
            operator: 0.10,
        }
    }
}

impl ScoringWeights {
    /// Apply caller overrides on top of these weights.
    pub fn merged(mut self, overrides: &WeightOverrides) -> Self {
        if let Some(distance) = overrides.distance {
            self.distance = distance;
        }
        if let Some(fuel) = overrides.fuel {
            self.fuel = fuel;
        }
        if let Some(wear) = overrides.wear {
            self.wear = wear;
        }
        if let Some(operator) = overrides.operator {
            self.operator = operator;
        }
        self
    }
}

/// Per-call weight overrides.
///
/// Absent fields keep their defaults; unknown keys in a JSON payload are
/// ignored by deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct WeightOverrides {
    pub distance: Option<f64>,
    pub fuel: Option<f64>,
    pub wear: Option<f64>,
    pub operator: Option<f64>,
}

/// Scored route metrics, rounded for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteMetrics {
    pub score: f64,
    pub total_km: f64,
    pub fuel_liters_est: f64,
    pub wear_penalty: f64,
    pub operator_penalty: f64,
}

/// Score a finished route against equipment and operator signals.
///
/// Missing snapshots degrade to the documented fallback constants rather
/// than failing; each substitution is logged at debug level.
pub fn score_route<P: SignalProvider>(
    route: &[usize],
    tasks: &[FieldTask],
    matrix: &[Vec<f64>],
    equipment_id: &str,
    weights: &ScoringWeights,
    signals: &P,
) -> RouteMetrics {
    let total_distance = route_cost(route, matrix);

    let hourly_fuel = match signals.fuel_snapshot(equipment_id) {
        Some(snapshot) => snapshot.avg_hourly_fuel,
        None => {
            debug!(equipment_id, "no fuel snapshot, using fallback burn rate");
            FALLBACK_HOURLY_FUEL_LPH
        }
    };
    let hours_travel = total_distance / ASSUMED_SPEED_KMPH;
    let fuel_used = hours_travel * hourly_fuel;

    let health_score = match signals.health_snapshot(equipment_id) {
        Some(snapshot) => snapshot.health_score,
        None => {
            debug!(equipment_id, "no health snapshot, using fallback score");
            FALLBACK_HEALTH_SCORE
        }
    };
    let wear_score = (100.0 - health_score) / 100.0;
    let wear_penalty = wear_score * total_distance;

    // The operator who begins the route stands in for the whole tour; the
    // model does not support per-leg operator changes.
    let operator_risk = match tasks[route[0]].operator_id.as_deref() {
        Some(operator_id) => {
            let behavior_score = match signals.operator_behavior(operator_id) {
                Some(snapshot) => snapshot.final_behavior_score,
                None => {
                    debug!(operator_id, "no behavior snapshot, using fallback score");
                    FALLBACK_BEHAVIOR_SCORE
                }
            };
            (100.0 - behavior_score) / 100.0
        }
        None => FALLBACK_OPERATOR_RISK,
    };

    let score = weights.distance * total_distance
        + weights.fuel * fuel_used
        + weights.wear * wear_penalty
        + weights.operator * operator_risk;

    RouteMetrics {
        score: round3(score),
        total_km: round2(total_distance),
        fuel_liters_est: round2(fuel_used),
        wear_penalty: round3(wear_penalty),
        operator_penalty: round3(operator_risk),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

//! Collaborator signal interfaces for the route planner.
//!
//! The scorer reads equipment and operator telemetry through these traits
//! instead of reaching into shared state. Concrete apps implement
//! `SignalProvider` for their own stores; tests use mock providers.

use std::collections::HashMap;
use std::sync::Mutex;

/// Fallback fuel burn rate (liters/hour) when no fuel data is recorded.
pub const FALLBACK_HOURLY_FUEL_LPH: f64 = 3.0;

/// Fallback equipment health score (0-100) when none is recorded.
pub const FALLBACK_HEALTH_SCORE: f64 = 70.0;

/// Fallback operator behavior score (0-100) when none is recorded.
pub const FALLBACK_BEHAVIOR_SCORE: f64 = 50.0;

/// Flat operator risk used when the first routed task has no operator.
pub const FALLBACK_OPERATOR_RISK: f64 = 0.2;

/// Average hourly fuel burn observed for a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelSnapshot {
    /// Liters per hour.
    pub avg_hourly_fuel: f64,
}

/// Equipment health score snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthSnapshot {
    /// 0-100, higher is healthier.
    pub health_score: f64,
}

/// Operator behavior score snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorSnapshot {
    /// 0-100, higher is safer.
    pub final_behavior_score: f64,
}

/// Read-only access to equipment and operator telemetry.
///
/// Returning `None` means the collaborator has no record; the scorer then
/// substitutes the documented fallback constant. Lookups must never block
/// the optimization on collaborator failure.
pub trait SignalProvider {
    fn fuel_snapshot(&self, equipment_id: &str) -> Option<FuelSnapshot>;
    fn health_snapshot(&self, equipment_id: &str) -> Option<HealthSnapshot>;
    fn operator_behavior(&self, operator_id: &str) -> Option<BehaviorSnapshot>;
}

/// Provider with no telemetry at all; every lookup resolves to fallbacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSignals;

impl SignalProvider for NoSignals {
    fn fuel_snapshot(&self, _equipment_id: &str) -> Option<FuelSnapshot> {
        None
    }

    fn health_snapshot(&self, _equipment_id: &str) -> Option<HealthSnapshot> {
        None
    }

    fn operator_behavior(&self, _operator_id: &str) -> Option<BehaviorSnapshot> {
        None
    }
}

/// Mutex-guarded in-memory signal store.
///
/// Reference provider for apps that collect telemetry in process. Snapshots
/// are copied out under the lock, so concurrent optimizations see immutable
/// values for the duration of a call.
#[derive(Debug, Default)]
pub struct InMemorySignals {
    fuel: Mutex<HashMap<String, FuelSnapshot>>,
    health: Mutex<HashMap<String, HealthSnapshot>>,
    operators: Mutex<HashMap<String, BehaviorSnapshot>>,
}

impl InMemorySignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_fuel(&self, equipment_id: impl Into<String>, avg_hourly_fuel: f64) {
        self.fuel
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(equipment_id.into(), FuelSnapshot { avg_hourly_fuel });
    }

    pub fn record_health(&self, equipment_id: impl Into<String>, health_score: f64) {
        self.health
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(equipment_id.into(), HealthSnapshot { health_score });
    }

    pub fn record_operator(&self, operator_id: impl Into<String>, final_behavior_score: f64) {
        self.operators
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(operator_id.into(), BehaviorSnapshot { final_behavior_score });
    }
}

impl SignalProvider for InMemorySignals {
    fn fuel_snapshot(&self, equipment_id: &str) -> Option<FuelSnapshot> {
        self.fuel
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(equipment_id)
            .copied()
    }

    fn health_snapshot(&self, equipment_id: &str) -> Option<HealthSnapshot> {
        self.health
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(equipment_id)
            .copied()
    }

    fn operator_behavior(&self, operator_id: &str) -> Option<BehaviorSnapshot> {
        self.operators
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(operator_id)
            .copied()
    }
}

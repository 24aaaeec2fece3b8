//! Route optimization facade.
//!
//! Orchestrates the pipeline: validate input, build the distance matrix,
//! construct a greedy tour, refine it with 2-opt, score the result, and
//! assemble the plan. Stages run in a fixed order with no retries; only
//! input validation can fail once tasks are accepted.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::haversine::distance_matrix;
use crate::score::{RouteMetrics, ScoringWeights, WeightOverrides, score_route};
use crate::task::FieldTask;
use crate::tour::{nearest_neighbor_tour, two_opt};
use crate::traits::SignalProvider;

/// Input rejected before any geometry runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// A task carried a NaN or infinite coordinate. Rejecting the request is
    /// deliberate: skipping the task would silently drop it from the plan.
    #[error("task {task_id} has a non-finite coordinate ({lat}, {lon})")]
    InvalidCoordinate {
        task_id: String,
        lat: f64,
        lon: f64,
    },
}

/// A finished route plan for one piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub equipment_id: String,
    /// Permutation of `0..N` over the input task order.
    pub optimized_route_indices: Vec<usize>,
    /// The caller's tasks, reordered by the permutation.
    pub optimized_tasks: Vec<FieldTask>,
    pub metrics: RouteMetrics,
    /// Effective weights: defaults merged with any caller overrides.
    pub weights_used: ScoringWeights,
    pub generated_at: DateTime<Utc>,
}

/// Result of an optimization request.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeOutcome {
    /// The request contained no tasks; nothing to plan.
    NoTasks,
    /// A completed plan.
    Plan(RoutePlan),
}

impl OptimizeOutcome {
    pub fn as_plan(&self) -> Option<&RoutePlan> {
        match self {
            OptimizeOutcome::Plan(plan) => Some(plan),
            OptimizeOutcome::NoTasks => None,
        }
    }
}

impl Serialize for OptimizeOutcome {
    /// `NoTasks` serializes as `{"status": "no_tasks"}`; a plan serializes
    /// as its own fields with no status wrapper.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptimizeOutcome::NoTasks => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("status", "no_tasks")?;
                map.end()
            }
            OptimizeOutcome::Plan(plan) => plan.serialize(serializer),
        }
    }
}

/// Optimize a single equipment unit's tour over the given tasks.
///
/// Tasks are visited starting from the first one supplied. The returned
/// plan's task list is the input reordered by index lookup; the inputs
/// themselves are never mutated.
pub fn optimize<P: SignalProvider>(
    equipment_id: &str,
    tasks: &[FieldTask],
    weight_overrides: Option<WeightOverrides>,
    signals: &P,
) -> Result<OptimizeOutcome, OptimizeError> {
    if tasks.is_empty() {
        return Ok(OptimizeOutcome::NoTasks);
    }

    for task in tasks {
        if !task.has_valid_coordinates() {
            return Err(OptimizeError::InvalidCoordinate {
                task_id: task.task_id.clone(),
                lat: task.lat,
                lon: task.lon,
            });
        }
    }

    let weights = match weight_overrides {
        Some(overrides) => ScoringWeights::default().merged(&overrides),
        None => ScoringWeights::default(),
    };

    let matrix = distance_matrix(tasks);
    let initial = nearest_neighbor_tour(&matrix, 0);
    let refined = two_opt(initial, &matrix);
    let metrics = score_route(&refined, tasks, &matrix, equipment_id, &weights, signals);

    let optimized_tasks = refined.iter().map(|&i| tasks[i].clone()).collect();

    Ok(OptimizeOutcome::Plan(RoutePlan {
        equipment_id: equipment_id.to_string(),
        optimized_route_indices: refined,
        optimized_tasks,
        metrics,
        weights_used: weights,
        generated_at: Utc::now(),
    }))
}

//! Realistic routing tests using real eastern-Nebraska field sites.
//!
//! These tests validate the full pipeline with real-world coordinates at
//! working-day scale: a handful of fields a few kilometers apart.

mod fixtures;

use field_route_planner::haversine::distance_matrix;
use field_route_planner::solver::{OptimizeOutcome, optimize};
use field_route_planner::task::FieldTask;
use field_route_planner::tour::route_cost;
use field_route_planner::traits::InMemorySignals;

use fixtures::farm_locations::{PASTURE_SITES, ROW_CROP_FIELDS, tasks_from_sites};

fn provisioned_signals() -> InMemorySignals {
    let signals = InMemorySignals::new();
    signals.record_fuel("combine-3", 5.2);
    signals.record_health("combine-3", 64.0);
    signals.record_operator("op-jt", 78.0);
    signals
}

#[test]
fn plans_a_working_day_across_row_crop_fields() {
    let mut tasks = tasks_from_sites(ROW_CROP_FIELDS);
    tasks[0].operator_id = Some("op-jt".to_string());

    let signals = provisioned_signals();
    let plan = match optimize("combine-3", &tasks, None, &signals).unwrap() {
        OptimizeOutcome::Plan(plan) => plan,
        OptimizeOutcome::NoTasks => panic!("expected a plan"),
    };

    assert_eq!(plan.optimized_route_indices.len(), ROW_CROP_FIELDS.len());

    // Sites span roughly 40 km east-west; a sane tour stays well under the
    // pairwise worst case and above the largest single hop.
    assert!(plan.metrics.total_km > 10.0);
    assert!(plan.metrics.total_km < 150.0);
    assert!(plan.metrics.fuel_liters_est > 0.0);
}

#[test]
fn refined_tour_beats_input_order() {
    // Interleave the two site groups so the supplied order zig-zags.
    let mut sites = Vec::new();
    for (row_crop, pasture) in ROW_CROP_FIELDS.iter().zip(PASTURE_SITES.iter()) {
        sites.push(row_crop.clone());
        sites.push(pasture.clone());
    }
    let tasks: Vec<FieldTask> = tasks_from_sites(&sites);
    let matrix = distance_matrix(&tasks);

    let input_order: Vec<usize> = (0..tasks.len()).collect();
    let input_cost = route_cost(&input_order, &matrix);

    let plan = match optimize("combine-3", &tasks, None, &provisioned_signals()).unwrap() {
        OptimizeOutcome::Plan(plan) => plan,
        OptimizeOutcome::NoTasks => panic!("expected a plan"),
    };
    let planned_cost = route_cost(&plan.optimized_route_indices, &matrix);

    assert!(
        planned_cost <= input_cost,
        "planned {} km should not exceed supplied order {} km",
        planned_cost,
        input_cost
    );
}

#[test]
fn missing_equipment_record_still_produces_a_plan() {
    let tasks = tasks_from_sites(PASTURE_SITES);

    // Signals exist, just not for this equipment id.
    let plan = match optimize("combine-9", &tasks, None, &provisioned_signals()).unwrap() {
        OptimizeOutcome::Plan(plan) => plan,
        OptimizeOutcome::NoTasks => panic!("expected a plan"),
    };

    assert_eq!(plan.equipment_id, "combine-9");
    assert!(plan.metrics.score > 0.0);
}

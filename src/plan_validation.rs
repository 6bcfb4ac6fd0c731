use crate::day::DayPlan;
use std::collections::HashSet;
use thiserror::Error;

pub const MAX_ENERGY_TARGET: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PlanValidationError {
    message: String,
}

impl PlanValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Maps any stored number onto the 0 to 100 energy scale.
pub fn clamp_energy_target(value: f64) -> u8 {
    value.round().clamp(0.0, f64::from(MAX_ENERGY_TARGET)) as u8
}

/// Brings a day back within its invariants and reports each repair.
///
/// The energy target is capped at [`MAX_ENERGY_TARGET`]. Of several entries
/// sharing a plan id only the first is kept.
pub fn repair_day_plan(plan: &mut DayPlan) -> Vec<PlanValidationError> {
    let mut repairs = Vec::new();

    if plan.energy_target > MAX_ENERGY_TARGET {
        repairs.push(PlanValidationError::new(format!(
            "day {} energy target {} capped at {}",
            plan.id, plan.energy_target, MAX_ENERGY_TARGET
        )));
        plan.energy_target = MAX_ENERGY_TARGET;
    }

    let mut seen_ids = HashSet::with_capacity(plan.workouts.len());
    let mut dropped = Vec::new();
    plan.workouts.retain(|planned| {
        let first = seen_ids.insert(planned.id.clone());
        if !first {
            dropped.push(planned.id.clone());
        }
        first
    });
    for plan_id in dropped {
        repairs.push(PlanValidationError::new(format!(
            "day {} dropped duplicate planned workout id {}",
            plan.id, plan_id
        )));
    }

    repairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::DayId;
    use crate::workout::{Intensity, PlannedWorkout};

    fn planned(id: &str, duration: u32) -> PlannedWorkout {
        PlannedWorkout {
            id: id.to_string(),
            workout_id: "wrk-yoga-flow".to_string(),
            sets: None,
            reps: None,
            interval: None,
            duration,
            intensity: Intensity::Recovery,
            notes: None,
        }
    }

    #[test]
    fn valid_day_needs_no_repair() {
        let mut plan = DayPlan::empty(DayId::Wed);
        plan.workouts = vec![planned("a", 35), planned("b", 20)];
        let before = plan.clone();

        assert!(repair_day_plan(&mut plan).is_empty());
        assert_eq!(plan, before);
    }

    #[test]
    fn caps_energy_above_limit() {
        let mut plan = DayPlan::empty(DayId::Wed);
        plan.energy_target = 140;

        let repairs = repair_day_plan(&mut plan);

        assert_eq!(plan.energy_target, MAX_ENERGY_TARGET);
        assert!(repairs[0].to_string().contains("energy target 140"));
    }

    #[test]
    fn keeps_first_of_duplicate_ids() {
        let mut plan = DayPlan::empty(DayId::Wed);
        plan.workouts = vec![planned("a", 35), planned("b", 10), planned("a", 5)];

        let repairs = repair_day_plan(&mut plan);

        let kept: Vec<(&str, u32)> = plan
            .workouts
            .iter()
            .map(|p| (p.id.as_str(), p.duration))
            .collect();
        assert_eq!(kept, vec![("a", 35), ("b", 10)]);
        assert_eq!(repairs.len(), 1);
        assert!(repairs[0].to_string().contains("duplicate planned workout id a"));
    }

    #[test]
    fn clamps_stored_numbers_onto_energy_scale() {
        assert_eq!(clamp_energy_target(55.0), 55);
        assert_eq!(clamp_energy_target(72.6), 73);
        assert_eq!(clamp_energy_target(400.0), 100);
        assert_eq!(clamp_energy_target(-12.0), 0);
    }
}

use crate::day::{DayId, DayPlan};
use crate::workout::{PlannedWorkout, WorkoutPatch};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

/// The planned week: exactly one [`DayPlan`] for each [`DayId`].
///
/// A `Schedule` is an immutable value. Every transformation returns a new
/// schedule that shares untouched days with the original, so a snapshot taken
/// before a change keeps describing the week as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    days: [Arc<DayPlan>; 7],
}

impl Schedule {
    /// Builds a schedule by asking `build` for each day, Monday first. The
    /// returned plan is re-keyed to the day it was built for.
    pub fn from_fn<F>(mut build: F) -> Self
    where
        F: FnMut(DayId) -> DayPlan,
    {
        let days = DayId::ALL.map(|day| {
            let mut plan = build(day);
            plan.id = day;
            Arc::new(plan)
        });
        Self { days }
    }

    /// Every day with its fixed metadata and no workouts.
    pub fn empty() -> Self {
        Self::from_fn(DayPlan::empty)
    }

    pub fn day(&self, day: DayId) -> &DayPlan {
        &self.days[day.index()]
    }

    pub fn days(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.iter().map(|plan| &**plan)
    }

    pub fn session_count(&self) -> usize {
        self.days().map(|plan| plan.workouts.len()).sum()
    }

    /// Returns a copy with `day` edited by `edit`. Only that day is cloned.
    pub fn map_day<F>(&self, day: DayId, edit: F) -> Self
    where
        F: FnOnce(&mut DayPlan),
    {
        let mut next = self.clone();
        let plan = Arc::make_mut(&mut next.days[day.index()]);
        edit(plan);
        plan.id = day;
        next
    }

    pub fn with_day(&self, plan: DayPlan) -> Self {
        let index = plan.id.index();
        let mut next = self.clone();
        next.days[index] = Arc::new(plan);
        next
    }

    pub fn with_workout_appended(&self, day: DayId, planned: PlannedWorkout) -> Self {
        self.map_day(day, |plan| plan.workouts.push(planned))
    }

    /// Applies `patch` to the entry `plan_id` of `day`. An unknown id yields an
    /// unchanged copy.
    pub fn with_workout_patched(&self, day: DayId, plan_id: &str, patch: &WorkoutPatch) -> Self {
        if !self.day(day).contains(plan_id) {
            return self.clone();
        }
        self.map_day(day, |plan| {
            for planned in plan.workouts.iter_mut().filter(|p| p.id == plan_id) {
                planned.apply(patch);
            }
        })
    }

    pub fn with_workout_removed(&self, day: DayId, plan_id: &str) -> Self {
        if !self.day(day).contains(plan_id) {
            return self.clone();
        }
        self.map_day(day, |plan| plan.workouts.retain(|p| p.id != plan_id))
    }
}

impl Serialize for Schedule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in DayId::ALL {
            map.serialize_entry(&day, self.day(day))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WorkoutCatalog;

    fn planned(id: &str) -> PlannedWorkout {
        let workout = WorkoutCatalog::builtin().lookup("wrk-deadlift").unwrap();
        PlannedWorkout::from_workout(id, workout)
    }

    #[test]
    fn map_day_leaves_previous_snapshot_untouched() {
        let before = Schedule::empty();
        let after = before.with_workout_appended(DayId::Tue, planned("tue-a"));

        assert!(before.day(DayId::Tue).workouts.is_empty());
        assert_eq!(after.day(DayId::Tue).workouts.len(), 1);
        assert!(Arc::ptr_eq(&before.days[0], &after.days[0]));
        assert!(!Arc::ptr_eq(&before.days[1], &after.days[1]));
    }

    #[test]
    fn serializes_days_as_map_keyed_by_day() {
        let json = serde_json::to_value(Schedule::empty()).unwrap();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let mut expected: Vec<&str> = DayId::ALL.iter().map(|d| d.as_str()).collect();
        expected.sort();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(sorted, expected);
        assert_eq!(json["wed"]["energyTarget"], 38);
        assert_eq!(json["wed"]["label"], "Wed");
    }

    #[test]
    fn with_day_replaces_only_that_day() {
        let before = Schedule::empty();
        let mut thursday = DayPlan::empty(DayId::Thu);
        thursday.workouts.push(planned("thu-a"));

        let after = before.with_day(thursday.clone());

        assert_eq!(after.day(DayId::Thu), &thursday);
        assert!(before.day(DayId::Thu).workouts.is_empty());
        assert!(Arc::ptr_eq(&before.days[0], &after.days[0]));
    }

    #[test]
    fn from_fn_rekeys_plans() {
        let schedule = Schedule::from_fn(|_| DayPlan::empty(DayId::Mon));
        for day in DayId::ALL {
            assert_eq!(schedule.day(day).id, day);
        }
    }
}

use crate::catalog::{Workout, WorkoutCatalog};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Intensity {
    Recovery,
    #[default]
    Moderate,
    Power,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Recovery, Intensity::Moderate, Intensity::Power];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Recovery => "Recovery",
            Intensity::Moderate => "Moderate",
            Intensity::Power => "Power",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog workout placed on a specific day, with the user's parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedWorkout {
    /// Unique within the owning day only.
    pub id: String,
    /// Catalog reference. May no longer resolve; such entries are orphaned.
    pub workout_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// Minutes.
    pub duration: u32,
    pub intensity: Intensity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PlannedWorkout {
    /// Plans `workout` with its catalog defaults at moderate intensity.
    pub fn from_workout(id: impl Into<String>, workout: &Workout) -> Self {
        Self {
            id: id.into(),
            workout_id: workout.id.to_string(),
            sets: workout.default_sets,
            reps: workout.default_reps,
            interval: workout.default_interval.map(ToOwned::to_owned),
            duration: workout.duration,
            intensity: Intensity::default(),
            notes: None,
        }
    }

    pub fn apply(&mut self, patch: &WorkoutPatch) {
        if let Some(sets) = patch.sets {
            self.sets = Some(sets);
        }
        if let Some(reps) = patch.reps {
            self.reps = Some(reps);
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(interval) = &patch.interval {
            self.interval = Some(interval.clone());
        }
        if let Some(intensity) = patch.intensity {
            self.intensity = intensity;
        }
        if let Some(notes) = &patch.notes {
            self.notes = Some(notes.clone());
        }
    }

    pub fn resolve(&self, catalog: &WorkoutCatalog) -> Option<&'static Workout> {
        catalog.lookup(&self.workout_id)
    }

    pub fn is_orphaned(&self, catalog: &WorkoutCatalog) -> bool {
        self.resolve(catalog).is_none()
    }
}

/// Field-level edit of a planned workout. Only the fields that are `Some`
/// are written; identity fields are never patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sets(mut self, sets: u32) -> Self {
        self.sets = Some(sets);
        self
    }

    pub fn reps(mut self, reps: u32) -> Self {
        self.reps = Some(reps);
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_only_touches_provided_fields() {
        let workout = WorkoutCatalog::builtin().lookup("wrk-bench-press").unwrap();
        let mut planned = PlannedWorkout::from_workout("mon-wrk-bench-press-9", workout);
        planned.apply(&WorkoutPatch::new().reps(8).notes("pause reps"));

        assert_eq!(planned.sets, Some(4));
        assert_eq!(planned.reps, Some(8));
        assert_eq!(planned.duration, 20);
        assert_eq!(planned.intensity, Intensity::Moderate);
        assert_eq!(planned.notes.as_deref(), Some("pause reps"));
        assert_eq!(planned.id, "mon-wrk-bench-press-9");
    }

    #[test]
    fn serializes_with_camel_case_and_omits_absent_fields() {
        let workout = WorkoutCatalog::builtin().lookup("wrk-long-run").unwrap();
        let planned = PlannedWorkout::from_workout("sat-wrk-long-run-1", workout);
        let value = serde_json::to_value(&planned).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "sat-wrk-long-run-1",
                "workoutId": "wrk-long-run",
                "duration": 60,
                "intensity": "Moderate"
            })
        );
    }

    #[test]
    fn intensity_serializes_as_its_display_name() {
        for intensity in Intensity::ALL {
            let value = serde_json::to_value(intensity).unwrap();
            assert_eq!(value, intensity.as_str());
            assert_eq!(intensity.to_string(), intensity.as_str());
        }
    }

    #[test]
    fn patch_without_fields_is_empty() {
        assert!(WorkoutPatch::new().is_empty());
        assert!(!WorkoutPatch::new().intensity(Intensity::Recovery).is_empty());
    }
}

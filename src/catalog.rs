use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutCategory {
    Strength,
    Conditioning,
    Mobility,
    Recovery,
    Core,
    Endurance,
}

impl WorkoutCategory {
    pub const ALL: [WorkoutCategory; 6] = [
        WorkoutCategory::Strength,
        WorkoutCategory::Conditioning,
        WorkoutCategory::Mobility,
        WorkoutCategory::Recovery,
        WorkoutCategory::Core,
        WorkoutCategory::Endurance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCategory::Strength => "Strength",
            WorkoutCategory::Conditioning => "Conditioning",
            WorkoutCategory::Mobility => "Mobility",
            WorkoutCategory::Recovery => "Recovery",
            WorkoutCategory::Core => "Core",
            WorkoutCategory::Endurance => "Endurance",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference workout definition. Catalog entries are compiled in and never
/// change while the planner runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: &'static str,
    pub name: &'static str,
    pub category: WorkoutCategory,
    /// Minutes per block. Always positive.
    pub duration: u32,
    pub equipment: &'static [&'static str],
    pub focus: &'static [&'static str],
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sets: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_reps: Option<u32>,
    /// Free-text interval description, e.g. "40s ON / 20s OFF".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_interval: Option<&'static str>,
}

const BUILTIN_LIBRARY: &[Workout] = &[
    Workout {
        id: "wrk-bench-press",
        name: "Barbell Bench Press",
        category: WorkoutCategory::Strength,
        duration: 20,
        equipment: &["Barbell", "Bench"],
        focus: &["Chest", "Triceps", "Anterior Delts"],
        description: "Heavy compound lift targeting pushing strength.",
        default_sets: Some(4),
        default_reps: Some(6),
        default_interval: None,
    },
    Workout {
        id: "wrk-dumbbell-shoulder-press",
        name: "Dumbbell Shoulder Press",
        category: WorkoutCategory::Strength,
        duration: 15,
        equipment: &["Dumbbells"],
        focus: &["Shoulders", "Triceps"],
        description: "Seated or standing press to build shoulder stability.",
        default_sets: Some(3),
        default_reps: Some(10),
        default_interval: None,
    },
    Workout {
        id: "wrk-push-circuit",
        name: "Push Power Circuit",
        category: WorkoutCategory::Conditioning,
        duration: 18,
        equipment: &["Medicine Ball"],
        focus: &["Explosiveness", "Core"],
        description: "3 rounds of plyo push ups, med ball chest pass, hollow holds. 40s work / 20s rest.",
        default_sets: Some(3),
        default_reps: None,
        default_interval: Some("40s ON / 20s OFF"),
    },
    Workout {
        id: "wrk-deadlift",
        name: "Conventional Deadlift",
        category: WorkoutCategory::Strength,
        duration: 22,
        equipment: &["Barbell", "Plates"],
        focus: &["Posterior Chain", "Grip"],
        description: "Heavy hinge movement prioritizing tension and bracing.",
        default_sets: Some(5),
        default_reps: Some(5),
        default_interval: None,
    },
    Workout {
        id: "wrk-assisted-pullups",
        name: "Assisted Pull-Ups",
        category: WorkoutCategory::Strength,
        duration: 16,
        equipment: &["Pull-Up Bar", "Bands"],
        focus: &["Lats", "Biceps"],
        description: "Vertical pulling focus with tempo holds at top.",
        default_sets: Some(4),
        default_reps: Some(8),
        default_interval: None,
    },
    Workout {
        id: "wrk-hang-clean",
        name: "Hang Power Clean",
        category: WorkoutCategory::Conditioning,
        duration: 15,
        equipment: &["Barbell"],
        focus: &["Power", "Full Body"],
        description: "Explosive triple extension for hybrid performance.",
        default_sets: Some(5),
        default_reps: Some(3),
        default_interval: None,
    },
    Workout {
        id: "wrk-sprint-intervals",
        name: "Sprint Intervals",
        category: WorkoutCategory::Endurance,
        duration: 25,
        equipment: &["Track", "Treadmill"],
        focus: &["Anaerobic", "Speed"],
        description: "10 rounds: 30s sprint, 90s walk. Maintain max speed with full recovery.",
        default_sets: None,
        default_reps: None,
        default_interval: Some("30s sprint / 90s walk"),
    },
    Workout {
        id: "wrk-long-run",
        name: "Zone 2 Long Run",
        category: WorkoutCategory::Endurance,
        duration: 60,
        equipment: &["Running Shoes"],
        focus: &["Aerobic Base"],
        description: "Steady state run holding 70-75% HR max. Focus on nasal breathing.",
        default_sets: None,
        default_reps: None,
        default_interval: None,
    },
    Workout {
        id: "wrk-yoga-flow",
        name: "Mobility Flow",
        category: WorkoutCategory::Mobility,
        duration: 35,
        equipment: &["Yoga Mat"],
        focus: &["Hips", "T-Spine"],
        description: "Slow flow with 5-position hip opener, thoracic rotations, ankle priming.",
        default_sets: None,
        default_reps: None,
        default_interval: None,
    },
    Workout {
        id: "wrk-core-ladder",
        name: "Core Stability Ladder",
        category: WorkoutCategory::Core,
        duration: 18,
        equipment: &["Mat", "Sliders"],
        focus: &["Ankles", "Core"],
        description: "EMOM: plank sliders, dead bugs, Copenhagen plank. Alternate sides.",
        default_sets: None,
        default_reps: None,
        default_interval: Some("60s EMOM"),
    },
    Workout {
        id: "wrk-rower-emom",
        name: "Rower Threshold EMOM",
        category: WorkoutCategory::Conditioning,
        duration: 24,
        equipment: &["Rower"],
        focus: &["VO2 Max"],
        description: "12-minute EMOM alternating 90s threshold row with 60s easy pace.",
        default_sets: None,
        default_reps: None,
        default_interval: Some("Emom 12 min"),
    },
    Workout {
        id: "wrk-soft-tissue",
        name: "Soft Tissue + Breath",
        category: WorkoutCategory::Recovery,
        duration: 20,
        equipment: &["Foam Roller"],
        focus: &["Parasympathetic"],
        description: "Full body foam rolling + 6 min box breathing finisher.",
        default_sets: None,
        default_reps: None,
        default_interval: None,
    },
];

/// Read-only view over a fixed list of workouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutCatalog {
    entries: &'static [Workout],
}

impl Default for WorkoutCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WorkoutCatalog {
    pub const fn builtin() -> Self {
        Self {
            entries: BUILTIN_LIBRARY,
        }
    }

    pub const fn from_static(entries: &'static [Workout]) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, workout_id: &str) -> Option<&'static Workout> {
        self.entries.iter().find(|workout| workout.id == workout_id)
    }

    pub fn contains(&self, workout_id: &str) -> bool {
        self.lookup(workout_id).is_some()
    }

    pub fn all(&self) -> &'static [Workout] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories in the order they first appear in the catalog.
    pub fn categories(&self) -> Vec<WorkoutCategory> {
        let mut categories = Vec::with_capacity(WorkoutCategory::ALL.len());
        for workout in self.entries {
            if !categories.contains(&workout.category) {
                categories.push(workout.category);
            }
        }
        categories
    }

    pub fn by_category(
        &self,
        category: WorkoutCategory,
    ) -> impl Iterator<Item = &'static Workout> + use<> {
        self.entries
            .iter()
            .filter(move |workout| workout.category == category)
    }
}

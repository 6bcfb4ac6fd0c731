use crate::catalog::WorkoutCatalog;
use crate::day::{DayId, DayPlan};
use crate::schedule::Schedule;
use crate::workout::{Intensity, PlannedWorkout};
use tracing::debug;

/// Per-assignment values that take precedence over the catalog defaults.
#[derive(Debug, Clone, Copy)]
struct SeedOverrides {
    sets: Option<u32>,
    reps: Option<u32>,
    duration: Option<u32>,
    interval: Option<&'static str>,
    intensity: Option<Intensity>,
    notes: Option<&'static str>,
}

impl SeedOverrides {
    const NONE: SeedOverrides = SeedOverrides {
        sets: None,
        reps: None,
        duration: None,
        interval: None,
        intensity: None,
        notes: None,
    };
}

#[derive(Debug, Clone, Copy)]
struct SeedAssignment {
    day: DayId,
    workout_id: &'static str,
    overrides: SeedOverrides,
}

const SEED_ASSIGNMENTS: &[SeedAssignment] = &[
    SeedAssignment {
        day: DayId::Mon,
        workout_id: "wrk-bench-press",
        overrides: SeedOverrides {
            sets: Some(4),
            reps: Some(6),
            duration: Some(20),
            intensity: Some(Intensity::Power),
            notes: Some("2 warm-up sets before working sets."),
            ..SeedOverrides::NONE
        },
    },
    SeedAssignment {
        day: DayId::Mon,
        workout_id: "wrk-dumbbell-shoulder-press",
        overrides: SeedOverrides {
            sets: Some(3),
            reps: Some(10),
            duration: Some(15),
            intensity: Some(Intensity::Moderate),
            ..SeedOverrides::NONE
        },
    },
    SeedAssignment {
        day: DayId::Mon,
        workout_id: "wrk-core-ladder",
        overrides: SeedOverrides {
            duration: Some(18),
            intensity: Some(Intensity::Moderate),
            interval: Some("60s EMOM"),
            ..SeedOverrides::NONE
        },
    },
    SeedAssignment {
        day: DayId::Tue,
        workout_id: "wrk-deadlift",
        overrides: SeedOverrides {
            sets: Some(5),
            reps: Some(5),
            duration: Some(22),
            intensity: Some(Intensity::Power),
            notes: Some("Reset between reps, hook grip focus."),
            ..SeedOverrides::NONE
        },
    },
    SeedAssignment {
        day: DayId::Tue,
        workout_id: "wrk-assisted-pullups",
        overrides: SeedOverrides {
            sets: Some(4),
            reps: Some(8),
            duration: Some(16),
            intensity: Some(Intensity::Moderate),
            ..SeedOverrides::NONE
        },
    },
    SeedAssignment {
        day: DayId::Wed,
        workout_id: "wrk-yoga-flow",
        overrides: SeedOverrides {
            duration: Some(35),
            intensity: Some(Intensity::Recovery),
            ..SeedOverrides::NONE
        },
    },
    SeedAssignment {
        day: DayId::Thu,
        workout_id: "wrk-hang-clean",
        overrides: SeedOverrides {
            sets: Some(5),
            reps: Some(3),
            duration: Some(15),
            intensity: Some(Intensity::Power),
            ..SeedOverrides::NONE
        },
    },
    SeedAssignment {
        day: DayId::Thu,
        workout_id: "wrk-rower-emom",
        overrides: SeedOverrides {
            duration: Some(24),
            interval: Some("90s threshold / 60s easy"),
            intensity: Some(Intensity::Moderate),
            ..SeedOverrides::NONE
        },
    },
    SeedAssignment {
        day: DayId::Fri,
        workout_id: "wrk-push-circuit",
        overrides: SeedOverrides {
            duration: Some(18),
            interval: Some("40s ON / 20s OFF"),
            intensity: Some(Intensity::Power),
            ..SeedOverrides::NONE
        },
    },
    SeedAssignment {
        day: DayId::Fri,
        workout_id: "wrk-core-ladder",
        overrides: SeedOverrides {
            sets: Some(5),
            duration: Some(10),
            intensity: Some(Intensity::Moderate),
            notes: Some("Finisher: short ladder."),
            ..SeedOverrides::NONE
        },
    },
    SeedAssignment {
        day: DayId::Sat,
        workout_id: "wrk-long-run",
        overrides: SeedOverrides {
            duration: Some(60),
            intensity: Some(Intensity::Moderate),
            notes: Some("Hold 145-150 bpm."),
            ..SeedOverrides::NONE
        },
    },
    SeedAssignment {
        day: DayId::Sun,
        workout_id: "wrk-soft-tissue",
        overrides: SeedOverrides {
            duration: Some(20),
            intensity: Some(Intensity::Recovery),
            ..SeedOverrides::NONE
        },
    },
];

/// Builds the canonical default week from a catalog.
///
/// The output depends only on the fixed day definitions, the seed
/// assignments and the catalog, so repeated builds compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedTemplateBuilder {
    catalog: WorkoutCatalog,
}

impl SeedTemplateBuilder {
    pub fn new(catalog: WorkoutCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &WorkoutCatalog {
        &self.catalog
    }

    pub fn build(&self) -> Schedule {
        Schedule::from_fn(|day| self.build_day(day))
    }

    /// The template's plan for a single day.
    pub fn build_day(&self, day: DayId) -> DayPlan {
        let mut plan = DayPlan::empty(day);
        for assignment in SEED_ASSIGNMENTS.iter().filter(|a| a.day == day) {
            let Some(workout) = self.catalog.lookup(assignment.workout_id) else {
                debug!(
                    day = %day,
                    workout_id = assignment.workout_id,
                    "skipping seed assignment for unknown workout"
                );
                continue;
            };
            let ordinal = plan.workouts.len() + 1;
            let overrides = &assignment.overrides;
            plan.workouts.push(PlannedWorkout {
                id: format!("{}-{}-{}", day, workout.id, ordinal),
                workout_id: workout.id.to_string(),
                sets: overrides.sets.or(workout.default_sets),
                reps: overrides.reps.or(workout.default_reps),
                interval: overrides
                    .interval
                    .or(workout.default_interval)
                    .map(ToOwned::to_owned),
                duration: overrides.duration.unwrap_or(workout.duration),
                intensity: overrides.intensity.unwrap_or_default(),
                notes: overrides.notes.map(ToOwned::to_owned),
            });
        }
        plan
    }
}

/// The default week over the built-in catalog.
pub fn build_seed() -> Schedule {
    SeedTemplateBuilder::new(WorkoutCatalog::builtin()).build()
}

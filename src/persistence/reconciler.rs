use super::{PersistenceError, PersistenceResult, SCHEDULE_STORAGE_KEY, ScheduleStorage};
use crate::day::{DayId, DayPlan};
use crate::plan_validation::{clamp_energy_target, repair_day_plan};
use crate::schedule::Schedule;
use crate::seed::SeedTemplateBuilder;
use crate::store::ChangeListener;
use crate::workout::PlannedWorkout;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Lifecycle of a reconciler. Writes only happen in `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcilePhase {
    Uninitialized,
    Hydrating,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("schedule has already been hydrated")]
    AlreadyHydrated,
}

/// Loads the stored week once at startup and writes every later change back
/// to the same slot.
///
/// Persisting is refused until [`hydrate`](Self::hydrate) has completed, so an
/// unhydrated default can never overwrite a valid stored snapshot.
#[derive(Debug)]
pub struct PersistenceReconciler<S> {
    storage: S,
    key: String,
    phase: ReconcilePhase,
}

impl<S: ScheduleStorage> PersistenceReconciler<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, SCHEDULE_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            phase: ReconcilePhase::Uninitialized,
        }
    }

    pub fn phase(&self) -> ReconcilePhase {
        self.phase
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Produces the startup schedule: the stored week merged onto a fresh
    /// seed, or the seed alone when nothing usable is stored.
    pub fn hydrate(&mut self, seed: &SeedTemplateBuilder) -> Result<Schedule, LifecycleError> {
        if self.phase != ReconcilePhase::Uninitialized {
            return Err(LifecycleError::AlreadyHydrated);
        }
        self.phase = ReconcilePhase::Hydrating;
        let schedule = self.load_or_seed(seed);
        self.phase = ReconcilePhase::Ready;
        Ok(schedule)
    }

    fn load_or_seed(&self, seed: &SeedTemplateBuilder) -> Schedule {
        let fresh = seed.build();
        let payload = match self.storage.read(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                info!(key = %self.key, "no stored schedule, starting from seed");
                return fresh;
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read stored schedule, starting from seed");
                return fresh;
            }
        };

        match merge_stored(&fresh, &payload) {
            Ok(merged) => {
                info!(key = %self.key, "hydrated stored schedule");
                merged
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding stored schedule, starting from seed");
                fresh
            }
        }
    }

    /// Writes `schedule` to the slot. Returns `Ok(false)` without touching
    /// storage when hydration has not completed yet.
    pub fn persist(&mut self, schedule: &Schedule) -> PersistenceResult<bool> {
        if self.phase != ReconcilePhase::Ready {
            debug!(phase = ?self.phase, "skipping persist before hydration");
            return Ok(false);
        }
        let payload = serde_json::to_string(schedule)?;
        self.storage.write(&self.key, &payload)?;
        Ok(true)
    }
}

impl<S: ScheduleStorage> ChangeListener for PersistenceReconciler<S> {
    fn schedule_changed(&mut self, schedule: &Schedule) {
        if let Err(err) = self.persist(schedule) {
            warn!(key = %self.key, error = %err, "failed to persist schedule");
        }
    }
}

/// A day as found in storage. Every field is optional; only present fields
/// are laid over the seed day. The stored `id` is ignored in favour of the
/// map key.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDay {
    label: Option<String>,
    focus: Option<String>,
    energy_target: Option<Value>,
    workouts: Option<Vec<PlannedWorkout>>,
}

impl StoredDay {
    fn overlay(self, plan: &mut DayPlan) {
        if let Some(label) = self.label {
            plan.label = label;
        }
        if let Some(focus) = self.focus {
            plan.focus = focus;
        }
        if let Some(value) = self.energy_target {
            match value.as_f64() {
                Some(number) => plan.energy_target = clamp_energy_target(number),
                None => {
                    debug!(day = %plan.id, %value, "keeping seed energy target over non-numeric value");
                }
            }
        }
        if let Some(workouts) = self.workouts {
            plan.workouts = workouts;
        }
    }
}

/// Lays a stored payload over `seed`, one day at a time.
///
/// Days missing from the payload (or stored as `null`) keep the seed plan.
/// Unknown top-level keys are ignored. A payload that is not a JSON object,
/// or holds a known day of the wrong shape, is rejected as a whole. Values
/// that only break a day's invariants are repaired in place and logged.
pub fn merge_stored(seed: &Schedule, payload: &str) -> PersistenceResult<Schedule> {
    let value: Value = serde_json::from_str(payload)?;
    let Value::Object(entries) = value else {
        return Err(PersistenceError::InvalidData(
            "stored schedule is not an object".into(),
        ));
    };

    let mut merged = seed.clone();
    for day in DayId::ALL {
        let Some(entry) = entries.get(day.as_str()).filter(|entry| !entry.is_null()) else {
            continue;
        };
        let stored = StoredDay::deserialize(entry).map_err(|err| {
            PersistenceError::InvalidData(format!("stored day {day} is malformed: {err}"))
        })?;
        let mut plan = merged.day(day).clone();
        stored.overlay(&mut plan);
        for repair in repair_day_plan(&mut plan) {
            warn!(day = %day, repair = %repair, "repaired stored day");
        }
        merged = merged.with_day(plan);
    }
    Ok(merged)
}

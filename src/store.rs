use crate::calculations::{DayStats, WeekStats, day_stats, week_stats};
use crate::catalog::{Workout, WorkoutCatalog};
use crate::day::{DayId, DayPlan};
use crate::persistence::{PersistenceReconciler, ScheduleStorage};
use crate::schedule::Schedule;
use crate::seed::SeedTemplateBuilder;
use crate::workout::{PlannedWorkout, WorkoutPatch};
use chrono::Utc;
use std::cell::OnceCell;
use tracing::{debug, warn};

/// Receives the schedule after every committed change.
pub trait ChangeListener {
    fn schedule_changed(&mut self, schedule: &Schedule);
}

impl<F> ChangeListener for F
where
    F: FnMut(&Schedule),
{
    fn schedule_changed(&mut self, schedule: &Schedule) {
        self(schedule)
    }
}

/// Owner of the live week.
///
/// Every operation replaces the current value with a new [`Schedule`];
/// snapshots handed out earlier keep their contents. Operations never fail:
/// unknown plan ids and catalog ids leave the week as it is.
pub struct ScheduleStore {
    seed: SeedTemplateBuilder,
    schedule: Schedule,
    listeners: Vec<Box<dyn ChangeListener>>,
    week_stats: OnceCell<WeekStats>,
    last_stamp: i64,
}

impl ScheduleStore {
    /// A store holding `schedule`. No listener is notified for the initial
    /// value.
    pub fn new(catalog: WorkoutCatalog, schedule: Schedule) -> Self {
        Self {
            seed: SeedTemplateBuilder::new(catalog),
            schedule,
            listeners: Vec::new(),
            week_stats: OnceCell::new(),
            last_stamp: 0,
        }
    }

    /// A store starting from the catalog's seed week.
    pub fn seeded(catalog: WorkoutCatalog) -> Self {
        let schedule = SeedTemplateBuilder::new(catalog).build();
        Self::new(catalog, schedule)
    }

    /// Hydrates from `storage` and keeps every later change persisted to the
    /// slot `key`.
    pub fn bootstrap<S>(catalog: WorkoutCatalog, storage: S, key: &str) -> Self
    where
        S: ScheduleStorage + 'static,
    {
        let seed = SeedTemplateBuilder::new(catalog);
        let mut reconciler = PersistenceReconciler::with_key(storage, key);
        let schedule = match reconciler.hydrate(&seed) {
            Ok(schedule) => schedule,
            Err(err) => {
                warn!(key, error = %err, "hydrate refused, starting from seed");
                seed.build()
            }
        };
        Self::new(catalog, schedule).with_listener(reconciler)
    }

    pub fn with_listener<L>(mut self, listener: L) -> Self
    where
        L: ChangeListener + 'static,
    {
        self.add_listener(listener);
        self
    }

    pub fn add_listener<L>(&mut self, listener: L)
    where
        L: ChangeListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn catalog(&self) -> &WorkoutCatalog {
        self.seed.catalog()
    }

    pub fn current(&self) -> &Schedule {
        &self.schedule
    }

    /// An owned copy of the current week. Days are shared until changed.
    pub fn snapshot(&self) -> Schedule {
        self.schedule.clone()
    }

    pub fn day(&self, day: DayId) -> &DayPlan {
        self.schedule.day(day)
    }

    /// Appends `workout` to `day` with its catalog defaults and returns the
    /// id of the new entry.
    pub fn add_workout(&mut self, day: DayId, workout: &Workout) -> String {
        let plan_id = self.next_plan_id(day, workout.id);
        let planned = PlannedWorkout::from_workout(plan_id.clone(), workout);
        let next = self.schedule.with_workout_appended(day, planned);
        self.commit(next);
        plan_id
    }

    /// Like [`add_workout`](Self::add_workout), resolving the workout through
    /// the catalog first. Unknown ids add nothing.
    pub fn add_catalog_workout(&mut self, day: DayId, workout_id: &str) -> Option<String> {
        let Some(workout) = self.catalog().lookup(workout_id) else {
            debug!(day = %day, workout_id, "ignoring add of unknown catalog workout");
            return None;
        };
        Some(self.add_workout(day, workout))
    }

    pub fn update_workout(&mut self, day: DayId, plan_id: &str, patch: WorkoutPatch) {
        if patch.is_empty() {
            return;
        }
        if !self.schedule.day(day).contains(plan_id) {
            debug!(day = %day, plan_id, "ignoring update of unknown planned workout");
            return;
        }
        let next = self.schedule.with_workout_patched(day, plan_id, &patch);
        self.commit(next);
    }

    pub fn remove_workout(&mut self, day: DayId, plan_id: &str) {
        if !self.schedule.day(day).contains(plan_id) {
            debug!(day = %day, plan_id, "ignoring removal of unknown planned workout");
            return;
        }
        let next = self.schedule.with_workout_removed(day, plan_id);
        self.commit(next);
    }

    /// Restores `day` to the seed template, leaving other days alone.
    pub fn reset_day(&mut self, day: DayId) {
        let next = self.schedule.with_day(self.seed.build_day(day));
        self.commit(next);
    }

    /// Replaces the whole week with the seed template.
    pub fn clear_week(&mut self) {
        let next = self.seed.build();
        self.commit(next);
    }

    pub fn day_stats(&self, day: DayId) -> DayStats {
        day_stats(self.schedule.day(day))
    }

    /// Weekly totals, computed once per schedule value.
    pub fn week_stats(&self) -> WeekStats {
        *self.week_stats.get_or_init(|| week_stats(&self.schedule))
    }

    /// Entries of `day` paired with their catalog workout. Orphaned entries
    /// are skipped.
    pub fn resolved_workouts(&self, day: DayId) -> Vec<(&PlannedWorkout, &'static Workout)> {
        let catalog = self.catalog();
        self.schedule
            .day(day)
            .workouts
            .iter()
            .filter_map(|planned| planned.resolve(catalog).map(|workout| (planned, workout)))
            .collect()
    }

    /// Entries of `day` whose workout no longer exists in the catalog.
    pub fn orphaned_workouts(&self, day: DayId) -> Vec<&PlannedWorkout> {
        let catalog = self.catalog();
        self.schedule
            .day(day)
            .workouts
            .iter()
            .filter(|planned| planned.is_orphaned(catalog))
            .collect()
    }

    fn commit(&mut self, next: Schedule) {
        if next == self.schedule {
            return;
        }
        self.schedule = next;
        self.week_stats = OnceCell::new();
        for listener in &mut self.listeners {
            listener.schedule_changed(&self.schedule);
        }
    }

    /// `"{day}-{workout}-{stamp}"` where the millisecond stamp strictly
    /// increases per store and is bumped until the id is free within the day.
    fn next_plan_id(&mut self, day: DayId, workout_id: &str) -> String {
        loop {
            let stamp = Utc::now().timestamp_millis().max(self.last_stamp + 1);
            self.last_stamp = stamp;
            let plan_id = format!("{day}-{workout_id}-{stamp}");
            if !self.schedule.day(day).contains(&plan_id) {
                return plan_id;
            }
        }
    }
}

pub mod calculations;
pub mod catalog;
pub mod config;
pub mod day;
pub mod persistence;
pub mod plan_validation;
pub mod schedule;
pub mod seed;
pub mod store;
pub mod workout;

pub use calculations::{DayStats, StatsCalculator, WeekStats, day_stats, week_stats};
pub use catalog::{Workout, WorkoutCatalog, WorkoutCategory};
pub use config::{ConfigError, PlannerConfig, StorageBackend, StorageSettings};
pub use day::{DayDefinition, DayId, DayPlan, UnknownDay};
#[cfg(feature = "sqlite")]
pub use persistence::SqliteStorage;
pub use persistence::{
    JsonFileStorage, LifecycleError, MemoryStorage, PersistenceError, PersistenceReconciler,
    PersistenceResult, ReconcilePhase, SCHEDULE_STORAGE_KEY, ScheduleStorage, merge_stored,
};
pub use plan_validation::{
    MAX_ENERGY_TARGET, PlanValidationError, clamp_energy_target, repair_day_plan,
};
pub use schedule::Schedule;
pub use seed::{SeedTemplateBuilder, build_seed};
pub use store::{ChangeListener, ScheduleStore};
pub use workout::{Intensity, PlannedWorkout, WorkoutPatch};

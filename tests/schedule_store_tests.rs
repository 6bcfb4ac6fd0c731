use pulseflow::{
    DayId, Intensity, Schedule, ScheduleStore, Workout, WorkoutCatalog, WorkoutCategory,
    WorkoutPatch, build_seed,
};
use std::cell::RefCell;
use std::rc::Rc;

static NO_BENCH_LIBRARY: &[Workout] = &[Workout {
    id: "wrk-dumbbell-shoulder-press",
    name: "Dumbbell Shoulder Press",
    category: WorkoutCategory::Strength,
    duration: 15,
    equipment: &["Dumbbells"],
    focus: &["Shoulders"],
    description: "Seated press.",
    default_sets: Some(3),
    default_reps: Some(10),
    default_interval: None,
}];

fn seeded_store() -> ScheduleStore {
    ScheduleStore::seeded(WorkoutCatalog::builtin())
}

#[test]
fn add_catalog_workout_uses_catalog_defaults() {
    let mut store = seeded_store();

    let plan_id = store
        .add_catalog_workout(DayId::Sun, "wrk-sprint-intervals")
        .expect("sprint intervals is in the catalog");

    assert!(plan_id.starts_with("sun-wrk-sprint-intervals-"));
    let sunday = store.day(DayId::Sun);
    assert_eq!(sunday.workouts.len(), 2);
    let added = sunday.workouts.last().unwrap();
    assert_eq!(added.id, plan_id);
    assert_eq!(added.workout_id, "wrk-sprint-intervals");
    assert_eq!(added.duration, 25);
    assert_eq!(added.intensity, Intensity::Moderate);
    assert_eq!(added.sets, None);
    assert_eq!(added.reps, None);
    assert_eq!(added.interval.as_deref(), Some("30s sprint / 90s walk"));
    assert_eq!(added.notes, None);
}

#[test]
fn add_then_remove_restores_day() {
    let mut store = seeded_store();
    let before = store.day(DayId::Tue).clone();

    let plan_id = store.add_catalog_workout(DayId::Tue, "wrk-yoga-flow").unwrap();
    assert_eq!(store.day(DayId::Tue).workouts.len(), 3);

    store.remove_workout(DayId::Tue, &plan_id);
    assert_eq!(store.day(DayId::Tue), &before);
}

#[test]
fn repeated_adds_get_distinct_ids() {
    let mut store = seeded_store();
    let first = store.add_catalog_workout(DayId::Sat, "wrk-long-run").unwrap();
    let second = store.add_catalog_workout(DayId::Sat, "wrk-long-run").unwrap();
    let third = store.add_catalog_workout(DayId::Sat, "wrk-long-run").unwrap();

    assert_ne!(first, second);
    assert_ne!(second, third);
    assert_eq!(store.day(DayId::Sat).workouts.len(), 4);
}

#[test]
fn add_of_unknown_catalog_id_changes_nothing() {
    let mut store = seeded_store();
    assert_eq!(store.add_catalog_workout(DayId::Mon, "wrk-missing"), None);
    assert_eq!(store.current(), &build_seed());
}

#[test]
fn update_touches_only_patched_fields() {
    let mut store = seeded_store();
    let plan_id = store.day(DayId::Mon).workouts[0].id.clone();

    store.update_workout(
        DayId::Mon,
        &plan_id,
        WorkoutPatch::new().reps(5).notes("Paused reps."),
    );

    let bench = store.day(DayId::Mon).find(&plan_id).unwrap();
    assert_eq!(bench.reps, Some(5));
    assert_eq!(bench.notes.as_deref(), Some("Paused reps."));
    assert_eq!(bench.sets, Some(4));
    assert_eq!(bench.duration, 20);
    assert_eq!(bench.intensity, Intensity::Power);
}

#[test]
fn update_is_idempotent() {
    let mut store = seeded_store();
    let plan_id = store.day(DayId::Thu).workouts[1].id.clone();
    let patch = WorkoutPatch::new().duration(30).intensity(Intensity::Power);

    store.update_workout(DayId::Thu, &plan_id, patch.clone());
    let once = store.snapshot();
    store.update_workout(DayId::Thu, &plan_id, patch);

    assert_eq!(store.current(), &once);
}

#[test]
fn update_of_unknown_plan_id_changes_nothing() {
    let mut store = seeded_store();
    store.update_workout(DayId::Mon, "mon-nope-1", WorkoutPatch::new().sets(99));
    assert_eq!(store.current(), &build_seed());
}

#[test]
fn empty_patch_changes_nothing() {
    let mut store = seeded_store();
    let plan_id = store.day(DayId::Fri).workouts[0].id.clone();
    let before = store.snapshot();

    store.update_workout(DayId::Fri, &plan_id, WorkoutPatch::default());

    assert_eq!(store.current(), &before);
}

#[test]
fn plan_ids_are_scoped_to_their_day() {
    let mut store = seeded_store();
    let monday_id = store.day(DayId::Mon).workouts[0].id.clone();

    store.remove_workout(DayId::Tue, &monday_id);
    store.update_workout(DayId::Tue, &monday_id, WorkoutPatch::new().sets(1));

    assert_eq!(store.current(), &build_seed());
}

#[test]
fn reset_day_restores_only_that_day() {
    let mut store = seeded_store();
    let yoga = store.day(DayId::Wed).workouts[0].id.clone();
    store.remove_workout(DayId::Wed, &yoga);
    store.add_catalog_workout(DayId::Wed, "wrk-soft-tissue").unwrap();
    let friday_id = store.add_catalog_workout(DayId::Fri, "wrk-bench-press").unwrap();

    store.reset_day(DayId::Wed);

    let seed = build_seed();
    assert_eq!(store.day(DayId::Wed), seed.day(DayId::Wed));
    assert!(store.day(DayId::Fri).contains(&friday_id));
}

#[test]
fn clear_week_restores_seed_and_keeps_snapshots() {
    let mut store = seeded_store();
    store.add_catalog_workout(DayId::Mon, "wrk-core-ladder").unwrap();
    let edited = store.snapshot();

    store.clear_week();

    assert_eq!(store.current(), &build_seed());
    assert_eq!(edited.day(DayId::Mon).workouts.len(), 4);
}

#[test]
fn snapshots_are_not_affected_by_later_changes() {
    let mut store = seeded_store();
    let before = store.snapshot();

    let plan_id = store.day(DayId::Sat).workouts[0].id.clone();
    store.update_workout(DayId::Sat, &plan_id, WorkoutPatch::new().duration(90));

    assert_eq!(before, build_seed());
    assert_eq!(store.day(DayId::Sat).workouts[0].duration, 90);
}

#[test]
fn listeners_see_each_change_but_not_no_ops() {
    let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let mut store = seeded_store().with_listener(move |schedule: &Schedule| {
        sink.borrow_mut().push(schedule.session_count());
    });

    let plan_id = store.add_catalog_workout(DayId::Sun, "wrk-yoga-flow").unwrap();
    store.update_workout(DayId::Sun, "sun-missing", WorkoutPatch::new().sets(1));
    store.update_workout(DayId::Sun, &plan_id, WorkoutPatch::new());
    store.remove_workout(DayId::Sun, &plan_id);
    store.reset_day(DayId::Sun);

    assert_eq!(*seen.borrow(), vec![13, 12]);
}

#[test]
fn orphaned_entries_are_reported_and_skipped_when_resolving() {
    let schedule = build_seed();
    let store = ScheduleStore::new(WorkoutCatalog::from_static(NO_BENCH_LIBRARY), schedule);

    let orphaned: Vec<&str> = store
        .orphaned_workouts(DayId::Mon)
        .iter()
        .map(|planned| planned.workout_id.as_str())
        .collect();
    assert_eq!(orphaned, vec!["wrk-bench-press", "wrk-core-ladder"]);

    let resolved = store.resolved_workouts(DayId::Mon);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].1.name, "Dumbbell Shoulder Press");
    // Orphans still count toward totals.
    assert_eq!(store.day_stats(DayId::Mon).total_duration, 53);
}

#[test]
fn day_stats_follow_updates() {
    let mut store = seeded_store();
    let plan_id = store.day(DayId::Mon).workouts[1].id.clone();
    store.update_workout(DayId::Mon, &plan_id, WorkoutPatch::new().sets(5).duration(25));

    let monday = store.day_stats(DayId::Mon);
    assert_eq!(monday.total_duration, 63);
    assert_eq!(monday.total_sets, 9);
}

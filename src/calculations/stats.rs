use crate::day::{DayId, DayPlan};
use crate::schedule::Schedule;
use serde::Serialize;

/// Weekly minutes at which the volume gauge reads full.
pub const WEEKLY_MINUTES_TARGET: u32 = 420;
/// Weekly sets at which the strength gauge reads full.
pub const WEEKLY_SETS_TARGET: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStats {
    pub total_duration: u32,
    pub total_sets: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WeekStats {
    pub minutes: u32,
    pub sets: u32,
    pub sessions: usize,
}

impl WeekStats {
    /// Days left for recovery, never reported below one.
    pub fn recovery_days(&self) -> usize {
        DayId::ALL.len().saturating_sub(self.sessions).max(1)
    }

    pub fn minutes_progress(&self) -> f64 {
        ratio(self.minutes, WEEKLY_MINUTES_TARGET)
    }

    pub fn sets_progress(&self) -> f64 {
        ratio(self.sets, WEEKLY_SETS_TARGET)
    }
}

fn ratio(value: u32, target: u32) -> f64 {
    (f64::from(value) / f64::from(target)).min(1.0)
}

/// Sums duration over the day; workouts without a set count add nothing to
/// the set total.
pub fn day_stats(day: &DayPlan) -> DayStats {
    day.workouts
        .iter()
        .fold(DayStats::default(), |acc, planned| DayStats {
            total_duration: acc.total_duration.saturating_add(planned.duration),
            total_sets: acc.total_sets.saturating_add(planned.sets.unwrap_or(0)),
        })
}

pub fn week_stats(schedule: &Schedule) -> WeekStats {
    schedule
        .days()
        .fold(WeekStats::default(), |acc, plan| {
            let day = day_stats(plan);
            WeekStats {
                minutes: acc.minutes.saturating_add(day.total_duration),
                sets: acc.sets.saturating_add(day.total_sets),
                sessions: acc.sessions + plan.workouts.len(),
            }
        })
}

/// Aggregates over one borrowed schedule.
pub struct StatsCalculator<'a> {
    schedule: &'a Schedule,
}

impl<'a> StatsCalculator<'a> {
    pub fn new(schedule: &'a Schedule) -> Self {
        Self { schedule }
    }

    pub fn day(&self, day: DayId) -> DayStats {
        day_stats(self.schedule.day(day))
    }

    pub fn week(&self) -> WeekStats {
        week_stats(self.schedule)
    }

    /// Per-day stats, Monday first.
    pub fn by_day(&self) -> Vec<(DayId, DayStats)> {
        DayId::ALL.iter().map(|&day| (day, self.day(day))).collect()
    }
}

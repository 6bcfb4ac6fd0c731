pub mod stats;

pub use stats::{
    DayStats, StatsCalculator, WEEKLY_MINUTES_TARGET, WEEKLY_SETS_TARGET, WeekStats, day_stats,
    week_stats,
};

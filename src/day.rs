use crate::workout::PlannedWorkout;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the seven fixed days of the planning week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayId {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day identifier '{0}'")]
pub struct UnknownDay(pub String);

/// Fixed display metadata for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDefinition {
    pub id: DayId,
    pub label: &'static str,
    pub focus: &'static str,
    pub energy_target: u8,
}

const DAY_DEFINITIONS: [DayDefinition; 7] = [
    DayDefinition {
        id: DayId::Mon,
        label: "Mon",
        focus: "Push Power + Core",
        energy_target: 76,
    },
    DayDefinition {
        id: DayId::Tue,
        label: "Tue",
        focus: "Pull Strength",
        energy_target: 70,
    },
    DayDefinition {
        id: DayId::Wed,
        label: "Wed",
        focus: "Active Recovery",
        energy_target: 38,
    },
    DayDefinition {
        id: DayId::Thu,
        label: "Thu",
        focus: "Legs + Conditioning",
        energy_target: 82,
    },
    DayDefinition {
        id: DayId::Fri,
        label: "Fri",
        focus: "Hybrid Athlete Day",
        energy_target: 88,
    },
    DayDefinition {
        id: DayId::Sat,
        label: "Sat",
        focus: "Endurance Session",
        energy_target: 62,
    },
    DayDefinition {
        id: DayId::Sun,
        label: "Sun",
        focus: "Mobility Reset",
        energy_target: 30,
    },
];

impl DayId {
    pub const ALL: [DayId; 7] = [
        DayId::Mon,
        DayId::Tue,
        DayId::Wed,
        DayId::Thu,
        DayId::Fri,
        DayId::Sat,
        DayId::Sun,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DayId::Mon => "mon",
            DayId::Tue => "tue",
            DayId::Wed => "wed",
            DayId::Thu => "thu",
            DayId::Fri => "fri",
            DayId::Sat => "sat",
            DayId::Sun => "sun",
        }
    }

    /// Position of the day within the week, Monday first.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn definition(self) -> &'static DayDefinition {
        &DAY_DEFINITIONS[self.index()]
    }

    pub fn weekday(self) -> Weekday {
        match self {
            DayId::Mon => Weekday::Mon,
            DayId::Tue => Weekday::Tue,
            DayId::Wed => Weekday::Wed,
            DayId::Thu => Weekday::Thu,
            DayId::Fri => Weekday::Fri,
            DayId::Sat => Weekday::Sat,
            DayId::Sun => Weekday::Sun,
        }
    }
}

impl From<Weekday> for DayId {
    fn from(weekday: Weekday) -> Self {
        DayId::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl FromStr for DayId {
    type Err = UnknownDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayId::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| UnknownDay(s.to_string()))
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of the week: display metadata plus its planned sessions in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub id: DayId,
    pub label: String,
    pub focus: String,
    /// Target load percentage, 0 to 100.
    pub energy_target: u8,
    pub workouts: Vec<PlannedWorkout>,
}

impl DayPlan {
    /// A day with its fixed metadata and nothing planned.
    pub fn empty(day: DayId) -> Self {
        let definition = day.definition();
        Self {
            id: day,
            label: definition.label.to_string(),
            focus: definition.focus.to_string(),
            energy_target: definition.energy_target,
            workouts: Vec::new(),
        }
    }

    pub fn find(&self, plan_id: &str) -> Option<&PlannedWorkout> {
        self.workouts.iter().find(|planned| planned.id == plan_id)
    }

    pub fn contains(&self, plan_id: &str) -> bool {
        self.find(plan_id).is_some()
    }
}

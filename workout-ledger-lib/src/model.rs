//src/model.rs
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Identifier assigned by the store when a record is created.
pub type WorkoutId = u64;

/// Day of the week a workout is planned for. Each day renders into its own table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<chrono::Weekday> for Day {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl Day {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// The weekday of the local clock.
    #[must_use]
    pub fn today() -> Self {
        use chrono::Datelike;
        chrono::Local::now().weekday().into()
    }

    /// Steps through the week, wrapping around at either end.
    #[must_use]
    pub fn offset(self, step: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let index = (self as isize + step).rem_euclid(len);
        Self::ALL[index as usize]
    }
}

/// Target muscle group. The set is closed; counting only ever covers these six.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum MuscleGroup {
    Shoulders,
    Chest,
    Back,
    Legs,
    Arms,
    Core,
}

impl MuscleGroup {
    pub const ALL: [Self; 6] = [
        Self::Shoulders,
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Arms,
        Self::Core,
    ];
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Display, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Status {
    #[default]
    Idle,
    Done,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutRecord {
    pub id: WorkoutId,
    pub day: Day,
    pub title: String,
    pub group: MuscleGroup,
    pub sets: i64,
    pub reps: i64,
    pub weight: Option<i64>, // Weight or time; no unit is attached
    pub status: Status,
}

impl WorkoutRecord {
    /// "sets x reps" as shown in the log tables.
    #[must_use]
    pub fn volume_text(&self) -> String {
        format!("{} x {}", self.sets, self.reps)
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.status, Status::Done)
    }
}

impl fmt::Display for WorkoutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}, {}) on {}",
            self.id,
            self.title,
            self.group,
            self.volume_text(),
            self.day
        )
    }
}

//src/views.rs
//! Read-only projections of the workout store. Everything here is recomputed from
//! scratch after each mutation; frontends only decide how to draw the result.

use crate::model::{Day, MuscleGroup, Status, WorkoutId, WorkoutRecord};
use strum::IntoEnumIterator;

pub const EMPTY_DAY_MESSAGE: &str = "No workouts yet. Create one above.";
pub const WEIGHT_PLACEHOLDER: &str = "-";
pub const LOG_COLUMNS: [&str; 5] = ["Workout", "Target", "Sets x Reps", "Weight/Time", "Status"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub id: WorkoutId,
    pub title: String,
    pub group: MuscleGroup,
    pub volume: String,
    pub weight: String,
    pub status: Status,
    pub done: bool, // Rows marked done get a distinct style
}

impl LogRow {
    fn from_record(record: &WorkoutRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            group: record.group,
            volume: record.volume_text(),
            weight: record
                .weight
                .map_or_else(|| WEIGHT_PLACEHOLDER.to_string(), |w| w.to_string()),
            status: record.status,
            done: record.is_done(),
        }
    }

    /// Text cells in column order, without the status/action column.
    #[must_use]
    pub fn cells(&self) -> [String; 4] {
        [
            self.title.clone(),
            self.group.to_string(),
            self.volume.clone(),
            self.weight.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTable {
    pub day: Day,
    pub rows: Vec<LogRow>,
}

impl DayTable {
    /// Message to span the whole table with when the day has no rows.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(EMPTY_DAY_MESSAGE)
    }
}

/// Partitions records into seven tables, Monday first, keeping insertion order within a day.
#[must_use]
pub fn day_tables(records: &[WorkoutRecord]) -> Vec<DayTable> {
    Day::iter()
        .map(|day| DayTable {
            day,
            rows: records
                .iter()
                .filter(|r| r.day == day)
                .map(LogRow::from_record)
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuscleFocus {
    counts: Vec<(MuscleGroup, usize)>,
}

impl MuscleFocus {
    #[must_use]
    pub fn count(&self, group: MuscleGroup) -> usize {
        self.counts
            .iter()
            .find(|(g, _)| *g == group)
            .map_or(0, |(_, c)| *c)
    }

    /// Counts in the fixed display order.
    pub fn iter(&self) -> impl Iterator<Item = (MuscleGroup, usize)> + '_ {
        self.counts.iter().copied()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }
}

#[must_use]
pub fn muscle_focus(records: &[WorkoutRecord]) -> MuscleFocus {
    let counts = MuscleGroup::iter()
        .map(|group| (group, records.iter().filter(|r| r.group == group).count()))
        .collect();
    MuscleFocus { counts }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSummary {
    pub total: usize,
    pub done: usize,
    pub skipped: usize,
    pub idle: usize,
    pub completion_percent: u8,
}

#[must_use]
pub fn status_summary(records: &[WorkoutRecord]) -> StatusSummary {
    let total = records.len();
    let done = records.iter().filter(|r| r.status == Status::Done).count();
    let skipped = records.iter().filter(|r| r.status == Status::Skipped).count();
    StatusSummary {
        total,
        done,
        skipped,
        idle: total - done - skipped,
        completion_percent: completion_percent(done, total),
    }
}

/// `round(100 * done / total)` with halves rounded up; 0 for an empty log.
#[must_use]
pub fn completion_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total);
    let rounded = (200 * done + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

/// All three views, as drawn after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub days: Vec<DayTable>,
    pub muscles: MuscleFocus,
    pub summary: StatusSummary,
}

impl Dashboard {
    #[must_use]
    pub fn from_records(records: &[WorkoutRecord]) -> Self {
        log::debug!("Recomputing dashboard for {} workouts", records.len());
        Self {
            days: day_tables(records),
            muscles: muscle_focus(records),
            summary: status_summary(records),
        }
    }

    #[must_use]
    pub fn day(&self, day: Day) -> Option<&DayTable> {
        self.days.iter().find(|t| t.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: WorkoutId, day: Day, group: MuscleGroup, status: Status) -> WorkoutRecord {
        WorkoutRecord {
            id,
            day,
            title: format!("Workout {id}"),
            group,
            sets: 3,
            reps: 10,
            weight: None,
            status,
        }
    }

    #[test]
    fn empty_store_renders_placeholders_and_zeroes() {
        let dashboard = Dashboard::from_records(&[]);
        assert_eq!(dashboard.days.len(), 7);
        assert!(dashboard
            .days
            .iter()
            .all(|t| t.placeholder() == Some(EMPTY_DAY_MESSAGE)));
        assert_eq!(dashboard.muscles.total(), 0);
        assert_eq!(dashboard.muscles.iter().count(), 6);
        assert_eq!(dashboard.summary, StatusSummary::default());
    }

    #[test]
    fn rows_keep_insertion_order_within_a_day() {
        let records = vec![
            record(1, Day::Friday, MuscleGroup::Back, Status::Idle),
            record(2, Day::Monday, MuscleGroup::Chest, Status::Idle),
            record(3, Day::Friday, MuscleGroup::Arms, Status::Done),
        ];
        let tables = day_tables(&records);
        let friday = tables.iter().find(|t| t.day == Day::Friday).unwrap();
        let ids: Vec<_> = friday.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(!friday.rows[0].done);
        assert!(friday.rows[1].done);
        assert!(friday.placeholder().is_none());
        assert_eq!(tables[0].day, Day::Monday);
    }

    #[test]
    fn weight_cell_uses_placeholder_when_absent() {
        let mut with_weight = record(1, Day::Monday, MuscleGroup::Chest, Status::Idle);
        with_weight.weight = Some(0);
        let without = record(2, Day::Monday, MuscleGroup::Chest, Status::Idle);
        let tables = day_tables(&[with_weight, without]);
        let rows = &tables[0].rows;
        assert_eq!(rows[0].weight, "0");
        assert_eq!(rows[1].weight, WEIGHT_PLACEHOLDER);
        assert_eq!(rows[1].volume, "3 x 10");
    }

    #[test]
    fn muscle_counts_cover_every_record() {
        let records = vec![
            record(1, Day::Monday, MuscleGroup::Legs, Status::Idle),
            record(2, Day::Tuesday, MuscleGroup::Legs, Status::Skipped),
            record(3, Day::Sunday, MuscleGroup::Core, Status::Done),
        ];
        let focus = muscle_focus(&records);
        assert_eq!(focus.count(MuscleGroup::Legs), 2);
        assert_eq!(focus.count(MuscleGroup::Core), 1);
        assert_eq!(focus.count(MuscleGroup::Shoulders), 0);
        assert_eq!(focus.total(), records.len());
    }

    #[test]
    fn summary_counts_add_up() {
        let records = vec![
            record(1, Day::Monday, MuscleGroup::Legs, Status::Done),
            record(2, Day::Monday, MuscleGroup::Legs, Status::Skipped),
            record(3, Day::Monday, MuscleGroup::Legs, Status::Idle),
        ];
        let summary = status_summary(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.done + summary.skipped + summary.idle, summary.total);
        assert_eq!(summary.completion_percent, 33);
    }

    #[test]
    fn completion_rounds_half_up() {
        assert_eq!(completion_percent(0, 0), 0);
        assert_eq!(completion_percent(1, 8), 13); // 12.5
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(1, 200), 1); // 0.5
        assert_eq!(completion_percent(4, 4), 100);
    }
}

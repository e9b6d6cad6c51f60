//src/store.rs
use crate::model::{Day, MuscleGroup, Status, WorkoutId, WorkoutRecord};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Messages mirror the notifications shown by the form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Fill Workout, Target, and Day")]
    MissingRequiredField(RequiredField),
    #[error("Sets and Reps must be numbers")]
    NonNumericQuantity { field: QuantityField, input: String },
    #[error("Sets and Reps must be positive")]
    NonPositiveQuantity { field: QuantityField, value: i64 },
    #[error("Weight/Time must be 0 or more")]
    InvalidOptionalQuantity(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Workout with ID {0} not found.")]
    NotFound(WorkoutId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Group,
    Day,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "workout"),
            Self::Group => write!(f, "target"),
            Self::Day => write!(f, "day"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityField {
    Sets,
    Reps,
}

impl fmt::Display for QuantityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sets => write!(f, "sets"),
            Self::Reps => write!(f, "reps"),
        }
    }
}

/// Raw form input, exactly as typed or selected by the user.
#[derive(Default, Debug, Clone, Copy)]
pub struct AddWorkoutParams<'a> {
    pub title: &'a str,
    pub group: &'a str,
    pub sets: &'a str,
    pub reps: &'a str,
    pub weight: &'a str,
    pub day: &'a str,
}

/// A workout that passed validation but has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub day: Day,
    pub title: String,
    pub group: MuscleGroup,
    pub sets: i64,
    pub reps: i64,
    pub weight: Option<i64>,
}

impl NewWorkout {
    /// Validates raw form input. Checks run in a fixed order and the first failure is returned:
    /// required fields, numeric sets/reps, positive sets/reps, then the optional weight.
    ///
    /// # Errors
    /// Returns the `ValidationError` for the first failing check.
    pub fn parse(params: &AddWorkoutParams<'_>) -> Result<Self, ValidationError> {
        let title = params.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingRequiredField(RequiredField::Title));
        }
        // An unknown choice counts as unset: a select can only submit known values
        let group = MuscleGroup::from_str(params.group.trim())
            .map_err(|_| ValidationError::MissingRequiredField(RequiredField::Group))?;
        let day = Day::from_str(params.day.trim())
            .map_err(|_| ValidationError::MissingRequiredField(RequiredField::Day))?;

        let sets = parse_quantity(params.sets, QuantityField::Sets)?;
        let reps = parse_quantity(params.reps, QuantityField::Reps)?;
        for (field, value) in [(QuantityField::Sets, sets), (QuantityField::Reps, reps)] {
            if value <= 0 {
                return Err(ValidationError::NonPositiveQuantity { field, value });
            }
        }

        let weight = parse_optional_quantity(params.weight)?;

        Ok(Self {
            day,
            title: title.to_string(),
            group,
            sets,
            reps,
            weight,
        })
    }
}

fn parse_quantity(input: &str, field: QuantityField) -> Result<i64, ValidationError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NonNumericQuantity {
            field,
            input: input.to_string(),
        })
}

fn parse_optional_quantity(input: &str) -> Result<Option<i64>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i64>() {
        Ok(value) if value >= 0 => Ok(Some(value)),
        _ => Err(ValidationError::InvalidOptionalQuantity(trimmed.to_string())),
    }
}

/// Session-lifetime collection of workout records, kept in insertion order.
#[derive(Debug)]
pub struct WorkoutStore {
    records: Vec<WorkoutRecord>,
    next_id: WorkoutId,
}

impl Default for WorkoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Validates the input and appends a new idle record.
    ///
    /// # Errors
    /// Returns `ValidationError` without touching the store when the input is rejected.
    pub fn create(&mut self, params: &AddWorkoutParams<'_>) -> Result<WorkoutRecord, ValidationError> {
        let new = NewWorkout::parse(params)?;
        Ok(self.insert(new))
    }

    /// Appends an already validated workout.
    pub fn insert(&mut self, new: NewWorkout) -> WorkoutRecord {
        let record = WorkoutRecord {
            id: self.next_id,
            day: new.day,
            title: new.title,
            group: new.group,
            sets: new.sets,
            reps: new.reps,
            weight: new.weight,
            status: Status::Idle,
        };
        self.next_id += 1;
        self.records.push(record.clone());
        record
    }

    /// # Errors
    /// Returns `StoreError::NotFound` if no record has this id.
    pub fn set_status(&mut self, id: WorkoutId, status: Status) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.status = status;
        Ok(())
    }

    /// Removes the record with this id. Returns `None` when nothing matched.
    pub fn delete(&mut self, id: WorkoutId) -> Option<WorkoutRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    #[must_use]
    pub fn all(&self) -> &[WorkoutRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: WorkoutId) -> Option<&WorkoutRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params<'a>(sets: &'a str, reps: &'a str, weight: &'a str) -> AddWorkoutParams<'a> {
        AddWorkoutParams {
            title: "Squat",
            group: "Legs",
            sets,
            reps,
            weight,
            day: "Tuesday",
        }
    }

    #[test]
    fn parse_trims_and_accepts_valid_input() {
        let new = NewWorkout::parse(&AddWorkoutParams {
            title: "  Squat ",
            group: "legs",
            sets: " 5",
            reps: "5 ",
            weight: " 225 ",
            day: "tuesday",
        })
        .unwrap();
        assert_eq!(new.title, "Squat");
        assert_eq!(new.group, MuscleGroup::Legs);
        assert_eq!(new.day, Day::Tuesday);
        assert_eq!((new.sets, new.reps, new.weight), (5, 5, Some(225)));
    }

    #[test]
    fn missing_fields_are_reported_first() {
        let err = NewWorkout::parse(&AddWorkoutParams {
            title: "   ",
            sets: "abc",
            ..params("abc", "1", "")
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField(RequiredField::Title));

        let err = NewWorkout::parse(&AddWorkoutParams {
            group: "",
            ..params("3", "3", "")
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField(RequiredField::Group));

        let err = NewWorkout::parse(&AddWorkoutParams {
            day: "Someday",
            ..params("3", "3", "")
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredField(RequiredField::Day));
    }

    #[test]
    fn non_numeric_wins_over_non_positive() {
        let err = NewWorkout::parse(&params("0", "ten", "")).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonNumericQuantity { field: QuantityField::Reps, .. }
        ));
        assert_eq!(err.to_string(), "Sets and Reps must be numbers");
    }

    #[test]
    fn non_positive_quantities_rejected() {
        let err = NewWorkout::parse(&params("0", "8", "")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonPositiveQuantity { field: QuantityField::Sets, value: 0 }
        );
        let err = NewWorkout::parse(&params("3", "-2", "")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonPositiveQuantity { field: QuantityField::Reps, value: -2 }
        );
    }

    #[test]
    fn weight_is_optional_but_must_be_non_negative() {
        assert_eq!(NewWorkout::parse(&params("3", "8", "")).unwrap().weight, None);
        assert_eq!(NewWorkout::parse(&params("3", "8", "0")).unwrap().weight, Some(0));
        assert_eq!(
            NewWorkout::parse(&params("3", "8", "-5")).unwrap_err(),
            ValidationError::InvalidOptionalQuantity("-5".to_string())
        );
        assert_eq!(
            NewWorkout::parse(&params("3", "8", "heavy")).unwrap_err().to_string(),
            "Weight/Time must be 0 or more"
        );
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = WorkoutStore::new();
        let first = store.create(&params("3", "8", "")).unwrap();
        let second = store.create(&params("3", "8", "")).unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        store.delete(second.id);
        let third = store.create(&params("3", "8", "")).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn set_status_on_missing_id_fails() {
        let mut store = WorkoutStore::new();
        assert_eq!(store.set_status(9, Status::Done), Err(StoreError::NotFound(9)));
        assert!(store.delete(9).is_none());
        assert!(store.is_empty());
    }
}

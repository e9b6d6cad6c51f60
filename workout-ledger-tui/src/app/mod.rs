//src/app/mod.rs
use thiserror::Error;

// Declare the modules within the app directory
pub mod actions;
pub mod data;
pub mod input;
pub mod modals;
pub mod navigation;
pub mod state;

// Re-export the main App struct and other necessary types for convenience
pub use state::{ActiveModal, AddWorkoutField, App, LoginField, Screen};

// Define App-specific errors here
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppInputError {
    #[error("{0}")]
    Validation(String),
    #[error("Workout with ID {0} no longer exists.")]
    WorkoutGone(u64),
    #[error("Select a workout first.")]
    SelectionRequired,
}

// src/lib.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

// --- Declare modules ---
mod config;
pub mod model;
pub mod notify;
pub mod session;
pub mod store;
pub mod views;

// --- Expose public types ---
pub use config::{
    get_config_path as get_config_path_util,
    Config,
    Error as ConfigError,
    StandardColor,
    Theme,
};
pub use model::{Day, MuscleGroup, Status, WorkoutId, WorkoutRecord};
pub use notify::{Notification, NotificationKind};
pub use session::{LoginError, Session};
pub use store::{AddWorkoutParams, StoreError, ValidationError, WorkoutStore};
pub use views::{Dashboard, DayTable, LogRow, MuscleFocus, StatusSummary};

/// Owns everything a frontend session needs: configuration, the login state and the
/// workout store. Workouts are never written anywhere; they end with the process.
pub struct AppService {
    pub config: Config,
    pub config_path: PathBuf,
    session: Option<Session>,
    store: WorkoutStore,
}

impl AppService {
    /// Initializes the application service from the on-disk configuration.
    /// # Errors
    /// Returns `anyhow::Error` if config path determination or loading fails.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load(&config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"))?;
        log::info!("Loaded configuration from {}", config_path.display());
        Ok(Self::with_config(config, config_path))
    }

    /// Builds a service around an already loaded configuration.
    #[must_use]
    pub fn with_config(config: Config, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
            session: None,
            store: WorkoutStore::new(),
        }
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        self.config.toast_duration()
    }

    /// Day the create form starts on. Falls back to Monday if the config value is invalid.
    #[must_use]
    pub fn default_day(&self) -> Day {
        self.config.resolve_default_day().unwrap_or_else(|e| {
            log::warn!("{e}");
            Day::Monday
        })
    }

    // --- Session ---

    /// # Errors
    /// Returns `LoginError::InvalidCredentials` when the check fails; any previous
    /// session is left untouched.
    pub fn login(&mut self, username: &str, password: &str) -> Result<&Session, LoginError> {
        let session = Session::login(username, password).map_err(|e| {
            log::warn!("Rejected login attempt");
            e
        })?;
        log::info!("User '{}' logged in", session.username());
        Ok(self.session.insert(session))
    }

    /// Ends the session. Logged workouts stay in the store.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!("User '{}' logged out", session.username());
        }
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    // --- Workouts ---

    /// Validates the form input and appends a new idle workout.
    /// # Errors
    /// Returns `ValidationError` for rejected input; the store is left unchanged.
    pub fn add_workout(&mut self, params: &AddWorkoutParams<'_>) -> Result<WorkoutRecord, ValidationError> {
        match self.store.create(params) {
            Ok(record) => {
                log::info!("Added workout {record}");
                Ok(record)
            }
            Err(e) => {
                log::warn!("Rejected workout input: {e} ({e:?})");
                Err(e)
            }
        }
    }

    /// # Errors
    /// Returns `StoreError::NotFound` if the workout no longer exists.
    pub fn set_status(&mut self, id: WorkoutId, status: Status) -> Result<(), StoreError> {
        self.store.set_status(id, status)?;
        log::info!("Workout {id} marked {status}");
        Ok(())
    }

    /// # Errors
    /// Returns `StoreError::NotFound` if the workout no longer exists.
    pub fn mark_done(&mut self, id: WorkoutId) -> Result<(), StoreError> {
        self.set_status(id, Status::Done)
    }

    /// # Errors
    /// Returns `StoreError::NotFound` if the workout no longer exists.
    pub fn mark_skipped(&mut self, id: WorkoutId) -> Result<(), StoreError> {
        self.set_status(id, Status::Skipped)
    }

    /// Removes a workout. The caller is responsible for asking the user first.
    pub fn delete_workout(&mut self, id: WorkoutId) -> Option<WorkoutRecord> {
        let removed = self.store.delete(id);
        match &removed {
            Some(record) => log::info!("Deleted workout {record}"),
            None => log::debug!("Delete of unknown workout {id} ignored"),
        }
        removed
    }

    #[must_use]
    pub fn get_workout(&self, id: WorkoutId) -> Option<&WorkoutRecord> {
        self.store.get(id)
    }

    #[must_use]
    pub fn workouts(&self) -> &[WorkoutRecord] {
        self.store.all()
    }

    /// Recomputes every view from the current store.
    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::from_records(self.store.all())
    }
}

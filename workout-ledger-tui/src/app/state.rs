//src/app/state.rs
use ratatui::widgets::TableState;
use std::time::Instant;
use workout_ledger_lib::{AppService, Dashboard, Day, Notification, WorkoutId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Log,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focused_field: LoginField,
    pub message: Option<LoginMessage>,
}

/// Result line shown under the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginMessage {
    pub text: String,
    pub success: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focused_field: LoginField::Username,
            message: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddWorkoutField {
    Title,
    Group,
    Sets,
    Reps,
    Weight,
    Day,
    Confirm,
    Cancel,
}

impl AddWorkoutField {
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Group,
            Self::Group => Self::Sets,
            Self::Sets => Self::Reps,
            Self::Reps => Self::Weight,
            Self::Weight => Self::Day,
            Self::Day => Self::Confirm,
            Self::Confirm => Self::Cancel,
            Self::Cancel => Self::Title,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Title => Self::Cancel,
            Self::Group => Self::Title,
            Self::Sets => Self::Group,
            Self::Reps => Self::Sets,
            Self::Weight => Self::Reps,
            Self::Day => Self::Weight,
            Self::Confirm => Self::Day,
            Self::Cancel => Self::Confirm,
        }
    }
}

// Represents the state of active modals
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveModal {
    None,
    Help,
    AddWorkout {
        title_input: String,
        group_input: String, // Empty until a group is picked
        sets_input: String,
        reps_input: String,
        weight_input: String,
        day_input: String,
        focused_field: AddWorkoutField,
        error_message: Option<String>,
    },
    ConfirmDeleteWorkout {
        workout_id: WorkoutId,
        description: String,
    },
}

// Holds the application state
pub struct App {
    pub service: AppService, // The core service from the library
    pub screen: Screen,
    pub should_quit: bool,
    pub active_modal: ActiveModal,
    pub login_form: LoginForm,
    pub notification: Option<Notification>,

    // === Log State ===
    pub dashboard: Dashboard,
    pub selected_day: Day,
    pub log_table_state: TableState,
}

impl App {
    pub fn new(service: AppService) -> Self {
        let selected_day = service.default_day();
        let dashboard = service.dashboard();
        Self {
            service,
            screen: Screen::Login,
            should_quit: false,
            active_modal: ActiveModal::None,
            login_form: LoginForm::default(),
            notification: None,
            dashboard,
            selected_day,
            log_table_state: TableState::default(),
        }
    }

    /// Replaces any visible notification.
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    // Called once per loop iteration before drawing
    pub fn clear_expired_notification(&mut self) {
        let ttl = self.service.toast_duration();
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(Instant::now(), ttl))
        {
            self.notification = None;
        }
    }

    /// Blank add-workout form with the configured day preselected.
    pub fn empty_add_workout_modal(&self) -> ActiveModal {
        ActiveModal::AddWorkout {
            title_input: String::new(),
            group_input: String::new(),
            sets_input: String::new(),
            reps_input: String::new(),
            weight_input: String::new(),
            day_input: self.selected_day.to_string(),
            focused_field: AddWorkoutField::Title,
            error_message: None,
        }
    }
}

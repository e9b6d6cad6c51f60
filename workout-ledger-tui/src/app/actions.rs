// src/app/actions.rs
use super::state::{ActiveModal, App, LoginForm, LoginMessage, Screen};
use super::AppInputError;
use workout_ledger_lib::{notify, Notification, Status, WorkoutId};

pub fn open_add_workout_modal(app: &mut App) {
    app.active_modal = app.empty_add_workout_modal();
}

/// Sets the status of the highlighted row and reports it in the status bar.
pub fn set_selected_status(app: &mut App, status: Status) {
    let result = selected_workout_id(app).and_then(|id| {
        app.service
            .set_status(id, status)
            .map_err(|_| AppInputError::WorkoutGone(id))
    });
    match result {
        Ok(()) => {
            let notification = match status {
                Status::Done => Notification::success(notify::WORKOUT_DONE),
                Status::Skipped => Notification::error(notify::WORKOUT_SKIPPED),
                Status::Idle => Notification::success(format!("Workout marked as {status}")),
            };
            app.notify(notification);
            app.refresh_data();
        }
        Err(e) => app.notify(Notification::error(e.to_string())),
    }
}

pub fn open_delete_confirmation_modal(app: &mut App) {
    let id = match selected_workout_id(app) {
        Ok(id) => id,
        Err(e) => {
            app.notify(Notification::error(e.to_string()));
            return;
        }
    };
    if !app.service.config.confirm_delete {
        delete_workout(app, id);
        return;
    }
    if let Some(record) = app.service.get_workout(id) {
        app.active_modal = ActiveModal::ConfirmDeleteWorkout {
            workout_id: id,
            description: record.to_string(),
        };
    }
}

pub fn delete_workout(app: &mut App, id: WorkoutId) {
    match app.service.delete_workout(id) {
        Some(_) => app.notify(Notification::error(notify::WORKOUT_DELETED)),
        None => app.notify(Notification::error(
            AppInputError::WorkoutGone(id).to_string(),
        )),
    }
    app.refresh_data();
}

pub fn submit_login(app: &mut App) {
    let form = &app.login_form;
    match app.service.login(&form.username, &form.password) {
        Ok(session) => {
            let text = session.welcome_message();
            app.login_form = LoginForm {
                message: Some(LoginMessage {
                    text,
                    success: true,
                }),
                ..LoginForm::default()
            };
            app.notify(Notification::success(notify::LOGIN_SUCCESS));
            app.screen = Screen::Log;
            app.refresh_data();
        }
        Err(e) => {
            app.login_form.message = Some(LoginMessage {
                text: e.to_string(),
                success: false,
            });
            app.notify(Notification::error(e.notification()));
        }
    }
}

/// Drops the session and shows an empty login form. Workouts stay in the store.
pub fn logout(app: &mut App) {
    app.service.logout();
    app.login_form = LoginForm::default();
    app.active_modal = ActiveModal::None;
    app.screen = Screen::Login;
}

fn selected_workout_id(app: &App) -> Result<WorkoutId, AppInputError> {
    app.selected_row()
        .map(|row| row.id)
        .ok_or(AppInputError::SelectionRequired)
}

// src/app/modals.rs
use super::actions::delete_workout;
use super::state::{ActiveModal, AddWorkoutField, App};
use super::AppInputError;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use workout_ledger_lib::{notify, AddWorkoutParams, Day, MuscleGroup, Notification};

/// Steps a select-style field through `options`, with the empty string standing for
/// "nothing picked" before the first option.
fn cycle_choice(current: &str, options: &[String], step: isize) -> String {
    let position = options
        .iter()
        .position(|o| o.eq_ignore_ascii_case(current.trim()))
        .map_or(0, |i| i + 1);
    let len = options.len() as isize + 1;
    let next = (position as isize + step).rem_euclid(len) as usize;
    if next == 0 {
        String::new()
    } else {
        options[next - 1].clone()
    }
}

fn group_options() -> Vec<String> {
    MuscleGroup::ALL.iter().map(ToString::to_string).collect()
}

fn day_options() -> Vec<String> {
    Day::ALL.iter().map(ToString::to_string).collect()
}

// Returns the day the workout landed on so the log can follow it
fn submit_add_workout(app: &mut App) -> Result<Day, AppInputError> {
    let ActiveModal::AddWorkout {
        title_input,
        group_input,
        sets_input,
        reps_input,
        weight_input,
        day_input,
        ..
    } = &app.active_modal
    else {
        return Err(AppInputError::Validation(
            "Internal error: Invalid modal state for add workout".to_string(),
        ));
    };

    let params = AddWorkoutParams {
        title: title_input,
        group: group_input,
        sets: sets_input,
        reps: reps_input,
        weight: weight_input,
        day: day_input,
    };
    app.service
        .add_workout(&params)
        .map(|record| record.day)
        .map_err(|e| AppInputError::Validation(e.to_string()))
}

pub fn handle_add_workout_modal_input(app: &mut App, key: KeyEvent) -> Result<()> {
    let mut should_submit = false;

    if let ActiveModal::AddWorkout {
        ref mut title_input,
        ref mut group_input,
        ref mut sets_input,
        ref mut reps_input,
        ref mut weight_input,
        ref mut day_input,
        ref mut focused_field,
        ref mut error_message,
    } = app.active_modal
    {
        match key.code {
            KeyCode::Esc => {
                app.active_modal = ActiveModal::None;
                return Ok(());
            }
            KeyCode::Tab | KeyCode::Down => *focused_field = focused_field.next(),
            KeyCode::BackTab | KeyCode::Up => *focused_field = focused_field.previous(),
            KeyCode::Enter => match *focused_field {
                AddWorkoutField::Cancel => {
                    app.active_modal = ActiveModal::None;
                    return Ok(());
                }
                _ => should_submit = true,
            },
            KeyCode::Left | KeyCode::Right => {
                let step = if key.code == KeyCode::Left { -1 } else { 1 };
                match *focused_field {
                    AddWorkoutField::Group => {
                        *group_input = cycle_choice(group_input, &group_options(), step);
                    }
                    AddWorkoutField::Day => {
                        *day_input = cycle_choice(day_input, &day_options(), step);
                    }
                    AddWorkoutField::Confirm => *focused_field = AddWorkoutField::Cancel,
                    AddWorkoutField::Cancel => *focused_field = AddWorkoutField::Confirm,
                    _ => {}
                }
            }
            KeyCode::Char(c) => {
                let target = match *focused_field {
                    AddWorkoutField::Title => Some(title_input),
                    AddWorkoutField::Sets => Some(sets_input),
                    AddWorkoutField::Reps => Some(reps_input),
                    AddWorkoutField::Weight => Some(weight_input),
                    _ => None,
                };
                if let Some(input) = target {
                    input.push(c);
                    *error_message = None;
                }
            }
            KeyCode::Backspace => match *focused_field {
                AddWorkoutField::Title => {
                    title_input.pop();
                    *error_message = None;
                }
                AddWorkoutField::Sets => {
                    sets_input.pop();
                    *error_message = None;
                }
                AddWorkoutField::Reps => {
                    reps_input.pop();
                    *error_message = None;
                }
                AddWorkoutField::Weight => {
                    weight_input.pop();
                    *error_message = None;
                }
                // Select fields drop back to nothing picked
                AddWorkoutField::Group => {
                    group_input.clear();
                    *error_message = None;
                }
                AddWorkoutField::Day => {
                    day_input.clear();
                    *error_message = None;
                }
                _ => {}
            },
            _ => {}
        }
    }

    if should_submit {
        match submit_add_workout(app) {
            Ok(day) => {
                // Form starts blank next time
                app.active_modal = ActiveModal::None;
                app.notify(Notification::success(notify::WORKOUT_ADDED));
                app.view_day(day);
                if let Some(last) = app.selected_day_rows().len().checked_sub(1) {
                    app.log_table_state.select(Some(last));
                }
            }
            Err(e) => {
                let message = e.to_string();
                if let ActiveModal::AddWorkout {
                    ref mut error_message,
                    ..
                } = app.active_modal
                {
                    *error_message = Some(message.clone());
                }
                app.notify(Notification::error(message));
            }
        }
    }
    Ok(())
}

pub fn handle_confirm_delete_modal_input(app: &mut App, key: KeyEvent) -> Result<()> {
    if let ActiveModal::ConfirmDeleteWorkout { workout_id, .. } = app.active_modal {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                app.active_modal = ActiveModal::None;
                delete_workout(app, workout_id);
            }
            KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                app.active_modal = ActiveModal::None;
            }
            _ => {} // Everything else waits for an answer
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_cycle_through_blank() {
        let groups = group_options();
        assert_eq!(cycle_choice("", &groups, 1), "Shoulders");
        assert_eq!(cycle_choice("", &groups, -1), "Core");
        assert_eq!(cycle_choice("Core", &groups, 1), "");
        assert_eq!(cycle_choice("chest", &groups, 1), "Back");
    }

    #[test]
    fn unknown_choice_restarts_from_blank() {
        let days = day_options();
        assert_eq!(cycle_choice("Someday", &days, 1), "Monday");
    }
}

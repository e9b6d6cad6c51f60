// src/app/input.rs
use super::{
    actions::{
        logout, open_add_workout_modal, open_delete_confirmation_modal, set_selected_status,
        submit_login,
    },
    data::log_change_day,
    modals::{handle_add_workout_modal_input, handle_confirm_delete_modal_input},
    navigation::{log_table_next, log_table_previous},
    state::{ActiveModal, App, LoginField, Screen},
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use workout_ledger_lib::Status;

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+C quits from anywhere, including text fields
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        if self.screen == Screen::Login {
            self.handle_login_input(key);
            return Ok(());
        }

        // Handle based on active modal first
        if self.active_modal != ActiveModal::None {
            return self.handle_modal_input(key);
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            KeyCode::Char('L') => logout(self),
            _ => self.handle_log_input(key),
        }
        Ok(())
    }

    fn handle_login_input(&mut self, key: KeyEvent) {
        let focused = self.login_form.focused_field;
        let other = match focused {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login_form.focused_field = other;
            }
            KeyCode::Enter if focused == LoginField::Username => {
                self.login_form.focused_field = LoginField::Password;
            }
            KeyCode::Enter => submit_login(self),
            KeyCode::Char(c) => self.login_input_mut(focused).push(c),
            KeyCode::Backspace => {
                self.login_input_mut(focused).pop();
            }
            _ => {}
        }
    }

    fn login_input_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Username => &mut self.login_form.username,
            LoginField::Password => &mut self.login_form.password,
        }
    }

    // --- Modal Input Handling ---
    fn handle_modal_input(&mut self, key: KeyEvent) -> Result<()> {
        match self.active_modal {
            ActiveModal::Help => self.handle_help_modal_input(key),
            ActiveModal::AddWorkout { .. } => handle_add_workout_modal_input(self, key)?,
            ActiveModal::ConfirmDeleteWorkout { .. } => {
                handle_confirm_delete_modal_input(self, key)?;
            }
            ActiveModal::None => {}
        }
        Ok(())
    }

    fn handle_help_modal_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('?') => {
                self.active_modal = ActiveModal::None;
            }
            _ => {} // Ignore other keys in help
        }
    }

    fn handle_log_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => log_table_previous(self),
            KeyCode::Char('j') | KeyCode::Down => log_table_next(self),
            KeyCode::Char('h') | KeyCode::Left => log_change_day(self, -1),
            KeyCode::Char('l') | KeyCode::Right => log_change_day(self, 1),
            KeyCode::Char('a') => open_add_workout_modal(self),
            KeyCode::Char('d') => set_selected_status(self, Status::Done),
            KeyCode::Char('s') => set_selected_status(self, Status::Skipped),
            KeyCode::Char('x') | KeyCode::Delete => open_delete_confirmation_modal(self),
            _ => {}
        }
    }
}

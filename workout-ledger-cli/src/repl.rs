// src/repl.rs
use crate::cli::{split_line, SessionCommand, SessionLine};
use anyhow::Result;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use std::io::{BufRead, Write};
use workout_ledger_lib::{
    notify, views, AddWorkoutParams, AppService, Dashboard, DayTable, MuscleFocus, Notification,
    NotificationKind, StatusSummary, WorkoutId,
};

const PROMPT: &str = "wl> ";
const BAR_WIDTH: usize = 20;

/// What the session loop should do after a line has been handled.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Logout,
    Quit,
}

/// Interactive session: log in, then read commands until `quit` or end of input.
/// Every change is followed by a full redraw of the log and the stats.
pub struct Repl<'a, R, W> {
    service: &'a mut AppService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(service: &'a mut AppService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    pub fn run(&mut self, username: Option<String>) -> Result<()> {
        let mut username = username;
        loop {
            if !self.login(username.take())? {
                return Ok(()); // Input closed at the login prompt
            }
            // Initial render so empty days and zeroed stats show up
            self.print_dashboard()?;
            match self.command_loop()? {
                Flow::Logout => continue,
                Flow::Continue | Flow::Quit => {
                    log::info!("Session ended with {} workouts", self.service.workouts().len());
                    return Ok(());
                }
            }
        }
    }

    /// Prompts until the credentials pass. Returns false if input ends first.
    fn login(&mut self, mut username: Option<String>) -> Result<bool> {
        loop {
            let user = match username.take() {
                Some(u) => u,
                None => match self.prompt("Username: ")? {
                    Some(u) => u,
                    None => return Ok(false),
                },
            };
            let Some(password) = self.prompt("Password: ")? else {
                return Ok(false);
            };
            match self.service.login(&user, &password) {
                Ok(session) => {
                    let welcome = session.welcome_message();
                    writeln!(self.output, "{welcome}")?;
                    self.notify(&Notification::success(notify::LOGIN_SUCCESS))?;
                    return Ok(true);
                }
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    self.notify(&Notification::error(e.notification()))?;
                }
            }
        }
    }

    fn command_loop(&mut self) -> Result<Flow> {
        loop {
            let Some(line) = self.prompt(PROMPT)? else {
                return Ok(Flow::Quit);
            };
            let tokens = split_line(&line);
            if tokens.is_empty() {
                continue;
            }
            match SessionLine::try_parse_from(tokens) {
                Ok(parsed) => match self.handle(parsed.command)? {
                    Flow::Continue => {}
                    flow => return Ok(flow),
                },
                Err(e) => {
                    log::debug!("Rejected session line {line:?}: {}", e.kind());
                    write!(self.output, "{}", e.render())?;
                }
            }
        }
    }

    fn handle(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Add {
                title,
                group,
                sets,
                reps,
                weight,
                day,
            } => {
                let day = day.unwrap_or_else(|| self.service.default_day().to_string());
                let params = AddWorkoutParams {
                    title: &title,
                    group: &group,
                    sets: &sets,
                    reps: &reps,
                    weight: &weight,
                    day: &day,
                };
                match self.service.add_workout(&params) {
                    Ok(record) => {
                        self.print_dashboard()?;
                        writeln!(self.output, "Added workout #{}", record.id)?;
                        self.notify(&Notification::success(notify::WORKOUT_ADDED))?;
                    }
                    Err(e) => self.notify(&Notification::error(e.to_string()))?,
                }
            }
            SessionCommand::Done { id } => {
                self.change_status(id, true)?;
            }
            SessionCommand::Skip { id } => {
                self.change_status(id, false)?;
            }
            SessionCommand::Delete { id, yes } => self.delete(id, yes)?,
            SessionCommand::Log { day } => {
                let dashboard = self.service.dashboard();
                match day {
                    Some(day) => {
                        if let Some(table) = dashboard.day(day) {
                            self.print_day_table(table)?;
                        }
                    }
                    None => {
                        for table in &dashboard.days {
                            self.print_day_table(table)?;
                        }
                    }
                }
            }
            SessionCommand::Stats => {
                let dashboard = self.service.dashboard();
                self.print_stats(&dashboard.muscles, &dashboard.summary)?;
            }
            SessionCommand::Logout => {
                self.service.logout();
                writeln!(self.output, "Logged out.")?;
                return Ok(Flow::Logout);
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn change_status(&mut self, id: WorkoutId, done: bool) -> Result<()> {
        let result = if done {
            self.service.mark_done(id)
        } else {
            self.service.mark_skipped(id)
        };
        match result {
            Ok(()) => {
                self.print_dashboard()?;
                // Skipping is reported in the error style
                let note = if done {
                    Notification::success(notify::WORKOUT_DONE)
                } else {
                    Notification::error(notify::WORKOUT_SKIPPED)
                };
                self.notify(&note)
            }
            Err(e) => self.notify(&Notification::error(e.to_string())),
        }
    }

    fn delete(&mut self, id: WorkoutId, yes: bool) -> Result<()> {
        let Some(record) = self.service.get_workout(id) else {
            return self.notify(&Notification::error(format!("Workout with ID {id} not found.")));
        };
        let description = record.to_string();
        if self.service.config.confirm_delete && !yes {
            writeln!(self.output, "{description}")?;
            let answer = self.prompt(&format!("{} [y/N] ", notify::DELETE_PROMPT))?;
            let confirmed = answer.is_some_and(|a| {
                let a = a.trim();
                a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes")
            });
            if !confirmed {
                return Ok(());
            }
        }
        if self.service.delete_workout(id).is_some() {
            self.print_dashboard()?;
            self.notify(&Notification::error(notify::WORKOUT_DELETED))?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn notify(&mut self, note: &Notification) -> Result<()> {
        match note.kind {
            NotificationKind::Success => writeln!(self.output, "[ok] {}", note.message)?,
            NotificationKind::Error => writeln!(self.output, "[!] {}", note.message)?,
        }
        Ok(())
    }

    fn header_color(&self) -> Color {
        self.service
            .config
            .header_color()
            .map_or(Color::Green, Color::from)
    }

    fn print_dashboard(&mut self) -> Result<()> {
        let dashboard: Dashboard = self.service.dashboard();
        for table in &dashboard.days {
            self.print_day_table(table)?;
        }
        self.print_stats(&dashboard.muscles, &dashboard.summary)
    }

    fn print_day_table(&mut self, day_table: &DayTable) -> Result<()> {
        let header_color = self.header_color();
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                std::iter::once("ID")
                    .chain(views::LOG_COLUMNS)
                    .map(|h| Cell::new(h).fg(header_color)),
            );

        for row in &day_table.rows {
            let mut cells = vec![Cell::new(row.id)];
            cells.extend(row.cells().into_iter().map(Cell::new));
            cells.push(Cell::new(row.status));
            if row.done {
                cells = cells
                    .into_iter()
                    .map(|c| c.fg(Color::DarkGreen).add_attribute(Attribute::Bold))
                    .collect();
            }
            table.add_row(cells);
        }

        writeln!(self.output, "{}", day_table.day)?;
        writeln!(self.output, "{table}")?;
        // Cells cannot span columns; the empty-day message goes under the table
        if let Some(message) = day_table.placeholder() {
            writeln!(self.output, "  {message}")?;
        }
        Ok(())
    }

    fn print_stats(&mut self, muscles: &MuscleFocus, summary: &StatusSummary) -> Result<()> {
        let header_color = self.header_color();

        let mut focus = Table::new();
        focus
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(muscles.iter().map(|(group, _)| Cell::new(group).fg(header_color)))
            .add_row(muscles.iter().map(|(_, count)| Cell::new(count)));
        writeln!(self.output, "Muscle Focus")?;
        writeln!(self.output, "{focus}")?;

        let mut status = Table::new();
        status
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Done").fg(header_color),
                Cell::new("Skipped").fg(header_color),
                Cell::new("Idle").fg(header_color),
                Cell::new("Completion").fg(header_color),
            ])
            .add_row(vec![
                Cell::new(summary.done),
                Cell::new(summary.skipped),
                Cell::new(summary.idle),
                Cell::new(format!(
                    "{} {}%",
                    progress_bar(summary.completion_percent),
                    summary.completion_percent
                )),
            ]);
        writeln!(self.output, "Status Summary")?;
        writeln!(self.output, "{status}")?;
        Ok(())
    }
}

/// Fixed-width bar filled in proportion to the completion percentage.
fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use workout_ledger_lib::{Config, Status};

    fn test_service() -> AppService {
        let config = Config {
            default_day: "Wednesday".to_string(),
            ..Default::default()
        };
        AppService::with_config(config, "test_config.toml".into())
    }

    fn run_script(service: &mut AppService, script: &str) -> String {
        let mut output = Vec::new();
        Repl::new(service, Cursor::new(script.to_string()), &mut output)
            .run(None)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn login_retries_until_valid() {
        let mut service = test_service();
        let out = run_script(&mut service, "ana\nabc\nana\nabcd\nquit\n");
        assert!(out.contains("Enter username + 4+ char password"));
        assert!(out.contains("Login successful. Welcome, ana!"));
        assert!(service.is_logged_in());
    }

    #[test]
    fn add_then_mark_done() {
        let mut service = test_service();
        let out = run_script(
            &mut service,
            "ana\nsecret\nadd -t \"Bench Press\" -g Chest -s 4 -r 8 -w 135 -d Monday\ndone 1\nquit\n",
        );
        assert!(out.contains("[ok] Workout added to log"));
        assert!(out.contains("[ok] Workout marked as done"));
        assert!(out.contains("Bench Press"));
        assert!(out.contains("100%"));
        assert_eq!(service.workouts()[0].status, Status::Done);
    }

    #[test]
    fn rejected_add_reports_and_keeps_store() {
        let mut service = test_service();
        let out = run_script(&mut service, "ana\nsecret\nadd -t Squat -g Legs -s 0 -r 5\n");
        assert!(out.contains("[!] Sets and Reps must be positive"));
        assert!(service.workouts().is_empty());
        assert!(out.contains(views::EMPTY_DAY_MESSAGE));
    }

    #[test]
    fn empty_day_message_prints_as_own_line() {
        let mut service = test_service();
        let out = run_script(&mut service, "ana\nsecret\nlog -d Friday\n");
        let message_line = out
            .lines()
            .find(|l| l.contains(views::EMPTY_DAY_MESSAGE))
            .unwrap();
        assert_eq!(message_line, format!("  {}", views::EMPTY_DAY_MESSAGE));
        assert!(!out.lines().any(|l| l.starts_with('│') && l.contains(views::EMPTY_DAY_MESSAGE)));
    }

    #[test]
    fn add_uses_configured_default_day() {
        let mut service = test_service();
        run_script(&mut service, "ana\nsecret\nadd -t Plank -g Core -s 3 -r 1\n");
        assert_eq!(service.workouts()[0].day, workout_ledger_lib::Day::Wednesday);
        assert_eq!(service.workouts()[0].weight, None);
    }

    #[test]
    fn delete_asks_first() {
        let mut service = test_service();
        run_script(
            &mut service,
            "ana\nsecret\nadd -t Row -g Back -s 3 -r 10\ndelete 1\nn\n",
        );
        assert_eq!(service.workouts().len(), 1);

        let out = run_script(&mut service, "ana\nsecret\ndelete 1\ny\n");
        assert!(out.contains(notify::DELETE_PROMPT));
        assert!(out.contains("[!] Workout deleted"));
        assert!(service.workouts().is_empty());
    }

    #[test]
    fn logout_returns_to_login_prompt() {
        let mut service = test_service();
        let out = run_script(&mut service, "ana\nsecret\nlogout\nben\nsecret\nquit\n");
        assert!(out.contains("Logged out."));
        assert_eq!(service.session().map(|s| s.username()), Some("ben"));
    }

    #[test]
    fn progress_bar_scales() {
        assert_eq!(progress_bar(0), format!("[{}]", ".".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(100), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(50).matches('#').count(), BAR_WIDTH / 2);
    }
}

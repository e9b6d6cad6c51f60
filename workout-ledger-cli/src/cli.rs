// src/cli.rs
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use workout_ledger_lib::{Day, WorkoutId};

#[derive(Parser, Debug)]
#[command(author, version, about = "Log a week of workouts in an interactive session", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive logging session (the default)
    Session {
        /// Username to log in with; the password is still asked for
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Generate shell completion script
    GenerateCompletion {
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show the path to the configuration file
    ConfigPath,
}

/// One line typed inside a session.
#[derive(Parser, Debug)]
#[command(name = "wl", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add a workout entry
    Add {
        /// Workout title (e.g., "Bench Press")
        #[arg(short, long, default_value = "")]
        title: String,
        /// Target muscle group: Shoulders, Chest, Back, Legs, Arms or Core
        #[arg(short, long, default_value = "")]
        group: String,
        /// Number of sets
        #[arg(short, long, default_value = "")]
        sets: String,
        /// Repetitions per set
        #[arg(short, long, default_value = "")]
        reps: String,
        /// Weight or time, leave out if not applicable
        #[arg(short, long, default_value = "")]
        weight: String,
        /// Day of the week; defaults to the configured day
        #[arg(short, long)]
        day: Option<String>,
    },
    /// Mark a workout as done
    Done { id: WorkoutId },
    /// Mark a workout as skipped
    Skip { id: WorkoutId },
    /// Delete a workout
    Delete {
        id: WorkoutId,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the training log
    Log {
        /// Only show one day
        #[arg(short, long)]
        day: Option<Day>,
    },
    /// Show muscle focus and completion summary
    Stats,
    /// Log out and return to the login prompt
    Logout,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

// Function to parse CLI arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

pub fn build_cli_command() -> Command {
    Cli::command()
}

/// Splits a session line into arguments. Single and double quotes group words and are
/// removed; a backslash escapes the next character.
pub fn split_line(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
                in_token = true;
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_quoted_words_together() {
        assert_eq!(
            split_line(r#"add -t "Bench Press" -g Chest"#),
            vec!["add", "-t", "Bench Press", "-g", "Chest"]
        );
        assert_eq!(split_line("add -t 'Lat Pulldown'"), vec!["add", "-t", "Lat Pulldown"]);
        assert_eq!(split_line(r"add -t Farmer\ Walk"), vec!["add", "-t", "Farmer Walk"]);
        assert_eq!(split_line("  stats  "), vec!["stats"]);
        assert_eq!(split_line(r#"add -w """#), vec!["add", "-w", ""]);
        assert!(split_line("   ").is_empty());
    }

    #[test]
    fn session_line_parses_add() {
        let line = SessionLine::try_parse_from(split_line(
            r#"add -t "Bench Press" -g Chest -s 4 -r 8 -w 135 -d Monday"#,
        ))
        .unwrap();
        assert_eq!(
            line.command,
            SessionCommand::Add {
                title: "Bench Press".to_string(),
                group: "Chest".to_string(),
                sets: "4".to_string(),
                reps: "8".to_string(),
                weight: "135".to_string(),
                day: Some("Monday".to_string()),
            }
        );
    }

    #[test]
    fn session_line_parses_actions() {
        let parse = |s: &str| SessionLine::try_parse_from(split_line(s)).map(|l| l.command);
        assert_eq!(parse("done 3").unwrap(), SessionCommand::Done { id: 3 });
        assert_eq!(parse("delete 2 -y").unwrap(), SessionCommand::Delete { id: 2, yes: true });
        assert_eq!(parse("log -d friday").unwrap(), SessionCommand::Log { day: Some(Day::Friday) });
        assert_eq!(parse("exit").unwrap(), SessionCommand::Quit);
        assert!(parse("done x").is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        build_cli_command().debug_assert();
    }
}

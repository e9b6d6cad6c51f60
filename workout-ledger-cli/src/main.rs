//src/main.rs
mod cli;
mod repl;

use anyhow::{Context, Result};
use std::io::{stdin, stdout};
use workout_ledger_lib::{get_config_path_util, AppService};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // --- Check for completion generation request FIRST ---
    let cli_args = cli::parse_args();

    match cli_args.command {
        Some(cli::Commands::GenerateCompletion { shell }) => {
            let mut cmd = cli::build_cli_command();
            let bin_name = cmd.get_name().to_string();

            eprintln!("Generating completion script for {shell}..."); // Print to stderr
            clap_complete::generate(shell, &mut cmd, bin_name, &mut stdout());
            Ok(())
        }
        Some(cli::Commands::ConfigPath) => {
            let path = get_config_path_util().context("Failed to determine config path")?;
            println!("{}", path.display());
            Ok(())
        }
        Some(cli::Commands::Session { username }) => run(username),
        None => run(None),
    }
}

fn run(username: Option<String>) -> Result<()> {
    let mut service =
        AppService::initialize().context("Failed to initialize application service")?;
    println!("Config file: {}", service.get_config_path().display());

    let stdin = stdin();
    repl::Repl::new(&mut service, stdin.lock(), stdout()).run(username)
}

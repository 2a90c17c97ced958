//! `babylog` command-line dashboard.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the local store.
//! - Map subcommands onto view-model operations and print the result.
//! - Print acknowledgements published during each command.

mod config;
mod render;
mod shell;

use babylog_core::db::open_db;
use babylog_core::{
    ack_channel, default_log_level, init_logging, Acknowledgement, Dashboard, LocalStore,
    LogConfig, MemoryLocalStore, SqliteLocalStore,
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use config::{resolve_data_dir, AppConfig};
use log::{info, warn};
use render::{render_ack, render_dashboard, render_food_log, render_profile};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::Receiver;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "babylog")]
#[command(about = "Track a baby profile and a first-foods log", version)]
struct Cli {
    /// Directory holding the database and logs
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Disable file logging
    #[arg(long, global = true)]
    no_log: bool,

    /// Keep everything in memory; nothing is written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Baby profile card
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Food introduction log
    #[command(subcommand)]
    Food(FoodCommand),
    /// Show both cards
    Dashboard,
    /// Interactive session with tab navigation
    Shell,
}

#[derive(Subcommand)]
enum ProfileCommand {
    Show,
    SetName { name: String },
    /// Set the birthdate (YYYY-MM-DD); an empty value clears it
    SetBirthdate { date: String },
    AddMilestone { text: String },
    RemoveMilestone { text: String },
    /// Confirm the profile
    Save,
}

#[derive(Subcommand)]
enum FoodCommand {
    Show,
    Add { name: String },
    Remove { name: String },
    /// List suggestions, or log suggestion number N
    Suggest { number: Option<usize> },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = AppConfig {
        data_dir: resolve_data_dir(cli.data_dir.as_deref()),
        log_level: cli
            .log_level
            .unwrap_or_else(|| default_log_level().to_string()),
        logging_enabled: !cli.no_log && !cli.ephemeral,
        ephemeral: cli.ephemeral,
    };

    if config.logging_enabled {
        start_logging(&config);
    }

    let command = cli.command.unwrap_or(Command::Dashboard);
    let today = Local::now().date_naive();
    let mut stdout = io::stdout().lock();

    if config.ephemeral {
        let store = MemoryLocalStore::new();
        return execute(&store, command, today, &mut stdout);
    }

    let conn = open_db(config.db_path())?;
    let store = SqliteLocalStore::new(&conn);
    execute(&store, command, today, &mut stdout)
}

fn start_logging(config: &AppConfig) {
    let started = LogConfig::new(&config.log_level, config.log_dir())
        .and_then(|log_config| init_logging(&log_config));
    match started {
        Ok(()) => info!(
            "event=cli_start module=cli status=ok ephemeral={}",
            config.ephemeral
        ),
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }
}

fn execute<S, W>(store: S, command: Command, today: NaiveDate, out: &mut W) -> CliResult<()>
where
    S: LocalStore + Clone,
    W: Write,
{
    let (acks, receiver) = ack_channel();
    let mut dashboard = Dashboard::load(store, acks)?;

    match command {
        Command::Profile(command) => {
            run_profile(&mut dashboard, command, today)?;
            print_acks(&receiver, out)?;
            write!(out, "{}", render_profile(&dashboard.profile, today))?;
        }
        Command::Food(command) => {
            let listing_only = matches!(command, FoodCommand::Suggest { number: None });
            run_food(&mut dashboard, command)?;
            print_acks(&receiver, out)?;
            if listing_only {
                for (index, food) in dashboard.food_log.next_suggestions().iter().enumerate() {
                    writeln!(out, "{}. {food}", index + 1)?;
                }
            } else {
                write!(out, "{}", render_food_log(&dashboard.food_log))?;
            }
        }
        Command::Dashboard => write!(out, "{}", render_dashboard(&dashboard, today))?,
        Command::Shell => {
            let stdin = io::stdin();
            shell::run_shell(&mut dashboard, &receiver, today, stdin.lock(), out)?;
        }
    }
    Ok(())
}

fn run_profile<S: LocalStore + Clone>(
    dashboard: &mut Dashboard<S>,
    command: ProfileCommand,
    today: NaiveDate,
) -> CliResult<()> {
    let profile = &mut dashboard.profile;
    match command {
        ProfileCommand::Show => {}
        ProfileCommand::SetName { name } => profile.set_name(name)?,
        ProfileCommand::SetBirthdate { date } => profile.set_birthdate_on(&date, today)?,
        ProfileCommand::AddMilestone { text } => {
            if !profile.add_milestone(&text)? {
                warn!("event=milestone_add module=cli status=skipped reason=blank");
            }
        }
        ProfileCommand::RemoveMilestone { text } => {
            profile.remove_milestone(&text)?;
        }
        ProfileCommand::Save => profile.save(),
    }
    Ok(())
}

fn run_food<S: LocalStore + Clone>(
    dashboard: &mut Dashboard<S>,
    command: FoodCommand,
) -> CliResult<()> {
    let food_log = &mut dashboard.food_log;
    match command {
        FoodCommand::Show | FoodCommand::Suggest { number: None } => {}
        FoodCommand::Add { name } => {
            if !food_log.add_food(&name)? {
                warn!("event=food_add module=cli status=skipped reason=blank");
            }
        }
        FoodCommand::Remove { name } => {
            food_log.remove_food(&name)?;
        }
        FoodCommand::Suggest {
            number: Some(number),
        } => {
            let picked = number
                .checked_sub(1)
                .map(|index| food_log.add_suggestion(index))
                .transpose()?
                .flatten();
            if picked.is_none() {
                return Err(format!("no suggestion number {number}").into());
            }
        }
    }
    Ok(())
}

fn print_acks<W: Write>(receiver: &Receiver<Acknowledgement>, out: &mut W) -> io::Result<()> {
    for ack in receiver.try_iter() {
        writeln!(out, "{}", render_ack(&ack))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{execute, Command, FoodCommand, ProfileCommand};
    use babylog_core::{LocalStore, MemoryLocalStore, FOODS_TRIED_KEY};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn run(store: &MemoryLocalStore, command: Command) -> String {
        let mut out = Vec::new();
        execute(store, command, today(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn commands_persist_between_invocations() {
        let store = MemoryLocalStore::new();
        run(
            &store,
            Command::Profile(ProfileCommand::SetBirthdate {
                date: "2023-01-15".into(),
            }),
        );
        let text = run(
            &store,
            Command::Profile(ProfileCommand::AddMilestone {
                text: "first steps".into(),
            }),
        );

        assert!(text.starts_with("✓ Milestone added"));
        assert!(text.contains("Age:       1y 1m"));
        assert!(text.contains("- first steps"));
    }

    #[test]
    fn suggest_without_number_only_lists() {
        let store = MemoryLocalStore::new();
        let text = run(&store, Command::Food(FoodCommand::Suggest { number: None }));
        assert!(text.starts_with("1. Avocado\n"));
        assert_eq!(
            store.get_item(FOODS_TRIED_KEY).unwrap().as_deref(),
            Some("[]")
        );

        let text = run(
            &store,
            Command::Food(FoodCommand::Suggest { number: Some(3) }),
        );
        assert!(text.contains("- Banana"));
    }

    #[test]
    fn out_of_range_suggestion_is_an_error() {
        let store = MemoryLocalStore::new();
        let mut out = Vec::new();
        let err = execute(
            &store,
            Command::Food(FoodCommand::Suggest { number: Some(0) }),
            today(),
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("no suggestion number 0"));
    }

    #[test]
    fn dashboard_renders_both_cards() {
        let store = MemoryLocalStore::new();
        let text = run(&store, Command::Dashboard);
        assert!(text.contains("Baby Profile"));
        assert!(text.contains("Food Introduction Log"));
    }
}

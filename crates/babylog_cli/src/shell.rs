//! Interactive dashboard session.
//!
//! One line of input is one user event. Every event runs to completion,
//! then pending acknowledgements are printed and the active card is
//! redrawn when state changed.

use crate::render::{render_ack, render_active};
use babylog_core::{Acknowledgement, Dashboard, LocalStore, View};
use chrono::NaiveDate;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::Receiver;

const HELP: &str = "\
Commands:
  tab baby|food       switch the active card
  add <text>          add a milestone (baby) or a food (food)
  remove <text>       remove a milestone or a food by exact text
  name <text>         set the baby's name
  birthdate <date>    set the birthdate (YYYY-MM-DD, empty clears it)
  save                confirm the profile
  suggest <n>         log the n-th suggested food
  show                redraw the active card
  help                show this text
  quit                leave the session";

/// Parsed shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Tab(View),
    Add(String),
    Remove(String),
    Name(String),
    Birthdate(String),
    Save,
    Suggest(usize),
    Show,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// Parses one input line. Command words are case-insensitive; arguments are
/// passed through untrimmed except for the separating space.
pub fn parse_line(line: &str) -> ShellCommand {
    let line = line.trim_end_matches(['\n', '\r']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return ShellCommand::Empty;
    }

    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "tab" => match rest.parse::<View>() {
            Ok(view) => ShellCommand::Tab(view),
            Err(err) => ShellCommand::Invalid(err.to_string()),
        },
        "add" => ShellCommand::Add(rest.to_string()),
        "remove" | "rm" => ShellCommand::Remove(rest.to_string()),
        "name" => ShellCommand::Name(rest.to_string()),
        "birthdate" => ShellCommand::Birthdate(rest.to_string()),
        "save" => ShellCommand::Save,
        "suggest" => match rest.trim().parse::<usize>() {
            Ok(n) if n > 0 => ShellCommand::Suggest(n),
            _ => ShellCommand::Invalid("suggest expects a number from the Next up list".into()),
        },
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => ShellCommand::Invalid(format!("unknown command `{other}`; try `help`")),
    }
}

/// Runs the session until `quit` or end of input.
pub fn run_shell<S, R, W>(
    dashboard: &mut Dashboard<S>,
    acks: &Receiver<Acknowledgement>,
    today: NaiveDate,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    S: LocalStore + Clone,
    R: BufRead,
    W: Write,
{
    info!("event=shell_start module=cli status=ok");
    writeln!(output, "{}", render_active(dashboard, today))?;

    for line in input.lines() {
        let command = parse_line(&line?);
        debug!("event=shell_command module=cli status=parsed");
        if command == ShellCommand::Quit {
            break;
        }

        match apply(dashboard, command, today) {
            Ok(Outcome::Redraw) => {
                print_acks(acks, output)?;
                writeln!(output, "{}", render_active(dashboard, today))?;
            }
            Ok(Outcome::Message(text)) => {
                print_acks(acks, output)?;
                writeln!(output, "{text}")?;
            }
            Ok(Outcome::Nothing) => print_acks(acks, output)?,
            Err(message) => writeln!(output, "error: {message}")?,
        }
    }

    info!("event=shell_stop module=cli status=ok");
    Ok(())
}

enum Outcome {
    Redraw,
    Message(String),
    Nothing,
}

fn apply<S: LocalStore + Clone>(
    dashboard: &mut Dashboard<S>,
    command: ShellCommand,
    today: NaiveDate,
) -> Result<Outcome, String> {
    let active = dashboard.tabs.active();
    let outcome = match command {
        ShellCommand::Tab(view) => {
            dashboard.tabs.switch_to(view);
            Outcome::Redraw
        }
        ShellCommand::Add(text) => {
            let added = match active {
                View::Profile => dashboard.profile.add_milestone(&text),
                View::FoodLog => dashboard.food_log.add_food(&text).map_err(Into::into),
            }
            .map_err(|err| err.to_string())?;
            if added {
                Outcome::Redraw
            } else {
                Outcome::Nothing
            }
        }
        ShellCommand::Remove(text) => {
            let removed = match active {
                View::Profile => dashboard.profile.remove_milestone(&text),
                View::FoodLog => dashboard.food_log.remove_food(&text).map_err(Into::into),
            }
            .map_err(|err| err.to_string())?;
            if removed {
                Outcome::Redraw
            } else {
                Outcome::Nothing
            }
        }
        ShellCommand::Name(name) => {
            dashboard
                .profile
                .set_name(name)
                .map_err(|err| err.to_string())?;
            redraw_if(active == View::Profile)
        }
        ShellCommand::Birthdate(input) => {
            dashboard
                .profile
                .set_birthdate_on(&input, today)
                .map_err(|err| err.to_string())?;
            redraw_if(active == View::Profile)
        }
        ShellCommand::Save => {
            dashboard.profile.save();
            Outcome::Nothing
        }
        ShellCommand::Suggest(n) => {
            match dashboard
                .food_log
                .add_suggestion(n - 1)
                .map_err(|err| err.to_string())?
            {
                Some(_) => redraw_if(active == View::FoodLog),
                None => return Err(format!("no suggestion number {n}")),
            }
        }
        ShellCommand::Show => Outcome::Redraw,
        ShellCommand::Help => Outcome::Message(HELP.to_string()),
        ShellCommand::Empty | ShellCommand::Quit => Outcome::Nothing,
        ShellCommand::Invalid(message) => return Err(message),
    };
    Ok(outcome)
}

fn redraw_if(visible: bool) -> Outcome {
    if visible {
        Outcome::Redraw
    } else {
        Outcome::Nothing
    }
}

fn print_acks<W: Write>(acks: &Receiver<Acknowledgement>, output: &mut W) -> io::Result<()> {
    for ack in acks.try_iter() {
        writeln!(output, "{}", render_ack(&ack))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_line, run_shell, ShellCommand};
    use babylog_core::{ack_channel, Dashboard, MemoryLocalStore, View};
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn parses_commands_and_keeps_arguments() {
        assert_eq!(parse_line("tab food"), ShellCommand::Tab(View::FoodLog));
        assert_eq!(
            parse_line("ADD  sweet potato\n"),
            ShellCommand::Add(" sweet potato".into())
        );
        assert_eq!(parse_line("add"), ShellCommand::Add(String::new()));
        assert_eq!(parse_line("suggest 2"), ShellCommand::Suggest(2));
        assert_eq!(parse_line("   "), ShellCommand::Empty);
        assert!(matches!(parse_line("suggest 0"), ShellCommand::Invalid(_)));
        assert!(matches!(parse_line("tab settings"), ShellCommand::Invalid(_)));
        assert!(matches!(parse_line("dance"), ShellCommand::Invalid(_)));
    }

    #[test]
    fn add_targets_the_active_tab() {
        let store = MemoryLocalStore::new();
        let (acks, receiver) = ack_channel();
        let mut dashboard = Dashboard::load(&store, acks).unwrap();
        let input = Cursor::new("add first smile\ntab food\nadd avocado\nsuggest 1\nquit\nadd never\n");
        let mut output = Vec::new();

        run_shell(&mut dashboard, &receiver, today(), input, &mut output).unwrap();

        assert_eq!(dashboard.profile.milestones(), ["first smile"]);
        assert_eq!(dashboard.food_log.tried(), ["Avocado", "Apple"]);
        assert_eq!(dashboard.tabs.active(), View::FoodLog);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("✓ Milestone added: Small wins matter."));
        assert_eq!(text.matches("✓ Logged").count(), 2);
    }

    #[test]
    fn blank_add_and_errors_do_not_acknowledge() {
        let store = MemoryLocalStore::new();
        let (acks, receiver) = ack_channel();
        let mut dashboard = Dashboard::load(&store, acks).unwrap();
        let input = Cursor::new("add    \nbirthdate 2030-01-01\nbirthdate soon\nsave\n");
        let mut output = Vec::new();

        run_shell(&mut dashboard, &receiver, today(), input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(!text.contains("Milestone added"));
        assert!(text.contains("error: birthdate 2030-01-01 is in the future"));
        assert!(text.contains("error: invalid birthdate `soon`"));
        assert!(text.contains("✓ Saved"));
        assert_eq!(dashboard.profile.birthdate(), None);
    }
}

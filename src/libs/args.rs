//! Command-line interpretation.
//!
//! Raw process arguments are turned into a [`ParsedArgs`]: the selected
//! [`Command`], a [`StatusFilter`] for List/Count and an ordered [`Values`]
//! mapping of typed option values. Malformed required input never produces
//! an error; it clears the `valid` flag so the caller can print usage and exit
//! cleanly.
//!
//! Two inputs are deliberately lenient:
//! - An unparseable due date on `add` means "no due date".
//! - An unparseable due date on `update --due`, including the literal `-`,
//!   means "clear the due date". Omitting `--due` leaves it unchanged.

use super::formatter::parse_date;
use super::task::{StatusFilter, Value, Values, OPT_DESCRIPTION, OPT_DUE, OPT_ID};
use clap::{ArgMatches, Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::ffi::OsString;
use tracing::debug;

/// Every command the tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Count,
    Update,
    Complete,
    Reopen,
    Delete,
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArgs {
    pub command: Command,
    /// Only meaningful for List and Count.
    pub filter: StatusFilter,
    pub values: Values,
    pub valid: bool,
}

impl ParsedArgs {
    fn new(command: Command) -> Self {
        ParsedArgs {
            command,
            filter: StatusFilter::Open,
            values: Values::new(),
            valid: true,
        }
    }

    fn invalid() -> Self {
        ParsedArgs {
            valid: false,
            ..Self::new(Command::Help)
        }
    }

    fn with_filter(mut self, filter: StatusFilter) -> Self {
        self.filter = filter;
        self
    }

    fn with_id(mut self, id: i64) -> Self {
        self.values.insert(OPT_ID, Value::Integer(id));
        self
    }
}

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(disable_help_flag = true, disable_version_flag = true, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    #[command(alias = "a")]
    Add {
        description: String,
        due: Option<String>,
    },
    #[command(alias = "l")]
    List(FilterArgs),
    Count(FilterArgs),
    #[command(alias = "u")]
    Update(UpdateArgs),
    #[command(alias = "c")]
    Complete(IdArgs),
    #[command(alias = "open")]
    Reopen(IdArgs),
    #[command(alias = "del")]
    Delete(IdArgs),
    #[command(alias = "v", short_flag = 'v', long_flag = "version")]
    Version,
    #[command(alias = "h", short_flag = 'h', long_flag = "help")]
    Help,
}

#[derive(Debug, Args)]
#[group(multiple = false)]
struct FilterArgs {
    #[arg(short = 'c', long)]
    completed: bool,
    #[arg(short = 'o', long)]
    overdue: bool,
    #[arg(short = 'a', long)]
    all: bool,
}

impl FilterArgs {
    fn filter(&self) -> StatusFilter {
        if self.completed {
            StatusFilter::Closed
        } else if self.overdue {
            StatusFilter::Overdue
        } else if self.all {
            StatusFilter::All
        } else {
            StatusFilter::Open
        }
    }
}

#[derive(Debug, Args)]
struct IdArgs {
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    id: i64,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    id: i64,
    #[arg(long = "desc", visible_alias = "description", value_name = "TEXT", allow_hyphen_values = true)]
    desc: Option<String>,
    #[arg(long, value_name = "DATE", allow_hyphen_values = true)]
    due: Option<String>,
}

/// Interprets `args` (program name first, as from `std::env::args_os`).
pub fn parse_args<I, T>(args: I, date_format: &str) -> ParsedArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    // A lone empty token counts as no command at all.
    if args.len() == 2 && args[1].is_empty() {
        args.truncate(1);
    }
    // The task id of `update` must directly follow the command.
    let id_token = args.get(2).and_then(|token| token.to_str()).and_then(|token| token.parse::<i64>().ok());

    let matches = match Cli::command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            debug!(kind = ?err.kind(), "command line rejected");
            return ParsedArgs::invalid();
        }
    };
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => {
            debug!(kind = ?err.kind(), "command line rejected");
            return ParsedArgs::invalid();
        }
    };

    let parsed = match cli.command {
        None => ParsedArgs::new(Command::List),
        Some(CliCommand::Add { description, due }) => {
            if description.is_empty() {
                return ParsedArgs::invalid();
            }
            let mut parsed = ParsedArgs::new(Command::Add);
            parsed.values.insert(OPT_DESCRIPTION, Value::String(description));
            if let Some(due) = due {
                match parse_date(&due, date_format) {
                    Some(date) => parsed.values.insert(OPT_DUE, Value::Date(date)),
                    None => debug!(input = %due, "unparseable due date ignored"),
                }
            }
            parsed
        }
        Some(CliCommand::List(filter)) => ParsedArgs::new(Command::List).with_filter(filter.filter()),
        Some(CliCommand::Count(filter)) => ParsedArgs::new(Command::Count).with_filter(filter.filter()),
        Some(CliCommand::Update(update)) => {
            if id_token != Some(update.id) {
                debug!(id = update.id, "task id does not follow the command");
                return ParsedArgs::invalid();
            }
            let Some(parsed) = parse_update(update, matches.subcommand_matches("update"), date_format) else {
                return ParsedArgs::invalid();
            };
            parsed
        }
        Some(CliCommand::Complete(IdArgs { id })) => ParsedArgs::new(Command::Complete).with_id(id),
        Some(CliCommand::Reopen(IdArgs { id })) => ParsedArgs::new(Command::Reopen).with_id(id),
        Some(CliCommand::Delete(IdArgs { id })) => ParsedArgs::new(Command::Delete).with_id(id),
        Some(CliCommand::Version) => ParsedArgs::new(Command::Version),
        Some(CliCommand::Help) => ParsedArgs::new(Command::Help),
    };

    debug!(command = ?parsed.command, filter = ?parsed.filter, values = parsed.values.len(), "command line parsed");
    parsed
}

/// Builds the Update values, ordered as the switches appeared.
fn parse_update(update: UpdateArgs, matches: Option<&ArgMatches>, date_format: &str) -> Option<ParsedArgs> {
    let position = |id: &str| matches.and_then(|m| m.index_of(id)).unwrap_or(usize::MAX);

    let mut changes = Vec::new();
    if let Some(desc) = update.desc {
        if desc.is_empty() {
            return None;
        }
        changes.push((position("desc"), OPT_DESCRIPTION, Value::String(desc)));
    }
    if let Some(due) = update.due {
        let value = match parse_date(&due, date_format) {
            Some(date) => Value::Date(date),
            None => Value::Absent,
        };
        changes.push((position("due"), OPT_DUE, value));
    }
    changes.sort_by_key(|(index, _, _)| *index);

    let mut parsed = ParsedArgs::new(Command::Update).with_id(update.id);
    for (_, name, value) in changes {
        parsed.values.insert(name, value);
    }
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::formatter::DEFAULT_DATE_FORMAT;
    use chrono::NaiveDate;

    fn parse(args: &[&str]) -> ParsedArgs {
        let argv = std::iter::once("todo").chain(args.iter().copied());
        parse_args(argv, DEFAULT_DATE_FORMAT)
    }

    fn date(y: i32, m: u32, d: u32) -> Value {
        Value::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap())
    }

    #[test]
    fn test_no_arguments_lists_open_tasks() {
        let parsed = parse(&[]);
        assert!(parsed.valid);
        assert_eq!(parsed.command, Command::List);
        assert_eq!(parsed.filter, StatusFilter::Open);
        assert_eq!(parsed, parse(&["list"]));
    }

    #[test]
    fn test_empty_first_token_lists_open_tasks() {
        let parsed = parse(&[""]);
        assert!(parsed.valid);
        assert_eq!(parsed.command, Command::List);
    }

    #[test]
    fn test_empty_first_token_before_a_command_is_invalid() {
        assert!(!parse(&["", "add", "Buy milk"]).valid);
        assert!(!parse(&["", "list"]).valid);
    }

    #[test]
    fn test_unknown_command_is_invalid() {
        let parsed = parse(&["frobnicate"]);
        assert!(!parsed.valid);
        assert!(!parse(&["--frobnicate"]).valid);
    }

    #[test]
    fn test_add_with_description_and_due_date() {
        let parsed = parse(&["add", "Buy milk", "2024-08-13"]);
        assert!(parsed.valid);
        assert_eq!(parsed.command, Command::Add);
        let values: Vec<_> = parsed.values.iter().collect();
        assert_eq!(values, vec![(OPT_DESCRIPTION, &Value::String("Buy milk".into())), (OPT_DUE, &date(2024, 8, 13))]);
    }

    #[test]
    fn test_add_alias_without_due_date() {
        let parsed = parse(&["a", "New task"]);
        assert!(parsed.valid);
        assert_eq!(parsed.command, Command::Add);
        assert_eq!(parsed.values.get(OPT_DUE), None);
    }

    #[test]
    fn test_add_with_malformed_due_date_drops_it() {
        let parsed = parse(&["add", "Buy milk", "13/08/2024"]);
        assert!(parsed.valid);
        assert_eq!(parsed.values.get(OPT_DESCRIPTION), Some(&Value::String("Buy milk".into())));
        assert_eq!(parsed.values.get(OPT_DUE), None);
    }

    #[test]
    fn test_add_without_description_is_invalid() {
        assert!(!parse(&["add"]).valid);
        assert!(!parse(&["add", ""]).valid);
    }

    #[test]
    fn test_list_and_count_switches() {
        assert_eq!(parse(&["list", "--completed"]).filter, StatusFilter::Closed);
        assert_eq!(parse(&["l", "-c"]).filter, StatusFilter::Closed);
        assert_eq!(parse(&["l", "-o"]).filter, StatusFilter::Overdue);
        assert_eq!(parse(&["list", "--all"]).filter, StatusFilter::All);
        assert_eq!(parse(&["count"]).filter, StatusFilter::Open);

        let count = parse(&["count", "--overdue"]);
        assert_eq!(count.command, Command::Count);
        assert_eq!(count.filter, StatusFilter::Overdue);
    }

    #[test]
    fn test_conflicting_filters_are_invalid() {
        assert!(!parse(&["list", "-c", "-a"]).valid);
    }

    #[test]
    fn test_id_commands_and_aliases() {
        for (args, command) in [
            (["complete", "3"], Command::Complete),
            (["c", "3"], Command::Complete),
            (["reopen", "3"], Command::Reopen),
            (["open", "3"], Command::Reopen),
            (["delete", "3"], Command::Delete),
            (["del", "3"], Command::Delete),
        ] {
            let parsed = parse(&args);
            assert!(parsed.valid, "{args:?}");
            assert_eq!(parsed.command, command);
            assert_eq!(parsed.values.id(), Some(3));
        }
    }

    #[test]
    fn test_id_must_be_a_positive_integer() {
        assert!(!parse(&["complete"]).valid);
        assert!(!parse(&["complete", "abc"]).valid);
        assert!(!parse(&["delete", "0"]).valid);
        assert!(!parse(&["reopen", "-4"]).valid);
        assert!(!parse(&["update", "x", "--desc", "y"]).valid);
    }

    #[test]
    fn test_update_keeps_switch_order() {
        let parsed = parse(&["update", "7", "--due", "2024-08-13", "--desc", "Call Bob"]);
        assert!(parsed.valid);
        assert_eq!(parsed.command, Command::Update);
        assert_eq!(parsed.values.names().collect::<Vec<_>>(), vec![OPT_ID, OPT_DUE, OPT_DESCRIPTION]);

        let parsed = parse(&["u", "7", "--description", "Call Bob", "--due", "2024-08-13"]);
        assert_eq!(parsed.values.names().collect::<Vec<_>>(), vec![OPT_ID, OPT_DESCRIPTION, OPT_DUE]);
        assert_eq!(parsed.values.get(OPT_DUE), Some(&date(2024, 8, 13)));
    }

    #[test]
    fn test_update_id_must_directly_follow_the_command() {
        assert!(!parse(&["update", "--desc", "x", "7"]).valid);
        assert!(!parse(&["update", "--due", "2024-08-13", "7"]).valid);
        assert!(!parse(&["u", "--desc", "7", "7"]).valid);
        assert!(parse(&["update", "7", "--desc", "x"]).valid);
    }

    #[test]
    fn test_update_description_may_start_with_a_hyphen() {
        let parsed = parse(&["update", "7", "--desc", "-neg"]);
        assert!(parsed.valid);
        assert_eq!(parsed.values.get(OPT_DESCRIPTION), Some(&Value::String("-neg".into())));
    }

    #[test]
    fn test_update_due_dash_clears_the_due_date() {
        let parsed = parse(&["update", "7", "--due", "-"]);
        assert!(parsed.valid);
        assert_eq!(parsed.values.get(OPT_DUE), Some(&Value::Absent));
        assert_eq!(parsed.values.get(OPT_DESCRIPTION), None);

        let parsed = parse(&["update", "7", "--due", "someday"]);
        assert_eq!(parsed.values.get(OPT_DUE), Some(&Value::Absent));
    }

    #[test]
    fn test_update_without_due_switch_leaves_due_unchanged() {
        let parsed = parse(&["update", "7", "--desc", "Call Bob"]);
        assert_eq!(parsed.values.get(OPT_DUE), None);
    }

    #[test]
    fn test_version_and_help_forms() {
        for form in ["version", "v", "--version", "-v"] {
            let parsed = parse(&[form]);
            assert!(parsed.valid, "{form}");
            assert_eq!(parsed.command, Command::Version, "{form}");
        }
        for form in ["help", "h", "--help", "-h"] {
            let parsed = parse(&[form]);
            assert!(parsed.valid, "{form}");
            assert_eq!(parsed.command, Command::Help, "{form}");
        }
    }

    #[test]
    fn test_date_parsing_follows_configured_layout() {
        let argv = ["todo", "add", "Dentist", "13.08.2024"];
        let parsed = parse_args(argv, "%d.%m.%Y");
        assert_eq!(parsed.values.get(OPT_DUE), Some(&date(2024, 8, 13)));

        let parsed = parse_args(["todo", "add", "Dentist", "2024-08-13"], "%d.%m.%Y");
        assert_eq!(parsed.values.get(OPT_DUE), None);
    }
}

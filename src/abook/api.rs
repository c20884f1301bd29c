//! # API Facade
//!
//! [`AbookApi`] is the single entry point for a UI: give it a line of user
//! input, get back a [`CmdResult`] to display. It owns the store and the
//! command table, resolves the line, runs the matching command, and turns
//! every failure into a message, so nothing propagates to the read loop.
//!
//! Failures become text as follows:
//!
//! | Error              | Reply                                     |
//! |--------------------|-------------------------------------------|
//! | `MissingArgument`  | the usage guide ([`USAGE_GUIDE`])         |
//! | `Validation`       | the validator's reason                    |
//! | `NotFound`         | `Contact "<name>" not found.`             |
//! | storage failures   | `Something went wrong: <error>` (logged)  |
//!
//! Generic over [`BookStore`]: `AbookApi<FileStore>` in the binary,
//! `AbookApi<InMemoryStore>` in tests.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::dispatch::{Command, CommandTable};
use crate::error::{AbookError, Result};
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use log::{error, info, warn};

pub const USAGE_GUIDE: &str = "\
Not enough arguments. Usage:
  add/new/+ <name> <phone> [yyyy/mm/dd]
  change <name> <old phone> <new phone>
  phone/number <name>
  del/delete/- <name> <phone>
  remove <name>
  birthday/days <name>
  find/search <text>";

pub const UNKNOWN_COMMAND: &str = "Sorry, unknown command. Try again.";

pub struct AbookApi<S: BookStore> {
    store: S,
    table: CommandTable,
    today: fn() -> NaiveDate,
    page_size: Option<usize>,
}

impl<S: BookStore> AbookApi<S> {
    pub fn new(store: S, table: CommandTable) -> Self {
        Self {
            store,
            table,
            today: local_today,
            page_size: None,
        }
    }

    /// Replace the source of "today" used by birthday countdowns.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Page size applied by `show` when the user gives none.
    pub fn with_page_size(mut self, page_size: Option<usize>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve and run one line of input. Never fails.
    pub fn handle_line(&mut self, line: &str) -> CmdResult {
        let Some(resolved) = self.table.resolve(line) else {
            info!("event=dispatch status=unknown");
            return CmdResult::default().with_message(CmdMessage::error(UNKNOWN_COMMAND));
        };
        info!(
            "event=dispatch command={:?} args={}",
            resolved.command,
            resolved.args.len()
        );

        match self.execute(resolved.command, &resolved.args) {
            Ok(result) => result,
            Err(err) => input_error(resolved.command, err),
        }
    }

    pub fn execute(&mut self, command: Command, args: &[String]) -> Result<CmdResult> {
        let today = (self.today)();
        match command {
            Command::Hello => Ok(commands::greet::hello()),
            Command::Help => Ok(commands::greet::help()),
            Command::Bye => Ok(commands::greet::bye()),
            Command::Add => commands::add::run(&mut self.store, args),
            Command::Change => commands::change::run(&mut self.store, args),
            Command::Phone => commands::phone::run(&self.store, args),
            Command::Delete => commands::delete::run(&mut self.store, args),
            Command::Remove => commands::remove::run(&mut self.store, args),
            Command::Birthday => commands::birthday::run(&self.store, args, today),
            Command::Days => commands::birthday::days(&self.store, args, today),
            Command::Find => commands::find::run(&self.store, args),
            Command::Show => commands::show::run(&self.store, args, self.page_size),
        }
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn input_error(command: Command, err: AbookError) -> CmdResult {
    let message = match err {
        AbookError::MissingArgument { .. } => CmdMessage::warning(USAGE_GUIDE),
        AbookError::Validation(reason) => CmdMessage::warning(reason.to_string()),
        AbookError::NotFound(name) => {
            CmdMessage::warning(format!("Contact \"{}\" not found.", name))
        }
        other => {
            error!("event=command_failed command={:?} error={}", command, other);
            return CmdResult::default()
                .with_message(CmdMessage::error(format!("Something went wrong: {}", other)));
        }
    };
    warn!("event=command_rejected command={:?}", command);
    CmdResult::default().with_message(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn api() -> AbookApi<InMemoryStore> {
        AbookApi::new(InMemoryStore::new(), CommandTable::standard()).with_clock(fixed_today)
    }

    #[test]
    fn end_to_end_contact_lifecycle() {
        let mut api = api();
        api.handle_line("add Alice 1234567890");

        let shown = api.handle_line("phone Alice").text();
        assert!(shown.contains("Alice"));
        assert!(shown.contains("1234567890"));

        api.handle_line("del Alice 1234567890");
        let shown = api.handle_line("phone Alice").text();
        assert!(shown.contains("Alice: []"));

        api.handle_line("remove Alice");
        assert_eq!(api.handle_line("phone Alice").text(), "No contact \"Alice\".");
    }

    #[test]
    fn birthday_commands_use_the_clock() {
        let mut api = api();
        api.handle_line("add Ann 1234567890 1990/05/20");
        assert_eq!(
            api.handle_line("days Ann").text(),
            "Ann has 10 days to birthday."
        );
        assert_eq!(
            api.handle_line("bd Ann").text(),
            "Ann's birthday is 1990-05-20. Birthday is in 10 days."
        );
    }

    #[test]
    fn missing_arguments_show_usage() {
        let mut api = api();
        let result = api.handle_line("add Ann");
        assert_eq!(result.text(), USAGE_GUIDE);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn invalid_values_show_reason() {
        let mut api = api();
        let text = api.handle_line("add Ann 12345").text();
        assert!(text.starts_with("Invalid phone '12345'"));
        let text = api.handle_line("add Ann1 1234567890").text();
        assert!(text.starts_with("Invalid name 'Ann1'"));
        assert!(api.store().read_file().unwrap().is_empty());
    }

    #[test]
    fn del_on_unknown_contact_is_a_terse_failure() {
        let mut api = api();
        assert_eq!(
            api.handle_line("del Ann 1234567890").text(),
            "Contact \"Ann\" not found."
        );
    }

    #[test]
    fn unknown_command_and_bye() {
        let mut api = api();
        let result = api.handle_line("dance");
        assert_eq!(result.text(), UNKNOWN_COMMAND);
        assert!(!result.terminate);
        assert!(api.handle_line("exit").terminate);
    }

    #[test]
    fn show_uses_configured_page_size() {
        let mut api = api().with_page_size(Some(1));
        api.handle_line("add Ann 1111111111");
        api.handle_line("add Bob 2222222222");
        assert_eq!(
            api.handle_line("show").text(),
            "Page 1:\nAnn: [1111111111]\nPage 2:\nBob: [2222222222]\nPage 3:\n"
        );
        assert_eq!(
            api.handle_line("show all 5").text(),
            "Page 1:\nAnn: [1111111111]\nBob: [2222222222]"
        );
    }

    #[test]
    fn find_duplicates_lines_per_matching_term() {
        let mut api = api();
        api.handle_line("add John 1234567890");
        assert_eq!(
            api.handle_line("find John 123").text(),
            "John John: [1234567890]\nJohn John: [1234567890]"
        );
    }
}

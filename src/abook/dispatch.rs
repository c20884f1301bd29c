//! # Command Dispatch
//!
//! Maps a raw input line to a [`Command`] and its positional arguments.
//!
//! The [`CommandTable`] is an ordered list of `(command, aliases)` entries,
//! built once and never modified. Resolution scans it in order and picks the
//! first command with an alias that prefixes the lower-cased input.
//!
//! Arguments are the whitespace-separated words of the *original* input,
//! minus every word exactly equal to one of the chosen command's aliases,
//! wherever it appears. So `add Ann 1234567890` yields `["Ann", "1234567890"]`
//! and `find Ann find` yields `["Ann"]`. The comparison is case-sensitive:
//! `ADD Ann 1234567890` resolves to `add` but keeps `ADD` as an argument.
//!
//! The table order is significant: `hi` shadows anything else starting with
//! "hi", and `birthday` is listed for both [`Command::Birthday`] and
//! [`Command::Days`]; the earlier entry always wins, so only `days` reaches
//! [`Command::Days`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Phone,
    Show,
    Change,
    Bye,
    Help,
    Delete,
    Birthday,
    Remove,
    Days,
    Find,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub command: Command,
    pub args: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: Vec<(Command, Vec<&'static str>)>,
}

impl CommandTable {
    pub fn new(entries: Vec<(Command, Vec<&'static str>)>) -> Self {
        Self { entries }
    }

    /// The assistant's command set, in resolution order.
    pub fn standard() -> Self {
        Self::new(vec![
            (Command::Hello, vec!["hello", "hi"]),
            (Command::Add, vec!["add", "new", "+"]),
            (Command::Phone, vec!["phone", "number"]),
            (Command::Show, vec!["show all", "show"]),
            (Command::Change, vec!["change"]),
            (Command::Bye, vec!["good bye", "bye", ".", "close", "exit"]),
            (Command::Help, vec!["help"]),
            (Command::Delete, vec!["del", "delete", "-"]),
            (Command::Birthday, vec!["birthday", "bdate", "bd"]),
            (Command::Remove, vec!["remove"]),
            (Command::Days, vec!["days", "birthday"]),
            (Command::Find, vec!["find", "search"]),
        ])
    }

    #[cfg(test)]
    fn aliases(&self, command: Command) -> Option<&[&'static str]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == command)
            .map(|(_, aliases)| aliases.as_slice())
    }

    /// `None` when no alias prefixes the input.
    pub fn resolve(&self, input: &str) -> Option<Resolved> {
        let lowered = input.to_lowercase();
        let (command, aliases) = self
            .entries
            .iter()
            .find(|(_, aliases)| aliases.iter().any(|alias| lowered.starts_with(alias)))?;

        let args = input
            .split_whitespace()
            .filter(|word| !aliases.iter().any(|alias| alias == word))
            .map(str::to_string)
            .collect();

        Some(Resolved {
            command: *command,
            args,
        })
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

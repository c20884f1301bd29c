//! # Command Layer
//!
//! One module per user-facing operation. Every `run` function follows the
//! same shape:
//!
//! 1. validate its positional arguments (`helpers::required`),
//! 2. read the whole book from the store,
//! 3. query or mutate it,
//! 4. write it back if it changed,
//! 5. return a [`CmdResult`] with the messages to show.
//!
//! Commands return `Result` and leave the conversion of failures into user
//! text to the API layer.

pub mod add;
pub mod birthday;
pub mod change;
pub mod delete;
pub mod find;
pub mod greet;
pub mod helpers;
pub mod phone;
pub mod remove;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Set by `bye`: the caller should stop reading input.
    pub terminate: bool,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn terminating(mut self) -> Self {
        self.terminate = true;
        self
    }

    /// All message contents, newline-separated.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

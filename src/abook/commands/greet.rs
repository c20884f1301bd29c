use crate::commands::{CmdMessage, CmdResult};

const HELP_LINES: &[&str] = &[
    "help - show this list",
    "hello - greet the assistant",
    "add <name> <phone> [yyyy/mm/dd] - add a contact (aliases: new, +)",
    "change <name> <old phone> <new phone> - replace a phone",
    "phone <name> - show a contact (alias: number)",
    "del <name> <phone> - remove a phone from a contact (aliases: delete, -)",
    "remove <name> - delete a contact",
    "birthday <name> - show the birthday and the days left (aliases: bdate, bd)",
    "days <name> - show the days left to the birthday",
    "find <text>... - search contacts (alias: search)",
    "show all [page size] - list contacts, optionally page by page",
    "bye - quit (aliases: good bye, close, exit, .)",
];

pub fn hello() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(
        "How can I help you?\nIf you want to know what I can do, type help.",
    ))
}

pub fn help() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(HELP_LINES.join("\n")))
}

pub fn bye() -> CmdResult {
    CmdResult::default()
        .with_message(CmdMessage::info("Good bye, see you soon!"))
        .terminating()
}

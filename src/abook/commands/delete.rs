use crate::commands::helpers::required;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use crate::model::{Name, Phone};
use crate::store::BookStore;

const EXPECTED: &str = "a name and a phone";

/// `del <name> <phone>`: removes one phone from a contact.
///
/// Unlike the other commands an unknown contact is an error (`NotFound`).
pub fn run<S: BookStore>(store: &mut S, args: &[String]) -> Result<CmdResult> {
    let name = Name::parse(required(args, 0, "del", EXPECTED)?)?;
    let phone = Phone::parse(required(args, 1, "del", EXPECTED)?)?;

    let mut book = store.read_file()?;
    let record = book
        .get_mut(name.as_str())
        .ok_or_else(|| AbookError::NotFound(name.to_string()))?;
    record.del_phone(&phone);
    store.write_file(&book)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Phone {} removed from {}.",
        phone, name
    ))))
}

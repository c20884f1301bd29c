use crate::commands::helpers::required;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Birthday, Name, Phone, Record};
use crate::store::BookStore;

const EXPECTED: &str = "a name, a phone and optionally a birthday";

/// `add <name> <phone> [birthday]`
pub fn run<S: BookStore>(store: &mut S, args: &[String]) -> Result<CmdResult> {
    let name = Name::parse(required(args, 0, "add", EXPECTED)?)?;
    let phone = Phone::parse(required(args, 1, "add", EXPECTED)?)?;
    let birthday = match args.get(2) {
        Some(raw) => Birthday::parse(raw)?,
        None => Birthday::Absent,
    };

    let mut book = store.read_file()?;
    if book.contains(name.as_str()) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Contact \"{}\" already exists.",
            name
        ))));
    }

    let mut record = Record::new(name.clone(), Some(phone));
    record.add_birthday(birthday);
    book.add_record(record);
    store.write_file(&book)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Contact \"{}\" added successfully.",
        name
    ))))
}

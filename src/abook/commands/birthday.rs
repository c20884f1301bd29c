use crate::commands::helpers::required;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Name, Record};
use crate::store::BookStore;
use chrono::NaiveDate;

/// `birthday <name>`: the stored date and the days left until it.
pub fn run<S: BookStore>(store: &S, args: &[String], today: NaiveDate) -> Result<CmdResult> {
    let name = Name::parse(required(args, 0, "birthday", "a name")?)?;
    let book = store.read_file()?;
    let message = with_birthday(book.get(name.as_str()), &name, today, |record, days| {
        format!(
            "{}'s birthday is {}. Birthday is in {} days.",
            name.title(),
            record.birthday(),
            days
        )
    });
    Ok(CmdResult::default().with_message(message))
}

/// `days <name>`: only the days left until the birthday.
pub fn days<S: BookStore>(store: &S, args: &[String], today: NaiveDate) -> Result<CmdResult> {
    let name = Name::parse(required(args, 0, "days", "a name")?)?;
    let book = store.read_file()?;
    let message = with_birthday(book.get(name.as_str()), &name, today, |_, days| {
        format!("{} has {} days to birthday.", name.title(), days)
    });
    Ok(CmdResult::default().with_message(message))
}

fn with_birthday(
    record: Option<&Record>,
    name: &Name,
    today: NaiveDate,
    render: impl FnOnce(&Record, i64) -> String,
) -> CmdMessage {
    let Some(record) = record else {
        return CmdMessage::warning(format!("Contact {} is not in the notebook.", name));
    };
    match record.days_to_birthday(today) {
        Some(days) => CmdMessage::info(render(record, days)),
        None => CmdMessage::warning(format!("No birthday data available for {}.", name)),
    }
}

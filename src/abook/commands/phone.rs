use crate::commands::helpers::required;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Name;
use crate::store::BookStore;

/// `phone <name>`: shows the contact's record.
pub fn run<S: BookStore>(store: &S, args: &[String]) -> Result<CmdResult> {
    let name = Name::parse(required(args, 0, "phone", "a name")?)?;
    let book = store.read_file()?;

    let message = match book.get(name.as_str()) {
        Some(record) => CmdMessage::info(format!("{:>20} : {}", name.as_str(), record)),
        None => CmdMessage::warning(format!("No contact \"{}\".", name)),
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_record() {
        let store = StoreFixture::new().with_contact("Ann", &["1234567890"]).store;
        let result = run(&store, &["Ann".to_string()]).unwrap();
        assert_eq!(
            result.text(),
            format!("{:>20} : Ann: [1234567890]", "Ann")
        );
    }

    #[test]
    fn unknown_contact() {
        let store = StoreFixture::new().store;
        let result = run(&store, &["Bob".to_string()]).unwrap();
        assert_eq!(result.text(), "No contact \"Bob\".");
    }
}

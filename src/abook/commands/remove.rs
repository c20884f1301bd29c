use crate::commands::helpers::required;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

/// `remove <name>`: deletes the whole contact.
pub fn run<S: BookStore>(store: &mut S, args: &[String]) -> Result<CmdResult> {
    let name = required(args, 0, "remove", "a name")?;

    let mut book = store.read_file()?;
    let Some(removed) = book.del_record(name) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Contact {} is not in the notebook.",
            name
        ))));
    };
    store.write_file(&book)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Contact {} has been deleted.",
        removed.name()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_contact() {
        let mut store = StoreFixture::new()
            .with_contact("Ann", &["1111111111"])
            .with_contact("Bob", &["2222222222"])
            .store;
        let result = run(&mut store, &["Ann".to_string()]).unwrap();
        assert_eq!(result.text(), "Contact Ann has been deleted.");

        let book = store.read_file().unwrap();
        assert!(!book.contains("Ann"));
        assert!(book.contains("Bob"));
    }

    #[test]
    fn unknown_contact_does_not_write() {
        let mut store = StoreFixture::new().store;
        let result = run(&mut store, &["Ann".to_string()]).unwrap();
        assert_eq!(result.text(), "Contact Ann is not in the notebook.");
        assert_eq!(store.writes(), 0);
    }
}

use crate::commands::helpers::required;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Name, Phone};
use crate::store::BookStore;

const EXPECTED: &str = "a name, the old phone and the new phone";

/// `change <name> <old phone> <new phone>`
///
/// An old phone the contact does not have leaves the contact untouched; the
/// reply is the same either way.
pub fn run<S: BookStore>(store: &mut S, args: &[String]) -> Result<CmdResult> {
    let name = Name::parse(required(args, 0, "change", EXPECTED)?)?;
    let old = Phone::parse(required(args, 1, "change", EXPECTED)?)?;
    let new = Phone::parse(required(args, 2, "change", EXPECTED)?)?;

    let mut book = store.read_file()?;
    let Some(record) = book.get_mut(name.as_str()) else {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning(format!("No contact \"{}\".", name))));
    };
    record.change_phone(&old, new);
    store.write_file(&book)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Contact \"{}\" changed successfully.",
        name
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn replaces_phone() {
        let mut store = StoreFixture::new()
            .with_contact("Ann", &["1111111111", "2222222222"])
            .store;
        run(&mut store, &args(&["Ann", "1111111111", "3333333333"])).unwrap();

        let book = store.read_file().unwrap();
        let phones: Vec<&str> = book
            .get("Ann")
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(phones, vec!["2222222222", "3333333333"]);
    }

    #[test]
    fn unknown_old_phone_changes_nothing() {
        let mut store = StoreFixture::new().with_contact("Ann", &["1111111111"]).store;
        let result = run(&mut store, &args(&["Ann", "9999999999", "3333333333"])).unwrap();
        assert!(result.text().contains("changed"));

        let book = store.read_file().unwrap();
        assert_eq!(book.get("Ann").unwrap().phones()[0].as_str(), "1111111111");
        assert_eq!(book.get("Ann").unwrap().phones().len(), 1);
    }

    #[test]
    fn unknown_contact() {
        let mut store = StoreFixture::new().store;
        let result = run(&mut store, &args(&["Ann", "1111111111", "3333333333"])).unwrap();
        assert_eq!(result.text(), "No contact \"Ann\".");
        assert_eq!(store.writes(), 0);
    }
}

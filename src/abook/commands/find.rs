use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

/// `find <text>...`: every contact whose display form contains a term.
pub fn run<S: BookStore>(store: &S, terms: &[String]) -> Result<CmdResult> {
    let book = store.read_file()?;
    let found = book.to_find(terms);

    let message = if found.is_empty() {
        CmdMessage::info("Nothing found")
    } else {
        CmdMessage::info(found.join("\n"))
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_by_name_and_phone_fragment() {
        let store = StoreFixture::new()
            .with_contact("John", &["1234567890"])
            .with_contact("Mary", &["5550001111"])
            .store;

        let result = run(&store, &["John".to_string()]).unwrap();
        assert_eq!(result.text(), "John John: [1234567890]");

        let result = run(&store, &["555".to_string()]).unwrap();
        assert_eq!(result.text(), "Mary Mary: [5550001111]");
    }

    #[test]
    fn nothing_found() {
        let store = StoreFixture::new().with_contact("John", &["1234567890"]).store;
        let result = run(&store, &["Zed".to_string()]).unwrap();
        assert_eq!(result.text(), "Nothing found");
        let result = run(&store, &[]).unwrap();
        assert_eq!(result.text(), "Nothing found");
    }
}

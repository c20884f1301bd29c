use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ValidationError};
use crate::store::BookStore;

/// `show [all] [page size]`
///
/// Without a page size (explicit, or `default_page_size` from the config)
/// the whole book is listed. With one, the listing is split into numbered
/// pages; the last page is printed even when it is empty.
pub fn run<S: BookStore>(
    store: &S,
    args: &[String],
    default_page_size: Option<usize>,
) -> Result<CmdResult> {
    let mut rest = args;
    if let Some((first, tail)) = rest.split_first() {
        if first.eq_ignore_ascii_case("all") {
            rest = tail;
        }
    }
    let page_size = match rest.first() {
        Some(raw) => Some(parse_page_size(raw)?),
        None => default_page_size,
    };

    let book = store.read_file()?;
    if book.is_empty() {
        return Ok(
            CmdResult::default().with_message(CmdMessage::info("The address book is empty."))
        );
    }

    let listing = match page_size {
        None => book.show_all(),
        Some(size) => book
            .iterator(size)
            .enumerate()
            .map(|(i, page)| format!("Page {}:\n{}", i + 1, page))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(CmdResult::default().with_message(CmdMessage::info(listing)))
}

fn parse_page_size(raw: &str) -> Result<usize> {
    match raw.parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ValidationError::InvalidPageSize(raw.to_string()).into()),
    }
}

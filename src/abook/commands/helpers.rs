use crate::error::{AbookError, Result};

/// The positional argument at `index`, or `MissingArgument` naming what
/// `command` expects.
pub fn required<'a>(
    args: &'a [String],
    index: usize,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(AbookError::MissingArgument { command, expected })
}

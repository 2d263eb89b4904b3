//! Shared helpers for command handlers.

use std::io::Read;

use crate::error::CliError;

/// Take the inline argument, or read stdin to EOF when it is absent.
///
/// A single trailing newline (and carriage return) is stripped so that
/// `echo text | onetap ...` behaves like passing the text inline.
pub fn input_or_stdin(arg: Option<String>) -> Result<String, CliError> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_argument_wins_over_stdin() {
        let got = input_or_stdin(Some("hello".into()));
        assert_eq!(got.ok().as_deref(), Some("hello"));
    }
}

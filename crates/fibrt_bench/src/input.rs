use std::{
    io::{self, BufRead, Write},
    num::ParseIntError,
};

use fibrt_consts::consts;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("no term count was entered")]
    #[diagnostic(
        code(fibrt::input::missing),
        help("enter a non-negative whole number, for example `30`")
    )]
    Missing,

    #[error("'{token}' is not a valid term count")]
    #[diagnostic(
        code(fibrt::input::not_a_number),
        help("enter a non-negative whole number, for example `30`")
    )]
    NotANumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to read the term count")]
    Read(#[source] io::Error),

    #[error("failed to write the prompt")]
    Prompt(#[source] io::Error),
}

/// Asks for the highest term to benchmark and reads the answer from `input`.
pub fn prompt_term_count<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<u32, InputError> {
    write!(out, "{}", consts::TERM_COUNT_PROMPT)
        .and_then(|_| out.flush())
        .map_err(InputError::Prompt)?;
    read_term_count(input)
}

/// Reads the next whitespace delimited token from `input` and parses it as a term
/// count. Blank lines are skipped, anything after the first token is ignored.
pub fn read_term_count<R: BufRead>(mut input: R) -> Result<u32, InputError> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = input.read_line(&mut line).map_err(InputError::Read)?;
        if read == 0 {
            return Err(InputError::Missing);
        }
        if let Some(token) = line.split_whitespace().next() {
            return parse_term_count(token);
        }
    }
}

/// Parses a single token as a term count.
pub fn parse_term_count(token: &str) -> Result<u32, InputError> {
    let term_count = token
        .parse::<u32>()
        .map_err(|source| InputError::NotANumber {
            token: token.to_string(),
            source,
        })?;
    tracing::debug!("read term count {term_count}");
    Ok(term_count)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("5\n", 5)]
    #[case::no_newline("30", 30)]
    #[case::surrounding_whitespace("  \t12  \n", 12)]
    #[case::blank_lines_first("\n\n   \n7\n", 7)]
    #[case::trailing_tokens("3 9 27\n", 3)]
    #[case::zero("0\n", 0)]
    fn test_read_term_count(#[case] input: &str, #[case] expected: u32) {
        let term_count = read_term_count(Cursor::new(input)).unwrap();
        assert_eq!(term_count, expected);
    }

    #[rstest]
    #[case::word("abc\n")]
    #[case::negative("-3\n")]
    #[case::fraction("2.5\n")]
    #[case::too_large("4294967296\n")]
    fn test_invalid_term_count(#[case] input: &str) {
        let err = read_term_count(Cursor::new(input)).unwrap_err();
        assert!(
            matches!(err, InputError::NotANumber { ref token, .. } if token == input.trim()),
            "unexpected error: {err:?}"
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::only_whitespace("\n  \n\t\n")]
    fn test_missing_term_count(#[case] input: &str) {
        let err = read_term_count(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, InputError::Missing), "unexpected error: {err:?}");
    }

    #[test]
    fn test_prompt_is_written_without_newline() {
        let mut out = Vec::new();
        let term_count = prompt_term_count(Cursor::new("8\n"), &mut out).unwrap();
        assert_eq!(term_count, 8);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter the number of terms of the Fibonacci sequence: "
        );
    }

    #[test]
    fn test_error_message_names_token() {
        let err = parse_term_count("ten").unwrap_err();
        assert_eq!(err.to_string(), "'ten' is not a valid term count");
    }
}

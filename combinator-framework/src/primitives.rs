//! Leaf parsers operating directly on text.

use crate::outcome::Outcome;
use crate::parser::{Parse, Parser};
use common_framework::TextSlice;

/// The characters skipped by [`skip_whitespace`].
pub const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// Matches a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    ch: char,
}

impl Parse<()> for Literal {
    fn parse(&self, input: TextSlice) -> Outcome<()> {
        match input.chars().next() {
            Some(ch) if ch == self.ch => Outcome::success((), input.skip(ch.len_utf8())),
            _ => Outcome::failure(format!("'{}'", self.ch), input),
        }
    }
}

/// Matches an exact string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    text: String,
}

impl Parse<()> for Keyword {
    fn parse(&self, input: TextSlice) -> Outcome<()> {
        if input.starts_with(self.text.as_str()) {
            Outcome::success((), input.skip(self.text.len()))
        } else {
            Outcome::failure(format!("'{}'", self.text), input)
        }
    }
}

/// Skips a run of [`WHITESPACE`]. Never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipWhitespace;

impl Parse<()> for SkipWhitespace {
    fn parse(&self, input: TextSlice) -> Outcome<()> {
        let skipped = input.len() - input.trim_start_matches(&WHITESPACE[..]).len();
        Outcome::success((), input.skip(skipped))
    }
}

/// Reads an unsigned decimal integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer;

impl Parse<u64> for Integer {
    fn parse(&self, input: TextSlice) -> Outcome<u64> {
        let digits = input
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return Outcome::failure("an integer", input);
        }

        let value = input.as_bytes()[..digits].iter().try_fold(0u64, |value, b| {
            value
                .checked_mul(10)
                .and_then(|value| value.checked_add(u64::from(b - b'0')))
        });

        match value {
            Some(value) => Outcome::success(value, input.skip(digits)),
            None => Outcome::failure("an integer", input),
        }
    }
}

/// Succeeds only when no input is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfInput;

impl Parse<()> for EndOfInput {
    fn parse(&self, input: TextSlice) -> Outcome<()> {
        if input.is_empty() {
            Outcome::success((), input)
        } else {
            Outcome::failure("end of input", input)
        }
    }
}

/// A parser matching the single character `ch`.
pub fn literal(ch: char) -> Parser<()> {
    Parser::new(Literal { ch })
}

/// A parser matching `text` exactly.
pub fn string(text: impl Into<String>) -> Parser<()> {
    Parser::new(Keyword { text: text.into() })
}

/// A parser skipping leading spaces, tabs, newlines and carriage returns.
pub fn skip_whitespace() -> Parser<()> {
    Parser::new(SkipWhitespace)
}

/// A parser reading the longest leading run of ASCII digits as a base 10 number.
pub fn integer() -> Parser<u64> {
    Parser::new(Integer)
}

/// A parser that only succeeds at the end of the input.
pub fn end_of_input() -> Parser<()> {
    Parser::new(EndOfInput)
}

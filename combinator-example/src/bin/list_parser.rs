//! Nested list parser example.
//!
//! Parses bracketed lists whose elements are integers, length-prefixed strings
//! (`3:abc`) or further lists, e.g. `[1, [2, 5:hello], []]`.
//!
//! ```text
//! value  = string | integer | list
//! string = integer ':' <that many characters>
//! list   = '[' ']' | '[' items ']'
//! items  = value (',' items)?
//! ```
//!
//! The string rule uses `bind`: the parser for the text depends on the length
//! read before it.

use combinator_framework::{
    integer, literal, skip_whitespace, ForwardRef, Outcome, Parser, TextSlice,
};
use std::fmt;
use std::process::ExitCode;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(u64),
    Text(String),
    List(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Value {
    fn sum(&self) -> u64 {
        match self {
            Value::Integer(n) => *n,
            Value::Text(_) => 0,
            Value::List(items) => items.iter().map(Value::sum).sum(),
        }
    }
}

fn token(ch: char) -> Parser<()> {
    skip_whitespace().before(literal(ch))
}

fn pure<T: Clone + 'static>(value: T) -> Parser<T> {
    Parser::new(move |input: TextSlice| Outcome::success(value.clone(), input))
}

/// Exactly `count` characters.
fn take(count: usize) -> Parser<String> {
    Parser::new(move |input: TextSlice| {
        let end = input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .nth(count);
        match end {
            Some(end) => Outcome::success(input[..end].to_string(), input.skip(end)),
            None => Outcome::failure(format!("{count} characters"), input),
        }
    })
}

fn value() -> Parser<Value> {
    let value: ForwardRef<Value> = ForwardRef::new();
    let items: ForwardRef<Vec<Value>> = ForwardRef::new();

    let number = skip_whitespace().before(integer());
    let text = number
        .and_then(literal(':'))
        .bind(|len, _| take(len as usize))
        .transform(Value::Text);

    let rest = token(',')
        .before(items.as_parser())
        .or_else(pure(Vec::new()));
    items.bind(
        value
            .as_parser()
            .product(rest)
            .transform(|(first, rest)| {
                let mut all = Vec::with_capacity(rest.len() + 1);
                all.push(first);
                all.extend(rest);
                all
            }),
    );

    let empty = token('[').before(token(']')).constant(Vec::new());
    let filled = token('[').before(items.as_parser()).and_then(token(']'));
    let list = empty.or_else(filled).transform(Value::List);

    value.bind(text.or_else(number.transform(Value::Integer)).or_else(list));
    value.as_parser().and_then(skip_whitespace())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<String> = if args.is_empty() {
        ["[1, 2, 3]", "[1, [2, 5:hello], []]", "[[[42]]]", "[3:a,b, 7]", "[1, 2"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        args
    };

    let parser = value();
    let mut failed = false;

    for input in &inputs {
        println!("Input: {input}");
        match parser.parse_complete(input.as_str()) {
            Outcome::Success { value, .. } => {
                println!("  value: {value}");
                println!("  sum:   {}", value.sum());
            }
            Outcome::Failure { expected, actual } => {
                eprintln!("  error: expected {expected}, found {actual:?}");
                failed = true;
            }
        }
        println!();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Option<Value> {
        let (parsed, _) = value().parse_complete(input).into_result().ok()?;
        Some(parsed)
    }

    #[test]
    fn test_flat_list() {
        assert_eq!(
            parse("[1, 2, 3]"),
            Some(Value::List(vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::Integer(3)
            ]))
        );
    }

    #[test]
    fn test_empty_and_nested() {
        assert_eq!(parse("[]"), Some(Value::List(vec![])));
        assert_eq!(parse("[[[42]]]").map(|v| v.sum()), Some(42));
    }

    #[test]
    fn test_length_prefixed_text() {
        // the comma inside the text is part of the string, not a separator
        assert_eq!(
            parse("[3:a,b, 7]"),
            Some(Value::List(vec![
                Value::Text("a,b".to_string()),
                Value::Integer(7)
            ]))
        );
    }

    #[test]
    fn test_text_too_short() {
        // the text alternative fails, so the integer alternative reads just "9"
        assert_eq!(
            value().parse("9:abc"),
            Outcome::success(Value::Integer(9), ":abc")
        );
        assert_eq!(
            value().parse_complete("9:abc"),
            Outcome::failure("end of input", ":abc")
        );
    }

    #[test]
    fn test_unclosed_list() {
        let outcome = value().parse("[1, 2");
        assert!(outcome.is_failure());
        assert_eq!(outcome.actual().map(|a| a.to_string()), Some(String::new()));
    }
}

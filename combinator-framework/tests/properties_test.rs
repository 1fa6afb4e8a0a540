//! Invariants checked over a grid of parsers and inputs.

use combinator_framework::{
    integer, literal, skip_whitespace, string, ForwardRef, Outcome, Parser, TextSlice,
};

const INPUTS: &[&str] = &[
    "",
    "a",
    "aaa",
    "baa",
    "ab",
    "a123b",
    "123foo",
    "foo bar",
    "  \t\n42",
    "[[1]]",
    "[1",
    "é→a",
    "18446744073709551616",
];

fn unit_parsers() -> Vec<(&'static str, Parser<()>)> {
    vec![
        ("literal", literal('a')),
        ("string", string("foo")),
        ("whitespace", skip_whitespace()),
        ("product", literal('a').product(literal('a')).constant(())),
        ("choice", literal('b').or_else(string("foo"))),
        ("before", literal('a').before(literal('b'))),
        ("and_then", string("a").and_then(integer())),
        ("integer", integer().constant(())),
    ]
}

fn nested() -> Parser<u64> {
    let forward = ForwardRef::new();
    let grouped = literal('[')
        .before(forward.as_parser())
        .and_then(literal(']'));
    forward.bind(integer().or_else(grouped));
    forward.as_parser()
}

#[test]
fn test_remaining_is_suffix_of_input() {
    let mut parsers = unit_parsers();
    parsers.push(("nested", nested().constant(())));
    for (name, parser) in &parsers {
        for input in INPUTS {
            let text = TextSlice::from(*input);
            if let Outcome::Success { remaining, .. } = parser.parse(text.clone()) {
                assert!(
                    remaining.is_suffix_of(&text),
                    "{name} on {input:?} left {remaining:?}"
                );
                assert!(remaining.len() <= text.len());
            }
        }
    }
}

#[test]
fn test_deterministic() {
    let mut parsers = unit_parsers();
    parsers.push(("nested", nested().constant(())));
    for (name, parser) in &parsers {
        for input in INPUTS {
            assert_eq!(parser.parse(*input), parser.parse(*input), "{name} on {input:?}");
        }
    }
}

#[test]
fn test_transform_keeps_failures() {
    for (name, parser) in unit_parsers() {
        let mapped = parser.transform(|()| 99);
        for input in INPUTS {
            if let Outcome::Failure { expected, actual } = parser.parse(*input) {
                assert_eq!(
                    mapped.parse(*input),
                    Outcome::Failure { expected, actual },
                    "{name} on {input:?}"
                );
            }
        }
    }
}

#[test]
fn test_or_else_matches_standalone_alternative() {
    let alternative = literal('b').or_else(skip_whitespace().before(integer().constant(())));
    for (name, parser) in unit_parsers() {
        let choice = parser.or_else(alternative.clone());
        for input in INPUTS {
            if parser.parse(*input).is_failure() {
                let standalone = alternative.parse(*input);
                let combined = choice.parse(*input);
                match (&standalone, &combined) {
                    (Outcome::Success { .. }, _) => {
                        assert_eq!(combined, standalone, "{name} on {input:?}")
                    }
                    (
                        Outcome::Failure { actual, .. },
                        Outcome::Failure {
                            actual: combined_actual,
                            ..
                        },
                    ) => assert_eq!(actual, combined_actual, "{name} on {input:?}"),
                    _ => panic!("{name} on {input:?}: {combined:?} vs {standalone:?}"),
                }
            }
        }
    }
}

#[test]
fn test_before_and_then_consume_the_same() {
    for (first_name, first) in unit_parsers() {
        for (second_name, second) in unit_parsers() {
            let before = first.before(second.clone());
            let and_then = first.and_then(second);
            for input in INPUTS {
                let b = before.parse(*input);
                let a = and_then.parse(*input);
                assert_eq!(
                    b.remaining(),
                    a.remaining(),
                    "{first_name}/{second_name} on {input:?}"
                );
                assert_eq!(b.actual(), a.actual());
                assert_eq!(b.expected(), a.expected());
            }
        }
    }
}

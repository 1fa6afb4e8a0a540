use combinator_framework::{end_of_input, integer, literal, skip_whitespace, string, Outcome};

#[test]
fn test_literal() {
    let a = literal('a');
    assert_eq!(a.parse("a"), Outcome::success((), ""));
    assert_eq!(a.parse("aaa"), Outcome::success((), "aa"));
    assert_eq!(a.parse("baa"), Outcome::failure("'a'", "baa"));
}

#[test]
fn test_literal_empty_input() {
    assert_eq!(literal('a').parse(""), Outcome::failure("'a'", ""));
}

#[test]
fn test_literal_multibyte() {
    let arrow = literal('→');
    assert_eq!(arrow.parse("→x"), Outcome::success((), "x"));
    assert_eq!(arrow.parse("x→"), Outcome::failure("'→'", "x→"));
}

#[test]
fn test_string() {
    let foo = string("foo");
    assert_eq!(foo.parse("foo"), Outcome::success((), ""));
    assert_eq!(foo.parse("foobar"), Outcome::success((), "bar"));
    assert_eq!(foo.parse("barfoo"), Outcome::failure("'foo'", "barfoo"));
}

#[test]
fn test_string_prefix_of_expected() {
    assert_eq!(string("foo").parse("fo"), Outcome::failure("'foo'", "fo"));
}

#[test]
fn test_empty_string_always_matches() {
    assert_eq!(string("").parse("abc"), Outcome::success((), "abc"));
}

#[test]
fn test_skip_whitespace() {
    let ws = skip_whitespace();
    assert_eq!(ws.parse(" \t\r\n x "), Outcome::success((), "x "));
    assert_eq!(ws.parse("x"), Outcome::success((), "x"));
    assert_eq!(ws.parse(""), Outcome::success((), ""));
}

#[test]
fn test_skip_whitespace_exact_set() {
    // form feed and vertical tab are not skipped
    assert_eq!(
        skip_whitespace().parse("\u{000C}x"),
        Outcome::success((), "\u{000C}x")
    );
    assert_eq!(
        skip_whitespace().parse("\u{000B}x"),
        Outcome::success((), "\u{000B}x")
    );
}

#[test]
fn test_integer() {
    let int = integer();
    assert_eq!(int.parse("123"), Outcome::success(123, ""));
    assert_eq!(int.parse("123foo"), Outcome::success(123, "foo"));
    assert_eq!(int.parse("bar"), Outcome::failure("an integer", "bar"));
    assert_eq!(int.parse(""), Outcome::failure("an integer", ""));
}

#[test]
fn test_integer_leading_zeros() {
    assert_eq!(integer().parse("007x"), Outcome::success(7, "x"));
}

#[test]
fn test_integer_no_sign() {
    assert_eq!(integer().parse("-5"), Outcome::failure("an integer", "-5"));
}

#[test]
fn test_integer_max() {
    assert_eq!(
        integer().parse("18446744073709551615!"),
        Outcome::success(u64::MAX, "!")
    );
}

#[test]
fn test_integer_overflow() {
    assert_eq!(
        integer().parse("18446744073709551616"),
        Outcome::failure("an integer", "18446744073709551616")
    );
}

#[test]
fn test_end_of_input() {
    assert_eq!(end_of_input().parse(""), Outcome::success((), ""));
    assert_eq!(
        end_of_input().parse("x"),
        Outcome::failure("end of input", "x")
    );
}

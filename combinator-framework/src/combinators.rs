//! Sequencing, choice and projection combinators for [`Parser`].

use crate::outcome::Outcome;
use crate::parser::Parser;
use common_framework::TextSlice;

impl<T: 'static> Parser<T> {
    /// Runs this parser, then `next` on the text it left behind, pairing both
    /// values.
    ///
    /// The first failure is returned as is. If `next` fails, its failure points
    /// at the text after this parser's match, not at the original input.
    pub fn product<U>(&self, next: Parser<U>) -> Parser<(T, U)>
    where
        U: 'static,
    {
        let first = self.clone();
        Parser::new(move |input: TextSlice| {
            first
                .parse(input)
                .bind(|v1, r1| next.parse(r1).transform(|v2| (v1, v2)))
        })
    }

    /// Ordered choice: runs this parser, and only if it fails runs
    /// `alternative` on the same original input.
    ///
    /// When both fail the expectations are joined with `or`, and the failing
    /// text is taken from `alternative`.
    pub fn or_else(&self, alternative: Parser<T>) -> Parser<T> {
        let first = self.clone();
        Parser::new(move |input: TextSlice| match first.parse(input.clone()) {
            success @ Outcome::Success { .. } => success,
            Outcome::Failure { expected, .. } => alternative
                .parse(input)
                .map_expected(|other| format!("{expected} or {other}")),
        })
    }

    /// Runs this parser then `next`, keeping only `next`'s value.
    pub fn before<U>(&self, next: Parser<U>) -> Parser<U>
    where
        U: 'static,
    {
        self.product(next).transform(|(_, second)| second)
    }

    /// Runs this parser then `next`, keeping only this parser's value.
    pub fn and_then<U>(&self, next: Parser<U>) -> Parser<T>
    where
        U: 'static,
    {
        self.product(next).transform(|(first, _)| first)
    }
}

use crate::outcome::Outcome;
use common_framework::TextSlice;
use derive_where::derive_where;
use std::rc::Rc;

/// A parsing rule: consumes a prefix of the input and reports an [`Outcome`].
///
/// Implementations must be deterministic, invoking a rule twice on equal input
/// yields equal outcomes. Ordered choice relies on this when it retries the
/// same input against another branch.
pub trait Parse<T> {
    /// Attempts to parse a `T` from the start of `input`.
    fn parse(&self, input: TextSlice) -> Outcome<T>;
}

impl<T, F> Parse<T> for F
where
    F: Fn(TextSlice) -> Outcome<T>,
{
    fn parse(&self, input: TextSlice) -> Outcome<T> {
        self(input)
    }
}

/// A composable parser producing values of type `T`.
///
/// Cloning is cheap: clones share the same underlying rule.
#[derive_where(Clone)]
pub struct Parser<T> {
    rule: Rc<dyn Parse<T>>,
}

impl<T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

impl<T: 'static> Parser<T> {
    /// Wraps a parsing rule.
    pub fn new<P>(rule: P) -> Self
    where
        P: Parse<T> + 'static,
    {
        Self {
            rule: Rc::new(rule),
        }
    }

    /// Runs the parser on `input`.
    pub fn parse(&self, input: impl Into<TextSlice>) -> Outcome<T> {
        self.rule.parse(input.into())
    }

    /// Runs the parser and requires that it consumes all of `input`.
    pub fn parse_complete(&self, input: impl Into<TextSlice>) -> Outcome<T> {
        self.parse(input).bind(|value, remaining| {
            if remaining.is_empty() {
                Outcome::success(value, remaining)
            } else {
                Outcome::failure("end of input", remaining)
            }
        })
    }

    /// Applies `f` to the value of every successful parse.
    pub fn transform<U, F>(&self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let inner = self.clone();
        Parser::new(move |input: TextSlice| inner.parse(input).transform(&f))
    }

    /// Chooses the next parser from the value and remaining text of this one,
    /// then runs it on that remaining text.
    ///
    /// ```
    /// # use combinator_framework::{integer, Outcome, Parser, TextSlice};
    /// // read a length, then exactly that many characters
    /// let counted = integer().bind(|len, _| {
    ///     let len = len as usize;
    ///     Parser::new(move |input: TextSlice| {
    ///         match input.char_indices().nth(len) {
    ///             Some((end, _)) => Outcome::success(input[..end].to_string(), input.skip(end)),
    ///             None if input.chars().count() == len => {
    ///                 Outcome::success(input.to_string(), input.skip(input.len()))
    ///             }
    ///             None => Outcome::failure(format!("{len} characters"), input),
    ///         }
    ///     })
    /// });
    /// assert_eq!(counted.parse("3abcde"), Outcome::success("abc".to_string(), "de"));
    /// ```
    pub fn bind<U, F>(&self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T, TextSlice) -> Parser<U> + 'static,
    {
        let inner = self.clone();
        Parser::new(move |input: TextSlice| {
            inner
                .parse(input)
                .bind(|value, remaining| f(value, remaining.clone()).parse(remaining))
        })
    }

    /// Replaces the value of every successful parse with `value`.
    pub fn constant<U>(&self, value: U) -> Parser<U>
    where
        U: Clone + 'static,
    {
        self.transform(move |_| value.clone())
    }
}

//! Forward references, the mechanism for recursive grammars.
//!
//! A [`ForwardRef`] is created unbound, handed out through
//! [`ForwardRef::as_parser`] while the grammar is being assembled, and bound
//! once the grammar is complete:
//!
//! ```
//! # use combinator_framework::{integer, literal, ForwardRef, Outcome};
//! // nested = integer | '(' nested ')'
//! let nested = ForwardRef::new();
//! let grouped = literal('(')
//!     .before(nested.as_parser())
//!     .and_then(literal(')'));
//! nested.bind(integer().or_else(grouped));
//!
//! assert_eq!(nested.as_parser().parse("((7))!"), Outcome::success(7, "!"));
//! ```
//!
//! The bound grammar refers back to its own cell, so it lives for as long as
//! the program does.

use crate::outcome::Outcome;
use crate::parser::Parser;
use common_framework::TextSlice;
use derive_where::derive_where;
use std::cell::OnceCell;
use std::rc::Rc;
use thiserror::Error;

/// Misuse of a [`ForwardRef`]. These indicate a malformed grammar, not bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ForwardRefError {
    #[error("forward reference used before it was bound")]
    Unbound,
    #[error("forward reference bound more than once")]
    AlreadyBound,
}

/// A bind-once cell standing in for a parser that does not exist yet.
#[derive_where(Clone)]
pub struct ForwardRef<T> {
    cell: Rc<OnceCell<Parser<T>>>,
}

impl<T: 'static> std::fmt::Debug for ForwardRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForwardRef")
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<T: 'static> Default for ForwardRef<T> {
    fn default() -> Self {
        Self {
            cell: Rc::new(OnceCell::new()),
        }
    }
}

impl<T: 'static> ForwardRef<T> {
    /// Creates an unbound reference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a parser has been installed by [`ForwardRef::bind`]
    /// or [`ForwardRef::try_bind`].
    pub fn is_bound(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Installs `parser` as the target of this reference.
    ///
    /// # Panics
    /// If the reference is already bound.
    pub fn bind(&self, parser: Parser<T>) {
        if let Err(err) = self.try_bind(parser) {
            panic!("{err}");
        }
    }

    /// Installs `parser`, or reports [`ForwardRefError::AlreadyBound`].
    pub fn try_bind(&self, parser: Parser<T>) -> Result<(), ForwardRefError> {
        self.cell
            .set(parser)
            .map_err(|_| ForwardRefError::AlreadyBound)
    }

    /// A parser delegating to whatever this reference is bound to.
    ///
    /// Running the returned parser before [`ForwardRef::bind`] panics.
    pub fn as_parser(&self) -> Parser<T> {
        let cell = Rc::clone(&self.cell);
        Parser::new(move |input: TextSlice| -> Outcome<T> {
            match cell.get() {
                Some(parser) => parser.parse(input),
                None => panic!("{}", ForwardRefError::Unbound),
            }
        })
    }
}

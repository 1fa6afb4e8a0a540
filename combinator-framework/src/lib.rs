//! A parser combinator framework.
//!
//! Parsers are built from a handful of primitives ([`literal`], [`string`],
//! [`skip_whitespace`], [`integer`]) and combined with [`Parser::transform`],
//! [`Parser::bind`], [`Parser::product`], [`Parser::or_else`],
//! [`Parser::before`] and [`Parser::and_then`]. Recursive grammars are closed
//! with a [`ForwardRef`].
//!
//! ```
//! use combinator_framework::{integer, literal, skip_whitespace, Outcome};
//!
//! let number = skip_whitespace().before(integer());
//! let sum = number
//!     .and_then(skip_whitespace().before(literal('+')))
//!     .product(number.clone())
//!     .transform(|(a, b)| a + b);
//!
//! assert_eq!(sum.parse(" 1 + 2;"), Outcome::success(3, ";"));
//! ```

pub mod combinators;
pub mod forward;
pub mod outcome;
pub mod parser;
pub mod primitives;

pub use common_framework::TextSlice;
pub use forward::{ForwardRef, ForwardRefError};
pub use outcome::{Outcome, ParseError};
pub use parser::{Parse, Parser};
pub use primitives::{end_of_input, integer, literal, skip_whitespace, string};

//! Minimal parser example.
//!
//! Demonstrates the combinator-framework workflow:
//! 1. Define AST nodes.
//! 2. Build parsers from primitives.
//! 3. Combine them with `product`, `or_else`, `before` and `transform`.
//! 4. Run the root parser over input text and match on the outcome.
//!
//! The example parses simple arithmetic expressions with two numbers and one operator.

use combinator_framework::{integer, literal, skip_whitespace, Outcome, Parser};

// ============================================================================
// AST definition
// ============================================================================

/// Simple expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum SimpleExpr {
    /// Numeric literal.
    Number(u64),
    /// Binary operation (lhs, operator, rhs).
    Binary {
        op: Op,
        left: Box<SimpleExpr>,
        right: Box<SimpleExpr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
}

// ============================================================================
// Parsers
// ============================================================================

fn number() -> Parser<SimpleExpr> {
    skip_whitespace().before(integer()).transform(SimpleExpr::Number)
}

fn operator() -> Parser<Op> {
    let add = literal('+').constant(Op::Add);
    let subtract = literal('-').constant(Op::Subtract);
    skip_whitespace().before(add.or_else(subtract))
}

/// `number op number`
fn binary() -> Parser<SimpleExpr> {
    number()
        .product(operator())
        .product(number())
        .transform(|((left, op), right)| SimpleExpr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
}

fn main() {
    let parser = binary();

    for input in ["1 + 2", "10 - 3", "4 * 5", "7 +"] {
        println!("Input: {input}");
        match parser.parse(input) {
            Outcome::Success { value, remaining } => {
                println!("AST: {:#?}", value);
                if !remaining.is_empty() {
                    println!("Unparsed: {remaining:?}");
                }
            }
            Outcome::Failure { expected, actual } => {
                println!("Parse failed: expected {expected}, found {actual:?}");
            }
        }
        println!();
    }
}

//! Calculator parser example.
//!
//! Builds a recursive arithmetic grammar from combinator-framework primitives,
//! parses each expression into an AST and evaluates it.
//!
//! Supported syntax:
//! - unsigned integers
//! - binary operators: `+`, `-`, `*`, `/` (left associative) and `^` (right associative)
//! - unary minus: `-5`
//! - parentheses: `(1 + 2) * 3`
//!
//! ```text
//! expr   = term   (('+' | '-') term)*
//! term   = unary  (('*' | '/') unary)*
//! unary  = '-' unary | power
//! power  = atom ('^' unary)?
//! atom   = integer | '(' expr ')'
//! ```
//!
//! Expressions are taken from the command line, or a built-in list when none
//! are given. The process exits non-zero if any expression fails to parse.

use combinator_framework::{
    integer, literal, skip_whitespace, ForwardRef, Outcome, ParseError, Parser, TextSlice,
};
use std::process::ExitCode;

// ============================================================================
// AST definition
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(u64),
    Negate(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
            BinaryOp::Power => '^',
        }
    }
}

impl Expr {
    fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn eval(&self) -> f64 {
        match self {
            Expr::Number(n) => *n as f64,
            Expr::Negate(inner) => -inner.eval(),
            Expr::Binary { op, left, right } => {
                let (l, r) = (left.eval(), right.eval());
                match op {
                    BinaryOp::Add => l + r,
                    BinaryOp::Subtract => l - r,
                    BinaryOp::Multiply => l * r,
                    BinaryOp::Divide => l / r,
                    BinaryOp::Power => l.powf(r),
                }
            }
        }
    }
}

// ============================================================================
// Grammar
// ============================================================================

fn token(ch: char) -> Parser<()> {
    skip_whitespace().before(literal(ch))
}

fn pure<T: Clone + 'static>(value: T) -> Parser<T> {
    Parser::new(move |input: TextSlice| Outcome::success(value.clone(), input))
}

fn operator(ops: &[BinaryOp]) -> Parser<BinaryOp> {
    ops.iter()
        .map(|&op| token(op.symbol()).constant(op))
        .reduce(|first, second| first.or_else(second))
        .unwrap_or_else(|| {
            Parser::new(|input: TextSlice| -> Outcome<BinaryOp> {
                Outcome::failure("an operator", input)
            })
        })
}

/// Continues a left associative chain from `acc`, or stops with `acc`.
fn chain_tail(acc: Expr, op: Parser<BinaryOp>, operand: Parser<Expr>) -> Parser<Expr> {
    let (next_op, next_operand) = (op.clone(), operand.clone());
    let lhs = acc.clone();
    op.product(operand)
        .bind(move |(kind, rhs), _| {
            chain_tail(
                Expr::binary(kind, lhs.clone(), rhs),
                next_op.clone(),
                next_operand.clone(),
            )
        })
        .or_else(pure(acc))
}

/// `operand (op operand)*`, folded to the left.
fn chain_left(operand: Parser<Expr>, op: Parser<BinaryOp>) -> Parser<Expr> {
    let tail_operand = operand.clone();
    operand.bind(move |first, _| chain_tail(first, op.clone(), tail_operand.clone()))
}

fn expression() -> Parser<Expr> {
    let expr: ForwardRef<Expr> = ForwardRef::new();
    let unary: ForwardRef<Expr> = ForwardRef::new();

    let number = skip_whitespace().before(integer()).transform(Expr::Number);
    let group = token('(').before(expr.as_parser()).and_then(token(')'));
    let atom = number.or_else(group);

    let exponent = token('^').before(unary.as_parser());
    let power = atom.bind(move |base, _| {
        let fallback = pure(base.clone());
        exponent
            .transform(move |exp| Expr::binary(BinaryOp::Power, base.clone(), exp))
            .or_else(fallback)
    });

    let negate = token('-')
        .before(unary.as_parser())
        .transform(|inner| Expr::Negate(Box::new(inner)));
    unary.bind(negate.or_else(power));

    let term = chain_left(
        unary.as_parser(),
        operator(&[BinaryOp::Multiply, BinaryOp::Divide]),
    );
    expr.bind(chain_left(
        term,
        operator(&[BinaryOp::Add, BinaryOp::Subtract]),
    ));

    expr.as_parser().and_then(skip_whitespace())
}

// ============================================================================
// Driver
// ============================================================================

fn print_ast_tree(expr: &Expr, depth: usize) {
    let indent = "  ".repeat(depth);
    match expr {
        Expr::Number(n) => println!("{indent}{n}"),
        Expr::Negate(inner) => {
            println!("{indent}neg");
            print_ast_tree(inner, depth + 1);
        }
        Expr::Binary { op, left, right } => {
            println!("{indent}{}", op.symbol());
            print_ast_tree(left, depth + 1);
            print_ast_tree(right, depth + 1);
        }
    }
}

fn run(parser: &Parser<Expr>, input: &str) -> Result<Expr, ParseError> {
    let (ast, _) = parser.parse_complete(input).into_result()?;
    Ok(ast)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<String> = if args.is_empty() {
        [
            "3 + 4",
            "3 + 4 * 5",
            "(1 + 2) * 3",
            "2 ^ 3 ^ 2",
            "10 / 4 - 1",
            "-5 + -(2 * 3)",
            "(1 + ",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else {
        args
    };

    let parser = expression();
    let mut failed = false;

    for input in &inputs {
        println!("Expression: {input}");
        match run(&parser, input) {
            Ok(ast) => {
                print_ast_tree(&ast, 1);
                println!("  = {}", ast.eval());
            }
            Err(err) => {
                eprintln!("  error: {err}");
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

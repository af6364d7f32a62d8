//! Arithmetic expressions over natural numbers and symbol references.
//!
//! ```text
//! expression := term "+" expression | term
//! term       := atom "*" term | atom
//! atom       := "(" expression ")" | natural-number | symbol-reference
//! ```
//!
//! Precedence comes only from the layering of these rules. Each rule is
//! right-recursive: `Choice` commits to its first success, so a left-recursive
//! rule would never terminate. Recursive references go through `lazy`, which
//! builds the referenced rule when it is parsed instead of when it is built.

use super::super::{core::*, prelude::*};
use super::{literal::parse_natural_number, symbol::parse_symbol_reference};
use crate::symbol_table::SymbolTable;

pub fn parse_expression(table: &SymbolTable) -> BoxedParser<'_, i64> {
    boxed(choice(
        bind(
            tuple2(
                terminated(parse_term(table), token(character('+'))),
                lazy(move || parse_expression(table)),
            ),
            |(left, right): (i64, i64)| from_option(left.checked_add(right)),
        ),
        parse_term(table),
    ))
}

// multiplicative level
pub fn parse_term(table: &SymbolTable) -> BoxedParser<'_, i64> {
    boxed(choice(
        bind(
            tuple2(
                terminated(parse_atom(table), token(character('*'))),
                lazy(move || parse_term(table)),
            ),
            |(left, right): (i64, i64)| from_option(left.checked_mul(right)),
        ),
        parse_atom(table),
    ))
}

/// Parenthesized expressions come first so that `(` is never offered to the
/// number or symbol alternatives.
pub fn parse_atom(table: &SymbolTable) -> BoxedParser<'_, i64> {
    boxed(choice(
        choice(parse_parenthesized(table), token(parse_natural_number())),
        token(parse_symbol_reference(table)),
    ))
}

fn parse_parenthesized(table: &SymbolTable) -> impl Parser<i64> + '_ {
    delimited(
        token(character('(')),
        lazy(move || parse_expression(table)),
        token(character(')')),
    )
}

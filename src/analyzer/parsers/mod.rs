//! Grammar rules for arithmetic over natural numbers and registers.

pub mod expression;
pub mod literal;
pub mod symbol;

pub use expression::{parse_atom, parse_expression, parse_term};
pub use literal::{parse_digit, parse_natural_number};
pub use symbol::parse_symbol_reference;

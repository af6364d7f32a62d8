//! # regcalc: a parser-combinator calculator
//!
//! regcalc evaluates arithmetic over natural numbers and named registers with
//! a small backtracking parser-combinator engine.
//!
//! ## Layers
//!
//! - Combinator engine ([`analyzer::core`], [`analyzer::combinators`],
//!   [`analyzer::prelude`]): parsers are immutable values mapping the remaining
//!   input to an outcome set. An empty set is the only failure.
//! - Grammar ([`analyzer::parsers`]): `expression` over `term` over `atom`.
//!   Precedence comes from this layering alone.
//! - Registers ([`symbol_table`]): the lookup injected into the grammar.
//! - Evaluation ([`evaluator`]), configuration ([`config`]) and caller-facing
//!   errors ([`error`]).
//!
//! ```text
//! Source Text → Analyzer (combinators + grammar) → Outcomes → Evaluator → Value
//! ```
//!
//! ## Example
//!
//! ```
//! use regcalc::{Evaluator, SymbolTable};
//!
//! let evaluator = Evaluator::new(SymbolTable::default_registers());
//! let evaluation = evaluator.evaluate("(ONE + TWO) * 4").unwrap();
//! assert_eq!(evaluation.value, 12);
//! assert!(evaluation.is_complete());
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod symbol_table;

// Re-exports
pub use config::{CalcConfig, EvaluationMode};
pub use error::*;
pub use evaluator::{Evaluation, Evaluator};
pub use symbol_table::SymbolTable;

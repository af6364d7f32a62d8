//! # Analyzer (Parser) System
//!
//! The analyzer turns text into values with a parser-combinator engine and a
//! small arithmetic grammar built on top of it.
//!
//! ## Core Components
//!
//! * **Parser Trait**: the parsing-function contract ([`core`])
//! * **Combinators**: small composable parsers ([`combinators`], [`prelude`])
//! * **Grammar**: arithmetic rules built only from the public combinators
//!   ([`parsers`])
//!
//! ## Failure
//!
//! A parser that does not match returns an empty [`Outcomes`] set. There is no
//! error value inside the engine; `choice`, `many` and `many1` recover by
//! observing the empty set.
//!
//! ## Usage Example
//!
//! ```
//! use regcalc::analyzer::prelude::*;
//! use regcalc::analyzer::Parser;
//!
//! let digits = many1(satisfies(|c: char| c.is_ascii_digit()));
//! let outcome = token(digits).parse(" 42 rest").into_first();
//! assert_eq!(outcome, Some((vec!['4', '2'], "rest")));
//! ```

pub mod combinators;
pub mod core;
pub mod parsers;
pub mod prelude;

pub use core::BoxedParser;
pub use core::Outcome;
pub use core::Outcomes;
pub use core::Parser;

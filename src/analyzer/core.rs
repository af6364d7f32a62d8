//! # Core Parser Definitions
//!
//! This module defines the parsing-function abstraction every combinator and
//! grammar rule is built on.
//!
//! A parser takes the remaining input text and returns an outcome set. An empty
//! set is the only way a parser fails: there is no error value, no position and
//! no message. `Choice` and the repetition combinators depend on observing
//! failure as "zero outcomes".

use std::fmt;

/// Parser trait defines the core parsing interface.
///
/// # Type Parameters
///
/// * `O` - The output value type
pub trait Parser<O> {
    /// Attempts to parse a prefix of `input`.
    ///
    /// Every remainder in the returned outcome set is a suffix of `input`.
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, O>;
}

/// One way a parser matched: the produced value and the unconsumed text.
pub type Outcome<'a, O> = (O, &'a str);

/// The set of outcomes produced by a single parser invocation.
///
/// The interface is set-shaped (`len`, `iter`, `IntoIterator`) so callers never
/// assume a singleton, but every combinator in this crate commits to its first
/// successful alternative, so the set holds at most one outcome.
#[derive(Clone, PartialEq, Eq)]
pub struct Outcomes<'a, O> {
    outcome: Option<Outcome<'a, O>>,
}

impl<'a, O> Outcomes<'a, O> {
    /// The empty outcome set.
    pub fn none() -> Self {
        Self { outcome: None }
    }

    /// An outcome set holding exactly one outcome.
    pub fn single(value: O, remainder: &'a str) -> Self {
        Self {
            outcome: Some((value, remainder)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn len(&self) -> usize {
        usize::from(self.outcome.is_some())
    }

    pub fn first(&self) -> Option<&Outcome<'a, O>> {
        self.outcome.as_ref()
    }

    pub fn into_first(self) -> Option<Outcome<'a, O>> {
        self.outcome
    }

    pub fn iter(&self) -> std::option::Iter<'_, Outcome<'a, O>> {
        self.outcome.iter()
    }

    /// Applies `f` to every produced value, keeping the remainders.
    pub fn map_values<B, F>(self, f: F) -> Outcomes<'a, B>
    where
        F: FnOnce(O) -> B,
    {
        Outcomes {
            outcome: self.outcome.map(|(value, rest)| (f(value), rest)),
        }
    }
}

impl<'a, O> From<Option<Outcome<'a, O>>> for Outcomes<'a, O> {
    fn from(outcome: Option<Outcome<'a, O>>) -> Self {
        Self { outcome }
    }
}

impl<'a, O> IntoIterator for Outcomes<'a, O> {
    type Item = Outcome<'a, O>;
    type IntoIter = std::option::IntoIter<Outcome<'a, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcome.into_iter()
    }
}

impl<O: fmt::Debug> fmt::Debug for Outcomes<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.outcome.iter()).finish()
    }
}

impl<O, P> Parser<O> for Box<P>
where
    P: Parser<O> + ?Sized,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, O> {
        (**self).parse(input)
    }
}

impl<O, P> Parser<O> for &P
where
    P: Parser<O> + ?Sized,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, O> {
        (**self).parse(input)
    }
}

/// A type-erased parser, used to break recursive grammar types.
pub type BoxedParser<'p, O> = Box<dyn Parser<O> + 'p>;

//! # Parser Combinators
//!
//! This module implements the combinators that form the building blocks of the
//! parsing engine. Each combinator is a small immutable struct implementing
//! [`Parser`]; the free functions in [`super::prelude`] construct them.
//!
//! ## Combinator Types
//!
//! * **Atomic**: `Item`, `Satisfy`, `Unit`, `Failure`, `Literal`
//! * **Sequential**: `Bind`, `Tuple2`, `Preceded`, `Terminated`, `Delimited`
//! * **Alternative**: `Choice`, `Optional`
//! * **Repetition**: `Many`, `Many1`
//! * **Transformation**: `Map`
//! * **Lexical**: `Token`
//! * **Recursion**: `Lazy`

use super::core::{Outcomes, Parser};
use super::prelude::whitespaces;
use std::marker::PhantomData;

/// Item: Consumes exactly one character
///
/// Fails only when the input is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct Item;

impl Parser<char> for Item {
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, char> {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) => Outcomes::single(c, chars.as_str()),
            None => Outcomes::none(),
        }
    }
}

/// Satisfy: Consumes one character if it satisfies a predicate
///
/// The character is read through [`Item`]. When the predicate rejects it the
/// outcome set is empty, so the caller still holds the original input.
#[derive(Clone)]
pub struct Satisfy<F> {
    /// The character classification to apply
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> Parser<char> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, char> {
        match Item.parse(input).into_first() {
            Some((c, rest)) if (self.predicate)(c) => Outcomes::single(c, rest),
            _ => Outcomes::none(),
        }
    }
}

/// Unit: Always succeeds with a fixed value, consuming nothing
#[derive(Clone)]
pub struct Unit<O> {
    value: O,
}

impl<O> Unit<O> {
    pub fn new(value: O) -> Self {
        Self { value }
    }
}

impl<O: Clone> Parser<O> for Unit<O> {
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, O> {
        Outcomes::single(self.value.clone(), input)
    }
}

/// Failure: Always yields the empty outcome set
///
/// The absorbing element for sequencing.
pub struct Failure<O> {
    _phantom: PhantomData<O>,
}

impl<O> Failure<O> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<O> Default for Failure<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Clone for Failure<O> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<O> Parser<O> for Failure<O> {
    fn parse<'a>(&self, _input: &'a str) -> Outcomes<'a, O> {
        Outcomes::none()
    }
}

/// Literal: Matches a fixed string character by character
///
/// The empty literal succeeds without consuming input.
#[derive(Clone, Debug)]
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Parser<String> for Literal {
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, String> {
        let mut rest = input;
        for expected in self.text.chars() {
            match Satisfy::new(|c: char| c == expected).parse(rest).into_first() {
                Some((_, next)) => rest = next,
                None => return Outcomes::none(),
            }
        }
        Outcomes::single(self.text.clone(), rest)
    }
}

/// Choice: Ordered, committed choice between two parsers
///
/// `second` runs against the original input only when `first` produced no
/// outcome. A success of `first` is never reconsidered, even if whatever runs
/// afterwards fails.
#[derive(Clone)]
pub struct Choice<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Choice<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Self { first, second }
    }
}

impl<O, P1, P2> Parser<O> for Choice<P1, P2>
where
    P1: Parser<O>,
    P2: Parser<O>,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, O> {
        let outcomes = self.first.parse(input);
        if outcomes.is_empty() {
            self.second.parse(input)
        } else {
            outcomes
        }
    }
}

/// Bind: Sequences a parser with a continuation chosen from its value
///
/// This is the composition primitive: failure of `parser` short-circuits, and
/// on success the parser returned by `continuation(value)` runs on the
/// remaining input.
#[derive(Clone)]
pub struct Bind<P, F, A> {
    parser: P,
    continuation: F,
    _phantom: PhantomData<A>,
}

impl<P, F, A> Bind<P, F, A> {
    pub fn new(parser: P, continuation: F) -> Self {
        Self {
            parser,
            continuation,
            _phantom: PhantomData,
        }
    }
}

impl<A, B, P, F, Q> Parser<B> for Bind<P, F, A>
where
    P: Parser<A>,
    F: Fn(A) -> Q,
    Q: Parser<B>,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, B> {
        match self.parser.parse(input).into_first() {
            Some((value, rest)) => (self.continuation)(value).parse(rest),
            None => Outcomes::none(),
        }
    }
}

/// Map: Transforms the output of a parser using a function
///
/// Behaves like `Bind` followed by `Unit`, without building the intermediate
/// parser.
#[derive(Clone)]
pub struct Map<P, F, A> {
    /// The parser whose output will be transformed
    parser: P,
    /// The transformation function
    f: F,
    _phantom: PhantomData<A>,
}

impl<P, F, A> Map<P, F, A> {
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<A, B, P, F> Parser<B> for Map<P, F, A>
where
    P: Parser<A>,
    F: Fn(A) -> B,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, B> {
        self.parser.parse(input).map_values(|value| (self.f)(value))
    }
}

/// Keeps applying `parser` from `input`, pushing values, until it fails or
/// stops consuming. Returns the remaining input.
fn repeat<'a, O, P>(parser: &P, values: &mut Vec<O>, mut input: &'a str) -> &'a str
where
    P: Parser<O>,
{
    while let Some((value, rest)) = parser.parse(input).into_first() {
        values.push(value);
        if rest.len() == input.len() {
            // no progress; repeating would loop forever
            break;
        }
        input = rest;
    }
    input
}

/// Many: Applies a parser zero or more times
///
/// Always succeeds, with an empty vector and no consumption when the inner
/// parser fails straight away.
#[derive(Clone)]
pub struct Many<P> {
    /// The parser to apply repeatedly
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<O, P> Parser<Vec<O>> for Many<P>
where
    P: Parser<O>,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, Vec<O>> {
        let mut values = Vec::new();
        let rest = repeat(&self.parser, &mut values, input);
        tracing::trace!(
            target: "parser::many",
            items_collected = values.len(),
            consumed = input.len() - rest.len(),
            "Many parser stopped collection"
        );
        Outcomes::single(values, rest)
    }
}

/// Many1: Applies a parser one or more times
///
/// Fails exactly when the first application fails.
#[derive(Clone)]
pub struct Many1<P> {
    /// The parser to apply repeatedly
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<O, P> Parser<Vec<O>> for Many1<P>
where
    P: Parser<O>,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, Vec<O>> {
        let Some((first, rest)) = self.parser.parse(input).into_first() else {
            return Outcomes::none();
        };
        let mut values = vec![first];
        let rest = if rest.len() == input.len() {
            rest
        } else {
            repeat(&self.parser, &mut values, rest)
        };
        tracing::trace!(
            target: "parser::many1",
            items_collected = values.len(),
            consumed = input.len() - rest.len(),
            "Many1 parser stopped collection"
        );
        Outcomes::single(values, rest)
    }
}

/// Optional: Applies a parser zero or one time
#[derive(Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<O, P> Parser<Option<O>> for Optional<P>
where
    P: Parser<O>,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, Option<O>> {
        match self.parser.parse(input).into_first() {
            Some((value, rest)) => Outcomes::single(Some(value), rest),
            None => Outcomes::single(None, input),
        }
    }
}

#[derive(Clone)]
pub struct Tuple2<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Tuple2<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self { parser1, parser2 }
    }
}

impl<O1, O2, P1, P2> Parser<(O1, O2)> for Tuple2<P1, P2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, (O1, O2)> {
        let Some((first, rest)) = self.parser1.parse(input).into_first() else {
            return Outcomes::none();
        };
        self.parser2.parse(rest).map_values(|second| (first, second))
    }
}

/// Preceded: Runs two parsers in sequence and keeps the second value
#[derive(Clone)]
pub struct Preceded<P1, P2, O1> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<O1>,
}

impl<P1, P2, O1> Preceded<P1, P2, O1> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<O1, O2, P1, P2> Parser<O2> for Preceded<P1, P2, O1>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, O2> {
        match self.parser1.parse(input).into_first() {
            Some((_, rest)) => self.parser2.parse(rest),
            None => Outcomes::none(),
        }
    }
}

/// Terminated: Runs two parsers in sequence and keeps the first value
#[derive(Clone)]
pub struct Terminated<P1, P2, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<O2>,
}

impl<P1, P2, O2> Terminated<P1, P2, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<O1, O2, P1, P2> Parser<O1> for Terminated<P1, P2, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, O1> {
        let Some((value, rest)) = self.parser1.parse(input).into_first() else {
            return Outcomes::none();
        };
        match self.parser2.parse(rest).into_first() {
            Some((_, rest)) => Outcomes::single(value, rest),
            None => Outcomes::none(),
        }
    }
}

/// Delimited: Parses content between left and right delimiters
///
/// Handles parenthesized and bracketed shapes, returning only the content
/// parser's value.
#[derive(Clone)]
pub struct Delimited<L, P, R, OL, OR> {
    /// Parser for the left delimiter
    left: L,
    /// Parser for the content between delimiters
    parser: P,
    /// Parser for the right delimiter
    right: R,
    _phantom: PhantomData<(OL, OR)>,
}

impl<L, P, R, OL, OR> Delimited<L, P, R, OL, OR> {
    pub fn new(left: L, parser: P, right: R) -> Self {
        Self {
            left,
            parser,
            right,
            _phantom: PhantomData,
        }
    }
}

impl<O, OL, OR, L, P, R> Parser<O> for Delimited<L, P, R, OL, OR>
where
    L: Parser<OL>,
    P: Parser<O>,
    R: Parser<OR>,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, O> {
        let Some((_, rest)) = self.left.parse(input).into_first() else {
            return Outcomes::none();
        };
        let Some((value, rest)) = self.parser.parse(rest).into_first() else {
            return Outcomes::none();
        };
        match self.right.parse(rest).into_first() {
            Some((_, rest)) => Outcomes::single(value, rest),
            None => Outcomes::none(),
        }
    }
}

type WhitespaceSkipper = Many<Satisfy<fn(char) -> bool>>;

/// Token: Skips insignificant whitespace around a parser
///
/// Zero or more whitespace characters are consumed before and after the
/// wrapped parser.
#[derive(Clone)]
pub struct Token<P> {
    parser: P,
    whitespace: WhitespaceSkipper,
}

impl<P> Token<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            whitespace: whitespaces(),
        }
    }

    fn skip<'a>(&self, input: &'a str) -> &'a str {
        self.whitespace
            .parse(input)
            .into_first()
            .map_or(input, |(_, rest)| rest)
    }
}

impl<O, P> Parser<O> for Token<P>
where
    P: Parser<O>,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, O> {
        match self.parser.parse(self.skip(input)).into_first() {
            Some((value, rest)) => Outcomes::single(value, self.skip(rest)),
            None => Outcomes::none(),
        }
    }
}

/// Lazy: Builds the inner parser only when parsing
///
/// Grammar rules that refer to themselves (directly or through other rules)
/// go through `Lazy`, otherwise constructing the rule would recurse forever.
#[derive(Clone)]
pub struct Lazy<F> {
    f: F,
}

impl<F> Lazy<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<O, F, P> Parser<O> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<O>,
{
    fn parse<'a>(&self, input: &'a str) -> Outcomes<'a, O> {
        (self.f)().parse(input)
    }
}

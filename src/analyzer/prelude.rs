use super::combinators::*;
use super::core::{BoxedParser, Parser};

pub fn item() -> Item {
    Item
}

pub fn satisfies<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Succeeds with `value` without consuming input (the monadic `return`).
pub fn unit<O: Clone>(value: O) -> Unit<O> {
    Unit::new(value)
}

pub fn failure<O>() -> Failure<O> {
    Failure::new()
}

pub fn character(expected: char) -> Satisfy<impl Fn(char) -> bool + Clone> {
    Satisfy::new(move |c: char| c == expected)
}

pub fn string(text: impl Into<String>) -> Literal {
    Literal::new(text)
}

pub fn whitespace() -> Satisfy<fn(char) -> bool> {
    Satisfy::new(char::is_whitespace as fn(char) -> bool)
}

pub fn whitespaces() -> Many<Satisfy<fn(char) -> bool>> {
    Many::new(whitespace())
}

pub fn choice<P1, P2, O>(first: P1, second: P2) -> Choice<P1, P2>
where
    P1: Parser<O>,
    P2: Parser<O>,
{
    Choice::new(first, second)
}

pub fn bind<P, F, A, Q, B>(parser: P, continuation: F) -> Bind<P, F, A>
where
    P: Parser<A>,
    F: Fn(A) -> Q,
    Q: Parser<B>,
{
    Bind::new(parser, continuation)
}

pub fn map<P, F, A, B>(parser: P, f: F) -> Map<P, F, A>
where
    P: Parser<A>,
    F: Fn(A) -> B,
{
    Map::new(parser, f)
}

pub fn many<P, O>(parser: P) -> Many<P>
where
    P: Parser<O>,
{
    Many::new(parser)
}

pub fn many1<P, O>(parser: P) -> Many1<P>
where
    P: Parser<O>,
{
    Many1::new(parser)
}

pub fn optional<P, O>(parser: P) -> Optional<P>
where
    P: Parser<O>,
{
    Optional::new(parser)
}

pub fn token<P, O>(parser: P) -> Token<P>
where
    P: Parser<O>,
{
    Token::new(parser)
}

pub fn tuple2<P1, P2, O1, O2>(parser1: P1, parser2: P2) -> Tuple2<P1, P2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    Tuple2::new(parser1, parser2)
}

pub fn preceded<P1, P2, O1, O2>(parser1: P1, parser2: P2) -> Preceded<P1, P2, O1>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    Preceded::new(parser1, parser2)
}

pub fn terminated<P1, P2, O1, O2>(parser1: P1, parser2: P2) -> Terminated<P1, P2, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    Terminated::new(parser1, parser2)
}

pub fn delimited<L, P, R, OL, O, OR>(left: L, parser: P, right: R) -> Delimited<L, P, R, OL, OR>
where
    L: Parser<OL>,
    P: Parser<O>,
    R: Parser<OR>,
{
    Delimited::new(left, parser, right)
}

pub fn lazy<F, P, O>(f: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<O>,
{
    Lazy::new(f)
}

pub fn boxed<'p, P, O>(parser: P) -> BoxedParser<'p, O>
where
    P: Parser<O> + 'p,
{
    Box::new(parser)
}

/// `unit(value)` when there is a value, `failure()` otherwise.
pub fn from_option<O>(value: Option<O>) -> BoxedParser<'static, O>
where
    O: Clone + 'static,
{
    match value {
        Some(value) => boxed(unit(value)),
        None => boxed(failure()),
    }
}

use super::super::{core::*, prelude::*};

pub fn parse_digit() -> impl Parser<char> {
    satisfies(|c: char| c.is_ascii_digit())
}

/// One or more digits read as a non-negative `i64`.
///
/// A digit run too large for `i64` is a failure, not a wrapped value.
pub fn parse_natural_number() -> impl Parser<i64> {
    bind(many1(parse_digit()), |digits: Vec<char>| {
        let text: String = digits.into_iter().collect();
        let value = text.parse::<i64>().ok();
        if value.is_none() {
            tracing::trace!(target: "parser::grammar", digits = %text, "natural number out of range");
        }
        from_option(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digit() {
        assert_eq!(parse_digit().parse("7a"), Outcomes::single('7', "a"));
        assert_eq!(parse_digit().parse("a7"), Outcomes::none());
        assert_eq!(parse_digit().parse(""), Outcomes::none());
    }

    #[test]
    fn test_parse_natural_number() {
        assert_eq!(parse_natural_number().parse("42"), Outcomes::single(42, ""));
        assert_eq!(parse_natural_number().parse("0042x"), Outcomes::single(42, "x"));
        assert_eq!(parse_natural_number().parse("7 + 1"), Outcomes::single(7, " + 1"));
    }

    #[test]
    fn test_parse_natural_number_requires_a_digit() {
        assert_eq!(parse_natural_number().parse(""), Outcomes::none());
        assert_eq!(parse_natural_number().parse("x1"), Outcomes::none());
        // not token wrapped
        assert_eq!(parse_natural_number().parse(" 1"), Outcomes::none());
    }

    #[test]
    fn test_parse_natural_number_overflow() {
        assert_eq!(
            parse_natural_number().parse("9223372036854775807"),
            Outcomes::single(i64::MAX, "")
        );
        assert_eq!(parse_natural_number().parse("9223372036854775808"), Outcomes::none());
        assert_eq!(parse_natural_number().parse("99999999999999999999"), Outcomes::none());
    }
}

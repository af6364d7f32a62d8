use super::super::{core::*, prelude::*};
use crate::symbol_table::{is_symbol_char, SymbolTable};

/// One or more uppercase letters, resolved through `table`.
///
/// The letter run is taken greedily: `ONEX` is looked up as a whole and a
/// shorter known prefix such as `ONE` is never retried.
pub fn parse_symbol_reference(table: &SymbolTable) -> impl Parser<i64> + '_ {
    bind(many1(satisfies(is_symbol_char)), move |letters: Vec<char>| {
        let name: String = letters.into_iter().collect();
        let value = table.get(&name);
        if value.is_none() {
            tracing::trace!(target: "parser::grammar", symbol = %name, "unknown symbol");
        }
        from_option(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol_reference() {
        let table = SymbolTable::default_registers();
        let parser = parse_symbol_reference(&table);

        assert_eq!(parser.parse("ONE"), Outcomes::single(1, ""));
        assert_eq!(parser.parse("TWO+ONE"), Outcomes::single(2, "+ONE"));
        assert_eq!(parser.parse("TWO ONE"), Outcomes::single(2, " ONE"));
    }

    #[test]
    fn test_parse_symbol_reference_unknown() {
        let table = SymbolTable::default_registers();
        let parser = parse_symbol_reference(&table);

        assert_eq!(parser.parse("THREE"), Outcomes::none());
        assert_eq!(parser.parse("ONEX"), Outcomes::none());
        assert_eq!(parser.parse("one"), Outcomes::none());
        assert_eq!(parser.parse(""), Outcomes::none());
    }

    #[test]
    fn test_parse_symbol_reference_uses_injected_table() {
        let table = SymbolTable::builder()
            .with("ANSWER", 42)
            .build()
            .expect("valid table");
        let parser = parse_symbol_reference(&table);

        assert_eq!(parser.parse("ANSWER"), Outcomes::single(42, ""));
        assert_eq!(parser.parse("ONE"), Outcomes::none());
    }
}

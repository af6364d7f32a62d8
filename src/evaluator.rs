//! Runs the expression grammar over a whole source string.
//!
//! [`Evaluator::parse`] exposes the raw outcome set. [`Evaluator::evaluate`]
//! turns it into a [`CalcResult`], applying the configured
//! [`EvaluationMode`] to any text the grammar left unconsumed.

use std::fmt;

use tracing::{debug, info};

use crate::analyzer::{parsers::parse_expression, Outcomes, Parser};
use crate::config::{CalcConfig, EvaluationMode};
use crate::symbol_table::SymbolTable;
use crate::{CalcResult, Error};

/// A successful evaluation: the value and the unparsed rest of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i64,
    pub remainder: String,
}

impl Evaluation {
    pub fn is_complete(&self) -> bool {
        self.remainder.is_empty()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value={} unparsed={}", self.value, self.remainder)
    }
}

#[derive(Debug, Clone)]
pub struct Evaluator {
    table: SymbolTable,
    mode: EvaluationMode,
}

impl Evaluator {
    pub fn new(table: SymbolTable) -> Self {
        Self {
            table,
            mode: EvaluationMode::default(),
        }
    }

    pub fn from_config(config: &CalcConfig) -> CalcResult<Self> {
        let table = SymbolTable::try_from(config)?;
        info!(
            target: "evaluator",
            symbols = table.len(),
            mode = ?config.mode,
            "evaluator configured"
        );
        Ok(Self::new(table).with_mode(config.mode))
    }

    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// The grammar's outcome set for `source`, with no consumption check.
    pub fn parse<'a>(&self, source: &'a str) -> Outcomes<'a, i64> {
        parse_expression(&self.table).parse(source)
    }

    pub fn evaluate(&self, source: &str) -> CalcResult<Evaluation> {
        debug!(target: "evaluator", source, "evaluating");

        let (value, remainder) = self.parse(source).into_first().ok_or_else(|| {
            debug!(target: "evaluator", source, "no outcome");
            Error::NoMatch
        })?;

        if self.mode == EvaluationMode::Complete && !remainder.is_empty() {
            debug!(target: "evaluator", value, remainder, "input not fully consumed");
            return Err(Error::trailing_input(value, remainder));
        }

        debug!(target: "evaluator", value, remainder, "evaluated");
        Ok(Evaluation {
            value,
            remainder: remainder.to_string(),
        })
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(SymbolTable::default_registers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_evaluate_partial() {
        let evaluator = Evaluator::default();
        assert_eq!(
            evaluator.evaluate("ONE X").unwrap(),
            Evaluation {
                value: 1,
                remainder: "X".to_string()
            }
        );
        assert!(evaluator.evaluate("2 * 3").unwrap().is_complete());
    }

    #[test]
    fn test_evaluate_complete_mode() {
        let evaluator = Evaluator::default().with_mode(EvaluationMode::Complete);
        assert_eq!(evaluator.evaluate("(2 + 3) * 4").unwrap().value, 20);
        assert_eq!(
            evaluator.evaluate("ONE X"),
            Err(Error::TrailingInput {
                value: 1,
                remainder: "X".to_string()
            })
        );
    }

    #[test]
    fn test_evaluate_no_match() {
        let evaluator = Evaluator::default();
        assert_eq!(evaluator.evaluate(""), Err(Error::NoMatch));
        assert_eq!(evaluator.evaluate("ONEX"), Err(Error::NoMatch));
    }

    #[test]
    fn test_parse_returns_raw_outcomes() {
        let evaluator = Evaluator::default().with_mode(EvaluationMode::Complete);
        // mode does not apply to the raw outcome set
        assert_eq!(evaluator.parse("1 +"), Outcomes::single(1, "+"));
    }

    #[test]
    fn test_from_config() {
        let config = CalcConfig::from_json_str(r#"{"symbols": {"TEN": 10}, "mode": "complete"}"#)
            .unwrap();
        let evaluator = Evaluator::from_config(&config).unwrap();
        assert_eq!(evaluator.mode(), EvaluationMode::Complete);
        assert_eq!(evaluator.evaluate("TEN * TEN").unwrap().value, 100);
        assert_eq!(evaluator.evaluate("ONE"), Err(Error::NoMatch));
    }

    #[test]
    fn test_from_config_rejects_bad_symbol() {
        let config = CalcConfig::from_json_str(r#"{"symbols": {"ten": 10}}"#).unwrap();
        assert_eq!(
            Evaluator::from_config(&config).unwrap_err(),
            Error::InvalidSymbolName("ten".to_string())
        );
    }

    #[test]
    fn test_display() {
        let evaluation = Evaluator::default()
            .evaluate("(1 + 2) * 3 * ((4 + 50 + ONEX) * (TWO + ONE))")
            .unwrap();
        assert_eq!(
            evaluation.to_string(),
            "Value=9 unparsed=* ((4 + 50 + ONEX) * (TWO + ONE))"
        );
    }
}

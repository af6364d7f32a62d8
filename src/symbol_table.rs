//! Register lookup for symbol references.
//!
//! A [`SymbolTable`] is handed to the grammar when it is built; the grammar
//! only ever reads it. Unknown names are reported as `None`, never as a
//! default value.

use std::collections::BTreeMap;

use crate::config::CalcConfig;
use crate::error::{CalcResult, Error};

/// The character class accepted in symbol names.
pub fn is_symbol_char(c: char) -> bool {
    c.is_uppercase()
}

fn validate_name(name: &str) -> CalcResult<()> {
    if name.is_empty() || !name.chars().all(is_symbol_char) {
        return Err(Error::InvalidSymbolName(name.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: BTreeMap<String, i64>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder::default()
    }

    /// `ONE = 1`, `TWO = 2`.
    pub fn default_registers() -> Self {
        Self {
            entries: default_symbols(),
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

pub(crate) fn default_symbols() -> BTreeMap<String, i64> {
    BTreeMap::from([("ONE".to_string(), 1), ("TWO".to_string(), 2)])
}

/// Collects bindings and validates every name on [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct SymbolTableBuilder {
    entries: Vec<(String, i64)>,
}

impl SymbolTableBuilder {
    pub fn with(mut self, name: impl Into<String>, value: i64) -> Self {
        self.entries.push((name.into(), value));
        self
    }

    /// Later bindings of the same name replace earlier ones.
    pub fn extend<I, S>(mut self, bindings: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        self.entries
            .extend(bindings.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }

    pub fn build(self) -> CalcResult<SymbolTable> {
        let mut entries = BTreeMap::new();
        for (name, value) in self.entries {
            validate_name(&name)?;
            entries.insert(name, value);
        }
        Ok(SymbolTable { entries })
    }
}

impl TryFrom<BTreeMap<String, i64>> for SymbolTable {
    type Error = Error;

    fn try_from(entries: BTreeMap<String, i64>) -> CalcResult<Self> {
        SymbolTable::builder().extend(entries).build()
    }
}

impl TryFrom<&CalcConfig> for SymbolTable {
    type Error = Error;

    fn try_from(config: &CalcConfig) -> CalcResult<Self> {
        SymbolTable::builder()
            .extend(config.symbols.iter().map(|(name, value)| (name.clone(), *value)))
            .build()
    }
}

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::{symbol_table::default_symbols, CalcResult, Error};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default = "default_symbols")]
    pub symbols: BTreeMap<String, i64>,

    #[serde(default)]
    pub mode: EvaluationMode,
}

/// Whether text left after a successful parse is acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Trailing unparsed text is part of a successful result.
    #[default]
    Partial,
    /// Trailing unparsed text is an error.
    Complete,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            mode: EvaluationMode::default(),
        }
    }
}

impl CalcConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> CalcResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::config(format!("Failed to open config file {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))
    }

    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))
    }
}

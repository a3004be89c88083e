use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

const BUNDLED_TABLE: &str = include_str!("../data/team_colors.json");

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read color table {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse color table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("color for {key:?} must be a string")]
    NonStringColor { key: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TableFile {
    Wrapper(WrappedTable),
    Flat(Map<String, Value>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WrappedTable {
    colors: Map<String, Value>,
}

impl TableFile {
    fn into_map(self) -> Map<String, Value> {
        match self {
            TableFile::Wrapper(wrapped) => wrapped.colors,
            TableFile::Flat(map) => map,
        }
    }
}

/// Name variants and their colors, in source order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<(String, String)>,
}

impl ColorTable {
    /// The table compiled into this crate.
    pub fn bundled() -> Result<Self, TableError> {
        Self::from_json_str(BUNDLED_TABLE)
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, color)| (name.into(), color.into()))
                .collect(),
        }
    }

    /// Parses either a flat `{ "name": "color" }` object or `{ "colors": { ... } }`.
    pub fn from_json_str(raw: &str) -> Result<Self, TableError> {
        let file: TableFile = serde_json::from_str(raw)?;
        let mut entries = Vec::new();
        for (name, value) in file.into_map() {
            match value {
                Value::String(color) => entries.push((name, color)),
                _ => return Err(TableError::NonStringColor { key: name }),
            }
        }
        Ok(Self { entries })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, TableError> {
        let raw = fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, color)| (name.as_str(), color.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of locale trees for the web overlay.

use crate::i18n::{dictionary, Locale, LocaleTree};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "yaml" | "yml" => Some(ExportFormat::Yaml),
            _ => None,
        }
    }

    /// Format implied by a file extension (`dict.yml` -> YAML).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    /// An explicit `--format` wins, then the output file's extension, then JSON.
    pub fn resolve(explicit: Option<Self>, output: Option<&Path>) -> Self {
        explicit
            .or_else(|| output.and_then(Self::from_path))
            .unwrap_or(ExportFormat::Json)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, tree: &LocaleTree) -> Result<String> {
        self.serialize_value(&tree.to_value())
    }

    fn serialize_value(&self, value: &Value) -> Result<String> {
        match self {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            ExportFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// Every locale keyed by code: `{ "it": {...}, "en": {...} }`.
pub fn dictionary_value() -> Value {
    let mut map = Map::new();
    for locale in Locale::all() {
        map.insert(locale.code().to_string(), dictionary(*locale).to_value());
    }
    Value::Object(map)
}

pub fn export_dictionary(format: ExportFormat) -> Result<String> {
    format.serialize_value(&dictionary_value())
}

/// Write one locale, or the whole dictionary when `locale` is `None`.
pub fn write_export(path: &Path, format: ExportFormat, locale: Option<Locale>) -> Result<()> {
    let content = match locale {
        Some(locale) => format.serialize(dictionary(locale))?,
        None => export_dictionary(format)?,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), format = format.extension(), "exported dictionary");
    Ok(())
}

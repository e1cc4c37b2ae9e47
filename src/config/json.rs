use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context as _, Result, bail};
use serde_json::{Map, Value};

use crate::config::ConfigProvider;

const SECTION_SEPARATOR: char = ':';

/// Settings read from an `appsettings.json`-style document.
///
/// Nested sections are addressed with `:` (`"Dht:ApiBaseUrl"`) and key
/// matching ignores ASCII case when no exact match exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonConfig {
    root: Map<String, Value>,
}

impl JsonConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("failed to open config file: {path:?}"))?;

        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to load config file: {path:?}"))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let value: Value =
            serde_json::from_reader(reader).context("failed to parse config JSON")?;
        Self::from_value(value)
    }

    pub fn parse(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s).context("failed to parse config JSON")?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(root) = value else {
            bail!("config root must be a JSON object");
        };

        Ok(Self { root })
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split(SECTION_SEPARATOR);
        let first = segments.next()?;
        let mut current = find_entry(&self.root, first)?;

        for segment in segments {
            let Value::Object(section) = current else {
                return None;
            };
            current = find_entry(section, segment)?;
        }

        Some(current)
    }
}

impl FromStr for JsonConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl ConfigProvider for JsonConfig {
    fn get(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(Value::String(s)) => s.clone(),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
            _ => String::new(),
        }
    }
}

fn find_entry<'a>(section: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    section.get(name).or_else(|| {
        section
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    })
}

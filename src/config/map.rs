use std::collections::HashMap;

use crate::config::ConfigProvider;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapConfig {
    values: HashMap<String, String>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigProvider for MapConfig {
    fn get(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_empty() {
        let config: MapConfig = [("ApiBaseUrl", "http://x")].into_iter().collect();

        assert_eq!(config.get("ApiBaseUrl"), "http://x");
        assert_eq!(config.get("ApiEndpoint"), "");
    }

    #[test]
    fn insert_overwrites() {
        let mut config = MapConfig::new();
        config.insert("ApiEndpoint", "dht").insert("ApiEndpoint", "dht22");

        assert_eq!(config.get("ApiEndpoint"), "dht22");
    }
}

use std::collections::HashMap;

use crate::config::ConfigProvider;

/// Prefix for API settings supplied through the environment, e.g.
/// `DHT_ApiBaseUrl`.
pub const API_CONFIG_ENV_PREFIX: &str = "DHT_";

/// Settings taken from environment variables.
///
/// Key `Section:Key` is read from `{prefix}Section__Key`. Variables are
/// captured once, when the provider is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    prefix: String,
    vars: HashMap<String, String>,
}

impl EnvConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let vars: Vec<(String, String)> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .filter(|(k, _)| k.starts_with(&prefix))
            .collect();

        Self::from_vars(prefix, vars)
    }

    pub fn from_vars<K, V>(prefix: impl Into<String>, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    fn var_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.replace(':', "__"))
    }
}

impl ConfigProvider for EnvConfig {
    fn get(&self, key: &str) -> String {
        self.vars
            .get(&self.var_name(key))
            .cloned()
            .unwrap_or_default()
    }
}

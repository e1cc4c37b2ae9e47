use crate::config::ConfigProvider;

/// Stack of providers; a later layer with a non-empty value overrides
/// earlier ones.
#[derive(Default)]
pub struct LayeredConfig {
    layers: Vec<Box<dyn ConfigProvider>>,
}

impl LayeredConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(mut self, layer: impl ConfigProvider + 'static) -> Self {
        self.push(layer);
        self
    }

    pub fn push(&mut self, layer: impl ConfigProvider + 'static) {
        self.layers.push(Box::new(layer));
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl ConfigProvider for LayeredConfig {
    fn get(&self, key: &str) -> String {
        self.layers
            .iter()
            .rev()
            .map(|layer| layer.get(key))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for LayeredConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredConfig")
            .field("layers", &self.layers.len())
            .finish()
    }
}

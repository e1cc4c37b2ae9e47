use std::sync::Arc;

/// Named string settings.
///
/// `get` never fails: an absent key reads as the empty string.
pub trait ConfigProvider: Send + Sync {
    fn get(&self, key: &str) -> String;
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for &T {
    fn get(&self, key: &str) -> String {
        (**self).get(key)
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for Arc<T> {
    fn get(&self, key: &str) -> String {
        (**self).get(key)
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for Box<T> {
    fn get(&self, key: &str) -> String {
        (**self).get(key)
    }
}

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::http::HttpResponse;

/// Performs HTTP GET requests.
///
/// Transport concerns (TLS, pooling, proxies, timeouts) belong to the
/// implementation.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for &T {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url).await
    }
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url).await
    }
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Box<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        (**self).get(url).await
    }
}

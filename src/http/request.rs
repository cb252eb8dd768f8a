use super::client::HeaderMap;
use reqwest::Method;
use serde::Serialize;

/// Everything needed to perform one HTTP exchange, detached from any client.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(&key.to_ascii_lowercase()).map(String::as_str)
    }
}

pub struct HttpRequestBuilder {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<String>,
}

impl HttpRequestBuilder {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        HttpRequestBuilder {
            method,
            url: url.into(),
            headers: HeaderMap::default(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        HttpRequestBuilder::new(Method::POST, url)
    }

    /// Header names are stored lowercased.
    pub fn header(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(key.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

pub trait SerializeRequest {
    fn into_request(&self) -> Result<String, serde_json::Error>
    where
        Self: Serialize,
    {
        serde_json::to_string(self)
    }
}

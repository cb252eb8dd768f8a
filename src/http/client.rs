use super::{request::HttpRequest, response::Response};
use crate::Error;
use reqwest::header::{HeaderName, HeaderValue};
use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

#[derive(Clone, Debug)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new() -> Client {
        Client(reqwest::Client::new())
    }

    pub async fn send(&self, request: HttpRequest) -> Result<Response, Error> {
        let mut builder = self
            .0
            .request(request.method, &request.url)
            .headers(request.headers.try_into()?);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let request = builder
            .build()
            .map_err(|_| Error::invalid("url", "does not form a valid URL"))?;

        let response = self.0.execute(request).await?;
        Response::read(response).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default, Clone, Debug)]
pub struct HeaderMap(pub HashMap<String, String>);

impl Deref for HeaderMap {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for HeaderMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TryFrom<HeaderMap> for reqwest::header::HeaderMap {
    type Error = Error;

    fn try_from(map: HeaderMap) -> Result<Self, Self::Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        for (key, value) in map.0 {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| Error::invalid("headers", "not a valid HTTP header name"))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|_| Error::invalid("headers", "not a valid HTTP header value"))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

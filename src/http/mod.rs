mod client;
mod request;
mod response;

pub use client::{Client, HeaderMap};
pub use request::{HttpRequest, HttpRequestBuilder, SerializeRequest};

use crate::http::HttpRequestBuilder;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

pub const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";
pub const JSON_UTF8: &str = "application/json;charset=utf8";

pub fn authorization(auth_token: &str) -> String {
    format!("token {}", auth_token)
}

pub trait IssueHeaders {
    fn issue_headers(self, user_agent: &str, auth_token: &str) -> Self;
}

impl IssueHeaders for HttpRequestBuilder {
    fn issue_headers(self, user_agent: &str, auth_token: &str) -> Self {
        self.header(USER_AGENT, user_agent)
            .header(ACCEPT, GITHUB_V3_JSON)
            .header(CONTENT_TYPE, JSON_UTF8)
            .header(AUTHORIZATION, authorization(auth_token))
    }
}

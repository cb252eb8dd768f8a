mod headers;
mod options;
mod payload;

pub use headers::{GITHUB_V3_JSON, JSON_UTF8};
pub use options::CreateIssueOptions;
pub use payload::IssuePayload;

use self::headers::IssueHeaders;
use crate::{
    http::{Client, HttpRequest, HttpRequestBuilder, SerializeRequest},
    Error,
};
use reqwest::Url;
use serde_json::Value;

pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Creates an issue on github.com and resolves with the issue JSON returned by the API.
///
/// See <https://docs.github.com/en/rest/issues/issues#create-an-issue>.
pub async fn create_issue(options: CreateIssueOptions) -> Result<Value, Error> {
    IssueCreator::new().create_issue(options).await
}

#[derive(Clone, Debug)]
pub struct IssueCreator {
    client: Client,
    base_url: String,
}

impl IssueCreator {
    pub fn new() -> Self {
        IssueCreator::with_base_url(GITHUB_API_URL)
    }

    /// Targets another API root, e.g. a GitHub Enterprise `https://host/api/v3`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        IssueCreator {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validates `options` and assembles the request without sending it.
    pub fn request(&self, options: CreateIssueOptions) -> Result<HttpRequest, Error> {
        log::debug!("options = {:?}", options);
        let issue = options.validate()?;

        let body = issue
            .payload
            .into_request()
            .map_err(|cause| Error::SerializeRequest { cause })?;

        Url::parse(&self.base_url)
            .map_err(|_| Error::invalid("base_url", "not a valid URL"))?;

        let url = format!("{}/repos/{}/issues", self.base_url, issue.repository);
        Url::parse(&url)
            .map_err(|_| Error::invalid("repository", "does not form a valid URL"))?;

        Ok(HttpRequestBuilder::post(url)
            .issue_headers(&issue.user_agent, &issue.auth_token)
            .body(body)
            .build())
    }

    pub async fn create_issue(&self, options: CreateIssueOptions) -> Result<Value, Error> {
        let request = self.request(options)?;

        log::debug!("POSTing to {}...", request.url);
        let response = self.client.send(request).await?;
        log::debug!("GitHub responded with status {}", response.status());

        response.collect()
    }
}

impl Default for IssueCreator {
    fn default() -> Self {
        Self::new()
    }
}

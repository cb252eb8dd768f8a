use crate::http::SerializeRequest;
use serde::Serialize;

/// JSON body of `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssuePayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl IssuePayload {
    pub fn new(
        title: impl Into<String>,
        body: Option<String>,
        milestone: Option<u64>,
        labels: Option<Vec<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            body,
            milestone,
            labels,
        }
    }
}

impl SerializeRequest for IssuePayload {}

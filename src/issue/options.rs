use super::{headers, payload::IssuePayload};
use crate::Error;
use reqwest::header::HeaderValue;
use std::fmt;

/// Parameters of a single issue creation.
///
/// `repository` takes the `owner/name` form. `user_agent` falls back to the
/// repository when unset. `assignee` is accepted but is not part of the
/// request sent to GitHub.
#[derive(Clone, Default)]
pub struct CreateIssueOptions {
    pub auth_token: String,
    pub repository: String,
    pub user_agent: Option<String>,
    pub title: String,
    pub body: Option<String>,
    pub assignee: Option<String>,
    pub milestone: Option<u64>,
    pub labels: Option<Vec<String>>,
}

impl CreateIssueOptions {
    pub fn new(
        auth_token: impl Into<String>,
        repository: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        CreateIssueOptions {
            auth_token: auth_token.into(),
            repository: repository.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn milestone(mut self, milestone: u64) -> Self {
        self.milestone = Some(milestone);
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn validate(self) -> Result<ValidatedIssue, Error> {
        if self.repository.is_empty() {
            return Err(Error::invalid("repository", "missing repository"));
        }

        if self.auth_token.is_empty() {
            return Err(Error::invalid("auth_token", "missing token"));
        }

        if self.title.is_empty() {
            return Err(Error::invalid("title", "missing title"));
        }

        let user_agent = self.user_agent.unwrap_or_else(|| self.repository.clone());

        if HeaderValue::from_str(&user_agent).is_err() {
            return Err(Error::invalid(
                "user_agent",
                "not a valid HTTP header value",
            ));
        }

        if HeaderValue::from_str(&headers::authorization(&self.auth_token)).is_err() {
            return Err(Error::invalid(
                "auth_token",
                "not a valid HTTP header value",
            ));
        }

        if let Some(assignee) = &self.assignee {
            log::warn!("assignee {} is accepted but not sent to GitHub", assignee);
        }

        Ok(ValidatedIssue {
            auth_token: self.auth_token,
            repository: self.repository,
            user_agent,
            payload: IssuePayload::new(self.title, self.body, self.milestone, self.labels),
        })
    }
}

impl fmt::Debug for CreateIssueOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateIssueOptions")
            .field("auth_token", &"<redacted>")
            .field("repository", &self.repository)
            .field("user_agent", &self.user_agent)
            .field("title", &self.title)
            .field("body", &self.body)
            .field("assignee", &self.assignee)
            .field("milestone", &self.milestone)
            .field("labels", &self.labels)
            .finish()
    }
}

/// Options that passed validation, with defaults resolved.
pub(crate) struct ValidatedIssue {
    pub auth_token: String,
    pub repository: String,
    pub user_agent: String,
    pub payload: IssuePayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(result: Result<ValidatedIssue, Error>, expected_field: &str) {
        match result {
            Err(Error::InvalidArgument { field, .. }) => assert_eq!(field, expected_field),
            Err(err) => panic!("unexpected error: {}", err),
            Ok(_) => panic!("expected validation to fail"),
        }
    }

    #[test]
    fn should_default_user_agent_to_repository() {
        let issue = CreateIssueOptions::new("tok123", "acme/widgets", "Bug found")
            .validate()
            .unwrap();

        assert_eq!(issue.user_agent, "acme/widgets");
    }

    #[test]
    fn should_keep_explicit_user_agent() {
        let issue = CreateIssueOptions::new("tok123", "acme/widgets", "Bug found")
            .user_agent("widget-bot")
            .validate()
            .unwrap();

        assert_eq!(issue.user_agent, "widget-bot");
    }

    #[test]
    fn should_reject_missing_token() {
        let options = CreateIssueOptions {
            repository: "acme/widgets".to_owned(),
            title: "Bug found".to_owned(),
            ..Default::default()
        };

        assert_invalid(options.validate(), "auth_token");
    }

    #[test]
    fn should_reject_missing_repository() {
        let options = CreateIssueOptions {
            auth_token: "tok123".to_owned(),
            title: "Bug found".to_owned(),
            ..Default::default()
        };

        assert_invalid(options.validate(), "repository");
    }

    #[test]
    fn should_reject_empty_title() {
        let options = CreateIssueOptions::new("tok123", "acme/widgets", "");

        assert_invalid(options.validate(), "title");
    }

    #[test]
    fn should_check_token_before_title() {
        let options = CreateIssueOptions::new("", "acme/widgets", "");

        assert_invalid(options.validate(), "auth_token");
    }

    #[test]
    fn should_reject_user_agent_that_cannot_be_a_header() {
        let options = CreateIssueOptions::new("tok123", "acme/widgets", "Bug found")
            .user_agent("line\nbreak");

        assert_invalid(options.validate(), "user_agent");
    }

    #[test]
    fn should_reject_token_that_cannot_be_a_header() {
        let options = CreateIssueOptions::new("tok\r\n123", "acme/widgets", "Bug found");

        assert_invalid(options.validate(), "auth_token");
    }

    #[test]
    fn should_drop_assignee_from_payload() {
        let issue = CreateIssueOptions::new("tok123", "acme/widgets", "Bug found")
            .assignee("octocat")
            .body("details")
            .validate()
            .unwrap();

        assert_eq!(
            issue.payload,
            IssuePayload::new("Bug found", Some("details".to_owned()), None, None)
        );
    }

    #[test]
    fn should_not_leak_token_through_debug() {
        let options = CreateIssueOptions::new("super-secret", "acme/widgets", "Bug found");

        let debug = format!("{:?}", options);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("acme/widgets"));
    }
}

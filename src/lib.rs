//! Create GitHub issues through the REST API.
//!
//! ```no_run
//! # async fn run() -> Result<(), github_issue::Error> {
//! use github_issue::{create_issue, CreateIssueOptions};
//!
//! let issue = create_issue(
//!     CreateIssueOptions::new("ghp_token", "acme/widgets", "Bug found")
//!         .labels(["bug", "p1"])
//!         .milestone(3),
//! )
//! .await?;
//!
//! println!("{}", issue["html_url"]);
//! # Ok(())
//! # }
//! ```

mod error;
mod http;
pub mod issue;

pub use error::Error;
pub use http::{HeaderMap, HttpRequest};
pub use issue::{create_issue, CreateIssueOptions, IssueCreator, IssuePayload};

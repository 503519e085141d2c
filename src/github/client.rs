//! Blocking HTTP client for the pull request endpoints

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use std::time::Duration;
use tracing::debug;

use super::{BodyUpdate, IssueComment, PullRequest};
use crate::config::GitHubSettings;
use crate::error::GateError;

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

pub struct GitHubClient {
    http: Client,
    settings: GitHubSettings,
}

impl GitHubClient {
    pub fn new(settings: GitHubSettings) -> Result<Self, GateError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("dod-gate/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, settings })
    }

    pub fn pull_request_body(&self, number: u64) -> Result<String, GateError> {
        let response = self.request(self.http.get(self.pull_url(number))).send()?;
        let response = check_status(response, "Getting pull request")?;
        let pr: PullRequest = response.json()?;
        Ok(pr.body.unwrap_or_default())
    }

    pub fn update_pull_request_body(&self, number: u64, body: &str) -> Result<(), GateError> {
        let response = self
            .request(self.http.patch(self.pull_url(number)))
            .json(&BodyUpdate { body })
            .send()?;
        check_status(response, "Updating pull request description")?;
        Ok(())
    }

    pub fn list_comments(&self, number: u64) -> Result<Vec<IssueComment>, GateError> {
        let url = format!("{}?per_page=100", self.comments_url(number));
        let response = self.request(self.http.get(url)).send()?;
        let response = check_status(response, "Getting pull request comments")?;
        Ok(response.json()?)
    }

    pub fn post_comment(&self, number: u64, body: &str) -> Result<(), GateError> {
        let response = self
            .request(self.http.post(self.comments_url(number)))
            .json(&BodyUpdate { body })
            .send()?;
        check_status(response, "Posting comment")?;
        Ok(())
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(ACCEPT, GITHUB_MEDIA_TYPE);
        match &self.settings.token {
            Some(token) => builder.header(AUTHORIZATION, format!("token {token}")),
            None => builder,
        }
    }

    fn repo_url(&self) -> String {
        format!(
            "{}/repos/{}",
            self.settings.api_url.trim_end_matches('/'),
            self.settings.repository
        )
    }

    pub(crate) fn pull_url(&self, number: u64) -> String {
        format!("{}/pulls/{number}", self.repo_url())
    }

    pub(crate) fn comments_url(&self, number: u64) -> String {
        format!("{}/issues/{number}/comments", self.repo_url())
    }
}

fn check_status(response: Response, context: &str) -> Result<Response, GateError> {
    let status = response.status();
    debug!(status = status.as_u16(), url = %response.url(), "{context}");

    if !status.is_success() {
        return Err(GateError::Http {
            context: context.to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown error").to_string(),
        });
    }
    Ok(response)
}

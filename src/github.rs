//! GitHub releases API client and pagination walk.

use crate::aggregate::{AggregateOptions, DownloadAggregate};
use crate::link::parse_link_header;
use crate::types::Release;
use reqwest::header::LINK;
use reqwest::StatusCode;
use thiserror::Error;

pub const GITHUB_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("relstats/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    /// Any non-200 response; reported with the body GitHub sent back.
    #[error("GitHub API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response decoded as text but not as a release listing.
    #[error("malformed release listing from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Client for the releases listing endpoint. Credentials are attached as
/// HTTP Basic auth only when both a username and a token were supplied.
pub struct ReleaseClient {
    http: reqwest::Client,
    api_base: String,
    credentials: Option<(String, String)>,
}

impl ReleaseClient {
    pub fn new(username: Option<String>, token: Option<String>) -> Result<Self, FetchError> {
        let api_base =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| GITHUB_API_URL.to_string());
        Self::with_base(api_base, username, token)
    }

    pub fn with_base(
        api_base: String,
        username: Option<String>,
        token: Option<String>,
    ) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let credentials = username.zip(token);

        Ok(ReleaseClient {
            http,
            api_base,
            credentials,
        })
    }

    fn releases_url(&self, org: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/releases", self.api_base, org, repo)
    }

    /// Walk every page of the releases listing, folding each page into the
    /// aggregate before the next one is requested. The walk terminates when
    /// a response carries no `rel="next"` link.
    pub async fn collect_downloads(
        &self,
        org: &str,
        repo: &str,
        opts: &AggregateOptions,
    ) -> Result<DownloadAggregate, FetchError> {
        let mut aggregate = DownloadAggregate::default();
        let mut next_url = Some(self.releases_url(org, repo));

        while let Some(url) = next_url.take() {
            let (releases, next) = self.fetch_page(&url).await?;
            tracing::debug!("Fetched {} release(s) from {}", releases.len(), url);

            for release in &releases {
                aggregate.fold_release(release, opts);
            }
            next_url = next;
        }

        Ok(aggregate)
    }

    /// Fetch one page. Returns the decoded releases and the `next` link, if
    /// any. A non-200 status is fatal and carries the response body.
    async fn fetch_page(&self, url: &str) -> Result<(Vec<Release>, Option<String>), FetchError> {
        tracing::debug!("GET {}", url);

        let mut request = self.http.get(url);
        if let Some((username, token)) = &self.credentials {
            request = request.basic_auth(username, Some(token));
        }

        let response = request.send().await?;
        let status = response.status();

        let next = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| parse_link_header(value).remove("next"));

        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(FetchError::Status { status, body });
        }

        let releases = serde_json::from_str(&body).map_err(|source| {
            FetchError::MalformedResponse {
                url: url.to_string(),
                source,
            }
        })?;

        Ok((releases, next))
    }
}

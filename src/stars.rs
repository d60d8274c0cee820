// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Repository star counts: lookup, extraction and display formatting.
//!
//! The network side is hidden behind [`RepositoryClient`] so the badge can be
//! driven by the GitHub API in production and by in-memory clients in tests.

use std::{fmt, future::Future, str::FromStr};

use octocrab::Octocrab;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, StarFetchError};

/// Repository displayed by the documentation site badge.
pub const DEFAULT_REPOSITORY: &str = "RichQAQ/PasteMD";

const STARGAZERS_FIELD: &str = "stargazers_count";

/// Display state of a star badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default,)]
pub enum StarCount
{
    /// No successful response has been applied yet.
    #[default]
    Unknown,
    /// Star count reported by the repository metadata endpoint.
    Known(u64,),
}

/// `owner/name` pair identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash,)]
pub struct RepositoryRef
{
    owner: String,
    name:  String,
}

impl RepositoryRef
{
    /// Creates a reference from already validated parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when either part is
    /// blank or contains a `/`.
    pub fn new(owner: &str, name: &str,) -> Result<Self, Error,>
    {
        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() {
            return Err(Error::validation("repository must be given as <owner>/<name>",),);
        }
        if owner.contains('/',) || name.contains('/',) {
            return Err(Error::validation(format!(
                "repository '{owner}/{name}' has too many path segments"
            ),),);
        }

        Ok(Self {
            owner: owner.to_owned(), name: name.to_owned(),
        },)
    }

    /// Repository owner (user or organization login).
    pub fn owner(&self,) -> &str
    {
        &self.owner
    }

    /// Repository name.
    pub fn name(&self,) -> &str
    {
        &self.name
    }

    /// REST path of the repository metadata resource.
    pub fn api_path(&self,) -> String
    {
        format!("/repos/{}/{}", self.owner, self.name)
    }

    /// Public web page of the repository.
    pub fn html_url(&self,) -> String
    {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl Default for RepositoryRef
{
    fn default() -> Self
    {
        Self {
            owner: "RichQAQ".to_owned(), name: "PasteMD".to_owned(),
        }
    }
}

impl FromStr for RepositoryRef
{
    type Err = Error;

    fn from_str(value: &str,) -> Result<Self, Self::Err,>
    {
        let (owner, name,) = value
            .trim()
            .split_once('/',)
            .ok_or_else(|| Error::validation("repository must be given as <owner>/<name>",),)?;
        Self::new(owner, name,)
    }
}

impl fmt::Display for RepositoryRef
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Raw answer of the repository metadata endpoint.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct RepositoryResponse
{
    /// HTTP status code.
    pub status: u16,
    /// Undecoded response body.
    pub body:   String,
}

impl RepositoryResponse
{
    /// Returns `true` for 2xx status codes.
    pub fn is_success(&self,) -> bool
    {
        (200..300).contains(&self.status,)
    }
}

/// Source of repository metadata.
///
/// Implementations perform exactly one request per call and must not retry.
pub trait RepositoryClient: Send + Sync + 'static
{
    /// Issues a single `GET` for the repository metadata resource.
    ///
    /// Transport failures are reported as [`StarFetchError::Network`];
    /// non-success statuses are returned as regular responses.
    fn fetch_repository(
        &self,
        repository: &RepositoryRef,
    ) -> impl Future<Output = Result<RepositoryResponse, StarFetchError,>,> + Send;
}

/// Unauthenticated GitHub REST client backed by [`Octocrab`].
#[derive(Clone,)]
pub struct GitHubClient
{
    octocrab: Octocrab,
}

impl GitHubClient
{
    /// Builds a client that talks to the public GitHub API without a token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`](Error::Service) when the HTTP client cannot
    /// be initialized.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime: the client spawns its
    /// request buffer on the current runtime while being built.
    pub fn public() -> Result<Self, Error,>
    {
        let octocrab = Octocrab::builder()
            .build()
            .map_err(|e| Error::service(format!("failed to initialize GitHub client: {e}"),),)?;
        Ok(Self {
            octocrab,
        },)
    }
}

impl RepositoryClient for GitHubClient
{
    async fn fetch_repository(
        &self,
        repository: &RepositoryRef,
    ) -> Result<RepositoryResponse, StarFetchError,>
    {
        let response = self
            .octocrab
            ._get(repository.api_path(),)
            .await
            .map_err(|e| StarFetchError::network(e.to_string(),),)?;
        let status = response.status().as_u16();
        let body = self
            .octocrab
            .body_to_string(response,)
            .await
            .map_err(|e| StarFetchError::network(e.to_string(),),)?;

        Ok(RepositoryResponse {
            status, body,
        },)
    }
}

/// Fetches the star count of `repository` with a single request.
///
/// # Errors
///
/// Returns the [`StarFetchError`] describing why no count could be
/// extracted. Callers that only display the count are expected to ignore it.
pub async fn fetch_star_count<C,>(
    client: &C,
    repository: &RepositoryRef,
) -> Result<u64, StarFetchError,>
where
    C: RepositoryClient,
{
    debug!("Fetching star count for {}", repository);
    let response = client.fetch_repository(repository,).await?;
    extract_star_count(&response,)
}

/// Extracts `stargazers_count` from a metadata response.
///
/// All other fields are ignored.
///
/// # Errors
///
/// * [`StarFetchError::Status`] for non-success responses.
/// * [`StarFetchError::Malformed`] when the body is not JSON.
/// * [`StarFetchError::MissingField`] when the field is absent or is not a
///   non-negative integer.
pub fn extract_star_count(response: &RepositoryResponse,) -> Result<u64, StarFetchError,>
{
    if !response.is_success() {
        return Err(StarFetchError::Status {
            status: response.status,
        },);
    }

    let document: Value = serde_json::from_str(&response.body,).map_err(|e| {
        StarFetchError::Malformed {
            message: e.to_string(),
        }
    },)?;

    document.get(STARGAZERS_FIELD,).and_then(Value::as_u64,).ok_or(StarFetchError::MissingField,)
}

/// Formats a star count for compact display.
///
/// Counts below one thousand are printed verbatim. Larger counts are divided
/// by one thousand, rounded half-up to one decimal place, stripped of a
/// trailing `.0` and suffixed with `k`. Millions stay in thousands.
///
/// # Examples
///
/// ```
/// use pastemd_site::format_stars;
///
/// assert_eq!(format_stars(999), "999");
/// assert_eq!(format_stars(1000), "1k");
/// assert_eq!(format_stars(1050), "1.1k");
/// assert_eq!(format_stars(2549), "2.5k");
/// assert_eq!(format_stars(1_500_000), "1500k");
/// ```
pub fn format_stars(count: u64,) -> String
{
    if count < 1000 {
        return count.to_string();
    }

    let tenths = count / 100 + u64::from(count % 100 >= 50,);
    let whole = tenths / 10;
    let fraction = tenths % 10;
    if fraction == 0 { format!("{whole}k") } else { format!("{whole}.{fraction}k") }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::*;

    struct FixedClient(RepositoryResponse,);

    impl RepositoryClient for FixedClient
    {
        async fn fetch_repository(
            &self,
            _repository: &RepositoryRef,
        ) -> Result<RepositoryResponse, StarFetchError,>
        {
            Ok(self.0.clone(),)
        }
    }

    fn ok_body(body: &str,) -> RepositoryResponse
    {
        RepositoryResponse {
            status: 200, body: body.to_owned(),
        }
    }

    proptest! {
        #[test]
        fn small_counts_render_verbatim(count in 0u64..1000) {
            prop_assert_eq!(format_stars(count), count.to_string());
        }

        #[test]
        fn large_counts_render_in_thousands(count in 1000u64..100_000_000) {
            let rendered = format_stars(count);
            prop_assert!(rendered.ends_with('k'));
            prop_assert!(!rendered.ends_with(".0k"));

            let value: f64 = rendered.trim_end_matches('k').parse().expect("numeric prefix");
            let exact = count as f64 / 1000.0;
            prop_assert!((value - exact).abs() <= 0.05 + 1e-9);
        }
    }

    #[test]
    fn format_stars_matches_documented_examples()
    {
        assert_eq!(format_stars(0), "0");
        assert_eq!(format_stars(42), "42");
        assert_eq!(format_stars(999), "999");
        assert_eq!(format_stars(1000), "1k");
        assert_eq!(format_stars(1049), "1k");
        assert_eq!(format_stars(1050), "1.1k");
        assert_eq!(format_stars(1500), "1.5k");
        assert_eq!(format_stars(2549), "2.5k");
        assert_eq!(format_stars(4231), "4.2k");
        assert_eq!(format_stars(9950), "10k");
    }

    #[test]
    fn format_stars_keeps_thousands_suffix_for_millions()
    {
        assert_eq!(format_stars(1_500_000), "1500k");
        assert_eq!(format_stars(999_950), "1000k");
        assert_eq!(format_stars(u64::MAX), "18446744073709551.6k");
    }

    #[test]
    fn repository_ref_parses_owner_and_name()
    {
        let repository: RepositoryRef = " RichQAQ/PasteMD ".parse().expect("valid repository",);
        assert_eq!(repository.owner(), "RichQAQ");
        assert_eq!(repository.name(), "PasteMD");
        assert_eq!(repository.to_string(), DEFAULT_REPOSITORY);
        assert_eq!(repository, RepositoryRef::default());
        assert_eq!(repository.api_path(), "/repos/RichQAQ/PasteMD");
        assert_eq!(repository.html_url(), "https://github.com/RichQAQ/PasteMD");
    }

    #[test]
    fn repository_ref_rejects_malformed_input()
    {
        for input in ["PasteMD", "/PasteMD", "RichQAQ/", "a/b/c", "  "] {
            let error = input.parse::<RepositoryRef>().expect_err("expected rejection",);
            assert!(matches!(error, Error::Validation { .. }), "{input}: {error:?}");
        }
    }

    #[test]
    fn extract_star_count_reads_numeric_field()
    {
        let response = ok_body(r#"{"full_name":"RichQAQ/PasteMD","stargazers_count":4231}"#,);
        assert_eq!(extract_star_count(&response), Ok(4231));
    }

    #[test]
    fn extract_star_count_rejects_failure_status()
    {
        let response = RepositoryResponse {
            status: 404,
            body:   r#"{"message":"Not Found"}"#.to_owned(),
        };
        assert_eq!(
            extract_star_count(&response),
            Err(StarFetchError::Status {
                status: 404
            })
        );
    }

    #[test]
    fn extract_star_count_rejects_malformed_body()
    {
        let result = extract_star_count(&ok_body("<html>rate limited</html>",),);
        assert!(matches!(result, Err(StarFetchError::Malformed { .. })));
    }

    #[test]
    fn extract_star_count_requires_integer_field()
    {
        for body in [
            r#"{"watchers":12}"#,
            r#"{"stargazers_count":"12"}"#,
            r#"{"stargazers_count":-3}"#,
            r#"{"stargazers_count":1.5}"#,
            r#"[1,2,3]"#,
            "null",
        ] {
            assert_eq!(
                extract_star_count(&ok_body(body,)),
                Err(StarFetchError::MissingField),
                "{body}"
            );
        }
    }

    #[tokio::test]
    async fn fetch_star_count_uses_client_response()
    {
        let client = FixedClient(ok_body(r#"{"stargazers_count":17}"#,),);
        let count = fetch_star_count(&client, &RepositoryRef::default(),)
            .await
            .expect("count should be extracted",);
        assert_eq!(count, 17);
    }

    #[tokio::test]
    async fn public_client_builds_on_runtime()
    {
        assert!(GitHubClient::public().is_ok());
    }

    #[test]
    fn format_stars_rounds_half_tenths_up()
    {
        // Browser toFixed(1) gives 1.1k and 2.5k here; integer half-up is intended.
        assert_eq!(format_stars(1150), "1.2k");
        assert_eq!(format_stars(2550), "2.6k");
        assert_eq!(format_stars(1149), "1.1k");
    }

    #[test]
    fn star_count_defaults_to_unknown()
    {
        assert_eq!(StarCount::default(), StarCount::Unknown);
    }
}

// ABOUTME: The playfeed Client that fetches the catalog feed and per-title detail documents.
// ABOUTME: Each operation is one cancellable request whose JSON is normalized into Summary or Details.

use std::future::Future;

use playfeed_normalize::{
    extract_summaries, normalize_details, normalize_path, Details, Fallback, Summary,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::error::FetchError;
use crate::options::{ClientBuilder, Options};
use crate::resource::fetch_json;

const CATALOG_CONTEXT: &str = "catalog feed";

/// Client for the upstream content API.
///
/// Holds no per-call state: calls with different tokens are independent, and
/// nothing is cached between them.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Result<Self, FetchError> {
        let base_url = Url::parse(&opts.base_url).map_err(|source| FetchError::InvalidUrl {
            url: opts.base_url.clone(),
            source,
        })?;

        let http_client = match opts.http_client.clone() {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .map_err(|e| FetchError::transport("building HTTP client", e))?,
        };

        Ok(Self {
            opts,
            http_client,
            base_url,
        })
    }

    /// Absolute url of the catalog feed.
    pub fn catalog_url(&self) -> Result<Url, FetchError> {
        self.endpoint(&self.opts.catalog_path)
    }

    /// Absolute url of the detail document for `path`, after normalization.
    pub fn details_url(&self, path: &str) -> Result<Url, FetchError> {
        let endpoint = format!("{}{}", self.opts.details_path_prefix, normalize_path(path));
        self.endpoint(&endpoint)
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|source| FetchError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                source,
            })
    }

    /// Fetch the catalog and map it to summaries, in feed order.
    ///
    /// Fails with [`FetchError::EmptyFeed`] when the feed lists nothing and with
    /// [`FetchError::NoMappableEntries`] when none of its entries can be mapped.
    pub async fn fetch_catalog(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Summary>, FetchError> {
        let url = self.catalog_url()?;
        let envelope = until_canceled(
            cancel,
            CATALOG_CONTEXT,
            fetch_json(&self.http_client, &url, &self.opts.headers, CATALOG_CONTEXT),
        )
        .await?;

        let extraction = extract_summaries(&envelope);
        if extraction.raw_count == 0 {
            return Err(FetchError::EmptyFeed);
        }
        if extraction.summaries.is_empty() {
            return Err(FetchError::NoMappableEntries {
                discarded: extraction.discarded(),
            });
        }

        debug!(
            entries = extraction.summaries.len(),
            discarded = extraction.discarded(),
            "catalog normalized"
        );
        Ok(extraction.summaries)
    }

    /// Fetch the detail document for `path` and map it to a Details record.
    ///
    /// `fallback` fills any field the document lacks; pass [`Fallback::None`]
    /// when nothing is known about the title yet.
    pub async fn fetch_details<'a>(
        &self,
        path: &str,
        cancel: &CancellationToken,
        fallback: impl Into<Fallback<'a>>,
    ) -> Result<Details, FetchError> {
        let fallback = fallback.into();
        let context = format!("details for {path:?}");
        let url = self.details_url(path)?;

        let document = until_canceled(
            cancel,
            &context,
            fetch_json(&self.http_client, &url, &self.opts.headers, &context),
        )
        .await?;

        Ok(normalize_details(&document, fallback, path))
    }
}

/// Drives `fut` unless `cancel` fires first. Dropping `fut` aborts its request.
async fn until_canceled<T>(
    cancel: &CancellationToken,
    context: &str,
    fut: impl Future<Output = Result<T, FetchError>>,
) -> Result<T, FetchError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(context, "request canceled");
            Err(FetchError::canceled(context))
        }
        result = fut => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::builder()
            .base_url("https://play.example.com")
            .catalog_path("/api/feed")
            .details_path_prefix("/api/content/path/")
            .build()
            .unwrap()
    }

    #[test]
    fn test_catalog_url() {
        assert_eq!(
            client().catalog_url().unwrap().as_str(),
            "https://play.example.com/api/feed"
        );
    }

    #[test]
    fn test_details_url_uses_normalized_path() {
        let client = client();
        for path in ["film/abc", "/film/abc", "https://other.example.com/film/abc?x=1"] {
            assert_eq!(
                client.details_url(path).unwrap().as_str(),
                "https://play.example.com/api/content/path/film/abc"
            );
        }
    }

    #[test]
    fn test_details_url_stays_under_prefix() {
        let client = client();
        for path in ["../../feeds/x", "/film/../../feeds/x", "%2e%2e/%2e%2e/feeds/x"] {
            let url = client.details_url(path).unwrap();
            assert_eq!(url.path(), "/api/content/path/feeds/x", "path: {path}");
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Client::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_pre_canceled_token_short_circuits() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = client().fetch_catalog(&cancel).await.unwrap_err();
        assert!(err.is_canceled());
    }
}

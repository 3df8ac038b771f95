use serde_json::Value;
use url::Url;

use crate::FetchFailure;

/// Connection settings for the client runtime.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Origin every request path is resolved against.
    pub origin: Url,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            origin: Url::parse("http://127.0.0.1:8000").expect("static origin"),
        }
    }
}

/// Issues read requests against a fixed origin.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// GETs `origin + path` and parses the body as JSON on a 2xx status.
    ///
    /// A non-2xx status fails with the response body as text; the JSON parse
    /// is never attempted on that branch. Exactly one network call per
    /// invocation: no retry, no timeout, no caching.
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchFailure>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    origin: Url,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Transport defaults apply: no request timeout, redirects followed.
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            origin: settings.origin,
            client: reqwest::Client::new(),
        }
    }

    fn request_url(&self, path: &str) -> Result<Url, FetchFailure> {
        // Paths arrive fully built and percent-encoded; joining onto the
        // origin must not re-encode them.
        self.origin
            .join(path)
            .map_err(|err| FetchFailure::Transport(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchFailure> {
        let url = self.request_url(path)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(map_transport_error)?;
            return Err(FetchFailure::Status {
                code: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(map_transport_error)
    }
}

fn map_transport_error(err: reqwest::Error) -> FetchFailure {
    FetchFailure::Transport(err.to_string())
}

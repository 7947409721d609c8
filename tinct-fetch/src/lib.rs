//! TINCT Fetch - Stylesheet Aggregator
//!
//! Retrieves every linked stylesheet body and joins them into one text
//! corpus for the scanner. Fetches are issued concurrently and awaited
//! jointly; an individual failure degrades that sheet to an empty
//! contribution and never cancels its siblings. There is no timeout and no
//! retry anywhere in this layer: a hung request stalls the load (accepted
//! limitation), a failed one is absorbed.

use async_trait::async_trait;
use futures_util::future::join_all;
use tinct_core::FetchError;

/// Boundary inserted between stylesheet bodies so a token never spans two
/// sheets.
pub const SHEET_BOUNDARY: &str = "\n";

/// External collaborator: retrieves one stylesheet body by reference.
#[async_trait]
pub trait StylesheetFetcher: Send + Sync {
    async fn fetch_body(&self, href: &str) -> Result<String, FetchError>;
}

/// HTTP-backed fetcher over a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpStylesheetFetcher {
    client: reqwest::Client,
}

impl HttpStylesheetFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StylesheetFetcher for HttpStylesheetFetcher {
    async fn fetch_body(&self, href: &str) -> Result<String, FetchError> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            href: href.to_string(),
            reason: e.to_string(),
        };
        let response = self.client.get(href).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                href: href.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(transport)
    }
}

/// Fetch every referenced stylesheet concurrently and join the bodies in
/// document order.
///
/// Per-sheet failures are contained: the failing sheet contributes an empty
/// string (logged at warn) and aggregation continues with the rest. The
/// zero-references case is a configuration problem decided by the caller,
/// not here.
pub async fn aggregate<F: StylesheetFetcher>(fetcher: &F, hrefs: &[String]) -> String {
    let fetches = hrefs.iter().map(|href| async move {
        match fetcher.fetch_body(href).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(href = %href, error = %err, "stylesheet fetch degraded to empty");
                String::new()
            }
        }
    });
    // join_all preserves input order, so the corpus follows document order.
    join_all(fetches).await.join(SHEET_BOUNDARY)
}

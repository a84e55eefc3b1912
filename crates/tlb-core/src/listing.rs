//! TeraBox share-list API client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::share::ShareReference;

/// Page size for a single listing call. The bot never paginates: one page of
/// the most recent entries is enough for a chat reply.
const LIST_LIMIT: u32 = 100;

/// One entry of a share listing. The API returns more fields than these; the
/// rest are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct FileRecord {
    pub filename: Option<String>,
    #[serde(default)]
    pub size: u64,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    errno: i32,
    errmsg: Option<String>,
    #[serde(default)]
    list: Vec<FileRecord>,
}

/// Failure side of a listing call.
///
/// `Display` renders the exact text shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// Network failure, timeout, non-success HTTP status or an unreadable
    /// body.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Well-formed response with a non-zero `errno`.
    #[error("API error: {0}")]
    Api(String),
}

pub type ListingResult = std::result::Result<Vec<FileRecord>, ListingError>;

/// Port for fetching a share listing.
///
/// `TeraboxClient` is the production implementation; handler tests substitute
/// a stub.
#[async_trait]
pub trait ShareListing: Send + Sync {
    async fn fetch_listing(&self, reference: &ShareReference) -> ListingResult;
}

/// HTTP client for the TeraBox `share/list` endpoint.
///
/// Single attempt per call, no caching. The request timeout is baked into
/// the underlying reqwest client at construction.
pub struct TeraboxClient {
    http: reqwest::Client,
    api_base: String,
    cookie: String,
}

impl TeraboxClient {
    pub fn new(cfg: &Config) -> crate::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.list_timeout)
            .build()
            .map_err(|e| crate::Error::Config(format!("http client: {e}")))?;

        Ok(Self {
            http,
            api_base: cfg.api_base.clone(),
            cookie: format!("ndus={}", cfg.ndus_cookie),
        })
    }
}

#[async_trait]
impl ShareListing for TeraboxClient {
    async fn fetch_listing(&self, reference: &ShareReference) -> ListingResult {
        let share_id = reference.share_id.as_deref().unwrap_or_default();

        debug!(share_id, owner_key = %reference.owner_key, "listing share");

        let resp = self
            .http
            .get(format!("{}/share/list", self.api_base))
            .query(&[
                ("shareid", share_id.to_string()),
                ("uk", reference.owner_key.clone()),
                ("limit", LIST_LIMIT.to_string()),
                ("order", "time".to_string()),
                ("desc", "1".to_string()),
            ])
            .header(reqwest::header::COOKIE, &self.cookie)
            .send()
            .await
            .map_err(|e| ListingError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ListingError::Transport(format!("HTTP status {status}")));
        }

        // A success status with an undecodable body counts as transport
        // failure, not an API error.
        let body: ListResponse = resp
            .json()
            .await
            .map_err(|e| ListingError::Transport(e.to_string()))?;

        if body.errno != 0 {
            let msg = body
                .errmsg
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!(errno = body.errno, "share list rejected: {msg}");
            return Err(ListingError::Api(msg));
        }

        Ok(body.list)
    }
}

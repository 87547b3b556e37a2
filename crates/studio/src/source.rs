//! Overlay data sources.
//!
//! The controller never talks to the network directly; it goes through an
//! [`OverlaySource`]. [`HttpOverlaySource`] calls the real API with
//! [`reqwest`], [`FixtureOverlaySource`] answers every request with a fixed
//! image so the UI can be exercised without a server.

use std::time::Duration;

use async_trait::async_trait;
use roomsheet_core::hotspot::{Hotspot, HotspotTable};
use roomsheet_core::sheet::{Sheet, SheetCatalog};
use roomsheet_core::wire::{ApplySheetRequest, ApplySheetResponse, ErrorBody};
use serde::Deserialize;

use crate::config::OverlaySourceConfig;
use crate::error::StudioError;

/// Backend that turns an apply-sheet request into an overlay URL.
#[async_trait]
pub trait OverlaySource: Send + Sync {
    /// Short label for logs (`"http"`, `"fixture"`, ...).
    fn kind(&self) -> &'static str;

    /// Request a composite and return the URL of the overlay layer.
    async fn apply_sheet(&self, request: &ApplySheetRequest) -> Result<String, StudioError>;

    /// Hotspot table the markers are drawn from.
    async fn hotspots(&self) -> Result<HotspotTable, StudioError>;

    /// Sheets offered in the picker.
    async fn sheets(&self) -> Result<SheetCatalog, StudioError>;
}

/// Build the source selected by configuration.
pub fn build_source(config: &OverlaySourceConfig) -> Result<Box<dyn OverlaySource>, StudioError> {
    match config {
        OverlaySourceConfig::Http {
            api_url,
            timeout_secs,
        } => Ok(Box::new(HttpOverlaySource::new(
            api_url.clone(),
            Duration::from_secs(*timeout_secs),
        )?)),
        OverlaySourceConfig::Fixture { overlay_url } => {
            Ok(Box::new(FixtureOverlaySource::new(overlay_url.clone())))
        }
    }
}

/* --------------------------------------------------------------------------
HTTP
-------------------------------------------------------------------------- */

/// `{ "data": T }` part of the API's list envelope.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// HTTP client for the overlay API.
pub struct HttpOverlaySource {
    client: reqwest::Client,
    api_url: String,
}

impl HttpOverlaySource {
    /// Create a client for the API at `api_url` (e.g. `http://host:3000/api`)
    /// with a per-request `timeout`.
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, StudioError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url))
    }

    /// Create a source reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ---- private helpers ----

    /// Map a non-2xx response to [`StudioError::Rejected`] when the body is
    /// the API's error envelope, or [`StudioError::Api`] otherwise.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StudioError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(match serde_json::from_str::<ErrorBody>(&body) {
            Ok(envelope) => StudioError::Rejected {
                status: status.as_u16(),
                error: envelope.error,
                code: envelope.code,
                message: envelope.message,
            },
            Err(_) => StudioError::Api {
                status: status.as_u16(),
                body,
            },
        })
    }

    async fn get_data<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, StudioError> {
        let response = self
            .client
            .get(format!("{}{path}", self.api_url))
            .send()
            .await?;
        let envelope: DataEnvelope<T> = Self::ensure_success(response).await?.json().await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl OverlaySource for HttpOverlaySource {
    fn kind(&self) -> &'static str {
        "http"
    }

    /// Sends `POST {api_url}/apply-sheet`.
    async fn apply_sheet(&self, request: &ApplySheetRequest) -> Result<String, StudioError> {
        tracing::debug!(api_url = %self.api_url, ?request, "Requesting overlay");

        let response = self
            .client
            .post(format!("{}/apply-sheet", self.api_url))
            .json(request)
            .send()
            .await?;
        let body: ApplySheetResponse = Self::ensure_success(response).await?.json().await?;

        if !body.success {
            return Err(StudioError::Api {
                status: 200,
                body: body.message,
            });
        }
        Ok(body.overlay_image_url)
    }

    async fn hotspots(&self) -> Result<HotspotTable, StudioError> {
        let hotspots: Vec<Hotspot> = self.get_data("/hotspots").await?;
        Ok(HotspotTable::new(hotspots)?)
    }

    async fn sheets(&self) -> Result<SheetCatalog, StudioError> {
        let sheets: Vec<Sheet> = self.get_data("/sheets").await?;
        Ok(SheetCatalog::new(sheets)?)
    }
}

/* --------------------------------------------------------------------------
Fixture
-------------------------------------------------------------------------- */

/// Offline source: every request "succeeds" with the same overlay image and
/// the built-in catalogs are served.
#[derive(Debug, Clone)]
pub struct FixtureOverlaySource {
    overlay_url: String,
}

impl FixtureOverlaySource {
    pub fn new(overlay_url: String) -> Self {
        Self { overlay_url }
    }
}

#[async_trait]
impl OverlaySource for FixtureOverlaySource {
    fn kind(&self) -> &'static str {
        "fixture"
    }

    async fn apply_sheet(&self, request: &ApplySheetRequest) -> Result<String, StudioError> {
        tracing::debug!(?request, overlay_url = %self.overlay_url, "Fixture overlay response");
        Ok(self.overlay_url.clone())
    }

    async fn hotspots(&self) -> Result<HotspotTable, StudioError> {
        Ok(HotspotTable::default())
    }

    async fn sheets(&self) -> Result<SheetCatalog, StudioError> {
        Ok(SheetCatalog::default())
    }
}

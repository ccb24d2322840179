use async_trait::async_trait;
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use creatorflow::pricing::country_name;

use crate::services::http::{NotSuccessResponseInfo, ResponseExt};

#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {0}")]
    NotSuccess(#[from] NotSuccessResponseInfo),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("response has no country code")]
    MissingCountryCode,
    #[error("malformed country code '{0}'")]
    MalformedCountryCode(String),
}

#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Returns the ISO 3166-1 alpha-2 code of the visitor's country.
    async fn detect_country(&self) -> Result<String, GeoError>;
}

#[derive(Debug, Clone, Deserialize)]
struct IpLookupResponse {
    country_code: Option<String>,
}

fn country_code(body: IpLookupResponse) -> Result<String, GeoError> {
    let code = body
        .country_code
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
        .ok_or(GeoError::MissingCountryCode)?;
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GeoError::MalformedCountryCode(code));
    }
    Ok(code)
}

/// Single-request IP geolocation against an ipapi-style endpoint answering
/// `{"country_code": "DE", ...}`.
#[derive(Clone)]
pub struct HttpGeoLocator {
    url: String,
    client: reqwest::Client,
}

impl HttpGeoLocator {
    pub fn new(url: String, client: reqwest::Client) -> Self {
        Self { url, client }
    }
}

#[async_trait]
impl GeoLocator for HttpGeoLocator {
    async fn detect_country(&self) -> Result<String, GeoError> {
        let res = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .check_success()
            .await?;

        let body = res
            .json::<IpLookupResponse>()
            .await
            .map_err(|e| GeoError::InvalidResponse(e.to_string()))?;

        country_code(body)
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    iso_code: String,
    cached_at: Instant,
}

/// Remembers the last successful lookup so that reloading the page does not hit the
/// lookup service again before `ttl` elapses.
pub struct CachedGeoLocator<L> {
    inner: L,
    cache: Arc<Mutex<Option<CacheEntry>>>,
    ttl: Duration,
    forced_iso_code: Option<String>,
}

impl<L: GeoLocator> CachedGeoLocator<L> {
    pub fn new(inner: L, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Arc::new(Mutex::new(None)),
            ttl,
            forced_iso_code: None,
        }
    }

    /// Developer override for testing: `FORCE_ISOCODE` (e.g. "NG", "DE") replaces the
    /// network lookup.
    pub fn with_env_override(mut self) -> Self {
        self.forced_iso_code = std::env::var("FORCE_ISOCODE").ok();
        self
    }

    fn forced(&self) -> Option<String> {
        let iso = self.forced_iso_code.as_ref()?.trim().to_uppercase();
        (iso.len() == 2).then_some(iso)
    }

    fn cached(&self) -> Option<String> {
        let guard = self.cache.lock().ok()?;
        let iso = guard
            .as_ref()
            .filter(|entry| entry.cached_at.elapsed() < self.ttl)
            .map(|entry| entry.iso_code.clone());
        iso
    }
}

#[async_trait]
impl<L: GeoLocator> GeoLocator for CachedGeoLocator<L> {
    async fn detect_country(&self) -> Result<String, GeoError> {
        if let Some(iso) = self.forced() {
            tracing::info!("[DEBUG] Forced country: {}", iso);
            return Ok(iso);
        }

        if let Some(iso) = self.cached() {
            tracing::debug!("Using cached country {}", iso);
            return Ok(iso);
        }

        let iso = self.inner.detect_country().await?;
        tracing::info!(
            "Detected country: {} ({})",
            country_name(&iso).unwrap_or("unlisted"),
            iso
        );
        if let Ok(mut guard) = self.cache.lock() {
            *guard = Some(CacheEntry {
                iso_code: iso.clone(),
                cached_at: Instant::now(),
            });
        }
        Ok(iso)
    }
}

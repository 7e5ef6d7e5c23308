//! Request guards: API keys and rate limiting
//!
//! Both refuse through [`ApiFailure`], so a rejected request carries the
//! same envelope as a malformed one.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::{num::NonZeroU32, sync::Arc};

use crate::error::ApiFailure;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Paths reachable without a key: health, docs and tool info
fn is_public(path: &str) -> bool {
    matches!(path, "/health" | "/api/info")
        || path.starts_with("/docs")
        || path.starts_with("/api-docs")
}

// ============================================================================
// API Key Authentication
// ============================================================================

/// Accepted API keys; an empty set leaves the API open
#[derive(Debug, Clone, Default)]
pub struct ApiKeyConfig {
    keys: Vec<String>,
}

impl ApiKeyConfig {
    /// Parse a comma-separated key list, skipping blank entries
    pub fn from_keys(list: &str) -> Self {
        Self {
            keys: list
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn enabled(&self) -> bool {
        !self.keys.is_empty()
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Decide on the key a request presented, if any.
    pub fn check(&self, presented: Option<&str>) -> Result<(), ApiFailure> {
        if !self.enabled() {
            return Ok(());
        }
        match presented {
            None => Err(ApiFailure::MissingApiKey),
            Some(key) if self.keys.iter().any(|k| k == key) => Ok(()),
            Some(_) => Err(ApiFailure::InvalidApiKey),
        }
    }
}

pub async fn auth_middleware(
    State(config): State<Arc<ApiKeyConfig>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiFailure> {
    if !is_public(request.uri().path()) {
        let presented = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());
        if let Err(err) = config.check(presented) {
            tracing::warn!(path = %request.uri().path(), error = %err, "rejected request");
            return Err(err);
        }
    }
    Ok(next.run(request).await)
}

// ============================================================================
// Rate Limiting
// ============================================================================

pub type AppRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Global request quota, taken from the server's command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
    pub enabled: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::new(10, 20)
    }
}

impl RateLimitConfig {
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Zero rates are raised to one.
    fn quota(&self) -> Quota {
        let rps = NonZeroU32::new(self.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(self.burst_size).unwrap_or(NonZeroU32::MIN);
        Quota::per_second(rps).allow_burst(burst)
    }
}

/// Limiter state shared by every request of one router
#[derive(Clone)]
pub struct RateGuard {
    limiter: Option<Arc<AppRateLimiter>>,
    config: RateLimitConfig,
}

impl RateGuard {
    pub fn new(config: RateLimitConfig) -> Self {
        let limiter = config
            .enabled
            .then(|| Arc::new(RateLimiter::direct(config.quota())));
        Self { limiter, config }
    }

    fn admit(&self) -> Result<(), ApiFailure> {
        match &self.limiter {
            Some(limiter) if limiter.check().is_err() => Err(ApiFailure::RateLimited {
                requests_per_second: self.config.requests_per_second,
                burst_size: self.config.burst_size,
            }),
            _ => Ok(()),
        }
    }
}

pub async fn rate_limit_middleware(
    State(guard): State<RateGuard>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiFailure> {
    if request.uri().path() != "/health" {
        guard.admit()?;
    }
    Ok(next.run(request).await)
}

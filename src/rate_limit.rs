//! Rate-limit state reported by the service on every response.
//!
//! Pexels advertises its quota through three headers:
//! `X-Ratelimit-Limit`, `X-Ratelimit-Remaining` and `X-Ratelimit-Reset`
//! (unix seconds). Each is recorded independently; a missing or malformed
//! header leaves the last-observed value in place.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

pub const LIMIT_HEADER: &str = "x-ratelimit-limit";
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RESET_HEADER: &str = "x-ratelimit-reset";

const UNSET: u64 = u64::MAX;
const UNSET_RESET: i64 = i64::MIN;

/// Last-observed rate-limit counters, shared by all clones of a client.
#[derive(Debug)]
pub struct RateLimit {
    limit: AtomicU64,
    remaining: AtomicU64,
    reset: AtomicI64,
}

/// Point-in-time copy of [`RateLimit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitSnapshot {
    pub limit: Option<u32>,
    pub remaining: Option<u32>,
    pub reset: Option<DateTime<Utc>>,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            limit: AtomicU64::new(UNSET),
            remaining: AtomicU64::new(UNSET),
            reset: AtomicI64::new(UNSET_RESET),
        }
    }
}

impl RateLimit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whichever rate-limit headers are present and parseable.
    pub fn update(&self, headers: &HeaderMap) {
        if let Some(limit) = parse_header::<u32>(headers, LIMIT_HEADER) {
            self.limit.store(u64::from(limit), Ordering::Relaxed);
        }
        if let Some(remaining) = parse_header::<u32>(headers, REMAINING_HEADER) {
            self.remaining.store(u64::from(remaining), Ordering::Relaxed);
        }
        if let Some(reset) = parse_header::<i64>(headers, RESET_HEADER) {
            if DateTime::from_timestamp(reset, 0).is_some() {
                self.reset.store(reset, Ordering::Relaxed);
            }
        }
    }

    /// Requests remaining in the current period, once the service has told us.
    pub fn remaining(&self) -> Option<u32> {
        load_u32(&self.remaining)
    }

    /// Requests permitted per period.
    pub fn limit(&self) -> Option<u32> {
        load_u32(&self.limit)
    }

    /// When the current period ends.
    pub fn reset(&self) -> Option<DateTime<Utc>> {
        match self.reset.load(Ordering::Relaxed) {
            UNSET_RESET => None,
            secs => DateTime::from_timestamp(secs, 0),
        }
    }

    pub fn snapshot(&self) -> RateLimitSnapshot {
        RateLimitSnapshot {
            limit: self.limit(),
            remaining: self.remaining(),
            reset: self.reset(),
        }
    }
}

fn load_u32(value: &AtomicU64) -> Option<u32> {
    match value.load(Ordering::Relaxed) {
        UNSET => None,
        v => u32::try_from(v).ok(),
    }
}

fn parse_header<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    let raw = headers.get(name)?;
    let parsed = raw.to_str().ok().and_then(|s| s.trim().parse::<T>().ok());
    if parsed.is_none() {
        tracing::warn!(header = name, value = ?raw, "ignoring unparsable rate-limit header");
    }
    parsed
}

// ABOUTME: Sliding-window rate limiting for tool invocation throttling
// ABOUTME: Tracks per-client request timestamps with an injectable time source
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Sliding-Window Rate Limiting
//!
//! Guards tool invocation with a per-client sliding time window. The limiter
//! is an explicitly constructed object owned by the server resources; there
//! is no global state. The caller supplies the current timestamp so tests
//! can drive the clock deterministically.
//!
//! Old timestamps are pruned per client on access only. A client identifier
//! that is never seen again keeps its (bounded, <= `max_requests`) record
//! until process exit; a periodic sweep across all clients is not performed.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Rate limit decision for a single request
#[derive(Debug, Clone, Serialize)]
pub struct RateLimitStatus {
    /// Whether the request is rate limited
    pub is_rate_limited: bool,
    /// Maximum requests allowed in the window
    pub limit: u32,
    /// Remaining requests in the current window
    pub remaining: u32,
    /// When the oldest in-window request falls out of the window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_at: Option<DateTime<Utc>>,
}

/// Per-client sliding-window request counter.
///
/// State is a mapping from client identifier to the timestamps of requests
/// seen inside the window, behind a single mutex so the read-filter-append
/// sequence is atomic under concurrent request handlers.
pub struct SlidingWindowLimiter {
    max_requests: u32,
    time_window: Duration,
    clients: Mutex<HashMap<String, Vec<DateTime<Utc>>>>,
}

impl SlidingWindowLimiter {
    /// Create a limiter allowing `max_requests` per `window_secs` seconds
    #[must_use]
    pub fn new(max_requests: u32, window_secs: i64) -> Self {
        Self {
            max_requests,
            time_window: Duration::seconds(window_secs),
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Maximum requests per window
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.max_requests
    }

    /// Window length in seconds
    #[must_use]
    pub fn window_secs(&self) -> i64 {
        self.time_window.num_seconds()
    }

    /// Check whether a request from `client_id` at `now` is limited, and
    /// record it if not.
    ///
    /// A limited request is *not* recorded, so a throttled client regains
    /// capacity as soon as older requests age out of the window.
    pub fn check_and_record(&self, client_id: &str, now: DateTime<Utc>) -> RateLimitStatus {
        let cutoff = now - self.time_window;
        let mut clients = self
            .clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let timestamps = clients.entry(client_id.to_owned()).or_default();
        timestamps.retain(|ts| *ts > cutoff);

        let in_window = u32::try_from(timestamps.len()).unwrap_or(u32::MAX);
        if in_window >= self.max_requests {
            let reset_at = timestamps.first().map(|oldest| *oldest + self.time_window);
            return RateLimitStatus {
                is_rate_limited: true,
                limit: self.max_requests,
                remaining: 0,
                reset_at,
            };
        }

        timestamps.push(now);
        RateLimitStatus {
            is_rate_limited: false,
            limit: self.max_requests,
            remaining: self.max_requests - in_window - 1,
            reset_at: None,
        }
    }

    /// Remaining capacity for a client without recording a request
    #[must_use]
    pub fn remaining(&self, client_id: &str, now: DateTime<Utc>) -> u32 {
        let cutoff = now - self.time_window;
        let clients = self
            .clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let in_window = clients
            .get(client_id)
            .map_or(0, |ts| ts.iter().filter(|t| **t > cutoff).count());
        self.max_requests
            .saturating_sub(u32::try_from(in_window).unwrap_or(u32::MAX))
    }
}

/// Derive the rate-limit client identity from a tool-call payload.
///
/// Preference order: an explicit `user_id`, then the conversation
/// `thread_id`, then a shared `"anonymous"` bucket. The shared bucket is a
/// deliberate coarse fallback for unidentified callers.
#[must_use]
pub fn client_id_from_args(args: &Value) -> String {
    for key in ["user_id", "thread_id"] {
        if let Some(id) = args.get(key).and_then(Value::as_str) {
            if !id.is_empty() {
                return id.to_owned();
            }
        }
    }
    "anonymous".to_owned()
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client-side pacing of outgoing requests
//!
//! IG enforces per-key and per-account allowances. Every dispatched call waits
//! on this token bucket first, so a burst of endpoint calls is spread out
//! instead of being rejected. The limiter only delays; it never fails a call.

use crate::application::config::RateLimiterConfig;
use governor::{DefaultDirectRateLimiter, Quota};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Token bucket shared by every request of one session client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl RateLimiter {
    /// Creates a limiter replenishing `max_requests` cells every `period_seconds`
    ///
    /// A zero period or a zero request count disables pacing.
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let limiter = quota_for(config).map(|quota| Arc::new(DefaultDirectRateLimiter::direct(quota)));
        Self { limiter }
    }

    /// Limiter that never waits
    #[must_use]
    pub fn unlimited() -> Self {
        Self { limiter: None }
    }

    /// Waits until the next request may be sent
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            if limiter.check().is_err() {
                trace!("Rate limit reached, waiting for a free slot");
                limiter.until_ready().await;
            }
        }
    }

    /// Whether a request could be sent right now, consuming a slot if so
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter
            .as_ref()
            .is_none_or(|limiter| limiter.check().is_ok())
    }

    /// Whether pacing is active
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }
}

fn quota_for(config: &RateLimiterConfig) -> Option<Quota> {
    let max_requests = NonZeroU32::new(config.max_requests)?;
    let period = Duration::from_secs(config.period_seconds);
    let interval = period.checked_div(max_requests.get())?;
    let burst = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
    Quota::with_period(interval).map(|quota| quota.allow_burst(burst))
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

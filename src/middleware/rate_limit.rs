//! Fixed-window throttle for credential endpoints (login, register, password reset).

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{header::RETRY_AFTER, HeaderName, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;

use crate::config::env_bool;
use crate::response::AppError;

const RATE_LIMIT_LIMIT: HeaderName = HeaderName::from_static("ratelimit-limit");
const RATE_LIMIT_REMAINING: HeaderName = HeaderName::from_static("ratelimit-remaining");
const RATE_LIMIT_RESET: HeaderName = HeaderName::from_static("ratelimit-reset");

const DEFAULT_AUTH_WINDOW_MS: u64 = 5 * 60 * 1000;
const DEFAULT_AUTH_MAX: u64 = 30;

static AUTH_LIMITER: OnceLock<Arc<RateLimiter>> = OnceLock::new();

pub async fn auth_rate_limit(req: Request<Body>, next: Next) -> Response {
    if !rate_limit_enabled() {
        return next.run(req).await;
    }
    let Some(ip) = extract_client_ip(&req).filter(|ip| !ip.is_loopback()) else {
        return next.run(req).await;
    };

    let limiter = AUTH_LIMITER.get_or_init(|| {
        Arc::new(RateLimiter::new(RateLimitConfig {
            window_ms: env_u64("AUTH_RATE_LIMIT_WINDOW_MS").unwrap_or(DEFAULT_AUTH_WINDOW_MS),
            max: env_u64("AUTH_RATE_LIMIT_MAX").unwrap_or(DEFAULT_AUTH_MAX),
        }))
    });

    let check = limiter.check(ip, now_ms()).await;

    if !check.allowed {
        tracing::warn!(%ip, "auth rate limit exceeded");
        let mut res =
            AppError::too_many_requests("Too many attempts, please try again later").into_response();
        apply_rate_limit_headers(&mut res, check);
        return res;
    }

    let mut res = next.run(req).await;
    apply_rate_limit_headers(&mut res, check);
    res
}

fn apply_rate_limit_headers(res: &mut Response, check: RateLimitCheck) {
    if let Ok(value) = HeaderValue::from_str(&check.limit.to_string()) {
        res.headers_mut().insert(RATE_LIMIT_LIMIT, value);
    }
    if let Ok(value) = HeaderValue::from_str(&check.remaining.to_string()) {
        res.headers_mut().insert(RATE_LIMIT_REMAINING, value);
    }
    if let Ok(value) = HeaderValue::from_str(&check.reset_after_seconds.to_string()) {
        res.headers_mut().insert(RATE_LIMIT_RESET, value.clone());
        if check.remaining == 0 {
            res.headers_mut().insert(RETRY_AFTER, value);
        }
    }
}

fn rate_limit_enabled() -> bool {
    env_bool("AUTH_RATE_LIMIT").unwrap_or(true)
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok()?.trim().parse::<u64>().ok()
}

fn extract_client_ip(req: &Request<Body>) -> Option<IpAddr> {
    if env_bool("TRUST_PROXY").unwrap_or(false) {
        let forwarded = req
            .headers()
            .get(HeaderName::from_static("x-forwarded-for"))
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| raw.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok());
        if forwarded.is_some() {
            return forwarded;
        }
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
}

#[derive(Debug, Clone, Copy)]
struct RateLimitConfig {
    window_ms: u64,
    max: u64,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    window_start_ms: u64,
    hits: u64,
}

#[derive(Debug, Clone, Copy)]
struct RateLimitCheck {
    allowed: bool,
    limit: u64,
    remaining: u64,
    reset_after_seconds: u64,
}

#[derive(Debug)]
struct RateLimiterState {
    entries: HashMap<IpAddr, Entry>,
    last_cleanup_ms: u64,
}

#[derive(Debug)]
struct RateLimiter {
    config: RateLimitConfig,
    state: Mutex<RateLimiterState>,
}

impl RateLimiter {
    fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            state: Mutex::new(RateLimiterState {
                entries: HashMap::new(),
                last_cleanup_ms: now_ms(),
            }),
        }
    }

    async fn check(&self, ip: IpAddr, now_ms: u64) -> RateLimitCheck {
        let window_ms = self.config.window_ms;
        let mut state = self.state.lock().await;

        if now_ms.saturating_sub(state.last_cleanup_ms) >= window_ms {
            state
                .entries
                .retain(|_, entry| now_ms.saturating_sub(entry.window_start_ms) < window_ms);
            state.last_cleanup_ms = now_ms;
        }

        let entry = state.entries.entry(ip).or_insert(Entry {
            window_start_ms: now_ms,
            hits: 0,
        });

        if now_ms.saturating_sub(entry.window_start_ms) >= window_ms {
            entry.window_start_ms = now_ms;
            entry.hits = 0;
        }

        entry.hits = entry.hits.saturating_add(1);
        let allowed = entry.hits <= self.config.max;
        let reset_after_ms = window_ms.saturating_sub(now_ms.saturating_sub(entry.window_start_ms));

        RateLimitCheck {
            allowed,
            limit: self.config.max,
            remaining: if allowed {
                self.config.max.saturating_sub(entry.hits)
            } else {
                0
            },
            reset_after_seconds: reset_after_ms.div_ceil(1000),
        }
    }
}

fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blocks_after_max_hits_within_window() {
        let limiter = RateLimiter::new(RateLimitConfig {
            window_ms: 1_000,
            max: 2,
        });
        let ip: IpAddr = "10.0.0.8".parse().unwrap();

        assert!(limiter.check(ip, 10_000).await.allowed);
        let second = limiter.check(ip, 10_100).await;
        assert!(second.allowed);
        assert_eq!(second.remaining, 0);
        assert!(!limiter.check(ip, 10_200).await.allowed);

        let after_window = limiter.check(ip, 11_500).await;
        assert!(after_window.allowed);
        assert_eq!(after_window.remaining, 1);
    }

    #[tokio::test]
    async fn addresses_are_tracked_separately() {
        let limiter = RateLimiter::new(RateLimitConfig {
            window_ms: 60_000,
            max: 1,
        });
        let a: IpAddr = "10.0.0.1".parse().unwrap();
        let b: IpAddr = "10.0.0.2".parse().unwrap();
        assert!(limiter.check(a, 5_000).await.allowed);
        assert!(!limiter.check(a, 5_001).await.allowed);
        assert!(limiter.check(b, 5_002).await.allowed);
    }
}

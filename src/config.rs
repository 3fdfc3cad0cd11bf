//! Runtime settings read from the environment (and an optional `.env` file,
//! loaded by `main` before `AppConfig::from_env` runs).
use std::env;

use log::warn;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Largest estimated trace (positions copied into all steps) the HTTP layer
/// will run. Matches an open 1 500-cell grid, the largest the web client draws.
pub const DEFAULT_MAX_TRACE: u64 = 1_125_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Budget for [`estimated_trace_positions`](crate::models::request::GridRunRequest::estimated_trace_positions).
    pub max_trace: u64,
    /// Single allowed browser origin; any origin is accepted when unset.
    pub cors_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_trace: DEFAULT_MAX_TRACE,
            cors_origin: None,
        }
    }
}

impl AppConfig {
    /// Reads `GRIDTRACE_BIND`, `GRIDTRACE_MAX_TRACE` and `GRIDTRACE_CORS_ORIGIN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let bind_addr = lookup("GRIDTRACE_BIND")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.bind_addr);
        let max_trace = match lookup("GRIDTRACE_MAX_TRACE") {
            None => defaults.max_trace,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(
                        "ignoring GRIDTRACE_MAX_TRACE={raw:?}, using {}",
                        defaults.max_trace
                    );
                    defaults.max_trace
                }
            },
        };
        let cors_origin = lookup("GRIDTRACE_CORS_ORIGIN").filter(|v| !v.trim().is_empty());
        Self {
            bind_addr,
            max_trace,
            cors_origin,
        }
    }
}

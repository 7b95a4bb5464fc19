//! Configuration management for the resolver.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. Every value has a default that
//! matches the public Spotify API, so a resolver embedded in a larger
//! service works without any configuration; the variables exist to point
//! the client at a different endpoint during development and to tune the
//! token renewal schedule.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults

use std::{env, time::Duration};

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

// Spotify access tokens live for an hour; renewing every 55 minutes keeps
// a safety margin inside that lifetime.
const DEFAULT_RENEWAL_PERIOD_SECS: u64 = 55 * 60;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing file is not an error; every getter in this module falls back
/// to its default. Call this once at startup before constructing a
/// resolver.
///
/// # Example
///
/// ```
/// spotresolve::config::load_env();
/// ```
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, used for all
/// catalog lookups after authentication. Defaults to the public
/// `https://api.spotify.com/v1` endpoint.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the Spotify token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable, used for the
/// client-credentials grant. Defaults to the public
/// `https://accounts.spotify.com/api/token` endpoint.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the period of the background token renewal schedule.
///
/// Retrieves the `SPOTIFY_TOKEN_RENEWAL_SECS` environment variable. The
/// default of 55 minutes assumes the documented one-hour token lifetime.
/// That lifetime is an upstream contract this client cannot observe, so a
/// deployment against an identity provider with shorter-lived tokens
/// should set the variable rather than rely on the default.
///
/// Unparseable values fall back to the default.
pub fn token_renewal_period() -> Duration {
    let secs = env::var("SPOTIFY_TOKEN_RENEWAL_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_RENEWAL_PERIOD_SECS);
    Duration::from_secs(secs)
}

/// Returns the timeout applied to every outbound request.
///
/// Retrieves the `SPOTIFY_REQUEST_TIMEOUT_SECS` environment variable
/// (default 30 seconds). A bounded timeout keeps a dead upstream from
/// suspending a lookup indefinitely.
pub fn request_timeout() -> Duration {
    let secs = env::var("SPOTIFY_REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

//! # Spotify Integration Module
//!
//! This module implements the HTTP side of the resolver: authentication
//! against Spotify's identity endpoint and the catalog lookups that turn
//! resource identifiers into `"artist - title"` strings. It abstracts away
//! request shaping, authorization headers and response decoding, providing
//! a small Rust interface for the resolver facade.
//!
//! ## Architecture
//!
//! ```text
//! Resolver facade (resolver, management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (Client Credentials grant)
//!     └── Catalog Lookups (Tracks, Albums, Playlists)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! [`auth`] - Implements the OAuth 2.0 Client Credentials grant:
//! - **Fixed Authorization Value**: Base64 of `client_id:client_secret`,
//!   computed once per resolver
//! - **Token Exchange**: Form-encoded POST trading the credential pair for
//!   a short-lived bearer token
//!
//! [`catalog`] - Catalog lookups and formatting:
//! - **Single Track**: `GET /tracks/{id}`
//! - **Album Tracks**: `GET /albums/{id}/tracks`
//! - **Playlist Tracks**: `GET /playlists/{id}/tracks`
//! - **Formatting**: Artists joined with `", "`, then `" - "` and the title
//!
//! ## Authentication Strategy
//!
//! The Client Credentials grant is a server-to-server flow: no user
//! authorization, no refresh token, no browser. Tokens expire after about
//! an hour, so the management layer renews them on a fixed schedule; the
//! functions here perform exactly one request per call and leave scheduling
//! to the caller.
//!
//! ## Error Types
//!
//! All functions return `Result` types with specific error handling:
//! - **[`crate::error::RenewalError`]** - Token exchange failures
//! - **[`crate::error::LookupError`]** - Catalog lookup failures, including
//!   the stale-token case (HTTP 401) and unexpected response shapes

pub mod auth;
pub mod catalog;

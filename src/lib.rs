//! Spotify Resolver Library
//!
//! This library resolves Spotify resource identifiers (tracks, albums and
//! playlists) into plain `"artist - title"` strings that a music-playback
//! backend can feed into its own search. The caller is expected to have
//! already extracted the resource kind and ID from a URL; the resolver only
//! performs the authenticated catalog lookups and the credential lifecycle
//! behind them: a client-credentials token is obtained in the background at
//! construction time and renewed on a fixed schedule for the lifetime of
//! the resolver.
//!
//! # Modules
//!
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for token renewal and catalog lookups
//! - `management` - Background token lifecycle management
//! - `resolver` - The public resolver facade
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use spotresolve::SpotifyResolver;
//!
//! #[tokio::main]
//! async fn main() {
//!     spotresolve::config::load_env();
//!
//!     // `()` stands in for the playback node handle here.
//!     let resolver = SpotifyResolver::new((), "client-id", "client-secret");
//!
//!     match resolver.get_track("11dFghVXANMlKmJXsNCbNl").await {
//!         Ok(line) => println!("{}", line),
//!         Err(e) => eprintln!("Lookup failed: {}", e),
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod management;
pub mod resolver;
pub mod spotify;
pub mod types;

pub use error::{LookupError, RenewalError};
pub use resolver::SpotifyResolver;

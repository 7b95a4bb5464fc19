use reqwest::Client;

use crate::{config, error::LookupError, management::TokenManager, spotify};

/// Resolves Spotify resource identifiers into `"artist - title"` strings
/// for a playback backend.
///
/// Construction computes the fixed authorization value from the credential
/// pair, starts the background token lifecycle and keeps the playback node
/// handle around untouched for the embedding code. Lookups read whatever
/// token is current at that moment; a lookup racing a renewal sees the
/// value before or after the swap, never a mix.
pub struct SpotifyResolver<N> {
    node: N,
    http: Client,
    tokens: TokenManager,
}

impl<N> SpotifyResolver<N> {
    /// Creates a resolver bound to a playback node handle and starts the
    /// token lifecycle.
    ///
    /// # Arguments
    ///
    /// * `node` - Opaque handle to the playback backend; stored and exposed
    ///   via [`node`](Self::node), never used by the resolver itself
    /// * `client_id` - Spotify application client ID
    /// * `client_secret` - Spotify application client secret
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, or if the TLS backend
    /// cannot be initialized.
    pub fn new(node: N, client_id: &str, client_secret: &str) -> Self {
        let http = Client::builder()
            .timeout(config::request_timeout())
            .build()
            .expect("failed to build HTTP client");

        let mut tokens = TokenManager::new(client_id, client_secret);
        tokens.start(http.clone());

        SpotifyResolver { node, http, tokens }
    }

    /// Returns the playback node handle the resolver was constructed with.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Returns the token manager, for forced renewal or inspection.
    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// Fetches the track and returns its artists and title.
    pub async fn get_track(&self, id: &str) -> Result<String, LookupError> {
        let token = self.tokens.current().await.unwrap_or_default();
        spotify::catalog::get_track(&self.http, &token, id).await
    }

    /// Fetches the tracks of the album and returns their artists and
    /// titles, in album order.
    pub async fn get_album_tracks(&self, id: &str) -> Result<Vec<String>, LookupError> {
        let token = self.tokens.current().await.unwrap_or_default();
        spotify::catalog::get_album_tracks(&self.http, &token, id).await
    }

    /// Fetches the tracks of the playlist and returns their artists and
    /// titles, in playlist order.
    pub async fn get_playlist_tracks(&self, id: &str) -> Result<Vec<String>, LookupError> {
        let token = self.tokens.current().await.unwrap_or_default();
        spotify::catalog::get_playlist_tracks(&self.http, &token, id).await
    }

    /// Stops the background renewal schedule. Lookups keep working with
    /// the last stored token until it expires upstream.
    pub fn stop(&self) {
        self.tokens.stop();
    }
}

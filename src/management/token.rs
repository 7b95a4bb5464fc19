use std::sync::Arc;

use reqwest::Client;
use tokio::{sync::RwLock, task::JoinHandle};
use tracing::{debug, warn};

use crate::{config, error::RenewalError, spotify};

/// Keeps a client-credentials bearer token current without caller
/// involvement.
///
/// The token is unset until the first exchange completes; lookups issued
/// before that go out with an empty bearer value and fail at the API
/// boundary. A failed renewal keeps the previous token in place and is
/// retried on the next scheduled tick.
pub struct TokenManager {
    authorization: String,
    token: Arc<RwLock<Option<String>>>,
    renewal: Option<JoinHandle<()>>,
}

impl TokenManager {
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        TokenManager {
            authorization: spotify::auth::basic_authorization(client_id, client_secret),
            token: Arc::new(RwLock::new(None)),
            renewal: None,
        }
    }

    /// Triggers an immediate renewal and arms the recurring schedule.
    ///
    /// The schedule runs until [`stop`](Self::stop) or drop; the period
    /// comes from `config::token_renewal_period()`, read once at start.
    /// Calling `start` again while the schedule runs is a no-op.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn start(&mut self, client: Client) {
        if self.renewal.is_some() {
            return;
        }

        let authorization = self.authorization.clone();
        let token = Arc::clone(&self.token);
        self.renewal = Some(tokio::spawn(async move {
            // The first tick completes immediately, so the startup renewal
            // and the recurring schedule share one loop.
            let mut ticker = tokio::time::interval(config::token_renewal_period());
            loop {
                ticker.tick().await;
                if let Err(e) = renew_into(&client, &authorization, &token).await {
                    warn!("token renewal failed, keeping previous token: {}", e);
                }
            }
        }));
    }

    /// Performs a single renewal attempt outside the schedule.
    ///
    /// On success the stored token is replaced; on failure it is left
    /// untouched and the error is returned to the caller.
    pub async fn renew(&self, client: &Client) -> Result<(), RenewalError> {
        renew_into(client, &self.authorization, &self.token).await
    }

    /// Returns the presently stored token. `None` until the first renewal
    /// has completed.
    pub async fn current(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Cancels the renewal schedule. The stored token stays readable.
    pub fn stop(&self) {
        if let Some(handle) = &self.renewal {
            handle.abort();
        }
    }
}

impl Drop for TokenManager {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn renew_into(
    client: &Client,
    authorization: &str,
    token: &Arc<RwLock<Option<String>>>,
) -> Result<(), RenewalError> {
    let response = spotify::auth::request_access_token(client, authorization).await?;
    debug!(expires_in = response.expires_in, "access token renewed");
    *token.write().await = Some(response.access_token);
    Ok(())
}

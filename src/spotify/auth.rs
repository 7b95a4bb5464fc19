use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};

use crate::{config, error::RenewalError, types::TokenResponse};

/// Computes the fixed authorization value for the client-credentials grant.
///
/// The value is the base64 encoding of the literal `client_id:client_secret`
/// pair and never changes for the lifetime of a resolver; it is computed
/// once at construction and attached to every token exchange as
/// `Authorization: Basic <value>`.
///
/// # Example
///
/// ```
/// let auth = basic_authorization("abc", "xyz");
/// assert_eq!(auth, "YWJjOnh5eg==");
/// ```
pub fn basic_authorization(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", client_id, client_secret))
}

/// Performs one client-credentials exchange against the identity endpoint.
///
/// Sends a form-encoded POST with `grant_type=client_credentials` and the
/// precomputed Basic authorization value, and decodes the returned access
/// token. Exactly one request per call; scheduling and retry belong to the
/// management layer.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `authorization` - Fixed value from [`basic_authorization`]
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenResponse)` - Fresh access token and its advertised lifetime
/// - `Err(RenewalError)` - Network error, non-2xx status, or a response
///   body that is not a token
pub async fn request_access_token(
    client: &Client,
    authorization: &str,
) -> Result<TokenResponse, RenewalError> {
    let response = client
        .post(config::spotify_apitoken_url())
        .header(AUTHORIZATION, format!("Basic {}", authorization))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(RenewalError::Status(status));
    }

    let token = response.json::<TokenResponse>().await?;
    Ok(token)
}

//! reqwest adapter producing [`RawResponse`] values.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::net::response::RawResponse;

/// GET `url` and decode the body as JSON.
///
/// Connection-level failures surface as the `Err` arm and become
/// [`crate::net::FetchError::Transport`] under the normalizer.
pub async fn get_json<T>(client: &Client, url: &str) -> Result<RawResponse<T>, reqwest::Error>
where
    T: DeserializeOwned,
{
    let response = client.get(url).send().await?;
    into_raw(response).await
}

/// Capture the status of an already-received response and decode its
/// body as JSON.
///
/// The status is read before the body is consumed. An empty or
/// undecodable body yields `body: None` rather than an error, so the
/// normalizer classifies it (status first, then absent body).
pub async fn into_raw<T>(response: reqwest::Response) -> Result<RawResponse<T>, reqwest::Error>
where
    T: DeserializeOwned,
{
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;

    let body = if bytes.is_empty() {
        None
    } else {
        match serde_json::from_slice(&bytes) {
            Ok(body) => Some(body),
            Err(error) => {
                tracing::debug!(status, %error, "body did not decode as JSON");
                None
            }
        }
    };

    Ok(RawResponse { status, body })
}

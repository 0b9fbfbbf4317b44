//! Outcome classification for fallible async calls.

use std::error::Error;
use std::fmt;
use std::future::Future;

use crate::net::error::FetchError;
use crate::net::response::RawResponse;

/// Await `call` and classify its outcome, gating the body through
/// `is_valid`.
///
/// Exactly one classification applies per call, checked in this order:
///
/// 1. the call raised a fault → [`FetchError::Transport`]
/// 2. non-success status → [`FetchError::HttpStatus`], checked before
///    the body, so an error page with an empty body reports its status
/// 3. absent body → [`FetchError::NullBody`]
/// 4. body rejected by `is_valid` → [`FetchError::InvalidResponse`]
/// 5. otherwise → `Ok(body)`
///
/// Faults raised by `call` never propagate out of this function.
pub async fn normalize<T, E, Fut, V>(call: Fut, is_valid: V) -> Result<T, FetchError>
where
    T: fmt::Debug,
    E: Into<Box<dyn Error + Send + Sync>>,
    Fut: Future<Output = Result<RawResponse<T>, E>>,
    V: FnOnce(&T) -> bool,
{
    let response = match call.await {
        Ok(response) => response,
        Err(fault) => {
            let err = FetchError::transport(fault);
            tracing::debug!(error = %err, "call failed before completing");
            return Err(err);
        }
    };

    if !response.is_success() {
        tracing::debug!(status = response.status, "call completed with error status");
        return Err(FetchError::HttpStatus {
            status: response.status,
        });
    }

    let Some(body) = response.body else {
        tracing::debug!(status = response.status, "successful status without a body");
        return Err(FetchError::NullBody);
    };

    if !is_valid(&body) {
        return Err(FetchError::InvalidResponse {
            body: format!("{body:?}"),
        });
    }

    Ok(body)
}

/// [`normalize`] with the always-true validator.
pub async fn normalize_ok<T, E, Fut>(call: Fut) -> Result<T, FetchError>
where
    T: fmt::Debug,
    E: Into<Box<dyn Error + Send + Sync>>,
    Fut: Future<Output = Result<RawResponse<T>, E>>,
{
    normalize(call, |_| true).await
}

//! HTTP API Client
//!
//! Functions for communicating with the activities REST API.

use activities::endpoints;
use activities::{Activities, ApiMessage, ClientError, ClientResult};
use gloo_net::http::{Request, Response};

/// Local storage key holding an alternative API base URL
pub const API_BASE_KEY: &str = "activities_api_url";

/// Get the API base URL from local storage. Empty means same origin.
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_default();
    endpoints::normalize_base(&url)
}

/// Fetch all activities
pub async fn fetch_activities() -> ClientResult<Activities> {
    let url = endpoints::activities_url(&get_api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(api_error(&response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}

/// Sign a participant up, returning the server's confirmation
pub async fn signup(activity: &str, email: &str) -> ClientResult<String> {
    let url = endpoints::signup_url(&get_api_base(), activity, email);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    // The body is read on both paths; an unreadable body is a parse failure
    let body: ApiMessage = response
        .json()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))?;

    if response.ok() {
        Ok(body.message.unwrap_or_default())
    } else {
        Err(ClientError::Api {
            status: response.status(),
            detail: body.detail,
        })
    }
}

/// Unregister a participant. Only the status matters.
pub async fn unregister(activity: &str, email: &str) -> ClientResult<()> {
    let url = endpoints::unregister_url(&get_api_base(), activity, email);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(api_error(&response).await);
    }

    Ok(())
}

async fn api_error(response: &Response) -> ClientError {
    let detail = response
        .json::<ApiMessage>()
        .await
        .ok()
        .and_then(|m| m.detail);

    ClientError::Api {
        status: response.status(),
        detail,
    }
}

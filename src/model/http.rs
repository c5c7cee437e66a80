/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::{debug, error};

/// Request headers keyed by header name
///
/// Inserting an existing name replaces its value, which is how individual
/// endpoints override the defaults.
pub type Headers = HashMap<&'static str, String>;

/// Sends one HTTP request and checks its status
///
/// No retry is attempted. Any status outside 2xx is turned into
/// [`AppError::RequestFailed`] carrying the status and the response body.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Headers to send
/// * `query` - Query string pairs, possibly empty
/// * `body` - Optional request body, serialized as JSON
///
/// # Returns
///
/// * `Ok(Response)` - The response, with a 2xx status
/// * `Err(AppError)` - Transport failure or non-2xx status
///
/// # Example
///
/// ```ignore
/// let response = make_http_request(
///     &client,
///     Method::GET,
///     "https://example.supabase.co/rest/v1/workspaces",
///     &headers,
///     &[("select", "name,id")],
///     None::<&()>,
/// )
/// .await?;
/// ```
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    headers: &Headers,
    query: &[(&str, &str)],
    body: Option<&B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in headers {
        request = request.header(*name, value.as_str());
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::RequestFailed { status, body })
}

/// Decodes a JSON response body into `T`
///
/// # Errors
/// * [`AppError::Network`] if the body cannot be read
/// * [`AppError::Json`] if the body does not match `T`
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

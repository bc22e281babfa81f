//! Shared HTTP plumbing for the service adapters
//!
//! One client per adapter, all with the same user agent. Responses go
//! through [`read_json`] or [`read_text`] so that status and decode
//! failures map onto the same [`Error`] variants everywhere.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::Service;
use crate::{Error, Result};

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("repo-pulse/", env!("CARGO_PKG_VERSION"));

/// Build the client an adapter uses for `service`
pub fn client(service: Service) -> Result<Client> {
    Client::builder().user_agent(USER_AGENT).build().map_err(|e| Error::transport(service, e))
}

/// Join a base URL and a path, tolerating a trailing slash on the base
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Send a request and return the body of a successful response
pub async fn read_text(service: Service, request: RequestBuilder) -> Result<String> {
    let response = request.send().await.map_err(|e| Error::transport(service, e))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| Error::transport(service, e))?;

    if !status.is_success() {
        return Err(Error::upstream(service, status.as_u16(), &body));
    }
    Ok(body)
}

/// Send a request and decode the JSON body of a successful response
pub async fn read_json<T: DeserializeOwned>(service: Service, request: RequestBuilder) -> Result<T> {
    let body = read_text(service, request).await?;
    serde_json::from_str(&body).map_err(|e| Error::decode(service, e.to_string()))
}

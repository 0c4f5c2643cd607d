//! Zammad HTTP client for API interactions

use log::{debug, trace};
use reqwest::{Client, Method};
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, ZammadError};
use crate::zammad::traits::ApiRecord;

/// Zammad API client
///
/// Holds no per-call state, so a single instance is shared (behind an `Arc`)
/// by every configured resource.
pub struct ZammadClient {
    client: Client,
    token: String,
    host: String,
}

impl ZammadClient {
    /// Create a new client with a bounded request timeout
    ///
    /// Proxy settings are taken from the environment.
    pub fn new(host: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self::with_http_client(host, token, client))
    }

    /// Create a client on top of a caller-provided HTTP client
    ///
    /// Used when the transport needs its own proxy, TLS or timeout settings.
    pub fn with_http_client(host: &str, token: &str, client: Client) -> Self {
        Self {
            client,
            token: token.to_string(),
            host: host.strip_suffix('/').unwrap_or(host).to_string(),
        }
    }

    /// Host the client talks to, without trailing slash
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        format!("{}{}", self.host, api::BASE_PATH)
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url(), collection)
    }

    fn record_url(&self, collection: &str, id: i64) -> String {
        format!("{}/{}/{}", self.base_url(), collection, id)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
    }

    /// Send a request and return the raw response body
    ///
    /// Any status outside 2xx becomes `ZammadError::Api` carrying the status
    /// code and the body text. Nothing is retried.
    pub(crate) async fn do_request(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        debug!("{} {}", method, url);

        let mut builder = self.with_headers(self.client.request(method.clone(), url));
        if let Some(body) = body {
            trace!("Request body: {}", String::from_utf8_lossy(&body));
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!("{} {} -> {}", method, url, status.as_u16());
        trace!("Response body: {}", String::from_utf8_lossy(&body));

        if !status.is_success() {
            return Err(ZammadError::Api {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body.to_vec())
    }

    /// POST a record to its collection and decode the created record
    pub async fn create_record<T: ApiRecord>(&self, record: &T) -> Result<T> {
        let url = self.collection_url(T::COLLECTION);
        let payload = serde_json::to_vec(record)?;

        let body = self.do_request(Method::POST, &url, Some(payload)).await?;
        let created: T = serde_json::from_slice(&body)?;

        debug!(
            "Created {} '{}' with id {}",
            T::LABEL,
            created.name(),
            created.id()
        );
        Ok(created)
    }

    /// GET a single record by id
    pub async fn get_record<T: ApiRecord>(&self, id: i64) -> Result<T> {
        let url = self.record_url(T::COLLECTION, id);
        let body = self.do_request(Method::GET, &url, None).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// PUT the full record (including its id) and decode the result
    pub async fn update_record<T: ApiRecord>(&self, record: &T) -> Result<T> {
        let url = self.record_url(T::COLLECTION, record.id());
        let payload = serde_json::to_vec(record)?;

        let body = self.do_request(Method::PUT, &url, Some(payload)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// DELETE a record by id
    pub async fn delete_record<T: ApiRecord>(&self, id: i64) -> Result<()> {
        let url = self.record_url(T::COLLECTION, id);
        self.do_request(Method::DELETE, &url, None).await?;
        debug!("Deleted {} {}", T::LABEL, id);
        Ok(())
    }
}

#[cfg(test)]
impl ZammadClient {
    /// Create a test client against a mock server
    pub fn test_client(base_url: &str) -> Self {
        match Self::new(base_url, "test-token") {
            Ok(client) => client,
            Err(e) => panic!("failed to build test client: {}", e),
        }
    }
}

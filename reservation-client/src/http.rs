//! HTTP client for network-based API calls
//!
//! Every call takes a [`CancellationToken`]. Cancelling it drops the
//! in-flight request and the call returns [`ClientError::Aborted`].

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{DataRequest, DataResponse, ErrorBody};
use tokio_util::sync::CancellationToken;

/// HTTP client for making network requests to the reservation server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        signal: &CancellationToken,
    ) -> ClientResult<T> {
        self.send(self.client.get(self.url(path)), signal).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        signal: &CancellationToken,
    ) -> ClientResult<T> {
        self.send(self.client.get(self.url(path)).query(query), signal)
            .await
    }

    /// Make a POST request with a `{ "data": ... }` body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: B,
        signal: &CancellationToken,
    ) -> ClientResult<T> {
        let request = self
            .client
            .request(Method::POST, self.url(path))
            .json(&DataRequest::new(body));
        self.send(request, signal).await
    }

    /// Make a PUT request with a `{ "data": ... }` body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: B,
        signal: &CancellationToken,
    ) -> ClientResult<T> {
        let request = self
            .client
            .request(Method::PUT, self.url(path))
            .json(&DataRequest::new(body));
        self.send(request, signal).await
    }

    /// Make a DELETE request without body
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        signal: &CancellationToken,
    ) -> ClientResult<T> {
        self.send(self.client.delete(self.url(path)), signal).await
    }

    /// Send the request, racing it against the cancellation token
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        signal: &CancellationToken,
    ) -> ClientResult<T> {
        if signal.is_cancelled() {
            return Err(ClientError::Aborted);
        }

        let exchange = async {
            let response = request.send().await?;
            Self::handle_response(response).await
        };

        tokio::select! {
            biased;
            _ = signal.cancelled() => {
                tracing::debug!("Request aborted by caller");
                Err(ClientError::Aborted)
            }
            result = exchange => result,
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(match serde_json::from_slice::<ErrorBody>(&bytes) {
                Ok(body) => body.into(),
                Err(_) => ClientError::Api {
                    status: status.as_u16(),
                    code: 0,
                    message: String::from_utf8_lossy(&bytes).into_owned(),
                },
            });
        }

        let envelope: DataResponse<T> = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("{status}: {e}")))?;
        Ok(envelope.into_inner())
    }
}

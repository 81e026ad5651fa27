use crate::errors::CounterError;
use crate::models::CountResponse;
use reqwest::{Client, Response, Url};

/// Thin wrapper over `reqwest` for the counter service. Requests are sent once,
/// with the client's defaults: no timeout, no retry.
#[derive(Debug, Clone, Default)]
pub struct CounterClient {
    http: Client,
}

impl CounterClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// Bumps the counter and returns the updated value.
    pub async fn increment(&self, endpoint: &Url) -> Result<u64, CounterError> {
        let response = self.http.post(endpoint.clone()).send().await?;
        read_count(response).await
    }

    pub async fn current(&self, endpoint: &Url) -> Result<u64, CounterError> {
        let response = self.http.get(endpoint.clone()).send().await?;
        read_count(response).await
    }
}

async fn read_count(response: Response) -> Result<u64, CounterError> {
    let status = response.status();
    if !status.is_success() {
        return Err(CounterError::Status(status));
    }

    let bytes = response.bytes().await?;
    let body: CountResponse = serde_json::from_slice(&bytes)?;
    Ok(body.count)
}

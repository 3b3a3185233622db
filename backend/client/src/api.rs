//! # Registry API
//!
//! The two calls the screens make against the backend.
//!
//! - Create: `POST /registration` with the form JSON, success only on a 2xx
//!   status **and** the `"Added Successfully"` body
//! - Summary: `GET /registration/summary`, an array of stored records
use registry::{Registration, SUCCESS_SENTINEL, StoredRegistration};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::info;

use crate::error::ClientError;

#[allow(async_fn_in_trait)]
pub trait RegistryApi {
    async fn submit(&self, registration: &Registration) -> Result<(), ClientError>;

    async fn fetch_summary(&self) -> Result<Vec<StoredRegistration>, ClientError>;
}

pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl RegistryApi for HttpApi {
    async fn submit(&self, registration: &Registration) -> Result<(), ClientError> {
        let url = format!("{}/registration", self.base_url);
        info!("POST {url}");

        let response = check_status(self.client.post(&url).json(registration).send().await?).await?;

        match response.json::<Value>().await? {
            Value::String(body) if body == SUCCESS_SENTINEL => Ok(()),
            other => Err(ClientError::UnexpectedResponse(other.to_string())),
        }
    }

    async fn fetch_summary(&self) -> Result<Vec<StoredRegistration>, ClientError> {
        let url = format!("{}/registration/summary", self.base_url);
        info!("GET {url}");

        let response = check_status(self.client.get(&url).send().await?).await?;

        Ok(response.json().await?)
    }
}

/// Server errors come back as a JSON string message; fall back to the raw body.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<String>(&body).unwrap_or(body);

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

//! Vouch Client SDK
//!
//! HTTP client for programs integrating with a running vouch registry.

use serde::Deserialize;
use thiserror::Error;
use vouch_core::{CredentialRecord, Identity, MetadataHash, TypeId};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Registry rejected the request ({status} {error}): {message}")]
    Api {
        status: u16,
        error: String,
        message: String,
    },
}

/// A registered credential type as returned by the registry
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredType {
    pub type_id: TypeId,
    pub name: String,
    pub creator: Identity,
}

#[derive(Debug, Deserialize)]
struct RegisterTypeResponse {
    type_id: TypeId,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
    message: String,
}

/// Client for a vouch registry server
pub struct RegistryClient {
    /// Registry base URL
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl RegistryClient {
    /// Create a new client
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Register a credential type and return its id
    pub async fn register_type(
        &self,
        name: &str,
        creator: Identity,
    ) -> Result<TypeId, ClientError> {
        let url = format!("{}/types", self.base_url);
        let body = serde_json::json!({ "name": name, "creator": creator });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let response = Self::check(response).await?;
        let parsed: RegisterTypeResponse = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        Ok(parsed.type_id)
    }

    /// Assign a credential of `type_id` to `recipient`, on behalf of `issuer`
    pub async fn assign_credential(
        &self,
        recipient: Identity,
        type_id: TypeId,
        metadata: MetadataHash,
        issuer: Identity,
    ) -> Result<(), ClientError> {
        let url = format!("{}/credentials", self.base_url);
        let body = serde_json::json!({
            "recipient": recipient,
            "type_id": type_id,
            "metadata": metadata,
            "issuer": issuer,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Self::check(response).await.map(|_| ())
    }

    /// Look up a registered type
    pub async fn get_type(&self, type_id: TypeId) -> Result<RegisteredType, ClientError> {
        let url = format!("{}/types/{}", self.base_url, type_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// An owner's credential history in issuance order
    pub async fn credentials_for(
        &self,
        owner: Identity,
    ) -> Result<Vec<CredentialRecord>, ClientError> {
        let url = format!("{}/identities/{}/credentials", self.base_url, owner);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// True when the registry answers its health check
    pub async fn health(&self) -> Result<bool, ClientError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(response.status().is_success())
    }

    /// Turn non-success responses into typed API errors
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: ApiErrorBody = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        Err(ClientError::Api {
            status: status.as_u16(),
            error: body.error,
            message: body.message,
        })
    }
}

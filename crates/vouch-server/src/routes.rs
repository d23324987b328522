//! HTTP route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use vouch_core::{CredentialRecord, Identity, MetadataHash, RegistryError, TypeId};

use crate::state::AppState;

/// Uniform JSON error body.
///
/// `error` is a stable machine-readable code; `message` is for humans.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// API error carrying its HTTP status
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error,
                message: message.into(),
            },
        }
    }

    /// Malformed path or query input
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_request", message)
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        let (status, code) = match &err {
            RegistryError::AlreadyExists(_) => (StatusCode::CONFLICT, "already_exists"),
            RegistryError::InvalidName => (StatusCode::BAD_REQUEST, "invalid_name"),
            RegistryError::InvalidRecipient => (StatusCode::BAD_REQUEST, "invalid_recipient"),
            RegistryError::UnknownType(_) => (StatusCode::NOT_FOUND, "unknown_type"),
            RegistryError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage"),
        };
        Self::new(status, code, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Request body for `POST /types`
#[derive(Debug, Deserialize)]
pub struct RegisterTypeRequest {
    pub name: String,
    pub creator: Identity,
}

/// Response body for `POST /types`
#[derive(Debug, Serialize)]
pub struct RegisterTypeResponse {
    pub type_id: TypeId,
}

/// Register a new credential type
pub async fn register_type(
    State(state): State<AppState>,
    Json(req): Json<RegisterTypeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let type_id = state.registry.register_type(req.creator, &req.name).await?;
    Ok((StatusCode::CREATED, Json(RegisterTypeResponse { type_id })))
}

/// Response body for `GET /types/:id`
#[derive(Debug, Serialize)]
pub struct TypeResponse {
    pub type_id: TypeId,
    pub name: String,
    pub creator: Identity,
}

/// Look up a registered type
pub async fn get_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TypeResponse>, ApiError> {
    let type_id: TypeId = id.parse().map_err(|e| ApiError::bad_request(format!("{e}")))?;
    let def = state.registry.get_type(type_id).await?;

    Ok(Json(TypeResponse {
        type_id: def.id,
        name: def.name,
        creator: def.creator,
    }))
}

/// Request body for `POST /credentials`
#[derive(Debug, Deserialize)]
pub struct AssignCredentialRequest {
    pub recipient: Identity,
    pub type_id: TypeId,
    pub metadata: MetadataHash,
    pub issuer: Identity,
}

/// Response body for `POST /credentials`: the stored record plus its owner
#[derive(Debug, Serialize)]
pub struct AssignCredentialResponse {
    pub recipient: Identity,
    pub type_id: TypeId,
    pub metadata: MetadataHash,
    pub issuer: Identity,
}

/// Assign a credential to a recipient
pub async fn assign_credential(
    State(state): State<AppState>,
    Json(req): Json<AssignCredentialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .registry
        .assign_credential(req.issuer, req.recipient, req.type_id, req.metadata)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AssignCredentialResponse {
            recipient: req.recipient,
            type_id: req.type_id,
            metadata: req.metadata,
            issuer: req.issuer,
        }),
    ))
}

/// List an owner's credentials in issuance order
pub async fn credentials_for(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<Vec<CredentialRecord>>, ApiError> {
    let owner: Identity = owner
        .parse()
        .map_err(|e| ApiError::bad_request(format!("{e}")))?;
    let records = state.registry.credentials_for(owner).await?;
    Ok(Json(records))
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

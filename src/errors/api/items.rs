use crate::errors::internal::{InternalError, StoreError};
use crate::types::dto::common::{ErrorResponse, FaultResponse, FieldError, ValidationErrorResponse};
use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

/// Item endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ItemError {
    /// Request body failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ValidationErrorResponse>),

    /// Item not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<FaultResponse>),
}

impl ItemError {
    /// Create a ValidationFailed error listing every rejected field
    pub fn validation_failed(details: Vec<FieldError>) -> Self {
        ItemError::ValidationFailed(Json(ValidationErrorResponse {
            error: "Invalid request data".to_string(),
            code: 400,
            details,
        }))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemError::NotFound(Json(ErrorResponse {
            error: "Item not found".to_string(),
            code: 404,
        }))
    }

    /// Convert InternalError to ItemError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// The error is always logged; its text reaches the client only when
    /// `expose_details` is set (non-production).
    pub fn from_internal_error(err: InternalError, expose_details: bool) -> Self {
        match &err {
            InternalError::Store(StoreError::IdCollision(id)) => {
                tracing::error!(item_id = %id, "Store invariant violated: {}", err);
            }
        }

        let details = expose_details.then(|| err.to_string());
        ItemError::InternalError(Json(FaultResponse::internal(details)))
    }

    /// Get the error summary from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemError::ValidationFailed(json) => json.0.error.clone(),
            ItemError::NotFound(json) => json.0.error.clone(),
            ItemError::InternalError(json) => json.0.error.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            ItemError::ValidationFailed(json) => json.0.code,
            ItemError::NotFound(json) => json.0.code,
            ItemError::InternalError(json) => json.0.code,
        }
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

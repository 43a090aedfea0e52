use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
}

/// Error body for expected failures such as a missing item
#[derive(Object, Debug, Clone)]
pub struct ErrorResponse {
    /// Human-readable error summary
    pub error: String,

    /// HTTP status code
    pub code: u16,
}

/// A single rejected field of a request
#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field (or request part)
    pub field: String,

    /// Why the value was rejected
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error body for rejected input
#[derive(Object, Debug, Clone)]
pub struct ValidationErrorResponse {
    pub error: String,

    pub code: u16,

    /// Field-level reasons
    pub details: Vec<FieldError>,
}

/// Error body for unexpected server faults
#[derive(Object, Debug, Clone)]
pub struct FaultResponse {
    pub error: String,

    pub code: u16,

    /// Short description of the fault
    pub message: String,

    /// Diagnostic detail, only populated outside production
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<String>,
}

impl FaultResponse {
    /// Generic 500 body; `details` should only be set outside production
    pub fn internal(details: Option<String>) -> Self {
        Self {
            error: "Internal server error".to_string(),
            code: 500,
            message: "An unexpected error occurred while processing the request".to_string(),
            details,
        }
    }
}

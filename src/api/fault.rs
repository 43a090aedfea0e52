use std::any::Any;

use poem::http::StatusCode;
use poem::middleware::CatchPanic;
use poem::{Endpoint, EndpointExt, IntoResponse, Response};
use poem_openapi::error::{ParseParamError, ParsePathError, ParseRequestPayloadError};
use poem_openapi::payload::Json;

use crate::errors::ItemError;
use crate::types::dto::common::{ErrorResponse, FaultResponse, FieldError};

/// Wrap an endpoint so every failure leaves as a JSON body
///
/// * panics become 500 `FaultResponse`s
/// * malformed bodies and path parameters become 400 validation errors
/// * other framework errors keep their status with an `ErrorResponse` body
///
/// Responses already produced by typed API errors pass through untouched.
pub fn with_fault_handling<E>(endpoint: E, expose_details: bool) -> impl Endpoint<Output = Response>
where
    E: Endpoint + 'static,
{
    endpoint
        .with(CatchPanic::new().with_handler(move |panic: Box<dyn Any + Send + 'static>| {
            panic_response(panic, expose_details)
        }))
        .catch_all_error(move |err| async move { error_response(err, expose_details) })
}

/// Render a framework or handler error as JSON
pub fn error_response(err: poem::Error, expose_details: bool) -> Response {
    if err.is::<ParseRequestPayloadError>() {
        tracing::debug!("Rejected request body: {}", err);
        return ItemError::validation_failed(vec![FieldError::new("body", err.to_string())])
            .into_response();
    }

    if err.is::<ParsePathError>() {
        tracing::debug!("Rejected path parameter: {}", err);
        return ItemError::validation_failed(vec![FieldError::new("path", err.to_string())])
            .into_response();
    }

    if err.is::<ParseParamError>() {
        tracing::debug!("Rejected request parameter: {}", err);
        return ItemError::validation_failed(vec![FieldError::new("parameter", err.to_string())])
            .into_response();
    }

    if err.is_from_response() {
        return err.into_response();
    }

    let status = err.status();
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), "Unhandled server fault: {}", err);
        let details = expose_details.then(|| err.to_string());
        return Json(FaultResponse::internal(details))
            .with_status(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response();
    }

    Json(ErrorResponse {
        error: status.canonical_reason().unwrap_or("Request failed").to_string(),
        code: status.as_u16(),
    })
    .with_status(status)
    .into_response()
}

fn panic_response(panic: Box<dyn Any + Send + 'static>, expose_details: bool) -> Response {
    let message = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());

    tracing::error!("Request handler panicked: {}", message);

    Json(FaultResponse::internal(expose_details.then_some(message)))
        .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}

//! HTTP error mapping
//!
//! Every failure leaves the API as a plain-text body with a fixed message.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use proeventos_core::CoreError;

/// Handler-level failure
#[derive(Debug)]
pub enum ApiError {
    /// 404 with a fixed message
    NotFound(&'static str),
    /// 400 with a fixed message
    BadRequest(&'static str),
    /// 500; `context` is prefixed to the underlying error message
    Internal {
        context: &'static str,
        source: CoreError,
    },
}

impl ApiError {
    /// Adapter for `map_err`: wraps a service error with the handler's context
    pub fn internal(context: &'static str) -> impl FnOnce(CoreError) -> ApiError {
        move |source| ApiError::Internal { context, source }
    }

    /// Adapter for `map_err`: an unreadable JSON body becomes a 400 with `message`
    pub fn rejected(message: &'static str) -> impl FnOnce(JsonRejection) -> ApiError {
        move |rejection| {
            log::debug!("Rejected body: {}", rejection.body_text());
            ApiError::BadRequest(message)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::NotFound(message) | ApiError::BadRequest(message) => message.to_string(),
            ApiError::Internal { context, source } => format!("{} Erro: {}", context, source),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        match &self {
            ApiError::Internal { source, .. } => log::error!("{}: {}", status, source),
            _ => log::info!("{}: {}", status, message),
        }

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_message() {
        let err = ApiError::internal("Erro ao tentar recuperar o evento.")(CoreError::storage("timeout"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.message(),
            "Erro ao tentar recuperar o evento. Erro: Storage error: timeout"
        );
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ApiError::NotFound("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::BadRequest("y").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::BadRequest("y").message(), "y");
    }
}

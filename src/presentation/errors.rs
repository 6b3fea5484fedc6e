// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::repositories::RepositoryError;
use crate::utils::url_utils::UrlError;

/// 请求层面的错误，不涉及存储
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("{0}")]
    BadRequest(String),
}

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 响应体固定为 `{"error": "<message>"}`。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(RequestError::BadRequest(message.into()).into())
    }

    fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return match err {
                RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::DuplicateKey { .. }
                | RepositoryError::ReferentialIntegrityViolation { .. }
                | RepositoryError::Validation(_) => StatusCode::BAD_REQUEST,
            };
        }

        if self.0.downcast_ref::<validator::ValidationErrors>().is_some()
            || self.0.downcast_ref::<UrlError>().is_some()
            || self.0.downcast_ref::<RequestError>().is_some()
        {
            return StatusCode::BAD_REQUEST;
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            error!(error = %error_message, "Request failed");
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

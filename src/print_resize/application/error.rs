use crate::domain::error::DomainError; // ドメインエラーをラップするため
use crate::infrastructure::error::InfrastructureError; // InfrastructureError をラップするため
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Resize request failed: {0}")]
    ResizeFailed(String),

    #[error("{0}")]
    DomainError(#[from] DomainError), // ドメインエラーをラップ

    #[error("{0}")]
    InfrastructureError(#[from] InfrastructureError), // InfrastructureError をラップ

    #[error("Underlying error: {source:?}")]
    AnyhowError {
        #[from]
        source: anyhow::Error,
    },
}

// IntoResponse implementation for ApplicationError
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApplicationError::ResizeFailed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            // バリデーション失敗はクライアント起因なので400、本文はドメインのメッセージそのまま
            ApplicationError::DomainError(domain_err) => {
                (StatusCode::BAD_REQUEST, domain_err.to_string())
            }
            ApplicationError::InfrastructureError(infra_err) => {
                eprintln!("InfrastructureError: {:?}", infra_err);
                (StatusCode::INTERNAL_SERVER_ERROR, infra_err.to_string())
            }
            ApplicationError::AnyhowError { source } => {
                eprintln!("Unhandled AnyhowError: {:?}", source); // ログ出力
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_string(),
                )
            }
        };
        // エラー本文はプレーンテキスト
        (status, error_message).into_response()
    }
}

use thiserror::Error;

// クライアント起因のバリデーションエラー。メッセージはそのままレスポンス本文になる
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No file uploaded.")]
    MissingFile,

    #[error("Invalid input for width, height, or DPI.")]
    InvalidResizeSpec,
}

use thiserror::Error;

// デコード・リサイズ・エンコード中の失敗。表示文字列はそのまま500応答の本文になるため、
// すべて "Image processing failed:" で始め、原因の説明を含める
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Image processing failed: {0}")]
    ImageProcessingError(String),

    #[error("Image processing failed: {0}")]
    ImageLibError(#[from] image::ImageError), // image::ImageError をラップ

    #[error("Image processing failed: {0}")]
    IoError(#[from] std::io::Error), // フォーマット推測時の I/O エラーをラップ
}

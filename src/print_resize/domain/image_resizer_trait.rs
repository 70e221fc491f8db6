use crate::domain::resize_spec::ResizeSpec;
use crate::infrastructure::error::InfrastructureError;

// このトレイトは、エンコード済みの画像バイト列と検証済みの ResizeSpec を受け取り、
// 指定寸法にリサンプルしたJPEGバイト列を返す
pub trait ImageResizer {
    fn resize_to_print(
        &self,
        image_bytes: Vec<u8>,
        spec: &ResizeSpec,
    ) -> Result<Vec<u8>, InfrastructureError>;
}

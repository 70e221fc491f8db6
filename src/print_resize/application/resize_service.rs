use super::error::ApplicationError;
use std::sync::Arc;

use crate::domain::error::DomainError;
use crate::domain::image_resizer_trait::ImageResizer;
use crate::domain::resize_spec::ResizeSpec;

pub struct ResizeService {
    image_resizer: Arc<dyn ImageResizer + Send + Sync>, // トレイトオブジェクトとして保持
}

impl ResizeService {
    pub fn new(image_resizer: Arc<dyn ImageResizer + Send + Sync>) -> Self {
        Self { image_resizer }
    }

    /// アップロード一式を検証してリサイズ済みJPEGのバイト列を返す。
    /// 検証順はファイル → 数値フィールドで、どこかで失敗したらリサイズには進まない。
    pub async fn resize_upload(
        &self,
        file_name: Option<String>,
        image_data: Option<Vec<u8>>,
        width_in: Option<String>,
        height_in: Option<String>,
        dpi: Option<String>,
    ) -> Result<Vec<u8>, ApplicationError> {
        // ファイル未選択の場合、ブラウザはファイル名が空のパートを送ってくる
        if file_name.as_deref().map_or(true, |name| name.is_empty()) {
            return Err(DomainError::MissingFile.into());
        }
        let image_data = image_data.ok_or(DomainError::MissingFile)?;

        let spec = ResizeSpec::from_fields(
            width_in.as_deref(),
            height_in.as_deref(),
            dpi.as_deref(),
        )?;

        println!(
            "ResizeService: resize_upload called for {}x{}in @ {}dpi",
            spec.width_in, spec.height_in, spec.dpi
        );

        let jpeg_bytes = self.image_resizer.resize_to_print(image_data, &spec)?;
        Ok(jpeg_bytes)
    }
}

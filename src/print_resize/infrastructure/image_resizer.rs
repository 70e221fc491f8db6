use super::error::InfrastructureError;
use crate::domain::image_resizer_trait::ImageResizer;
use crate::domain::resize_spec::ResizeSpec;
use image::{imageops, DynamicImage, ImageFormat as InnerImageFormat};
use std::io::Cursor;

// JFIFのSOF寸法フィールドがu16のため、1辺あたりの上限
const MAX_JPEG_DIMENSION: u32 = 65_535;

// ドメイン層で定義する ImageResizer トレイトの具体的な実装
pub struct DefaultImageResizer;

impl DefaultImageResizer {
    pub fn new() -> Self {
        Self
    }
}

impl ImageResizer for DefaultImageResizer {
    fn resize_to_print(
        &self,
        image_bytes: Vec<u8>,
        spec: &ResizeSpec,
    ) -> Result<Vec<u8>, InfrastructureError> {
        let reader = image::io::Reader::new(Cursor::new(image_bytes))
            .with_guessed_format()
            .map_err(InfrastructureError::IoError)?;
        // JPEG互換のため3チャンネルRGBへ変換 (アルファ・パレットは破棄)
        let img = reader
            .decode()
            .map_err(InfrastructureError::ImageLibError)?
            .to_rgb8();

        let (width_px, height_px) = spec.pixel_dimensions();
        if width_px == 0 || height_px == 0 {
            return Err(InfrastructureError::ImageProcessingError(format!(
                "computed pixel dimensions {}x{} must be positive",
                width_px, height_px
            )));
        }
        if width_px > MAX_JPEG_DIMENSION || height_px > MAX_JPEG_DIMENSION {
            return Err(InfrastructureError::ImageProcessingError(format!(
                "computed pixel dimensions {}x{} exceed the JPEG limit of {}",
                width_px, height_px, MAX_JPEG_DIMENSION
            )));
        }

        // 印刷用途なのでLanczos (windowed sinc) でリサンプルする
        let resized = imageops::resize(&img, width_px, height_px, imageops::FilterType::Lanczos3);

        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(resized)
            .write_to(&mut buffer, InnerImageFormat::Jpeg)
            .map_err(InfrastructureError::ImageLibError)?;

        let mut jpeg_bytes = buffer.into_inner();
        embed_jfif_density(&mut jpeg_bytes, spec.dpi)?;
        Ok(jpeg_bytes)
    }
}

// エンコーダが書き出したJFIF APP0の密度フィールドを dots/inch に書き換える。
// メタデータのみの変更で、ピクセルには触れない。
// JFIFレイアウト: SOI(2) APP0マーカー(2) 長さ(2) "JFIF\0"(5) バージョン(2)
//                 単位(1, offset 13) X密度(2, offset 14) Y密度(2, offset 16)
fn embed_jfif_density(jpeg_bytes: &mut [u8], dpi: u32) -> Result<(), InfrastructureError> {
    let dpi = u16::try_from(dpi).map_err(|_| {
        InfrastructureError::ImageProcessingError(format!(
            "DPI {} does not fit the JFIF density field",
            dpi
        ))
    })?;

    if jpeg_bytes.len() < 18
        || jpeg_bytes[0..4] != [0xFF, 0xD8, 0xFF, 0xE0]
        || &jpeg_bytes[6..11] != b"JFIF\0"
    {
        return Err(InfrastructureError::ImageProcessingError(
            "encoded JPEG is missing the JFIF APP0 segment".to_string(),
        ));
    }

    jpeg_bytes[13] = 0x01; // 1 = dots per inch
    jpeg_bytes[14..16].copy_from_slice(&dpi.to_be_bytes());
    jpeg_bytes[16..18].copy_from_slice(&dpi.to_be_bytes());
    Ok(())
}

use crate::application::error::ApplicationError; // Added for handler return types
use axum::{
    body::Body,
    extract::{Multipart, State},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::application::resize_service::ResizeService;

#[derive(Clone)]
pub struct AppState {
    pub resize_service: Arc<ResizeService>,
}

// アップロードフォーム (GET / で返す静的HTML)
const UPLOAD_FORM_HTML: &str = r#"<!doctype html>
<title>AI Image Resizer</title>
<h1>Upload Image and Set Target Size (inches)</h1>
<form method=post enctype=multipart/form-data>
  <label>Image file:</label>
  <input type=file name=file required><br><br>
  <label>Width (inches):</label>
  <input type=number name=width_in step=0.01 min=0.1 required><br>
  <label>Height (inches):</label>
  <input type=number name=height_in step=0.01 min=0.1 required><br>
  <label>DPI (optional, default 300):</label>
  <input type=number name=dpi value=300 min=72 max=1200><br><br>
  <input type=submit value=Resize>
</form>
"#;

// multipartから集めたリクエスト一式。検証前の生の値を保持する
#[derive(Debug, Default)]
struct ResizeFormFields {
    file_name: Option<String>,
    file_data: Option<Vec<u8>>,
    width_in: Option<String>,
    height_in: Option<String>,
    dpi: Option<String>,
}

pub async fn index_handler() -> Html<&'static str> {
    Html(UPLOAD_FORM_HTML)
}

pub async fn resize_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApplicationError> {
    let mut form = ResizeFormFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApplicationError::ResizeFailed(format!("Multipart error: {}", e)))?
    {
        // field.bytes() がフィールドを消費するので、名前類は先に取り出す
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                form.file_name = field.file_name().map(|s| s.to_string());
                let data = field.bytes().await.map_err(|e| {
                    ApplicationError::ResizeFailed(format!(
                        "Failed to read bytes from multipart field: {}",
                        e
                    ))
                })?;
                form.file_data = Some(data.to_vec());
            }
            "width_in" => form.width_in = Some(read_text_field(field).await?),
            "height_in" => form.height_in = Some(read_text_field(field).await?),
            "dpi" => form.dpi = Some(read_text_field(field).await?),
            _ => {} // 未知のフィールドは無視
        }
    }

    let jpeg_bytes = state
        .resize_service
        .resize_upload(
            form.file_name,
            form.file_data,
            form.width_in,
            form.height_in,
            form.dpi,
        )
        .await?;

    Response::builder()
        .header("Content-Type", "image/jpeg")
        .header("Content-Disposition", "attachment; filename=\"resized.jpg\"")
        .body(Body::from(jpeg_bytes))
        .map_err(|e| ApplicationError::ResizeFailed(format!("Failed to build response: {}", e)))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, ApplicationError> {
    field
        .text()
        .await
        .map_err(|e| ApplicationError::ResizeFailed(format!("Multipart error: {}", e)))
}

pub mod axum_handler;
pub mod error;
pub mod image_resizer;

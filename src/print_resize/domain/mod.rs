pub mod error;
pub mod image_resizer_trait;
pub mod resize_spec;

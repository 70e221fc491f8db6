pub mod error;
pub mod resize_service;

pub mod admin_service;
pub mod auth_service;
pub mod http;
pub mod patient_service;
pub mod receptionist_service;

pub use http::{ApiError, Http};

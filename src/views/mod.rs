pub mod admin;
pub mod app;
pub mod auth;
pub mod patient;
pub mod receptionist;
pub mod shared;

pub use app::{use_navigator, use_services, App, Navigator, Services};

// ============================================================================
// CLINIC DESK - Browser client for the clinic management system
// ============================================================================
// - models: wire structures shared with the backend
// - services: HTTP gateway + per-role API wrappers
// - stores: persisted session state with change notifications
// - router: route table, auth/role guard, landing pages
// - views: yew components, one per client route
// ============================================================================

pub mod config;
pub mod models;
pub mod router;
pub mod services;
pub mod stores;
pub mod utils;
pub mod views;

pub use views::App;

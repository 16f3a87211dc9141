pub mod auth;
pub mod billing;
pub mod clinic;

pub use auth::*;
pub use billing::*;
pub use clinic::*;

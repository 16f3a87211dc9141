pub mod error_banner;
pub mod header;

pub use error_banner::ErrorBanner;
pub use header::Header;

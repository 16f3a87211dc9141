pub mod storage;
pub mod validators;

pub use storage::*;
pub use validators::*;

pub mod session_store;

pub use session_store::{
    LocalStorageBackend, MemoryBackend, SessionBackend, SessionSnapshot, SessionStore,
};

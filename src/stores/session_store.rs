// ============================================================================
// SESSION STORE - Persisted auth state (token + user) with notifications
// ============================================================================
// The only shared mutable state of the client. Every reader and writer of
// the session goes through this store; nothing else touches the underlying
// storage keys. Listeners are a typed observer list owned by the store,
// fire-and-forget, same browsing context only.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::User;
use crate::utils::{storage_get, storage_remove, storage_set};

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "auth_user";

/// Key-value persistence medium behind the store. The app uses
/// localStorage; tests use the in-memory backend.
pub trait SessionBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

pub struct LocalStorageBackend;

impl SessionBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        storage_get(key)
    }

    fn set(&self, key: &str, value: &str) {
        storage_set(key, value);
    }

    fn remove(&self, key: &str) {
        storage_remove(key);
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    items: RefCell<HashMap<String, String>>,
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Point-in-time view of the session handed to listeners.
#[derive(Clone, PartialEq, Debug)]
pub struct SessionSnapshot {
    pub token: String,
    pub user: Option<User>,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty() && self.user.is_some()
    }
}

type Listener = Box<dyn Fn(&SessionSnapshot)>;

struct Inner {
    backend: Box<dyn SessionBackend>,
    listeners: RefCell<Vec<Listener>>,
}

/// Cheap-to-clone handle; all clones share the same backend and listener
/// list (single-threaded browser context, no locking).
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<Inner>,
}

impl SessionStore {
    pub fn new(backend: Box<dyn SessionBackend>) -> Self {
        Self {
            inner: Rc::new(Inner {
                backend,
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Store backed by localStorage, used by the running app.
    pub fn browser() -> Self {
        Self::new(Box::new(LocalStorageBackend))
    }

    /// Current token; empty string means "no session".
    pub fn token(&self) -> String {
        self.inner.backend.get(TOKEN_KEY).unwrap_or_default()
    }

    /// Current user; a missing or corrupted record decodes to `None`.
    pub fn user(&self) -> Option<User> {
        let raw = self.inner.backend.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn read(&self) -> (String, Option<User>) {
        (self.token(), self.user())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let (token, user) = self.read();
        SessionSnapshot { token, user }
    }

    /// Persist token and user together, then notify listeners once.
    pub fn write(&self, token: &str, user: &User) {
        self.inner.backend.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.inner.backend.set(USER_KEY, &json),
            Err(e) => log::error!("❌ Could not serialize session user: {}", e),
        }
        self.notify();
    }

    /// Erase both fields, then notify listeners once.
    pub fn clear(&self) {
        self.inner.backend.remove(TOKEN_KEY);
        self.inner.backend.remove(USER_KEY);
        self.notify();
    }

    /// Subscribe to session changes. Late subscribers miss past events.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&SessionSnapshot) + 'static,
    {
        self.inner.listeners.borrow_mut().push(Box::new(listener));
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for listener in self.inner.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::models::Role;

    fn memory_store() -> SessionStore {
        SessionStore::new(Box::new(MemoryBackend::default()))
    }

    fn sample_user(role: Role) -> User {
        User {
            user_id: 7,
            username: "zhang".to_string(),
            role,
            status: Some("active".to_string()),
            emp_id: None,
            employee: None,
            patient_id: Some(3),
            patient: None,
        }
    }

    #[test]
    fn write_then_read_roundtrips() {
        let store = memory_store();
        let user = sample_user(Role::Patient);
        store.write("tok-123", &user);

        let (token, read_user) = store.read();
        assert_eq!(token, "tok-123");
        assert_eq!(read_user, Some(user));
    }

    #[test]
    fn clear_empties_token_and_user() {
        let store = memory_store();
        store.write("tok", &sample_user(Role::Admin));
        store.clear();

        let (token, user) = store.read();
        assert_eq!(token, "");
        assert_eq!(user, None);
    }

    #[test]
    fn corrupted_user_record_reads_as_none() {
        let store = memory_store();
        store.inner.backend.set(TOKEN_KEY, "tok");
        store.inner.backend.set(USER_KEY, "{not valid json");

        let (token, user) = store.read();
        assert_eq!(token, "tok");
        assert_eq!(user, None);
    }

    #[test]
    fn write_and_clear_notify_listeners() {
        let store = memory_store();
        let events = Rc::new(Cell::new(0u32));
        let last_authenticated = Rc::new(Cell::new(false));
        {
            let events = events.clone();
            let last = last_authenticated.clone();
            store.subscribe(move |snapshot| {
                events.set(events.get() + 1);
                last.set(snapshot.is_authenticated());
            });
        }

        store.write("tok", &sample_user(Role::Receptionist));
        assert_eq!(events.get(), 1);
        assert!(last_authenticated.get());

        store.clear();
        assert_eq!(events.get(), 2);
        assert!(!last_authenticated.get());
    }

    #[test]
    fn unknown_role_string_decodes_to_unknown() {
        let store = memory_store();
        store.inner.backend.set(
            USER_KEY,
            r#"{"user_id":1,"username":"x","role":"doctor"}"#,
        );
        let user = store.user().unwrap();
        assert_eq!(user.role, Role::Unknown);
    }
}

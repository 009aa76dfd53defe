//! Session Provider
//!
//! Abstraction over the browser's localStorage session keys so components
//! (and tests) never touch the storage API directly. The portal's login
//! pages own writing these keys; this crate only reads and clears them.

use std::rc::Rc;

use leptos::prelude::*;

const TOKEN_KEY: &str = "token";
const USER_NAME_KEY: &str = "user_full_name";

pub trait SessionProvider {
    /// Bearer token of the logged-in user, if any.
    fn token(&self) -> Option<String>;
    /// Full name stored at login.
    fn user_name(&self) -> Option<String>;
    /// Log out: drop the token and the stored name.
    fn clear(&self);
}

/// localStorage-backed session (the real browser session)
#[derive(Default)]
pub struct BrowserSession;

impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionProvider for BrowserSession {
    fn token(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn user_name(&self) -> Option<String> {
        Self::storage()?.get_item(USER_NAME_KEY).ok()?
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_NAME_KEY);
        }
    }
}

/// Copyable handle to the injected session provider. The provider itself
/// is not `Send`, so it lives behind a local stored value and this handle
/// is what closures capture.
#[derive(Clone, Copy)]
pub struct SharedSession(StoredValue<Rc<dyn SessionProvider>, LocalStorage>);

impl SharedSession {
    pub fn new(provider: Rc<dyn SessionProvider>) -> Self {
        Self(StoredValue::new_local(provider))
    }

    pub fn token(&self) -> Option<String> {
        self.0.with_value(|provider| provider.token())
    }

    pub fn user_name(&self) -> Option<String> {
        self.0.with_value(|provider| provider.user_name())
    }

    pub fn clear(&self) {
        self.0.with_value(|provider| provider.clear());
    }
}

/// Get the session from context
pub fn use_session() -> SharedSession {
    expect_context::<SharedSession>()
}

/// The header greets with the first word of the stored full name.
pub fn first_name(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .next()
        .unwrap_or("Student")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory stand-in used where no browser storage exists.
    struct MemorySession {
        token: RefCell<Option<String>>,
        name: RefCell<Option<String>>,
    }

    impl SessionProvider for MemorySession {
        fn token(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn user_name(&self) -> Option<String> {
            self.name.borrow().clone()
        }

        fn clear(&self) {
            self.token.borrow_mut().take();
            self.name.borrow_mut().take();
        }
    }

    #[test]
    fn test_clear_logs_out() {
        let session = MemorySession {
            token: RefCell::new(Some("jwt".to_string())),
            name: RefCell::new(Some("Ana Torres".to_string())),
        };
        assert_eq!(session.token().as_deref(), Some("jwt"));
        session.clear();
        assert_eq!(session.token(), None);
        assert_eq!(session.user_name(), None);
    }

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("Ana Torres"), "Ana");
        assert_eq!(first_name("Ana"), "Ana");
        assert_eq!(first_name(""), "Student");
    }
}

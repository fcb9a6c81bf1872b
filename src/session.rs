//! Access token storage
//!
//! The token is issued by the backend at login and kept by the caller; the
//! list client only needs to read it before each request.

use std::sync::RwLock;

/// Header carrying the session token on every API call
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Source of the session token sent with backend requests
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
}

/// Token held in memory, optionally replaced at runtime
#[derive(Debug, Default)]
pub struct StaticTokenStore {
    token: RwLock<Option<String>>,
}

impl StaticTokenStore {
    pub fn new(token: Option<String>) -> Self {
        // Blank tokens behave like no token at all.
        let token = token.filter(|t| !t.trim().is_empty());
        Self {
            token: RwLock::new(token),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token.filter(|t| !t.trim().is_empty());
        }
    }
}

impl TokenStore for StaticTokenStore {
    fn access_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }
}

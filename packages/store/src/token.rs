//! Bearer credential persistence.

use crate::KeyValueStore;

/// Storage key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Holds the single bearer token issued at login.
///
/// No expiry check is done here; an expired token is only discovered when
/// the next API call fails.
#[derive(Clone, Debug)]
pub struct TokenStore<S> {
    inner: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn get(&self) -> Option<String> {
        self.inner
            .get(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn set(&self, token: &str) {
        self.inner.set(ACCESS_TOKEN_KEY, token);
    }

    pub fn clear(&self) {
        self.inner.remove(ACCESS_TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_token_lifecycle() {
        let tokens = TokenStore::new(MemoryStore::new());
        assert!(tokens.get().is_none());

        tokens.set("abc.def");
        assert_eq!(tokens.get().as_deref(), Some("abc.def"));

        tokens.clear();
        assert!(tokens.get().is_none());
    }

    #[test]
    fn test_token_survives_new_handle() {
        let backing = MemoryStore::new();
        TokenStore::new(backing.clone()).set("persisted");

        // A fresh handle over the same storage sees the token, as after a reload.
        let reopened = TokenStore::new(backing.clone());
        assert_eq!(reopened.get().as_deref(), Some("persisted"));
        assert_eq!(backing.get(ACCESS_TOKEN_KEY).as_deref(), Some("persisted"));
    }

    #[test]
    fn test_empty_token_reads_as_absent() {
        let backing = MemoryStore::new();
        backing.set(ACCESS_TOKEN_KEY, "");
        assert!(TokenStore::new(backing).get().is_none());
    }
}

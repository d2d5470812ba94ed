use tracing::debug;

use crate::store::{Store, Subscription};

/// The one credential pair the session accepts.
///
/// Defaults to the demo pair `admin` / `admin`. This is a compiled-in
/// placeholder, not a security boundary; a real deployment swaps the whole
/// [`Session`] for one backed by an identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("admin", "admin")
    }
}

/// Transient authentication state, reset at process start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
}

/// Gates navigation into the directory behind a single credential check.
///
/// The flag starts false every process start; there is no token, no expiry,
/// and no persistence. Clones share the same state.
pub struct Session {
    state: Store<SessionState>,
    credentials: Credentials,
}

impl Session {
    /// Create an unauthenticated session accepting the given pair.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            state: Store::new(SessionState::default()),
            credentials,
        }
    }

    /// Attempt to log in.
    ///
    /// Only an exact match against the fixed pair succeeds; success flips
    /// the flag and notifies subscribers. A failed attempt leaves the flag
    /// untouched, and there is no lockout however often it fails.
    pub fn login(&self, username: &str, password: &str) -> bool {
        let ok = self.credentials.matches(username, password);
        debug!(username, success = ok, "login attempt");
        if ok {
            self.state.update(|state| state.authenticated = true);
        }
        ok
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read(|state| state.authenticated)
    }

    /// Subscribe to session-state changes.
    #[must_use = "dropping the subscription detaches the callback"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription<SessionState>
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        self.state.subscribe(callback)
    }

    /// Subscribe and immediately receive the current session state.
    #[must_use = "dropping the subscription detaches the callback"]
    pub fn watch<F>(&self, callback: F) -> Subscription<SessionState>
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        self.state.watch(callback)
    }
}

impl Clone for Session {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            credentials: self.credentials.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Credentials::default())
    }
}

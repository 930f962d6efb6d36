//! Auth session store.
//!
//! Holds the logged-in flag and mirrors it into the durable key-value slot
//! so the session survives restarts. Views get shared read access plus the
//! narrow login/logout API; nothing else mutates the flag.

use anyhow::Result;

use crate::store::KvStore;

/// Key of the persisted login flag.
pub const LOGGED_IN_KEY: &str = "logged_in";

/// Value stored under [`LOGGED_IN_KEY`] while logged in. Anything else
/// (including an absent key) reads back as logged out.
pub const LOGGED_IN_VALUE: &str = "1";

/// The session and its backing slot.
///
/// `login`/`logout` only flip the in-memory flag; [`SessionStore::persist`]
/// mirrors it to disk. Event-loop callers run persistence as a separate
/// effect, CLI callers persist immediately.
#[derive(Debug)]
pub struct SessionStore {
    store: KvStore,
    logged_in: bool,
}

impl SessionStore {
    /// Opens the session, restoring the flag from the durable slot.
    ///
    /// An unreadable slot is treated as logged out rather than an error so
    /// a corrupt state file never locks the user out of the login screen.
    pub fn restore(store: KvStore) -> Self {
        let logged_in = match store.get(LOGGED_IN_KEY) {
            Ok(value) => value.as_deref() == Some(LOGGED_IN_VALUE),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read login flag, assuming logged out");
                false
            }
        };
        Self { store, logged_in }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Marks the session logged in.
    ///
    /// There is no authentication backend; the credentials are accepted
    /// as-is once the form rules have passed. The password is received only
    /// because the form hands over both raw values.
    pub fn login(&mut self, email: &str, _password: &str) {
        self.logged_in = true;
        tracing::info!(email, "logged in");
    }

    /// Marks the session logged out.
    pub fn logout(&mut self) {
        self.logged_in = false;
        tracing::info!("logged out");
    }

    /// Mirrors the current flag into the durable slot: writes `"1"` while
    /// logged in, clears the key otherwise.
    pub fn persist(&self) -> Result<()> {
        if self.logged_in {
            self.store.set(LOGGED_IN_KEY, LOGGED_IN_VALUE)
        } else {
            self.store.remove(LOGGED_IN_KEY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_at(temp: &tempfile::TempDir) -> KvStore {
        KvStore::open(temp.path().join("state.json"))
    }

    #[test]
    fn restore_defaults_to_logged_out() {
        let temp = tempdir().unwrap();
        let session = SessionStore::restore(store_at(&temp));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn login_persists_and_survives_restore() {
        let temp = tempdir().unwrap();

        let mut session = SessionStore::restore(store_at(&temp));
        session.login("a@b.com", "1234567");
        session.persist().unwrap();

        assert_eq!(
            store_at(&temp).get(LOGGED_IN_KEY).unwrap().as_deref(),
            Some(LOGGED_IN_VALUE)
        );

        // A fresh session sees the flag without re-entering credentials.
        let restored = SessionStore::restore(store_at(&temp));
        assert!(restored.is_logged_in());
    }

    #[test]
    fn logout_clears_the_slot() {
        let temp = tempdir().unwrap();

        let mut session = SessionStore::restore(store_at(&temp));
        session.login("a@b.com", "1234567");
        session.persist().unwrap();

        session.logout();
        session.persist().unwrap();

        assert_eq!(store_at(&temp).get(LOGGED_IN_KEY).unwrap(), None);
        assert!(!SessionStore::restore(store_at(&temp)).is_logged_in());
    }

    #[test]
    fn only_the_exact_truthy_value_restores_a_session() {
        let temp = tempdir().unwrap();

        store_at(&temp).set(LOGGED_IN_KEY, "true").unwrap();
        assert!(!SessionStore::restore(store_at(&temp)).is_logged_in());

        store_at(&temp).set(LOGGED_IN_KEY, "1").unwrap();
        assert!(SessionStore::restore(store_at(&temp)).is_logged_in());
    }
}

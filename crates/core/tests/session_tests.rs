// ═══════════════════════════════════════════════════════════════════
// Session Tests — SessionStore, FileBackend, MemoryBackend
// ═══════════════════════════════════════════════════════════════════

use crypto_sim_core::storage::backend::{FileBackend, MemoryBackend, SessionBackend};
use crypto_sim_core::storage::store::SessionStore;

fn file_store(dir: &tempfile::TempDir) -> SessionStore {
    let backend = FileBackend::new(dir.path()).expect("backend");
    SessionStore::new(Box::new(backend))
}

// ═══════════════════════════════════════════════════════════════════
// Login / Logout semantics
// ═══════════════════════════════════════════════════════════════════

mod login_logout {
    use super::*;

    #[test]
    fn login_stores_identity_and_credential() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        store.login(Some("alice".into()), Some("tok-123".into()));

        let session = store.session();
        assert_eq!(session.username.as_deref(), Some("alice"));
        assert_eq!(session.token.as_deref(), Some("tok-123"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn login_replaces_previous_session_without_merging() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        store.login(Some("alice".into()), Some("tok-1".into()));
        store.login(Some("bob".into()), None);

        let session = store.session();
        assert_eq!(session.username.as_deref(), Some("bob"));
        assert_eq!(session.token, None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn empty_arguments_store_none() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        store.login(Some(String::new()), Some(String::new()));

        let session = store.session();
        assert_eq!(session.username, None);
        assert_eq!(session.token, None);
    }

    #[test]
    fn logout_clears_both_fields() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        store.login(Some("alice".into()), Some("tok-123".into()));
        store.logout();

        let session = store.session();
        assert_eq!(session.username, None);
        assert_eq!(session.token, None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn logout_is_idempotent() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        store.login(Some("alice".into()), Some("tok-123".into()));
        store.logout();
        let after_first = store.session();
        store.logout();
        assert_eq!(store.session(), after_first);
        assert_eq!(store.session().token, None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Persistence round-trips (simulated restart)
// ═══════════════════════════════════════════════════════════════════

mod persistence {
    use super::*;

    #[test]
    fn login_survives_restart() {
        let dir = tempfile::tempdir().expect("tempdir");
        file_store(&dir).login(Some("alice".into()), Some("tok-123".into()));

        let restored = file_store(&dir);
        let session = restored.session();
        assert_eq!(session.username.as_deref(), Some("alice"));
        assert_eq!(session.token.as_deref(), Some("tok-123"));
    }

    #[test]
    fn logout_survives_restart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = file_store(&dir);
        store.login(Some("alice".into()), Some("tok-123".into()));
        store.logout();

        let restored = file_store(&dir);
        let session = restored.session();
        assert_eq!(session.username, None);
        assert_eq!(session.token, None);
    }

    #[test]
    fn fresh_backend_starts_logged_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = file_store(&dir);
        assert_eq!(store.session(), Default::default());
    }

    #[test]
    fn corrupt_identity_fails_open_to_logged_out_username() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend = FileBackend::new(dir.path()).expect("backend");
        backend.write("user", "{not valid json").expect("write");
        backend.write("token", "tok-123").expect("write");

        let store = SessionStore::new(Box::new(backend));
        let session = store.session();
        // Identity parse failure is "no identity", never an error.
        assert_eq!(session.username, None);
        // The raw credential entry is independent and still restores.
        assert_eq!(session.token.as_deref(), Some("tok-123"));
    }

    #[test]
    fn logout_removes_durable_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = file_store(&dir);
        store.login(Some("alice".into()), Some("tok-123".into()));
        store.logout();

        let backend = FileBackend::new(dir.path()).expect("backend");
        assert_eq!(backend.read("user"), None);
        assert_eq!(backend.read("token"), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Backend contract
// ═══════════════════════════════════════════════════════════════════

mod backend_contract {
    use super::*;

    #[test]
    fn memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("user"), None);
        backend.write("user", "{\"username\":\"alice\"}").unwrap();
        assert_eq!(backend.read("user").as_deref(), Some("{\"username\":\"alice\"}"));
        backend.remove("user").unwrap();
        assert_eq!(backend.read("user"), None);
    }

    #[test]
    fn removing_missing_entry_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend = FileBackend::new(dir.path()).expect("backend");
        assert!(backend.remove("token").is_ok());
    }
}

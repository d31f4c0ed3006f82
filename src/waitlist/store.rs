use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::constants::WAITLIST_KEY;
use crate::storage::KeyValueStore;
use crate::utils::{StorageError, WaitlistError};
use crate::validation::ValidEmail;

/// Result of an enrollment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    /// The email was new and has been persisted
    Enrolled(usize),
    /// The email was already on the list, nothing changed
    AlreadyMember(usize),
}

impl EnrollOutcome {
    /// Count of members after the attempt
    pub fn count(&self) -> usize {
        match self {
            Self::Enrolled(n) | Self::AlreadyMember(n) => *n,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Self::Enrolled(_))
    }
}

/// The durable, de-duplicated list of enrolled emails.
///
/// Loaded from the key-value store once in [`WaitlistStore::open`] and kept in
/// memory afterwards; every successful enrollment rewrites the whole list.
pub struct WaitlistStore {
    backend: Box<dyn KeyValueStore>,
    members: Vec<String>,
}

impl WaitlistStore {
    /// Load the waitlist from `backend`.
    ///
    /// Absent, unreadable or malformed state yields an empty list; it is never
    /// reported to the caller.
    pub fn open(backend: Box<dyn KeyValueStore>) -> Self {
        let members = load_members(&*backend);
        debug!("Loaded waitlist with {} members", members.len());
        Self { backend, members }
    }

    /// Number of enrolled emails
    pub fn current_count(&self) -> usize {
        self.members.len()
    }

    /// Exact, case-sensitive membership test
    pub fn is_member(&self, email: &ValidEmail) -> bool {
        self.members.iter().any(|m| m == email.as_str())
    }

    /// Enrolled emails in insertion order
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Add `email` unless it is already present.
    ///
    /// The membership check, append and write happen in this one call. If the
    /// write fails the append is undone, so the in-memory list never runs ahead
    /// of storage.
    pub fn enroll(&mut self, email: ValidEmail) -> Result<EnrollOutcome, WaitlistError> {
        if self.is_member(&email) {
            debug!("{} is already on the waitlist", email);
            return Ok(EnrollOutcome::AlreadyMember(self.current_count()));
        }

        self.members.push(email.into_inner());

        if let Err(e) = self.persist() {
            self.members.pop();
            return Err(e);
        }

        info!("Waitlist now has {} members", self.members.len());
        Ok(EnrollOutcome::Enrolled(self.current_count()))
    }

    fn persist(&mut self) -> Result<(), WaitlistError> {
        let json = serde_json::to_string(&self.members).map_err(StorageError::from)?;
        self.backend.set(WAITLIST_KEY, &json)?;
        Ok(())
    }
}

fn load_members(backend: &dyn KeyValueStore) -> Vec<String> {
    let raw = match backend.get(WAITLIST_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Could not read persisted waitlist, starting empty: {}", e);
            return Vec::new();
        }
    };

    let stored: Vec<String> = match serde_json::from_str(&raw) {
        Ok(stored) => stored,
        Err(e) => {
            warn!("Persisted waitlist is malformed, starting empty: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::with_capacity(stored.len());
    let stored_len = stored.len();
    let members: Vec<String> = stored
        .into_iter()
        .filter(|email| seen.insert(email.clone()))
        .collect();

    if members.len() != stored_len {
        warn!(
            "Dropped {} duplicate entries from persisted waitlist",
            stored_len - members.len()
        );
    }

    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryKvStore, MockKeyValueStore};
    use crate::validation::validate;
    use pretty_assertions::assert_eq;

    fn email(s: &str) -> ValidEmail {
        validate(s).unwrap()
    }

    fn open(kv: &MemoryKvStore) -> WaitlistStore {
        WaitlistStore::open(Box::new(kv.clone()))
    }

    #[test]
    fn test_empty_when_nothing_persisted() {
        let store = open(&MemoryKvStore::new());
        assert_eq!(store.current_count(), 0);
        assert!(store.members().is_empty());
    }

    #[test]
    fn test_malformed_state_recovers_to_empty() {
        for raw in ["not json", "{\"a\": 1}", "[1, 2, 3]", "[\"a@example.com\", null]", "\"a@example.com\""] {
            let kv = MemoryKvStore::with_entries([(WAITLIST_KEY, raw)]);
            let store = open(&kv);
            assert_eq!(store.current_count(), 0, "raw state {raw:?}");
        }
    }

    #[test]
    fn test_unreadable_backend_recovers_to_empty() {
        let mut backend = MockKeyValueStore::new();
        backend
            .expect_get()
            .returning(|_| Err(StorageError::Io(std::io::Error::other("disk gone"))));

        let store = WaitlistStore::open(Box::new(backend));
        assert_eq!(store.current_count(), 0);
    }

    #[test]
    fn test_enroll_twice_is_idempotent() {
        let mut store = open(&MemoryKvStore::new());

        assert_eq!(
            store.enroll(email("a@example.com")).unwrap(),
            EnrollOutcome::Enrolled(1)
        );
        assert_eq!(
            store.enroll(email("a@example.com")).unwrap(),
            EnrollOutcome::AlreadyMember(1)
        );
        assert_eq!(store.current_count(), 1);
    }

    #[test]
    fn test_count_tracks_distinct_enrollments() {
        let mut store = open(&MemoryKvStore::new());
        let attempts = ["a@example.com", "b@example.com", "a@example.com", "c@example.com", "b@example.com"];

        for attempt in attempts {
            store.enroll(email(attempt)).unwrap();
        }

        assert_eq!(store.current_count(), 3);
        assert_eq!(store.members(), ["a@example.com", "b@example.com", "c@example.com"]);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let mut store = open(&MemoryKvStore::new());
        store.enroll(email("a@example.com")).unwrap();

        assert!(store.is_member(&email("a@example.com")));
        assert!(!store.is_member(&email("A@example.com")));
        assert_eq!(
            store.enroll(email("A@example.com")).unwrap(),
            EnrollOutcome::Enrolled(2)
        );
    }

    #[test]
    fn test_round_trip_through_persisted_state() {
        let kv = MemoryKvStore::new();
        let mut store = open(&kv);
        for e in ["a@example.com", "b@example.com", "c@example.com"] {
            store.enroll(email(e)).unwrap();
        }
        drop(store);

        let reopened = open(&kv);
        assert_eq!(reopened.current_count(), 3);
        assert!(reopened.is_member(&email("a@example.com")));
        assert!(reopened.is_member(&email("b@example.com")));
        assert!(reopened.is_member(&email("c@example.com")));
    }

    #[test]
    fn test_persisted_layout_is_json_array_in_order() {
        let kv = MemoryKvStore::new();
        let mut store = open(&kv);
        store.enroll(email("z@example.com")).unwrap();
        store.enroll(email("a@example.com")).unwrap();

        assert_eq!(
            kv.get(WAITLIST_KEY).unwrap().as_deref(),
            Some(r#"["z@example.com","a@example.com"]"#)
        );
    }

    #[test]
    fn test_duplicates_in_persisted_state_are_dropped() {
        let kv = MemoryKvStore::with_entries([(
            WAITLIST_KEY,
            r#"["a@example.com","b@example.com","a@example.com"]"#,
        )]);
        let store = open(&kv);

        assert_eq!(store.current_count(), 2);
        assert_eq!(store.members(), ["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|_| Ok(None));
        backend
            .expect_set()
            .times(1)
            .returning(|_, _| Err(StorageError::Io(std::io::Error::other("read-only"))));

        let mut store = WaitlistStore::open(Box::new(backend));
        let result = store.enroll(email("a@example.com"));

        assert!(matches!(result, Err(WaitlistError::Storage(_))));
        assert_eq!(store.current_count(), 0);
        assert!(!store.is_member(&email("a@example.com")));
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(EnrollOutcome::Enrolled(4).count(), 4);
        assert!(EnrollOutcome::Enrolled(4).is_new());
        assert_eq!(EnrollOutcome::AlreadyMember(2).count(), 2);
        assert!(!EnrollOutcome::AlreadyMember(2).is_new());
    }
}

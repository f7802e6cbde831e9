//! Login state and the attendance set.
//!
//! One session per storage profile: logging in overwrites whoever was
//! there before, and logging out wipes the attendance set along with the
//! identity. Attendance belongs to whoever is currently logged in;
//! multi-account support is not modeled.

use crate::storage::KeyValueStore;

// The three dedicated storage slots
const LOGGED_IN_KEY: &str = "logged_in";
const USER_EMAIL_KEY: &str = "user_email";
const ATTENDED_EVENTS_KEY: &str = "attended_events";

/// The current session: logged-in flag, user email, and the ordered set
/// of event ids the user is attending.
///
/// Constructed explicitly and passed to whoever needs it; nothing in the
/// crate reads session state ambiently.
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        SessionStore { store }
    }

    /// Start a session for `email`.
    ///
    /// No credential check happens here (or anywhere); any caller-approved
    /// email becomes the current user.
    pub fn login(&mut self, email: &str) {
        self.store.set(LOGGED_IN_KEY, "true");
        self.store.set(USER_EMAIL_KEY, email);
    }

    /// End the session, wiping identity and the whole attendance set.
    pub fn logout(&mut self) {
        self.store.remove(LOGGED_IN_KEY);
        self.store.remove(USER_EMAIL_KEY);
        self.store.remove(ATTENDED_EVENTS_KEY);
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get(LOGGED_IN_KEY).as_deref() == Some("true")
    }

    pub fn user_email(&self) -> Option<String> {
        self.store.get(USER_EMAIL_KEY)
    }

    /// Event ids the user is attending, in the order they were added.
    ///
    /// Absent or unreadable storage decodes as the empty set.
    pub fn attended_event_ids(&self) -> Vec<String> {
        self.store
            .get(ATTENDED_EVENTS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Idempotent insert into the attendance set.
    pub fn add_attended_event(&mut self, event_id: &str) {
        let mut attended = self.attended_event_ids();
        if attended.iter().any(|id| id == event_id) {
            return;
        }
        attended.push(event_id.to_string());
        self.write_attended(&attended);
    }

    /// Idempotent removal from the attendance set.
    pub fn remove_attended_event(&mut self, event_id: &str) {
        let attended: Vec<String> = self
            .attended_event_ids()
            .into_iter()
            .filter(|id| id != event_id)
            .collect();
        self.write_attended(&attended);
    }

    pub fn is_event_attended(&self, event_id: &str) -> bool {
        self.attended_event_ids().iter().any(|id| id == event_id)
    }

    /// Whether the one-time tips behind `key` were already shown.
    pub fn has_seen_tips(&self, key: &str) -> bool {
        self.store.get(key).is_some()
    }

    pub fn mark_tips_seen(&mut self, key: &str) {
        self.store.set(key, "true");
    }

    fn write_attended(&mut self, attended: &[String]) {
        match serde_json::to_string(attended) {
            Ok(raw) => self.store.set(ATTENDED_EVENTS_KEY, &raw),
            Err(e) => log::warn!("could not encode attendance list: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn session() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::new())
    }

    // --- login / logout ---

    #[test]
    fn login_sets_identity() {
        let mut session = session();
        assert!(!session.is_logged_in());
        assert_eq!(session.user_email(), None);

        session.login("a@x.com");
        assert!(session.is_logged_in());
        assert_eq!(session.user_email().as_deref(), Some("a@x.com"));
    }

    #[test]
    fn logout_clears_identity_and_attendance() {
        let mut session = session();
        session.login("a@x.com");
        session.add_attended_event("sample-2");
        session.add_attended_event("sample-4");

        session.logout();

        assert!(!session.is_logged_in());
        assert_eq!(session.user_email(), None);
        assert!(!session.is_event_attended("sample-2"));
        assert!(!session.is_event_attended("sample-4"));
        assert!(session.attended_event_ids().is_empty());
    }

    #[test]
    fn attendance_does_not_follow_the_next_user() {
        let mut session = session();
        session.login("a@x.com");
        session.add_attended_event("sample-2");

        session.logout();
        session.login("b@x.com");

        assert!(!session.is_event_attended("sample-2"));
    }

    // --- attendance set ---

    #[test]
    fn attend_is_idempotent() {
        let mut session = session();
        session.add_attended_event("sample-1");
        session.add_attended_event("sample-1");

        assert!(session.is_event_attended("sample-1"));
        assert_eq!(session.attended_event_ids(), ["sample-1"]);
    }

    #[test]
    fn unattend_is_idempotent() {
        let mut session = session();
        session.add_attended_event("sample-1");

        session.remove_attended_event("sample-1");
        assert!(!session.is_event_attended("sample-1"));

        // removing again is a no-op, not an error
        session.remove_attended_event("sample-1");
        assert!(session.attended_event_ids().is_empty());
    }

    #[test]
    fn attendance_preserves_insertion_order() {
        let mut session = session();
        session.add_attended_event("sample-3");
        session.add_attended_event("sample-1");
        session.add_attended_event("sample-2");

        assert_eq!(
            session.attended_event_ids(),
            ["sample-3", "sample-1", "sample-2"]
        );
    }

    // --- degraded storage ---

    #[test]
    fn corrupt_attendance_decodes_as_empty() {
        let mut store = MemoryStore::new();
        store.set("attended_events", "not json at all");

        let session = SessionStore::new(store);
        assert!(session.attended_event_ids().is_empty());
        assert!(!session.is_event_attended("sample-1"));
    }

    // --- one-time tips ---

    #[test]
    fn tips_shown_exactly_once() {
        let mut session = session();
        assert!(!session.has_seen_tips("has_seen_explore_tips"));

        session.mark_tips_seen("has_seen_explore_tips");
        assert!(session.has_seen_tips("has_seen_explore_tips"));
    }
}

//! Presentation-side cached state.
//!
//! A front-end owns one `LocalView`, feeds every [`SyncUpdate`] into it,
//! and renders from it. Reads never touch the store, so rendering stays
//! responsive while the worker is mid-fetch.

use crate::conversation;
use crate::directory;
use crate::models::{Handle, Message, Participant};
use crate::sync::{ChatSnapshot, SyncUpdate};

#[derive(Default)]
pub struct LocalView {
    snapshot: ChatSnapshot,
    /// Last transient warning; cleared by the next successful snapshot.
    warning: Option<String>,
    /// Whether any snapshot has arrived yet.
    synced: bool,
}

impl LocalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, update: SyncUpdate) {
        match update {
            SyncUpdate::Snapshot(snapshot) => {
                self.snapshot = snapshot;
                self.warning = None;
                self.synced = true;
            }
            SyncUpdate::Warning(text) => {
                self.warning = Some(text);
            }
        }
    }

    pub fn directory(&self) -> &[Participant] {
        &self.snapshot.directory
    }

    /// Everyone except the given participant.
    pub fn peers(&self, own: &Handle) -> Vec<Participant> {
        directory::peers(&self.snapshot.directory, own)
    }

    /// The conversation with `peer`, oldest first.
    pub fn thread_with(&self, own: &Handle, peer: &Handle) -> Vec<Message> {
        conversation::thread(&self.snapshot.messages, own, peer)
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn has_synced(&self) -> bool {
        self.synced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(digits: &str) -> Handle {
        Handle::parse(digits).unwrap()
    }

    fn snapshot() -> ChatSnapshot {
        ChatSnapshot {
            directory: vec![
                Participant {
                    name: "Alice".to_string(),
                    handle: handle("1111111111"),
                },
                Participant {
                    name: "Bob".to_string(),
                    handle: handle("2222222222"),
                },
            ],
            messages: vec![Message {
                timestamp: "2024-05-01 12:00:00".to_string(),
                sender: handle("1111111111"),
                receiver: handle("2222222222"),
                sender_name: "Alice".to_string(),
                body: "hi".to_string(),
            }],
        }
    }

    #[test]
    fn snapshot_replaces_state_and_clears_the_warning() {
        let mut view = LocalView::new();
        assert!(!view.has_synced());

        view.apply(SyncUpdate::Warning("store unavailable".to_string()));
        assert_eq!(view.warning(), Some("store unavailable"));
        assert!(!view.has_synced());

        view.apply(SyncUpdate::Snapshot(snapshot()));
        assert!(view.has_synced());
        assert!(view.warning().is_none());
        assert_eq!(view.directory().len(), 2);
    }

    #[test]
    fn warning_keeps_the_previous_snapshot() {
        let mut view = LocalView::new();
        view.apply(SyncUpdate::Snapshot(snapshot()));
        view.apply(SyncUpdate::Warning("store unavailable".to_string()));

        assert_eq!(view.warning(), Some("store unavailable"));
        assert_eq!(view.directory().len(), 2);
        assert_eq!(
            view.thread_with(&handle("1111111111"), &handle("2222222222"))
                .len(),
            1
        );
    }

    #[test]
    fn peers_and_thread_read_from_the_snapshot() {
        let mut view = LocalView::new();
        view.apply(SyncUpdate::Snapshot(snapshot()));

        let alice = handle("1111111111");
        let bob = handle("2222222222");
        let peers = view.peers(&alice);
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].name, "Bob");

        let thread = view.thread_with(&alice, &bob);
        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].body, "hi");
    }
}

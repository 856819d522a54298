//! Engine wiring: one worker thread per session plus the handles the
//! front-end holds on to.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::config::SyncConfig;
use crate::store::TableStore;
use crate::sync::{SyncCommand, SyncUpdate, SyncWorker};

/// Cloneable command sender for the sync worker.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: Sender<SyncCommand>,
}

impl RuntimeHandle {
    pub fn send(&self, command: SyncCommand) -> Result<(), mpsc::SendError<SyncCommand>> {
        self.command_tx.send(command)
    }
}

pub struct ChatRuntime {
    handle: RuntimeHandle,
    update_rx: Option<Receiver<SyncUpdate>>,
    worker_handle: Option<JoinHandle<()>>,
}

impl ChatRuntime {
    /// Spawn a sync worker over an already-opened store.
    ///
    /// Several runtimes may share one store; each acts as an independent
    /// session.
    pub fn new(store: Arc<dyn TableStore>, config: SyncConfig) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<SyncCommand>();
        let (update_tx, update_rx) = mpsc::channel::<SyncUpdate>();
        let worker = SyncWorker::new(store, config, update_tx, command_rx);
        let worker_handle = std::thread::spawn(move || {
            worker.run();
        });
        Self {
            handle: RuntimeHandle { command_tx },
            update_rx: Some(update_rx),
            worker_handle: Some(worker_handle),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Take the update receiver. Yields `Some` exactly once.
    pub fn take_update_rx(&mut self) -> Option<Receiver<SyncUpdate>> {
        self.update_rx.take()
    }

    pub fn shutdown(&mut self) {
        let _ = self.handle.send(SyncCommand::Shutdown);
        if let Some(worker_handle) = self.worker_handle.take() {
            let _ = worker_handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Handle;
    use crate::session::login;
    use crate::store::MemoryStore;
    use crate::sync::ChatSnapshot;
    use crate::view::LocalView;
    use std::time::Duration;

    fn expect_snapshot(updates: &Receiver<SyncUpdate>) -> ChatSnapshot {
        match updates
            .recv_timeout(Duration::from_secs(5))
            .expect("worker should publish an update")
        {
            SyncUpdate::Snapshot(snapshot) => snapshot,
            SyncUpdate::Warning(text) => panic!("unexpected warning: {text}"),
        }
    }

    #[test]
    fn shutdown_joins_the_worker() {
        let store = Arc::new(MemoryStore::new());
        let mut runtime = ChatRuntime::new(store, SyncConfig::default());
        assert!(runtime.take_update_rx().is_some());
        assert!(runtime.take_update_rx().is_none());
        runtime.shutdown();
        assert!(runtime.worker_handle.is_none());
    }

    /// Two sessions over one shared store converge on the same thread.
    #[test]
    fn two_sessions_converge_on_the_same_conversation() {
        let store = Arc::new(MemoryStore::new());
        // long cadence: the test drives every fetch explicitly
        let config = SyncConfig::default().with_poll_interval(Duration::from_secs(3600));

        let mut runtime_a = ChatRuntime::new(store.clone(), config.clone());
        let mut runtime_b = ChatRuntime::new(store.clone(), config);
        let updates_a = runtime_a.take_update_rx().unwrap();
        let updates_b = runtime_b.take_update_rx().unwrap();
        let handle_a = runtime_a.handle();
        let handle_b = runtime_b.handle();

        let alice = Handle::parse("1111111111").unwrap();
        let bob = Handle::parse("2222222222").unwrap();

        handle_a
            .send(SyncCommand::Login(login("Alice", "1111111111").unwrap()))
            .unwrap();
        expect_snapshot(&updates_a);

        handle_b
            .send(SyncCommand::Login(login("Bob", "2222222222").unwrap()))
            .unwrap();
        let b_start = expect_snapshot(&updates_b);
        assert_eq!(b_start.directory.len(), 2);

        // Alice says hi; her own snapshot reflects it immediately
        handle_a
            .send(SyncCommand::SendMessage {
                to: bob.clone(),
                body: "hi".to_string(),
            })
            .unwrap();
        let a_after_send = expect_snapshot(&updates_a);
        assert_eq!(a_after_send.messages.len(), 1);

        // Bob refreshes, sees it, and replies
        handle_b.send(SyncCommand::Refresh).unwrap();
        let b_sees_hi = expect_snapshot(&updates_b);
        assert_eq!(b_sees_hi.messages.len(), 1);
        handle_b
            .send(SyncCommand::SendMessage {
                to: alice.clone(),
                body: "hello".to_string(),
            })
            .unwrap();
        let b_after_reply = expect_snapshot(&updates_b);

        // Alice refreshes and both sides render the same thread
        handle_a.send(SyncCommand::Refresh).unwrap();
        let a_final = expect_snapshot(&updates_a);

        let mut view_a = LocalView::new();
        view_a.apply(SyncUpdate::Snapshot(a_final));
        let mut view_b = LocalView::new();
        view_b.apply(SyncUpdate::Snapshot(b_after_reply));

        let thread_a = view_a.thread_with(&alice, &bob);
        let thread_b = view_b.thread_with(&bob, &alice);
        assert_eq!(thread_a, thread_b);

        let bodies: Vec<&str> = thread_a.iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, ["hi", "hello"]);
        assert_eq!(thread_a[0].sender_name, "Alice");
        assert_eq!(thread_a[1].sender_name, "Bob");

        // directories converged too: both registered exactly once
        assert_eq!(view_a.peers(&alice).len(), 1);
        assert_eq!(view_b.peers(&bob).len(), 1);

        runtime_a.shutdown();
        runtime_b.shutdown();
    }
}

//! Refresh loop worker.
//!
//! One dedicated thread owns all store I/O for a session. Commands arrive
//! on an mpsc channel; while a session is active the thread waits on that
//! channel with a deadline, so the periodic refresh fires even when the
//! user does nothing. Every successful write triggers an immediate
//! refresh, so the writer sees its own append on the next snapshot
//! instead of after the next tick.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::cache::ReadCache;
use crate::config::SyncConfig;
use crate::directory;
use crate::models::{parse_directory, parse_messages, Handle, Message, Participant};
use crate::session::SessionContext;
use crate::store::{Table, TableStore};

/// Commands accepted by the worker.
pub enum SyncCommand {
    /// Adopt an identity and start polling.
    Login(SessionContext),
    /// Append one message to the log.
    SendMessage { to: Handle, body: String },
    /// Re-read both tables now, outside the periodic cadence.
    Refresh,
    /// Drop the identity and stop polling.
    Logout,
    /// Stop the worker thread.
    Shutdown,
}

/// Updates published by the worker.
#[derive(Debug, Clone)]
pub enum SyncUpdate {
    /// A freshly parsed view of both tables.
    Snapshot(ChatSnapshot),
    /// A transient failure; the previous snapshot stays valid and the
    /// next tick retries.
    Warning(String),
}

/// Parsed state of the shared store at one fetch.
#[derive(Debug, Clone, Default)]
pub struct ChatSnapshot {
    pub directory: Vec<Participant>,
    pub messages: Vec<Message>,
}

/// Where the loop currently is between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No session; commands only.
    Idle,
    /// Session active, last fetch did not complete.
    Fetching,
    /// Session active, last fetch published.
    Rendered,
}

pub struct SyncWorker {
    store: Arc<dyn TableStore>,
    config: SyncConfig,
    cache: ReadCache,
    update_tx: Sender<SyncUpdate>,
    command_rx: Receiver<SyncCommand>,
    session: Option<SessionContext>,
    /// Set once the session's directory row is confirmed present.
    registered: bool,
    phase: Phase,
}

impl SyncWorker {
    pub fn new(
        store: Arc<dyn TableStore>,
        config: SyncConfig,
        update_tx: Sender<SyncUpdate>,
        command_rx: Receiver<SyncCommand>,
    ) -> Self {
        let cache = ReadCache::new(config.cache_ttl);
        Self {
            store,
            config,
            cache,
            update_tx,
            command_rx,
            session: None,
            registered: false,
            phase: Phase::Idle,
        }
    }

    pub fn run(mut self) {
        debug!("sync worker started");
        let mut next_tick = Instant::now() + self.config.poll_interval;
        loop {
            let command = if self.session.is_some() {
                let timeout = next_tick.saturating_duration_since(Instant::now());
                match self.command_rx.recv_timeout(timeout) {
                    Ok(command) => Some(command),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            } else {
                // No session: nothing to poll, wait for a command.
                match self.command_rx.recv() {
                    Ok(command) => Some(command),
                    Err(_) => break,
                }
            };

            match command {
                Some(SyncCommand::Login(ctx)) => {
                    info!("session login: {:?} ({})", ctx.name, ctx.handle);
                    self.session = Some(ctx);
                    self.registered = false;
                    self.refresh();
                    next_tick = Instant::now() + self.config.poll_interval;
                }
                Some(SyncCommand::SendMessage { to, body }) => {
                    self.send_message(to, body);
                    next_tick = Instant::now() + self.config.poll_interval;
                }
                Some(SyncCommand::Refresh) => {
                    self.refresh();
                    next_tick = Instant::now() + self.config.poll_interval;
                }
                Some(SyncCommand::Logout) => {
                    info!("session logout");
                    self.session = None;
                    self.registered = false;
                    self.set_phase(Phase::Idle);
                }
                Some(SyncCommand::Shutdown) => {
                    debug!("sync worker shutting down");
                    break;
                }
                None => {
                    // Tick elapsed.
                    self.refresh();
                    next_tick = Instant::now() + self.config.poll_interval;
                }
            }
        }
        debug!("sync worker stopped");
    }

    /// Re-read both tables and publish a snapshot.
    ///
    /// Any failure is published as a warning; the previous view stays up
    /// and the next tick retries. Registration is folded in here so a
    /// login that raced a store outage keeps retrying until its row lands.
    fn refresh(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        self.set_phase(Phase::Fetching);

        if !self.registered {
            match directory::register(self.store.as_ref(), &mut self.cache, &session) {
                Ok(_appended) => self.registered = true,
                Err(e) => {
                    warn!("registration failed, will retry: {e}");
                    self.publish_warning(format!("sync failed: {e}"));
                    return;
                }
            }
        }

        let directory_rows = match self.cache.read_fresh(self.store.as_ref(), Table::Directory) {
            Ok(rows) => rows,
            Err(e) => {
                warn!("directory fetch failed: {e}");
                self.publish_warning(format!("sync failed: {e}"));
                return;
            }
        };
        let message_rows = match self.cache.read_fresh(self.store.as_ref(), Table::Messages) {
            Ok(rows) => rows,
            Err(e) => {
                warn!("message fetch failed: {e}");
                self.publish_warning(format!("sync failed: {e}"));
                return;
            }
        };

        let snapshot = ChatSnapshot {
            directory: parse_directory(&directory_rows),
            messages: parse_messages(&message_rows),
        };
        self.set_phase(Phase::Rendered);
        let _ = self.update_tx.send(SyncUpdate::Snapshot(snapshot));
    }

    /// Append a message, then refresh so the sender sees it immediately.
    ///
    /// A failed append is surfaced and dropped: the row never reached the
    /// log, and the user decides whether to resend.
    fn send_message(&mut self, to: Handle, body: String) {
        let Some(session) = self.session.clone() else {
            warn!("send without a session ignored");
            return;
        };
        let message = Message::compose(session.handle.clone(), &session.name, to, &body);
        match self.store.append(Table::Messages, message.to_row()) {
            Ok(()) => {
                self.cache.invalidate();
                self.refresh();
            }
            Err(e) => {
                warn!("message append failed: {e}");
                self.publish_warning(format!("message not sent: {e}"));
            }
        }
    }

    fn publish_warning(&self, text: String) {
        let _ = self.update_tx.send(SyncUpdate::Warning(text));
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!("sync phase: {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

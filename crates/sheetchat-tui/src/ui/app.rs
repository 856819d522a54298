use std::sync::mpsc::Receiver;

use tracing::warn;

use sheetchat_core::directory;
use sheetchat_core::models::Participant;
use sheetchat_core::{
    login, LocalView, RuntimeHandle, Session, SessionContext, SyncCommand, SyncUpdate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Peers,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Name,
    Number,
}

/// All front-end state: which screen is up, the login form, the peer
/// selection, the draft message, and the locally cached view of the
/// shared store.
pub struct App {
    pub running: bool,
    pub screen: Screen,
    pub session: Session,
    pub view: LocalView,
    pub pending_quit: bool,

    pub name_input: String,
    pub number_input: String,
    pub login_field: LoginField,
    pub login_error: Option<String>,

    pub selected_peer: usize,
    pub current_peer: Option<Participant>,
    /// Conversation requested by name before the directory was visible.
    pub pending_peer_name: Option<String>,

    pub message_input: String,
    /// Transient front-end status, distinct from store warnings.
    pub status: Option<String>,

    handle: RuntimeHandle,
    update_rx: Receiver<SyncUpdate>,
}

impl App {
    pub fn new(handle: RuntimeHandle, update_rx: Receiver<SyncUpdate>) -> Self {
        Self {
            running: true,
            screen: Screen::Login,
            session: Session::new(),
            view: LocalView::new(),
            pending_quit: false,
            name_input: String::new(),
            number_input: String::new(),
            login_field: LoginField::Name,
            login_error: None,
            selected_peer: 0,
            current_peer: None,
            pending_peer_name: None,
            message_input: String::new(),
            status: None,
            handle,
            update_rx,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Drain worker updates into the local view.
    pub fn drain_updates(&mut self) {
        let mut saw_snapshot = false;
        for update in self.update_rx.try_iter() {
            if matches!(update, SyncUpdate::Snapshot(_)) {
                saw_snapshot = true;
            }
            self.view.apply(update);
        }
        if saw_snapshot {
            self.after_snapshot();
        }
    }

    fn after_snapshot(&mut self) {
        if !self.session.is_logged_in() {
            return;
        }

        // resolve a conversation requested by name now that the
        // directory is visible
        if let Some(name) = self.pending_peer_name.take() {
            self.open_peer_by_name(&name);
        }

        // keep the selection inside the (possibly shrunk) peer list
        let count = self.peer_count();
        if count == 0 {
            self.selected_peer = 0;
        } else if self.selected_peer >= count {
            self.selected_peer = count - 1;
        }
    }

    pub fn submit_login(&mut self) {
        match login(&self.name_input, &self.number_input) {
            Ok(ctx) => {
                self.login_error = None;
                self.enter_session(ctx);
            }
            Err(e) => {
                self.login_error = Some(e.to_string());
            }
        }
    }

    /// Adopt a validated identity and move to the peer list.
    pub fn enter_session(&mut self, ctx: SessionContext) {
        self.session.login(ctx.clone());
        if self.handle.send(SyncCommand::Login(ctx)).is_err() {
            warn!("sync worker is gone; login command dropped");
            self.status = Some("sync worker is gone".to_string());
        }
        self.screen = Screen::Peers;
    }

    pub fn logout(&mut self) {
        let _ = self.handle.send(SyncCommand::Logout);
        self.session.logout();
        self.view = LocalView::new();
        self.current_peer = None;
        self.selected_peer = 0;
        self.pending_peer_name = None;
        self.message_input.clear();
        self.name_input.clear();
        self.number_input.clear();
        self.login_field = LoginField::Name;
        self.login_error = None;
        self.status = None;
        self.screen = Screen::Login;
    }

    pub fn request_refresh(&mut self) {
        let _ = self.handle.send(SyncCommand::Refresh);
    }

    fn peer_count(&self) -> usize {
        self.session
            .current()
            .map(|ctx| self.view.peers(&ctx.handle).len())
            .unwrap_or(0)
    }

    pub fn select_next_peer(&mut self) {
        let count = self.peer_count();
        if count > 0 {
            self.selected_peer = (self.selected_peer + 1).min(count - 1);
        }
    }

    pub fn select_previous_peer(&mut self) {
        self.selected_peer = self.selected_peer.saturating_sub(1);
    }

    pub fn open_selected_peer(&mut self) {
        let Some(ctx) = self.session.current() else {
            return;
        };
        let peers = self.view.peers(&ctx.handle);
        if let Some(peer) = peers.get(self.selected_peer) {
            self.current_peer = Some(peer.clone());
            self.message_input.clear();
            self.status = None;
            self.screen = Screen::Chat;
        }
    }

    /// Open a conversation by display name; refuses ambiguous names.
    fn open_peer_by_name(&mut self, name: &str) {
        let Some(ctx) = self.session.current() else {
            return;
        };
        let own = ctx.handle.clone();
        match directory::handle_for_name(self.view.directory(), name) {
            Ok(peer_handle) if peer_handle == own => {
                self.status = Some(format!("{name:?} is you"));
            }
            Ok(peer_handle) => {
                let peer = self
                    .view
                    .directory()
                    .iter()
                    .find(|p| p.handle == peer_handle)
                    .cloned();
                if let Some(peer) = peer {
                    self.current_peer = Some(peer);
                    self.message_input.clear();
                    self.screen = Screen::Chat;
                }
            }
            Err(e) => {
                self.status = Some(format!("no such conversation: {e}"));
            }
        }
    }

    pub fn send_current_message(&mut self) {
        let body = self.message_input.trim().to_string();
        if body.is_empty() {
            return;
        }
        let Some(peer) = self.current_peer.clone() else {
            return;
        };
        if self
            .handle
            .send(SyncCommand::SendMessage {
                to: peer.handle,
                body,
            })
            .is_err()
        {
            warn!("sync worker is gone; message dropped");
            self.status = Some("sync worker is gone".to_string());
            return;
        }
        self.message_input.clear();
    }

    pub fn close_conversation(&mut self) {
        self.current_peer = None;
        self.message_input.clear();
        self.screen = Screen::Peers;
    }
}

//! Keyboard event processing, routed by the active screen.

use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::{App, LoginField, Screen};

/// Main entry point for handling keyboard events.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match app.screen {
        Screen::Login => handle_login_key(app, key),
        Screen::Peers => handle_peers_key(app, key),
        Screen::Chat => handle_chat_key(app, key),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::Down => app.login_field = LoginField::Number,
        KeyCode::BackTab | KeyCode::Up => app.login_field = LoginField::Name,
        KeyCode::Enter => match app.login_field {
            // Enter on the name field moves on; on the number field it submits.
            LoginField::Name => app.login_field = LoginField::Number,
            LoginField::Number => app.submit_login(),
        },
        KeyCode::Backspace => {
            match app.login_field {
                LoginField::Name => app.name_input.pop(),
                LoginField::Number => app.number_input.pop(),
            };
        }
        KeyCode::Char(c) => match app.login_field {
            LoginField::Name => app.name_input.push(c),
            LoginField::Number => app.number_input.push(c),
        },
        _ => {}
    }
}

fn handle_peers_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => app.logout(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_peer(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_peer(),
        KeyCode::Enter => app.open_selected_peer(),
        KeyCode::Char('r') => app.request_refresh(),
        _ => {}
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_conversation(),
        KeyCode::Enter => app.send_current_message(),
        KeyCode::Backspace => {
            app.message_input.pop();
        }
        KeyCode::Char(c) => app.message_input.push(c),
        _ => {}
    }
}

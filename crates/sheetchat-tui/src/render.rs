use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::ui::views::{render_chat, render_login, render_peers};
use crate::ui::{theme, App, Screen};

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(f.area());

    // Chrome turns red while a quit is pending
    let chrome_color = if app.pending_quit {
        theme::ACCENT_ERROR
    } else {
        theme::ACCENT_PRIMARY
    };

    let title: String = match app.screen {
        Screen::Login => "sheetchat - login".to_string(),
        Screen::Peers => match app.session.current_name() {
            Some(name) => format!("sheetchat - {name}"),
            None => "sheetchat".to_string(),
        },
        Screen::Chat => match app.current_peer.as_ref() {
            Some(peer) => format!("chat with {}", peer.name),
            None => "sheetchat".to_string(),
        },
    };
    let header = Paragraph::new(format!(" {title}")).style(
        Style::default()
            .fg(chrome_color)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(header, chunks[0]);

    match app.screen {
        Screen::Login => render_login(f, app, chunks[1]),
        Screen::Peers => render_peers(f, app, chunks[1]),
        Screen::Chat => render_chat(f, app, chunks[1]),
    }

    // Status line: quit warning, then app status, then sync warnings, then key hints
    let (status_text, status_style) = if app.pending_quit {
        (
            "Press Ctrl+C again to quit".to_string(),
            Style::default().fg(theme::ACCENT_ERROR),
        )
    } else if let Some(status) = app.status.as_ref() {
        (status.clone(), Style::default().fg(theme::ACCENT_WARNING))
    } else if let Some(warning) = app.view.warning() {
        (
            warning.to_string(),
            Style::default().fg(theme::ACCENT_WARNING),
        )
    } else {
        let hints = match app.screen {
            Screen::Login => "Tab switch field · Enter submit · Esc quit",
            Screen::Peers => "j/k move · Enter open · r refresh · Esc logout · q quit",
            Screen::Chat => "Enter send · Esc back",
        };
        (hints.to_string(), Style::default().fg(theme::TEXT_MUTED))
    };
    let status = Paragraph::new(format!(" {status_text}")).style(status_style);
    f.render_widget(status, chunks[2]);
}

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::{theme, App};

pub fn render_peers(f: &mut Frame, app: &App, area: Rect) {
    let Some(ctx) = app.session.current() else {
        return;
    };
    let peers = app.view.peers(&ctx.handle);

    if peers.is_empty() {
        let text = if app.view.has_synced() {
            "Nobody else is here yet. Hand the store path to a friend."
        } else {
            "Loading directory..."
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(theme::TEXT_MUTED))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Peers"));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = peers
        .iter()
        .enumerate()
        .map(|(index, peer)| {
            let selected = index == app.selected_peer;
            let marker = if selected { "> " } else { "  " };
            let name_style = if selected {
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_PRIMARY)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{}", peer.name), name_style),
                Span::styled(
                    format!("  {}", peer.handle),
                    Style::default().fg(theme::TEXT_MUTED),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Peers"));
    f.render_widget(list, area);
}

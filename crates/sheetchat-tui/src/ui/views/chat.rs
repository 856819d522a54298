use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::{theme, App};

pub fn render_chat(f: &mut Frame, app: &App, area: Rect) {
    let (Some(ctx), Some(peer)) = (app.session.current(), app.current_peer.as_ref()) else {
        return;
    };

    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).split(area);

    let thread = app.view.thread_with(&ctx.handle, &peer.handle);
    let lines: Vec<Line> = thread
        .iter()
        .map(|message| {
            let own = message.sender == ctx.handle;
            let name_style = if own {
                Style::default().fg(theme::ACCENT_PRIMARY)
            } else {
                Style::default().fg(theme::ACCENT_SUCCESS)
            };
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", message.timestamp),
                    Style::default().fg(theme::TEXT_DIM),
                ),
                Span::styled(format!("{}: ", message.sender_name), name_style),
                Span::styled(
                    message.body.clone(),
                    Style::default().fg(theme::TEXT_PRIMARY),
                ),
            ])
        })
        .collect();

    let history = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({})", peer.name, peer.handle)),
        );

    // pin the view to the newest message, accounting for wrapped lines
    let inner_height = chunks[0].height.saturating_sub(2);
    let inner_width = chunks[0].width.saturating_sub(2);
    let rendered = history.line_count(inner_width) as u16;
    let scroll = rendered.saturating_sub(inner_height);
    f.render_widget(history.scroll((scroll, 0)), chunks[0]);

    let input = Paragraph::new(app.message_input.as_str())
        .style(Style::default().fg(theme::TEXT_PRIMARY))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Message")
                .border_style(Style::default().fg(theme::ACCENT_PRIMARY)),
        );
    f.render_widget(input, chunks[1]);
}

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::{theme, App, LoginField};

pub fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .split(area);

    let instructions = Paragraph::new("Pick a display name and enter your 10-digit number:")
        .style(Style::default().fg(theme::TEXT_PRIMARY))
        .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[0]);

    let field_border = |active: bool| {
        if active {
            Style::default().fg(theme::ACCENT_PRIMARY)
        } else {
            Style::default().fg(theme::BORDER_INACTIVE)
        }
    };

    let name = Paragraph::new(app.name_input.as_str())
        .style(Style::default().fg(theme::TEXT_PRIMARY))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Name")
                .border_style(field_border(app.login_field == LoginField::Name)),
        );
    f.render_widget(name, chunks[1]);

    let number = Paragraph::new(app.number_input.as_str())
        .style(Style::default().fg(theme::TEXT_PRIMARY))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Phone number")
                .border_style(field_border(app.login_field == LoginField::Number)),
        );
    f.render_widget(number, chunks[2]);

    if let Some(error) = &app.login_error {
        let error_widget = Paragraph::new(error.as_str())
            .style(Style::default().fg(theme::ACCENT_ERROR))
            .alignment(Alignment::Center);
        f.render_widget(error_widget, chunks[3]);
    }
}

// src/ui/login.rs
use crate::{
    app::{App, LoginField},
    ui::layout::{centered_rect_fixed, cursor_column},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use workout_ledger_lib::session::MIN_PASSWORD_LEN;

pub fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.login_form;
    let block = Block::default()
        .title("Login")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let popup = centered_rect_fixed(50, 13, area);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Username label
            Constraint::Length(1), // Username input
            Constraint::Length(1),
            Constraint::Length(1), // Password label
            Constraint::Length(1), // Password input
            Constraint::Length(1),
            Constraint::Length(2), // Message
            Constraint::Min(0),    // Hint
        ])
        .split(popup.inner(&Margin {
            vertical: 1,
            horizontal: 2,
        }));

    let field_style = |field: LoginField| {
        if form.focused_field == field {
            Style::default().reversed()
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    f.render_widget(Paragraph::new("Username:"), chunks[0]);
    f.render_widget(
        Paragraph::new(form.username.as_str()).style(field_style(LoginField::Username)),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(format!("Password (at least {MIN_PASSWORD_LEN} characters):")),
        chunks[3],
    );
    let masked = "*".repeat(form.password.chars().count());
    f.render_widget(
        Paragraph::new(masked.as_str()).style(field_style(LoginField::Password)),
        chunks[4],
    );

    if let Some(message) = &form.message {
        let color = if message.success {
            Color::LightGreen
        } else {
            Color::LightRed
        };
        f.render_widget(
            Paragraph::new(message.text.as_str())
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .wrap(Wrap { trim: true }),
            chunks[6],
        );
    }

    f.render_widget(
        Paragraph::new(Line::from(" [Tab] Switch field | [Enter] Log in | [Esc] Quit ").italic())
            .alignment(Alignment::Center),
        chunks[7],
    );

    let (input_area, len) = match form.focused_field {
        LoginField::Username => (chunks[1], form.username.chars().count()),
        LoginField::Password => (chunks[4], masked.chars().count()),
    };
    f.set_cursor(cursor_column(input_area, 0, len), input_area.y);
}

// src/ui/status_bar.rs
use crate::app::{ActiveModal, App, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use workout_ledger_lib::NotificationKind;

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match (&app.screen, &app.active_modal) {
        (Screen::Login, _) => " [Tab] Switch Field | [Enter] Log In | [Esc] Quit ",
        (Screen::Log, ActiveModal::None) => {
            " [←→/hl] Day | [↑↓/jk] Nav | [a]dd | [d]one | [s]kip | [x] Delete | [L]ogout | [?] Help | [q]uit "
        }
        (Screen::Log, ActiveModal::Help) => " [Esc/Enter/?] Close Help ",
        (Screen::Log, ActiveModal::AddWorkout { .. }) => {
            " [Esc] Cancel | [Enter] Save | [Tab/↑↓] Navigate | [←→] Pick Target/Day "
        }
        (Screen::Log, ActiveModal::ConfirmDeleteWorkout { .. }) => " [Y]es | [N]o ",
    };

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status_paragraph, status_chunks[0]);

    let (toast_text, toast_color) = match &app.notification {
        Some(n) => {
            let color = match n.kind {
                NotificationKind::Success => Color::LightGreen,
                NotificationKind::Error => Color::LightRed,
            };
            (n.message.as_str(), color)
        }
        None => ("", Color::White),
    };
    let toast_paragraph = Paragraph::new(toast_text)
        .style(Style::default().bg(Color::DarkGray).fg(toast_color))
        .alignment(Alignment::Right);
    f.render_widget(toast_paragraph, status_chunks[1]);
}

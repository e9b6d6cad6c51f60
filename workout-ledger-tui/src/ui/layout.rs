// src/ui/layout.rs
use crate::{
    app::{ActiveModal, App, Screen},
    ui::{
        log_tab::render_log_tab, login::render_login, modals::render_modal, stats::render_stats,
        status_bar::render_status_bar, tabs::render_day_tabs,
    },
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use workout_ledger_lib::StandardColor;

pub fn render_ui(f: &mut Frame, app: &mut App) {
    let size = f.size();

    // Content above, status bar at the bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    match app.screen {
        Screen::Login => render_login(f, app, main_chunks[0]),
        Screen::Log => render_log_screen(f, app, main_chunks[0]),
    }
    render_status_bar(f, app, main_chunks[1]);

    // Render modal last if active
    if app.active_modal != ActiveModal::None {
        render_modal(f, app);
    }
}

fn render_log_screen(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Day tabs
            Constraint::Min(0),    // Log + stats
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_day_tabs(f, app, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    render_log_tab(f, app, body[0]);
    render_stats(f, app, body[1]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " Workout Ledger ",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(message) = app.login_form.message.as_ref().filter(|m| m.success) {
        spans.push(Span::styled(
            message.text.as_str(),
            Style::default().fg(Color::LightGreen),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Table header colour from the config theme, green if the name is not recognised.
pub fn header_color(app: &App) -> Color {
    app.service
        .config
        .header_color()
        .map_or(Color::LightGreen, to_ratatui_color)
}

pub const fn to_ratatui_color(color: StandardColor) -> Color {
    match color {
        StandardColor::Black => Color::Black,
        StandardColor::Red => Color::LightRed,
        StandardColor::Green => Color::LightGreen,
        StandardColor::Yellow => Color::LightYellow,
        StandardColor::Blue => Color::LightBlue,
        StandardColor::Magenta => Color::LightMagenta,
        StandardColor::Cyan => Color::LightCyan,
        StandardColor::White => Color::White,
        StandardColor::DarkGrey => Color::DarkGray,
        StandardColor::DarkRed => Color::Red,
        StandardColor::DarkGreen => Color::Green,
        StandardColor::DarkYellow => Color::Yellow,
        StandardColor::DarkBlue => Color::Blue,
        StandardColor::DarkMagenta => Color::Magenta,
        StandardColor::DarkCyan => Color::Cyan,
        StandardColor::Grey => Color::Gray,
    }
}

/// Helper function to create a centered rectangle with fixed dimensions.
/// Ensures the dimensions do not exceed the available screen size `r`.
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let clamped_width = width.min(r.width);
    let clamped_height = height.min(r.height);

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(r.height.saturating_sub(clamped_height) / 2),
            Constraint::Length(clamped_height),
            Constraint::Length(r.height.saturating_sub(clamped_height) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(r.width.saturating_sub(clamped_width) / 2),
            Constraint::Length(clamped_width),
            Constraint::Length(r.width.saturating_sub(clamped_width) / 2),
        ])
        .split(popup_layout[1])[1] // Take the middle chunk
}

/// Character count as a terminal width, saturating at `u16::MAX`.
pub fn text_width(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}

/// Cursor column after `len` characters typed at `offset` inside `area`, kept on the last cell.
pub fn cursor_column(area: Rect, offset: u16, len: usize) -> u16 {
    area.x
        .saturating_add(offset)
        .saturating_add(text_width(len))
        .min(area.right().saturating_sub(1))
}

/// Helper function to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rect_is_centered_and_clamped() {
        let screen = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect_fixed(40, 10, screen), Rect::new(20, 7, 40, 10));
        let small = Rect::new(0, 0, 20, 5);
        let clamped = centered_rect_fixed(40, 10, small);
        assert_eq!((clamped.width, clamped.height), (20, 5));
    }

    #[test]
    fn huge_inputs_saturate_widths() {
        assert_eq!(text_width(12), 12);
        assert_eq!(text_width(70_000), u16::MAX);
        let row = Rect::new(10, 3, 40, 1);
        assert_eq!(cursor_column(row, 14, 5), 29);
        assert_eq!(cursor_column(row, 14, 70_000), 49);
        let edge = Rect::new(u16::MAX - 5, 0, 5, 1);
        assert_eq!(cursor_column(edge, 14, 3), edge.right() - 1);
    }

    #[test]
    fn theme_colors_map_to_terminal_colors() {
        assert_eq!(to_ratatui_color(StandardColor::Green), Color::LightGreen);
        assert_eq!(to_ratatui_color(StandardColor::DarkGrey), Color::DarkGray);
    }
}

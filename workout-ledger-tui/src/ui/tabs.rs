// src/ui/tabs.rs
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};
use workout_ledger_lib::Day;

pub fn render_day_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .dashboard
        .days
        .iter()
        .map(|table| {
            let label = format!("{} ({})", table.day, table.rows.len());
            Line::from(Span::styled(label, Style::default().fg(Color::Gray)))
        })
        .collect();

    let selected = Day::ALL
        .iter()
        .position(|d| *d == app.selected_day)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

// src/ui/stats.rs
use crate::{app::App, ui::layout::header_color};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

pub fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Six groups plus header and borders
            Constraint::Min(0),
        ])
        .split(area);

    render_muscle_focus(f, app, chunks[0]);
    render_status_summary(f, app, chunks[1]);
}

fn render_muscle_focus(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Muscle Focus")
        .border_style(Style::default().fg(Color::DarkGray));

    let header = Row::new(["Target", "Workouts"].into_iter().map(|h| {
        Cell::from(h).style(Style::default().fg(header_color(app)))
    }));
    let rows = app.dashboard.muscles.iter().map(|(group, count)| {
        let style = if count == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(group.to_string()),
            Cell::from(count.to_string()),
        ])
        .style(style)
    });

    let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(8)])
        .header(header)
        .block(block);
    f.render_widget(table, area);
}

fn render_status_summary(f: &mut Frame, app: &App, area: Rect) {
    let summary = &app.dashboard.summary;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Status Summary")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Done
            Constraint::Length(1), // Skipped
            Constraint::Length(1), // Idle
            Constraint::Length(1),
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let counter = |label: &'static str, value: usize, color: Color| {
        Paragraph::new(Line::from(vec![
            Span::raw(format!("{label:<9}")),
            Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]))
    };
    f.render_widget(counter("Done", summary.done, Color::LightGreen), chunks[0]);
    f.render_widget(counter("Skipped", summary.skipped, Color::LightRed), chunks[1]);
    f.render_widget(counter("Idle", summary.idle, Color::Gray), chunks[2]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::LightGreen).bg(Color::DarkGray))
        .percent(u16::from(summary.completion_percent.min(100)))
        .label(format!("{}% complete", summary.completion_percent));
    f.render_widget(gauge, chunks[4]);
}

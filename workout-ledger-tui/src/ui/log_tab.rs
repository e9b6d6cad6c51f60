// src/ui/log_tab.rs
use crate::{app::App, ui::layout::header_color};
use ratatui::{
    layout::{Alignment, Constraint, Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use workout_ledger_lib::{views, LogRow, Status};

fn status_style(row: &LogRow) -> Style {
    match row.status {
        Status::Done => Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
        Status::Skipped => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        Status::Idle => Style::default(),
    }
}

pub fn render_log_tab(f: &mut Frame, app: &mut App, area: Rect) {
    let table_block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Training Log: {}", app.selected_day))
        .border_style(Style::default().fg(Color::Yellow));

    let header_cells = views::LOG_COLUMNS
        .into_iter()
        .map(|h| Cell::from(h).style(Style::default().fg(header_color(app))));
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let rows: Vec<Row> = app
        .selected_day_rows()
        .iter()
        .map(|row| {
            let mut cells: Vec<Cell> = row.cells().into_iter().map(Cell::from).collect();
            cells.push(Cell::from(row.status.to_string()));
            Row::new(cells).style(status_style(row))
        })
        .collect();
    let is_empty = rows.is_empty();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(table_block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.log_table_state);

    // Empty days get one line across the full width, under the header
    if is_empty {
        let inner = area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        });
        if inner.height > 2 {
            let placeholder_area = Rect {
                y: inner.y + 2,
                height: 1,
                ..inner
            };
            f.render_widget(
                Paragraph::new(views::EMPTY_DAY_MESSAGE)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Gray)),
                placeholder_area,
            );
        }
    }
}

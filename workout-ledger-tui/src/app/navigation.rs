// src/app/navigation.rs
use super::state::App;
use ratatui::widgets::TableState;

fn table_next(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if i >= len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    };
    state.select(Some(i));
}

fn table_previous(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) => len - 1,
        Some(i) => i - 1,
        None => len.saturating_sub(1),
    };
    state.select(Some(i));
}

pub fn log_table_next(app: &mut App) {
    let len = app.selected_day_rows().len();
    table_next(&mut app.log_table_state, len);
}

pub fn log_table_previous(app: &mut App) {
    let len = app.selected_day_rows().len();
    table_previous(&mut app.log_table_state, len);
}

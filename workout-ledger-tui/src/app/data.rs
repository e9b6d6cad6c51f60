//src/app/data.rs
use super::state::App;
use workout_ledger_lib::{Day, LogRow};

impl App {
    /// Recomputes every view from the store and keeps the row selection in range.
    pub fn refresh_data(&mut self) {
        self.dashboard = self.service.dashboard();
        let len = self.selected_day_rows().len();
        let clamped = match self.log_table_state.selected() {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            Some(i) => Some(i),
            None => Some(0),
        };
        self.log_table_state.select(clamped);
    }

    pub fn selected_day_rows(&self) -> &[LogRow] {
        self.dashboard
            .day(self.selected_day)
            .map_or(&[], |table| table.rows.as_slice())
    }

    pub fn selected_row(&self) -> Option<&LogRow> {
        self.log_table_state
            .selected()
            .and_then(|i| self.selected_day_rows().get(i))
    }

    /// Shows `day` with its first row selected.
    pub fn view_day(&mut self, day: Day) {
        self.selected_day = day;
        self.log_table_state.select(Some(0));
        self.refresh_data();
    }
}

pub fn log_change_day(app: &mut App, step: isize) {
    app.view_day(app.selected_day.offset(step));
}

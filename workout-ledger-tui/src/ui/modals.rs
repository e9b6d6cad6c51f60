// src/ui/modals.rs
use crate::{
    app::{ActiveModal, AddWorkoutField, App},
    ui::layout::{centered_rect, centered_rect_fixed, cursor_column, text_width},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use workout_ledger_lib::notify;

const LABEL_WIDTH: u16 = 14;

pub fn render_modal(f: &mut Frame, app: &App) {
    match &app.active_modal {
        ActiveModal::Help => render_help_modal(f),
        ActiveModal::AddWorkout { .. } => render_add_workout_modal(f, app),
        ActiveModal::ConfirmDeleteWorkout { .. } => render_confirmation_modal(f, app),
        ActiveModal::None => {} // Should not happen if called correctly
    }
}

fn render_help_modal(f: &mut Frame) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(60, 70, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        Line::from("--- Global ---").style(Style::new().bold().underlined()),
        Line::from(" q: Quit Application"),
        Line::from(" ?: Show/Hide This Help"),
        Line::from(" L: Log Out (workouts are kept)"),
        Line::from(""),
        Line::from("--- Training Log ---").style(Style::new().bold().underlined()),
        Line::from(" h / ←: Previous Day"),
        Line::from(" l / →: Next Day"),
        Line::from(" k / ↑: Navigate Up"),
        Line::from(" j / ↓: Navigate Down"),
        Line::from(" a: Add Workout (for viewed day)"),
        Line::from(" d: Mark Selected Workout Done"),
        Line::from(" s: Mark Selected Workout Skipped"),
        Line::from(" x / Delete: Delete Selected Workout"),
        Line::from(""),
        Line::from("--- Add Workout ---").style(Style::new().bold().underlined()),
        Line::from(" Tab / ↑↓: Move Between Fields"),
        Line::from(" ← / →: Pick Target or Day"),
        Line::from(" Enter: Save Workout"),
        Line::from(" Esc: Cancel"),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc, ?, or Enter to close ",
            Style::new().italic().yellow(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

// One labelled input line; select-style fields get arrows around the value
fn render_input_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_choice: bool,
    focused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
        .split(area);

    f.render_widget(Paragraph::new(format!("{label}:")), chunks[0]);

    let shown = if is_choice {
        let value = if value.is_empty() { "(select)" } else { value };
        format!("< {value} >")
    } else {
        value.to_string()
    };
    let style = if focused {
        Style::default().reversed()
    } else {
        Style::default().fg(Color::Gray)
    };
    f.render_widget(Paragraph::new(shown).style(style), chunks[1]);
}

fn render_add_workout_modal(f: &mut Frame, app: &App) {
    let ActiveModal::AddWorkout {
        title_input,
        group_input,
        sets_input,
        reps_input,
        weight_input,
        day_input,
        focused_field,
        error_message,
    } = &app.active_modal
    else {
        return;
    };

    let block = Block::default()
        .title("Add Workout")
        .borders(Borders::ALL)
        .border_style(Style::new().yellow());
    let area = centered_rect_fixed(54, 14, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Group
            Constraint::Length(1), // Sets
            Constraint::Length(1), // Reps
            Constraint::Length(1), // Weight
            Constraint::Length(1), // Day
            Constraint::Length(1),
            Constraint::Length(1), // Buttons
            Constraint::Length(1),
            Constraint::Min(1), // Error
        ])
        .split(area.inner(&Margin {
            vertical: 1,
            horizontal: 2,
        }));

    let fields = [
        (AddWorkoutField::Title, "Workout", title_input, false),
        (AddWorkoutField::Group, "Target", group_input, true),
        (AddWorkoutField::Sets, "Sets", sets_input, false),
        (AddWorkoutField::Reps, "Reps", reps_input, false),
        (AddWorkoutField::Weight, "Weight/Time", weight_input, false),
        (AddWorkoutField::Day, "Day", day_input, true),
    ];
    for (i, (field, label, value, is_choice)) in fields.iter().enumerate() {
        render_input_field(
            f,
            chunks[i],
            label,
            value,
            *is_choice,
            focused_field == field,
        );
    }

    let button_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[7]);
    let button_style = |field: AddWorkoutField| {
        if *focused_field == field {
            Style::default().reversed()
        } else {
            Style::default()
        }
    };
    f.render_widget(
        Paragraph::new(" OK ")
            .alignment(Alignment::Center)
            .style(button_style(AddWorkoutField::Confirm)),
        button_layout[0],
    );
    f.render_widget(
        Paragraph::new(" Cancel ")
            .alignment(Alignment::Center)
            .style(button_style(AddWorkoutField::Cancel)),
        button_layout[1],
    );

    if let Some(err) = error_message {
        f.render_widget(
            Paragraph::new(err.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true }),
            chunks[9],
        );
    }

    // Cursor only for free-text fields
    let text_field = match focused_field {
        AddWorkoutField::Title => Some((chunks[0], title_input)),
        AddWorkoutField::Sets => Some((chunks[2], sets_input)),
        AddWorkoutField::Reps => Some((chunks[3], reps_input)),
        AddWorkoutField::Weight => Some((chunks[4], weight_input)),
        _ => None,
    };
    if let Some((row, value)) = text_field {
        f.set_cursor(cursor_column(row, LABEL_WIDTH, value.chars().count()), row.y);
    }
}

fn render_confirmation_modal(f: &mut Frame, app: &App) {
    if let ActiveModal::ConfirmDeleteWorkout { description, .. } = &app.active_modal {
        let block = Block::default()
            .title("Confirm Deletion")
            .borders(Borders::ALL)
            .border_style(Style::new().fg(Color::Red).add_modifier(Modifier::BOLD));

        let question = notify::DELETE_PROMPT;
        let options = "[Y]es / [N]o (Esc)";

        let content_width = [question.len(), description.chars().count(), options.len()]
            .into_iter()
            .max()
            .map_or(0, text_width);
        let modal_width = content_width.saturating_add(4); // Add padding
        let modal_height = 6;

        let area = centered_rect_fixed(modal_width, modal_height, f.size());
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let inner_area = area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        });

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Question
                Constraint::Length(1), // Workout
                Constraint::Length(1), // Options
            ])
            .split(inner_area);

        f.render_widget(
            Paragraph::new(question).alignment(Alignment::Center),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(description.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(options).alignment(Alignment::Center),
            chunks[2],
        );
    }
}

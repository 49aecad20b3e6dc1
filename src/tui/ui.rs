//! Rendering for the two views.
//!
//! Pure presentation: every function reads [`App`] state and a [`Theme`]
//! and draws; no state mutation happens here beyond the list scroll
//! offset that `render_stateful_widget` maintains.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin},
    text::{Line, Span, Text},
    widgets::{Block, List, ListItem, Paragraph},
};

use crate::tui::app::{App, SPINNER_FRAMES, View};
use crate::tui::theme::Theme;

const INPUT_PLACEHOLDER: &str = "Nirvana";

pub fn draw(frame: &mut Frame, app: &mut App, theme: &Theme) {
    let area = frame.area().inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    match app.view {
        View::Search => draw_search(frame, area, app, theme),
        View::Results => draw_results(frame, area, app, theme),
    }
}

fn draw_search(frame: &mut Frame, area: ratatui::layout::Rect, app: &App, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Spotify Search", theme.accent)));
    lines.push(Line::default());

    let input_span = if app.input.value().is_empty() {
        Span::styled(INPUT_PLACEHOLDER, theme.dim)
    } else {
        Span::raw(app.input.value())
    };
    lines.push(Line::from(vec![Span::raw("Search: "), input_span]));
    lines.push(Line::default());

    lines.push(Line::from("Search Types:"));
    for (i, choice) in app.choices.iter().enumerate() {
        let cursor = if app.cursor == i { ">" } else { " " };
        let checked = if choice.selected { "x" } else { " " };
        lines.push(Line::from(format!(
            "{} [{}] {}",
            cursor,
            checked,
            choice.kind.label()
        )));
    }

    if let Some(error) = &app.error {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Error: {}", error),
            theme.error,
        )));
    }

    if app.loading {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(SPINNER_FRAMES[app.spinner_frame], theme.accent),
            Span::raw(" Loading..."),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Use arrow keys to select categories and Enter to search.",
        theme.dim,
    )));
    lines.push(Line::from(Span::styled("Press Ctrl-C to quit.", theme.dim)));

    frame.render_widget(Paragraph::new(Text::from(lines)), area);

    // Keep the terminal cursor inside the text field.
    let x = area.x + "Search: ".len() as u16 + app.input.visual_cursor() as u16;
    let y = area.y + 2;
    if x < area.right() {
        frame.set_cursor_position((x, y));
    }
}

fn draw_results(frame: &mut Frame, area: ratatui::layout::Rect, app: &mut App, theme: &Theme) {
    let [list_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);

    let items: Vec<ListItem> = app
        .visible
        .iter()
        .filter_map(|&index| app.rows.get(index))
        .map(|row| {
            ListItem::new(vec![
                Line::from(row.name.clone()),
                Line::from(vec![
                    Span::styled(row.kind.label(), theme.accent),
                    Span::styled(format!(" · {}", row.detail), theme.dim),
                ]),
            ])
        })
        .collect();

    let title = Line::from(vec![
        Span::styled("Search Results", theme.accent),
        Span::styled(format!("  {} shown", items.len()), theme.dim),
    ]);
    let list = List::new(items)
        .block(Block::new().title(title))
        .highlight_style(theme.selected)
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, list_area, &mut app.list_state);

    let mut footer: Vec<Line> = Vec::new();
    if app.filtering {
        footer.push(Line::from(vec![
            Span::raw("Filter: "),
            Span::raw(app.filter.value()),
        ]));
    } else if !app.filter.value().is_empty() {
        footer.push(Line::from(vec![
            Span::raw(format!("Filter: {}", app.filter.value())),
            Span::styled("  (esc to clear)", theme.dim),
        ]));
    } else {
        footer.push(Line::default());
    }
    footer.push(Line::from(Span::styled(
        "Press '/' to filter and 'o' or Enter to open in Spotify.",
        theme.dim,
    )));
    footer.push(Line::from(Span::styled(
        "Press 'q' or 'esc' to go back. Press Ctrl-C to quit.",
        theme.dim,
    )));

    frame.render_widget(Paragraph::new(Text::from(footer)), footer_area);

    if app.filtering {
        let x = footer_area.x + "Filter: ".len() as u16 + app.filter.visual_cursor() as u16;
        if x < footer_area.right() {
            frame.set_cursor_position((x, footer_area.y));
        }
    }
}

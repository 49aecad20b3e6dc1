use ratatui::style::{Color, Modifier, Style};

/// Visual styles for the two views.
///
/// Constructed once in [`crate::tui::run`] and passed by reference into the
/// render layer; nothing in the crate holds process-wide style state.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Spotify green, bold. Category names and view titles.
    pub accent: Style,
    /// Faint grey. Footer hints and secondary detail text.
    pub dim: Style,
    /// Inline error line in the query view.
    pub error: Style,
    /// Highlight of the selected result row.
    pub selected: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let green = Color::Rgb(0x1d, 0xb9, 0x54);
        let grey = Color::Rgb(0x76, 0x76, 0x76);

        Theme {
            accent: Style::default().fg(green).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(grey),
            error: Style::default().fg(Color::Red),
            selected: Style::default()
                .bg(Color::Rgb(0x28, 0x28, 0x28))
                .add_modifier(Modifier::BOLD),
        }
    }
}

// Input Widget - the ticker search box
//
// tui-textarea renders itself; we only frame it and swap the title while an
// analysis is in flight.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};
use tui_textarea::TextArea;

use crate::config::ColorScheme;

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Title of the input block
pub fn input_title(loading: bool, tick: usize) -> String {
    if loading {
        format!(" {} Analyzing… ", SPINNER[tick % SPINNER.len()])
    } else {
        " Ticker ".to_string()
    }
}

/// Frame the textarea and render it into `area`.
pub fn render_input_widget(
    frame: &mut Frame,
    textarea: &mut TextArea<'static>,
    area: Rect,
    loading: bool,
    tick: usize,
    colors: &ColorScheme,
) {
    let title_style = Style::default()
        .fg(colors.ui.cursor.to_color())
        .add_modifier(Modifier::BOLD);

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.ui.border.to_color()))
            .title(Span::styled(input_title(loading, tick), title_style)),
    );
    textarea.set_style(Style::default().fg(colors.ui.input.to_color()));

    // Hide the cursor while input is disabled
    let cursor_style = if loading {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };
    textarea.set_cursor_style(cursor_style);
    textarea.set_cursor_line_style(Style::default());

    frame.render_widget(&*textarea, area);
}

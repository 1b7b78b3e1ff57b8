// History panel - recently analyzed tickers, most recent first

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::config::ColorScheme;
use crate::engine::History;

/// Shortcut shown next to entry `index` (Alt+1..9, then Alt+0 for the tenth)
fn shortcut(index: usize) -> Option<char> {
    match index {
        0..=8 => char::from_digit(index as u32 + 1, 10),
        9 => Some('0'),
        _ => None,
    }
}

pub fn history_items(history: &History, colors: &ColorScheme) -> Vec<ListItem<'static>> {
    let hint = Style::default().fg(colors.ui.notice.to_color());
    let symbol = Style::default().fg(colors.suggestions.symbol.to_color());

    history
        .entries()
        .iter()
        .enumerate()
        .map(|(idx, ticker)| {
            let key = shortcut(idx).map(|c| format!("{} ", c)).unwrap_or_else(|| "  ".to_string());
            ListItem::new(Line::from(vec![
                Span::styled(key, hint),
                Span::styled(ticker.clone(), symbol),
            ]))
        })
        .collect()
}

pub fn render_history(frame: &mut Frame, history: &History, area: Rect, colors: &ColorScheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.ui.border.to_color()))
        .title(" Search History ");

    frame.render_widget(List::new(history_items(history, colors)).block(block), area);
}

// Suggestion dropdown - tickers matching the current query
//
// Drawn over the body, directly under the input box. Rows are
// "SYMBOL — description" with the keyboard highlight marked.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::config::ColorScheme;
use crate::engine::SuggestionState;

/// Build the dropdown rows. Split out so it can be tested without a frame.
pub fn suggestion_items(state: &SuggestionState, colors: &ColorScheme) -> Vec<ListItem<'static>> {
    let highlighted = state.highlighted();
    let palette = &colors.suggestions;

    state
        .list()
        .iter()
        .enumerate()
        .map(|(idx, suggestion)| {
            let is_selected = highlighted == Some(idx);

            let mut spans = Vec::new();
            if is_selected {
                spans.push(Span::raw("❯ "));
            } else {
                spans.push(Span::raw("  "));
            }

            let symbol_style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(palette.symbol.to_color())
                    .add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(suggestion.symbol.clone(), symbol_style));

            if !suggestion.description.is_empty() {
                spans.push(Span::raw(" — "));
                let desc_style = if is_selected {
                    Style::default()
                } else {
                    Style::default().fg(palette.description.to_color())
                };
                spans.push(Span::styled(suggestion.description.clone(), desc_style));
            }

            let item = ListItem::new(Line::from(spans));
            if is_selected {
                item.style(
                    Style::default()
                        .bg(palette.selected_bg.to_color())
                        .fg(palette.selected_fg.to_color()),
                )
            } else {
                item
            }
        })
        .collect()
}

/// Render the dropdown into `area` (already positioned by the layout).
pub fn render_suggestion_dropdown(
    frame: &mut Frame,
    state: &SuggestionState,
    area: Rect,
    colors: &ColorScheme,
) {
    if !state.is_open() {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.suggestions.border.to_color()));

    let list = List::new(suggestion_items(state, colors)).block(block);

    // Results underneath must not bleed through
    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

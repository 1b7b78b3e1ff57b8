// Results panel - the outcome of the latest analysis

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorScheme;
use crate::render::{render, to_lines};
use crate::services::AnalysisResult;

const EMPTY_HINT: &str = "Enter a ticker and press Enter to see results.";
const CACHE_NOTICE: &str = "* Results served from cache";

/// Lines shown in the results panel.
pub fn result_lines(result: Option<&AnalysisResult>, colors: &ColorScheme) -> Vec<Line<'static>> {
    let notice = Style::default().fg(colors.ui.notice.to_color());

    match result {
        None => vec![Line::from(Span::styled(EMPTY_HINT, notice))],
        Some(AnalysisResult::Failure { error }) => vec![Line::from(Span::styled(
            error.clone(),
            Style::default()
                .fg(colors.ui.error.to_color())
                .add_modifier(Modifier::BOLD),
        ))],
        Some(AnalysisResult::Report {
            ticker,
            graham_results,
            cached,
        }) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Ticker: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(ticker.clone()),
                ]),
                Line::default(),
            ];
            lines.extend(to_lines(&render(graham_results), colors));
            if *cached {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(CACHE_NOTICE, notice)));
            }
            lines
        }
    }
}

/// Rows `lines` take once wrapped to `width`. Errs high for word-wrapped
/// lines so the last row is always reachable.
pub fn wrapped_rows(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| {
            let w = line.width();
            if w <= width {
                1
            } else {
                w.div_ceil(width) + 1
            }
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Render the panel scrolled down by `scroll` rows.
///
/// Returns the offset actually applied, clamped so the panel never scrolls
/// past its last row.
pub fn render_results(
    frame: &mut Frame,
    result: Option<&AnalysisResult>,
    area: Rect,
    scroll: u16,
    colors: &ColorScheme,
) -> u16 {
    let lines = result_lines(result, colors);
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let max_scroll = wrapped_rows(&lines, inner_width).saturating_sub(inner_height);
    let scroll = scroll.min(max_scroll);

    let title = if max_scroll > 0 {
        " Analysis (PgUp/PgDn) "
    } else {
        " Analysis "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.ui.border.to_color()))
        .title(title);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
    scroll
}

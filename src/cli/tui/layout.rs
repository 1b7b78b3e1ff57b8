// Screen layout and pointer hit-testing

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::engine::SearchState;

/// Width of the history panel on the right
const HISTORY_WIDTH: u16 = 24;

/// Widest the dropdown gets, regardless of input width
const MAX_DROPDOWN_WIDTH: u16 = 72;

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Suggestion(usize),
    History(usize),
}

/// Areas of the last drawn frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub input: Rect,
    pub results: Rect,
    pub history: Option<Rect>,
    /// Overlays the body, directly under the input
    pub dropdown: Option<Rect>,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, state: &SearchState) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Input
                Constraint::Min(3),    // Results + history
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        let (results, history) = if state.history().is_empty() {
            (rows[2], None)
        } else {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(20), Constraint::Length(HISTORY_WIDTH)])
                .split(rows[2]);
            (cols[0], Some(cols[1]))
        };

        let suggestions = state.suggestions();
        let dropdown = if suggestions.is_open() {
            let input = rows[1];
            let y = input.y + input.height;
            let wanted = suggestions.list().len() as u16 + 2; // +2 for borders
            let height = wanted.min(area.bottom().saturating_sub(y));
            (height > 2).then(|| Rect {
                x: input.x,
                y,
                width: input.width.min(MAX_DROPDOWN_WIDTH),
                height,
            })
        } else {
            None
        };

        Self {
            title: rows[0],
            input: rows[1],
            results,
            history,
            dropdown,
            footer: rows[3],
        }
    }

    /// Map a click position to a suggestion or history row.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        // Dropdown sits on top, so it wins
        if let Some(index) = self.dropdown.and_then(|area| inner_row(area, column, row)) {
            return Some(Hit::Suggestion(index));
        }
        self.history
            .and_then(|area| inner_row(area, column, row))
            .map(Hit::History)
    }
}

/// Row index inside a bordered block, if the position is inside its content.
fn inner_row(area: Rect, column: u16, row: u16) -> Option<usize> {
    let inside_x = column > area.x && column + 1 < area.x + area.width;
    let inside_y = row > area.y && row + 1 < area.y + area.height;
    (inside_x && inside_y).then(|| (row - area.y - 1) as usize)
}

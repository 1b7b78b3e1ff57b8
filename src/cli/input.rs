// Input controller - maps terminal events to engine messages
//
// Owns the single-line textarea. The engine owns the query; the textarea is
// re-synced from it after every dispatch so programmatic changes (commit,
// history pick, successful submission) show up in the box.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tui_textarea::{CursorMove, TextArea};

use crate::cli::tui::{sanitize_paste_char, Hit, ScreenLayout};
use crate::engine::{Msg, NavKey, SearchState};

/// Results panel movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
}

/// What the event loop should do with an input event
#[derive(Debug)]
pub enum InputAction {
    Dispatch(Msg),
    /// Move the results panel; never reaches the engine
    Scroll(ScrollRequest),
    Quit,
    Ignore,
}

pub struct InputController {
    textarea: TextArea<'static>,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
        }
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("")
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    /// Replace the box contents with `query` if they differ.
    pub fn sync(&mut self, query: &str) {
        if self.text() != query {
            self.textarea = TextArea::new(vec![query.to_string()]);
            self.textarea.move_cursor(CursorMove::End);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, state: &SearchState) -> InputAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        if ctrl && key.code == KeyCode::Char('c') {
            return InputAction::Quit;
        }

        // Up/Down alone belong to the suggestion list
        match key.code {
            KeyCode::PageUp => return InputAction::Scroll(ScrollRequest::PageUp),
            KeyCode::PageDown => return InputAction::Scroll(ScrollRequest::PageDown),
            KeyCode::Up if ctrl => return InputAction::Scroll(ScrollRequest::LineUp),
            KeyCode::Down if ctrl => return InputAction::Scroll(ScrollRequest::LineDown),
            _ => {}
        }

        // Input is disabled while an analysis is in flight
        if state.is_loading() {
            return InputAction::Ignore;
        }

        match key.code {
            KeyCode::Char('l') if ctrl => {
                if state.query().is_empty() {
                    InputAction::Ignore
                } else {
                    InputAction::Dispatch(Msg::Clear)
                }
            }
            KeyCode::Char('r') if ctrl => InputAction::Dispatch(Msg::Submit(None)),
            KeyCode::Char(c) if alt && c.is_ascii_digit() => {
                let index = match c {
                    '0' => 9,
                    _ => c as usize - '1' as usize,
                };
                InputAction::Dispatch(Msg::SelectHistory(index))
            }
            KeyCode::Up => InputAction::Dispatch(Msg::Key(NavKey::Up)),
            KeyCode::Down => InputAction::Dispatch(Msg::Key(NavKey::Down)),
            KeyCode::Enter => InputAction::Dispatch(Msg::Key(NavKey::Enter)),
            KeyCode::Esc => {
                if state.suggestions().is_open() {
                    InputAction::Dispatch(Msg::Key(NavKey::Escape))
                } else {
                    InputAction::Quit
                }
            }
            // Would insert a newline or tab into a single-line box
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => InputAction::Ignore,
            KeyCode::Tab | KeyCode::BackTab => InputAction::Ignore,
            _ => {
                let before = self.text();
                self.textarea.input(key);
                self.edited(before)
            }
        }
    }

    pub fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        layout: &ScreenLayout,
        state: &SearchState,
    ) -> InputAction {
        match mouse.kind {
            MouseEventKind::ScrollUp => return InputAction::Scroll(ScrollRequest::LineUp),
            MouseEventKind::ScrollDown => return InputAction::Scroll(ScrollRequest::LineDown),
            _ => {}
        }
        if state.is_loading() {
            return InputAction::Ignore;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return InputAction::Ignore;
        }

        match layout.hit(mouse.column, mouse.row) {
            Some(Hit::Suggestion(index)) => InputAction::Dispatch(Msg::SelectSuggestion(index)),
            Some(Hit::History(index)) => InputAction::Dispatch(Msg::SelectHistory(index)),
            None => InputAction::Ignore,
        }
    }

    /// Insert pasted text, flattened to one line.
    pub fn handle_paste(&mut self, text: &str, state: &SearchState) -> InputAction {
        if state.is_loading() {
            return InputAction::Ignore;
        }

        let clean: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' || c == '\t' { ' ' } else { c })
            .filter(|c| sanitize_paste_char(*c))
            .collect();
        if clean.is_empty() {
            return InputAction::Ignore;
        }

        let before = self.text();
        self.textarea.insert_str(clean);
        self.edited(before)
    }

    fn edited(&self, before: String) -> InputAction {
        let after = self.text();
        if after == before {
            InputAction::Ignore
        } else {
            InputAction::Dispatch(Msg::Edit(after))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{update, Effect};
    use crate::services::SymbolRecord;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn loading_state() -> SearchState {
        let mut state = SearchState::default();
        update(&mut state, Msg::Submit(Some("AAPL".to_string())));
        assert!(state.is_loading());
        state
    }

    #[test]
    fn test_typing_dispatches_edit() {
        let mut input = InputController::new();
        let state = SearchState::default();

        input.handle_key(key(KeyCode::Char('a')), &state);
        let action = input.handle_key(key(KeyCode::Char('b')), &state);

        assert!(matches!(action, InputAction::Dispatch(Msg::Edit(ref t)) if t == "ab"));
    }

    #[test]
    fn test_cursor_moves_are_not_edits() {
        let mut input = InputController::new();
        input.sync("AAPL");
        let action = input.handle_key(key(KeyCode::Left), &SearchState::default());
        assert!(matches!(action, InputAction::Ignore));
    }

    #[test]
    fn test_ctrl_c_quits_even_while_loading() {
        let mut input = InputController::new();
        assert!(matches!(input.handle_key(ctrl('c'), &loading_state()), InputAction::Quit));
    }

    #[test]
    fn test_input_disabled_while_loading() {
        let mut input = InputController::new();
        let state = loading_state();

        assert!(matches!(input.handle_key(key(KeyCode::Char('x')), &state), InputAction::Ignore));
        assert!(matches!(input.handle_key(key(KeyCode::Enter), &state), InputAction::Ignore));
        assert!(matches!(input.handle_paste("MSFT", &state), InputAction::Ignore));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_clear_requires_query() {
        let mut input = InputController::new();
        let mut state = SearchState::default();
        assert!(matches!(input.handle_key(ctrl('l'), &state), InputAction::Ignore));

        update(&mut state, Msg::Edit("A".to_string()));
        assert!(matches!(input.handle_key(ctrl('l'), &state), InputAction::Dispatch(Msg::Clear)));
    }

    #[test]
    fn test_escape_quits_when_list_hidden() {
        let mut input = InputController::new();
        assert!(matches!(
            input.handle_key(key(KeyCode::Esc), &SearchState::default()),
            InputAction::Quit
        ));
    }

    #[test]
    fn test_escape_closes_open_list() {
        let mut state = SearchState::default();
        let effects = update(&mut state, Msg::Edit("AA".to_string()));
        let Some(Effect::ScheduleLookup { ticket, .. }) = effects.into_iter().next() else {
            panic!("expected lookup");
        };
        let record = SymbolRecord {
            description: "ALCOA".to_string(),
            display_symbol: "AA".to_string(),
            symbol: "AA".to_string(),
            kind: "Common Stock".to_string(),
        };
        update(&mut state, Msg::LookupSettled { ticket, outcome: Ok(vec![record]) });

        let mut input = InputController::new();
        assert!(matches!(
            input.handle_key(key(KeyCode::Esc), &state),
            InputAction::Dispatch(Msg::Key(NavKey::Escape))
        ));
    }

    #[test]
    fn test_alt_digits_pick_history() {
        let mut input = InputController::new();
        let state = SearchState::default();
        let alt = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT);

        assert!(matches!(
            input.handle_key(alt('1'), &state),
            InputAction::Dispatch(Msg::SelectHistory(0))
        ));
        assert!(matches!(
            input.handle_key(alt('0'), &state),
            InputAction::Dispatch(Msg::SelectHistory(9))
        ));
    }

    #[test]
    fn test_page_keys_scroll_results() {
        let mut input = InputController::new();
        let state = SearchState::default();

        assert!(matches!(
            input.handle_key(key(KeyCode::PageDown), &state),
            InputAction::Scroll(ScrollRequest::PageDown)
        ));
        assert!(matches!(
            input.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::CONTROL), &state),
            InputAction::Scroll(ScrollRequest::LineUp)
        ));
        // Plain arrows still drive the suggestion list
        assert!(matches!(
            input.handle_key(key(KeyCode::Down), &state),
            InputAction::Dispatch(Msg::Key(NavKey::Down))
        ));
    }

    #[test]
    fn test_paste_is_flattened() {
        let mut input = InputController::new();
        let action = input.handle_paste("BRK\n.B\x1b", &SearchState::default());
        assert!(matches!(action, InputAction::Dispatch(Msg::Edit(ref t)) if t == "BRK .B"));
    }

    #[test]
    fn test_sync_replaces_text() {
        let mut input = InputController::new();
        input.sync("MSFT");
        assert_eq!(input.text(), "MSFT");
        // Typing continues at the end
        let action = input.handle_key(key(KeyCode::Char('X')), &SearchState::default());
        assert!(matches!(action, InputAction::Dispatch(Msg::Edit(ref t)) if t == "MSFTX"));
    }
}

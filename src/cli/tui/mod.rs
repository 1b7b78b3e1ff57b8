// Full-screen terminal UI
//
// Layout
// ──────
// title     one line
// input     bordered single-line textarea
// body      results panel, plus the history panel once anything was analyzed
// footer    key hints
//
// The suggestion dropdown is drawn last, over the body, right under the input.
//
// Event flow: a blocking task forwards crossterm events; the loop selects over
// those, engine settlements and a 100ms render tick.

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

use crate::cli::input::{InputAction, InputController, ScrollRequest};
use crate::config::ColorScheme;
use crate::engine::{Controller, Msg};

mod async_input;
mod autocomplete_widget;
mod history_widget;
mod input_widget;
mod layout;
mod results_widget;

pub use async_input::spawn_input_task;
pub(crate) use async_input::sanitize_paste_char;
pub use autocomplete_widget::render_suggestion_dropdown;
pub use history_widget::render_history;
pub use input_widget::render_input_widget;
pub use layout::{Hit, ScreenLayout};
pub use results_widget::{render_results, result_lines};

const TITLE: &str = "Graham Screener";
const KEY_HINTS: &str =
    "Enter analyze · ↑↓ suggestions · PgUp/PgDn scroll · Alt+1..0 history · Ctrl+L clear · Ctrl+C quit";
const RENDER_INTERVAL: Duration = Duration::from_millis(100);

/// Raw mode + alternate screen for the lifetime of the guard
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )
        .context("Failed to enter alternate screen")?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .context("Failed to create terminal")?;
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Screen state around the engine controller
pub struct App {
    controller: Controller,
    input: InputController,
    colors: ColorScheme,
    /// Layout of the last frame, for mouse hit-testing
    layout: ScreenLayout,
    /// Rows the results panel is scrolled down by
    results_scroll: u16,
    tick: usize,
    should_quit: bool,
}

impl App {
    pub fn new(controller: Controller, colors: ColorScheme) -> Self {
        Self {
            controller,
            input: InputController::new(),
            colors,
            layout: ScreenLayout::default(),
            results_scroll: 0,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn input_text(&self) -> String {
        self.input.text()
    }

    pub fn results_scroll(&self) -> u16 {
        self.results_scroll
    }

    pub fn dispatch(&mut self, msg: Msg) {
        tracing::debug!(msg = msg.name(), "Dispatching");
        let state = self.controller.state();
        let before = (state.is_loading(), state.result().is_some());
        self.controller.dispatch(msg);
        let state = self.controller.state();

        // A new, cleared or pending result starts at the top
        if (state.is_loading(), state.result().is_some()) != before {
            self.results_scroll = 0;
        }
        self.input.sync(state.query());
    }

    fn scroll_results(&mut self, request: ScrollRequest) {
        let page = self.layout.results.height.saturating_sub(3).max(1);
        self.results_scroll = match request {
            ScrollRequest::LineUp => self.results_scroll.saturating_sub(1),
            ScrollRequest::LineDown => self.results_scroll.saturating_add(1),
            ScrollRequest::PageUp => self.results_scroll.saturating_sub(page),
            ScrollRequest::PageDown => self.results_scroll.saturating_add(page),
        };
    }

    pub fn handle_terminal_event(&mut self, event: Event) {
        let state = self.controller.state();
        let action = match event {
            Event::Key(key) => self.input.handle_key(key, state),
            Event::Mouse(mouse) => self.input.handle_mouse(mouse, &self.layout, state),
            Event::Paste(text) => self.input.handle_paste(&text, state),
            _ => InputAction::Ignore,
        };

        match action {
            InputAction::Dispatch(msg) => self.dispatch(msg),
            InputAction::Scroll(request) => self.scroll_results(request),
            InputAction::Quit => self.should_quit = true,
            InputAction::Ignore => {}
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let state = self.controller.state();
        let layout = ScreenLayout::compute(frame.area(), state);

        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(self.colors.ui.cursor.to_color())
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, layout.title);

        render_input_widget(
            frame,
            self.input.textarea_mut(),
            layout.input,
            state.is_loading(),
            self.tick,
            &self.colors,
        );
        self.results_scroll = render_results(
            frame,
            state.result(),
            layout.results,
            self.results_scroll,
            &self.colors,
        );
        if let Some(area) = layout.history {
            render_history(frame, state.history(), area, &self.colors);
        }

        let hints = Paragraph::new(Span::styled(
            KEY_HINTS,
            Style::default().fg(self.colors.ui.notice.to_color()),
        ));
        frame.render_widget(hints, layout.footer);

        if let Some(area) = layout.dropdown {
            render_suggestion_dropdown(frame, state.suggestions(), area, &self.colors);
        }

        self.layout = layout;
    }

    fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

/// Run the interactive screen until the user quits.
pub async fn run(controller: Controller, colors: ColorScheme) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(controller, colors);
    let mut input_rx = spawn_input_task();
    let mut render_interval = tokio::time::interval(RENDER_INTERVAL);

    tracing::info!("Interactive session started");

    while !app.should_quit() {
        tokio::select! {
            Some(event) = input_rx.recv() => {
                app.handle_terminal_event(event);
            }

            Some(msg) = app.controller.next_event() => {
                app.dispatch(msg);
            }

            _ = render_interval.tick() => {
                app.advance_tick();
            }
        }

        guard
            .terminal_mut()
            .draw(|frame| app.draw(frame))
            .context("Failed to draw frame")?;
    }

    tracing::info!("Interactive session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineSettings;
    use crate::services::{
        AnalysisError, AnalysisResult, AnalysisService, LookupError, SymbolLookup, SymbolRecord,
    };
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    struct NoLookup;

    #[async_trait]
    impl SymbolLookup for NoLookup {
        async fn search(&self, _query: &str) -> Result<Vec<SymbolRecord>, LookupError> {
            Ok(Vec::new())
        }
    }

    struct CannedAnalysis {
        graham_results: serde_json::Value,
        cached: bool,
    }

    #[async_trait]
    impl AnalysisService for CannedAnalysis {
        async fn analyze(&self, ticker: &str) -> Result<AnalysisResult, AnalysisError> {
            Ok(AnalysisResult::Report {
                ticker: ticker.to_string(),
                graham_results: self.graham_results.clone(),
                cached: self.cached,
            })
        }
    }

    fn app_with(analysis: CannedAnalysis) -> App {
        let controller =
            Controller::new(EngineSettings::default(), Arc::new(NoLookup), Arc::new(analysis));
        App::new(controller, ColorScheme::default())
    }

    fn app() -> App {
        app_with(CannedAnalysis {
            graham_results: serde_json::json!({"adequate_size": [700, true]}),
            cached: false,
        })
    }

    /// Thirty criteria, far more than a 24-row screen can show at once
    fn long_report_app() -> App {
        let mut criteria = serde_json::Map::new();
        for i in 0..30 {
            criteria.insert(format!("crit_{:02}", i), serde_json::json!([i, true]));
        }
        app_with(CannedAnalysis {
            graham_results: serde_json::Value::Object(criteria),
            cached: true,
        })
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_terminal_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn screen_text(app: &mut App) -> String {
        screen_text_sized(app, 90, 20)
    }

    fn screen_text_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[tokio::test]
    async fn test_typed_text_reaches_engine() {
        let mut app = app();
        for c in "MSFT".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.controller().state().query(), "MSFT");
        assert!(screen_text(&mut app).contains("MSFT"));
    }

    #[tokio::test]
    async fn test_escape_with_hidden_list_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_submission_round_trip_renders_report() {
        let mut app = app();
        for c in "aapl".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.controller().state().is_loading());
        assert!(screen_text(&mut app).contains("Analyzing"));

        let msg = app.controller.next_event().await.expect("settlement");
        app.dispatch(msg);

        let screen = screen_text(&mut app);
        assert!(screen.contains("Ticker: aapl"));
        assert!(screen.contains("adequate_size"));
        assert!(screen.contains("Search History"));
        assert_eq!(app.input_text(), "aapl");
    }

    async fn submit_and_settle(app: &mut App, ticker: &str) {
        for c in ticker.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
        let msg = app.controller.next_event().await.expect("settlement");
        app.dispatch(msg);
    }

    #[tokio::test]
    async fn test_long_report_scrolls_to_last_entry() {
        let mut app = long_report_app();
        submit_and_settle(&mut app, "aapl").await;

        let top = screen_text_sized(&mut app, 100, 24);
        assert!(top.contains("crit_00"));
        assert!(!top.contains("crit_29"));
        assert!(!top.contains("* Results served from cache"));

        for _ in 0..10 {
            press(&mut app, KeyCode::PageDown);
            screen_text_sized(&mut app, 100, 24);
        }
        let bottom = screen_text_sized(&mut app, 100, 24);
        assert!(bottom.contains("crit_29"));
        assert!(bottom.contains("* Results served from cache"));
        assert!(!bottom.contains("crit_00"));

        // Overscroll is clamped, so one PageUp moves back at once
        let at_end = app.results_scroll();
        press(&mut app, KeyCode::PageUp);
        assert!(app.results_scroll() < at_end);

        for _ in 0..10 {
            press(&mut app, KeyCode::PageUp);
        }
        assert_eq!(app.results_scroll(), 0);
        assert!(screen_text_sized(&mut app, 100, 24).contains("crit_00"));
    }

    #[tokio::test]
    async fn test_new_submission_resets_scroll() {
        let mut app = long_report_app();
        submit_and_settle(&mut app, "aapl").await;
        screen_text_sized(&mut app, 100, 24);

        press(&mut app, KeyCode::PageDown);
        assert!(app.results_scroll() > 0);

        press(&mut app, KeyCode::Enter);
        assert!(app.controller().state().is_loading());
        assert_eq!(app.results_scroll(), 0);

        let msg = app.controller.next_event().await.expect("settlement");
        app.dispatch(msg);
        assert_eq!(app.results_scroll(), 0);
        assert!(screen_text_sized(&mut app, 100, 24).contains("crit_00"));
    }
}

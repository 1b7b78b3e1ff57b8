// Async input handler for TUI - non-blocking terminal event polling

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

/// How long one poll blocks before checking whether the receiver is gone
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Sanitize pasted content to prevent TUI breakage
/// Filters out:
/// - Image escape sequences (kitty, iTerm2, sixel)
/// - Non-printable control characters
pub(crate) fn sanitize_paste_char(c: char) -> bool {
    match c {
        ' '..='~' => true,
        '\u{0080}'..='\u{10FFFF}' => {
            // Private use areas carry image payloads
            !matches!(c, '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}')
        }
        _ => false,
    }
}

/// Key events worth forwarding: presses and repeats of sane characters
fn should_accept_key_event(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match &key.code {
        KeyCode::Char(c) => sanitize_paste_char(*c),
        _ => true,
    }
}

/// Spawn a blocking task that polls the terminal and forwards events.
///
/// The task exits when the receiver is dropped or the terminal read fails.
pub fn spawn_input_task() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        if tx.is_closed() {
            break;
        }

        match crossterm::event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                tracing::error!("Terminal poll failed: {}", e);
                break;
            }
        }

        let event = match crossterm::event::read() {
            Ok(event) => event,
            Err(e) => {
                tracing::error!("Terminal read failed: {}", e);
                break;
            }
        };

        let forward = match &event {
            Event::Key(key) => should_accept_key_event(key),
            Event::Mouse(_) | Event::Paste(_) | Event::Resize(_, _) => true,
            _ => false,
        };

        if forward && tx.send(event).is_err() {
            break;
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_sanitize_paste_char() {
        assert!(sanitize_paste_char('A'));
        assert!(sanitize_paste_char('.'));
        assert!(sanitize_paste_char('é'));
        assert!(!sanitize_paste_char('\x1b'));
        assert!(!sanitize_paste_char('\n'));
        assert!(!sanitize_paste_char('\u{E000}'));
    }

    #[test]
    fn test_release_events_dropped() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(should_accept_key_event(&key));
        key.kind = KeyEventKind::Release;
        assert!(!should_accept_key_event(&key));
    }

    #[test]
    fn test_control_chars_dropped() {
        let key = KeyEvent::new(KeyCode::Char('\u{7}'), KeyModifiers::NONE);
        assert!(!should_accept_key_event(&key));
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(should_accept_key_event(&enter));
    }
}

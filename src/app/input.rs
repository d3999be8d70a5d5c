use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Returns `false` once the app should close.
pub fn handle_event(app: &mut App, ev: Event) -> bool {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => true,
    }
}

fn handle_key(app: &mut App, KeyEvent { code, modifiers, .. }: KeyEvent) -> bool {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return false,
        KeyCode::Esc => return false,

        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),

        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),

        _ => {}
    }
    !app.quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseOptions;
    use crate::session::Session;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_and_enter_runs_a_command() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Session::open(dir.path().join("t.txt"), ParseOptions::default()));
        for c in "todo x!".chars() {
            assert!(handle_event(&mut app, key(KeyCode::Char(c))));
        }
        handle_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.input, "todo x");
        assert!(handle_event(&mut app, key(KeyCode::Enter)));
        assert_eq!(app.session.tasks().len(), 1);

        for c in "bye".chars() {
            handle_event(&mut app, key(KeyCode::Char(c)));
        }
        assert!(!handle_event(&mut app, key(KeyCode::Enter)));
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Session::open(dir.path().join("t.txt"), ParseOptions::default()));
        assert!(!handle_event(&mut app, key(KeyCode::Esc)));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!handle_event(&mut app, ctrl_c));
        assert!(app.input.is_empty());
    }
}

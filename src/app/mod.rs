pub mod input;
pub mod ui;

use crate::command::reply::WELCOME;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Einstein,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub speaker: Speaker,
    pub text: String,
}

impl Entry {
    pub fn label(&self) -> &'static str {
        match self.speaker {
            Speaker::User => "You:",
            Speaker::Einstein | Speaker::Error => "Einstein:",
        }
    }
}

/// Breaks `text` into rows of at most `width` characters. The chat pane
/// draws exactly these rows, so scrolling can count them.
pub fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.lines() {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
        } else {
            rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect()));
        }
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

/// Central TUI state: a chat transcript over a [`Session`].
pub struct App {
    pub session: Session,
    pub transcript: Vec<Entry>,
    pub input: String,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll_back: u16,
    pub quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        let mut transcript = vec![Entry {
            speaker: Speaker::Einstein,
            text: WELCOME.to_string(),
        }];
        transcript.extend(session.load_problems().iter().map(|p| Entry {
            speaker: Speaker::Error,
            text: p.to_string(),
        }));
        Self {
            session,
            transcript,
            input: String::new(),
            scroll_back: 0,
            quit: false,
        }
    }

    /// Sends the input box to the session; one command runs to completion
    /// before the next key is read.
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.transcript.push(Entry {
            speaker: Speaker::User,
            text: line.to_string(),
        });
        let reply = self.session.respond(line);
        self.transcript.push(Entry {
            speaker: if reply.is_error {
                Speaker::Error
            } else {
                Speaker::Einstein
            },
            text: reply.text,
        });
        self.scroll_back = 0;
        self.quit = reply.exit;
    }

    pub fn scroll_up(&mut self, by: u16) {
        self.scroll_back = self.scroll_back.saturating_add(by);
    }

    pub fn scroll_down(&mut self, by: u16) {
        self.scroll_back = self.scroll_back.saturating_sub(by);
    }

    /// Rows the transcript occupies in a pane `width` characters wide.
    pub fn transcript_lines(&self, width: usize) -> usize {
        self.transcript
            .iter()
            .map(|e| wrap_rows(e.label(), width).len() + wrap_rows(&e.text, width).len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseOptions;

    fn app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(dir.path().join("t.txt"), ParseOptions::default());
        (dir, App::new(session))
    }

    #[test]
    fn submit_records_both_sides() {
        let (_dir, mut app) = app();
        app.input = "  todo Read book ".into();
        app.submit();
        assert!(app.input.is_empty());
        assert_eq!(app.transcript.len(), 3);
        assert_eq!(app.transcript[1].speaker, Speaker::User);
        assert_eq!(app.transcript[1].text, "todo Read book");
        assert_eq!(app.transcript[2].speaker, Speaker::Einstein);
        assert_eq!(app.session.tasks().len(), 1);
        assert!(!app.quit);
    }

    #[test]
    fn errors_and_exit_are_flagged() {
        let (_dir, mut app) = app();
        app.input = "mark 9".into();
        app.submit();
        assert_eq!(app.transcript.last().unwrap().speaker, Speaker::Error);

        app.input = "bye".into();
        app.submit();
        assert!(app.quit);
    }

    #[test]
    fn long_lines_count_as_several_rows() {
        assert_eq!(wrap_rows("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert_eq!(wrap_rows("ab\n\ncd", 10), ["ab", "", "cd"]);
        assert_eq!(wrap_rows("", 10), [""]);

        let (_dir, mut app) = app();
        app.transcript = vec![Entry {
            speaker: Speaker::User,
            text: "x".repeat(25),
        }];
        assert_eq!(app.transcript_lines(80), 2);
        assert_eq!(app.transcript_lines(10), 1 + 3);
    }

    #[test]
    fn blank_input_is_ignored() {
        let (_dir, mut app) = app();
        app.input = "   ".into();
        app.submit();
        assert_eq!(app.transcript.len(), 1);
    }
}

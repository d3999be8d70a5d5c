use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{wrap_rows, App, Speaker};

pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // header
                Constraint::Min(1),    // transcript
                Constraint::Length(3), // input
            ]
            .as_ref(),
        )
        .split(size);

    // Header (key help + counts)
    let tasks = app.session.tasks();
    let header = Paragraph::new(Line::from(format!(
        "enter send  esc quit  up/down scroll  type 'help' for commands   |   {} tasks, {} done",
        tasks.len(),
        tasks.done_count()
    )))
    .block(Block::default().borders(Borders::ALL).title("Einstein"));
    frame.render_widget(header, chunks[0]);

    // Transcript
    let width = chunks[1].width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for entry in &app.transcript {
        let style = match entry.speaker {
            Speaker::User => Style::default().fg(Color::Cyan),
            Speaker::Einstein => Style::default().fg(Color::Green),
            Speaker::Error => Style::default().fg(Color::Red),
        };
        let label = style.add_modifier(Modifier::BOLD);
        lines.extend(
            wrap_rows(entry.label(), width)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, label))),
        );
        lines.extend(
            wrap_rows(&entry.text, width)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, style))),
        );
    }
    let visible = chunks[1].height.saturating_sub(2) as usize;
    let top = app
        .transcript_lines(width)
        .saturating_sub(visible + app.scroll_back as usize);
    let transcript = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Chat"))
        .scroll((top.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(transcript, chunks[1]);

    // Input
    let input = Paragraph::new(format!("> {}", app.input))
        .block(Block::default().borders(Borders::ALL).title("Command"));
    frame.render_widget(input, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseOptions;
    use crate::session::Session;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn renders_transcript_and_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Session::open(dir.path().join("t.txt"), ParseOptions::default()));
        app.input = "todo Read book".into();
        app.submit();
        app.input = "list".into();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("1 tasks, 0 done"));
        assert!(text.contains("[T][ ] Read book"));
        assert!(text.contains("> list"));
    }

    #[test]
    fn narrow_pane_still_shows_the_latest_reply() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(Session::open(dir.path().join("t.txt"), ParseOptions::default()));
        for n in 1..=4 {
            app.input = format!("todo a rather long task description number {n}");
            app.submit();
        }

        let mut terminal = Terminal::new(TestBackend::new(30, 14)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let last_reply = &app.transcript.last().unwrap().text;
        let last_row = wrap_rows(last_reply, 28).pop().unwrap();
        // Header takes rows 0..3 and the input box rows 11..14, so the
        // bottom row inside the chat border is row 9.
        let buffer = terminal.backend().buffer();
        let bottom: String = buffer.content()[9 * 30 + 1..9 * 30 + 29]
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert_eq!(bottom.trim_end(), last_row.trim_end());
    }
}

use std::{io, time::Duration};

use clap::Parser;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use einstein::{
    app::{input::handle_event, ui::draw, App},
    console, data_path, logging, Cli, Cmd, Session,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    let tasks_file = data_path(&settings)?;
    let options = settings.parse_options();

    match cli.cmd {
        Some(Cmd::Exec { line }) => {
            logging::init_stderr(&settings.log_level);
            let mut session = Session::open(&tasks_file, options);
            for problem in session.load_problems() {
                eprintln!("{problem}");
            }
            let reply = session.respond(&line.join(" "));
            if reply.is_error {
                eprintln!("{}", reply.text);
                std::process::exit(1);
            }
            println!("{}", reply.text);
        }
        Some(Cmd::Tui) => {
            logging::init_file(&settings.log_level, &tasks_file.with_extension("log"))?;
            launch_tui(Session::open(&tasks_file, options))?;
        }
        Some(Cmd::Run) | None => {
            logging::init_stderr(&settings.log_level);
            let mut session = Session::open(&tasks_file, options);
            console::run(&mut session, io::stdin().lock(), io::stdout())?;
        }
    }

    Ok(())
}

fn launch_tui(session: Session) -> Result<()> {
    let mut app = App::new(session);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Ensure proper teardown even on panic
    let _guard = TerminalGuard;

    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(250))? {
            let ev = event::read()?;
            if let Event::Key(_) | Event::Resize(_, _) = ev {
                if !handle_event(&mut app, ev) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Restores the terminal on drop (even if we return early)
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Try best-effort cleanup; ignore errors at shutdown
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

//! Plain line-by-line front end.

use std::io::{self, BufRead, Write};

use crate::command::reply::WELCOME;
use crate::session::Session;

/// Runs until `bye` or end of input. Errors are printed and the loop goes on.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> io::Result<()> {
    writeln!(out, "{WELCOME}")?;
    for problem in session.load_problems() {
        writeln!(out, "{problem}")?;
    }

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let reply = session.respond(&line);
        writeln!(out, "{}", reply.text)?;
        if reply.exit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseOptions;

    #[test]
    fn stops_at_bye_and_ignores_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open(dir.path().join("t.txt"), ParseOptions::default());
        let input = "todo Read book\n\nnonsense\nbye\ntodo never\n";
        let mut out = Vec::new();
        run(&mut session, input.as_bytes(), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Guten tag!"));
        assert!(out.contains("Now you have 1 tasks in the list."));
        assert!(out.contains("I do not understand you"));
        assert!(out.trim_end().ends_with("Bye, hope to see you again soon!"));
        assert_eq!(session.tasks().len(), 1);
    }

    #[test]
    fn end_of_input_ends_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open(dir.path().join("t.txt"), ParseOptions::default());
        let mut out = Vec::new();
        run(&mut session, "list\n".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Hmmm, didn't find any tasks."));
    }
}

use std::io::{self, BufRead, Write};

use crate::session::{LineReport, Session};

/// Printed once before the first prompt.
pub const BANNER: &str = "Ether Language v0.1.\nType \"help\" or \"credits\" for more information.";
/// Shown before every input line.
pub const PROMPT: &str = "Ether> ";
/// Ends the loop when entered on its own.
pub const EXIT_COMMAND: &str = "exit()";

/// Reads lines from `input` until end of input or `exit()`, running each one
/// through `session`.
///
/// Results go to `out`, diagnostics to `err`.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing the output.
///
/// # Example
/// ```
/// use ether::{Session, interpreter::lexer::Dialect, repl};
///
/// let mut session = Session::new(Dialect::Base);
/// let mut out = Vec::new();
/// let mut err = Vec::new();
///
/// repl::run(&mut session, "x = 6\nx * 7\nexit()\n1".as_bytes(), &mut out, &mut err).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "Ether> Ether> 42\nEther> ");
/// assert!(err.is_empty());
/// ```
pub fn run<R, O, E>(session: &mut Session, input: R, out: &mut O, err: &mut E) -> io::Result<()>
    where R: BufRead,
          O: Write,
          E: Write
{
    let mut lines = input.lines();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim() == EXIT_COMMAND {
            break;
        }

        report(&session.run_line(&line), out, err)?;
    }

    Ok(())
}

/// Writes the diagnostics and the echoed result of one line.
///
/// # Errors
/// Returns any I/O error from the writers.
pub fn report<O, E>(report: &LineReport, out: &mut O, err: &mut E) -> io::Result<()>
    where O: Write,
          E: Write
{
    for diagnostic in report.diagnostics() {
        writeln!(err, "{diagnostic}")?;
    }
    if let Some(output) = report.output() {
        writeln!(out, "{output}")?;
    }
    Ok(())
}

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use ether::{Session, interpreter::lexer::Dialect, repl};
use tracing_subscriber::EnvFilter;

/// Ether is a minimal interactive language with integers, strings and
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Lexical rules to use. `extended` adds single-quoted strings and
    /// Cyrillic identifiers.
    #[arg(short, long, value_enum, default_value_t = Dialect::Base)]
    dialect: Dialect,

    /// Runs the given line instead of starting the prompt. May be repeated;
    /// all lines share one session.
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,

    /// Skips the startup banner.
    #[arg(long)]
    no_banner: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ETHER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .without_time()
                             .init();
}

fn run_commands(session: &mut Session, commands: &[String]) -> io::Result<bool> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let mut clean = true;

    for line in commands {
        let report = session.run_line(line);
        clean &= report.is_clean();
        repl::report(&report, &mut out, &mut err)?;
    }
    out.flush()?;

    Ok(clean)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let mut session = Session::new(args.dialect);

    let result = if args.commands.is_empty() {
        if !args.no_banner {
            println!("{}", repl::BANNER);
        }
        repl::run(&mut session,
                  io::stdin().lock(),
                  &mut io::stdout().lock(),
                  &mut io::stderr().lock()).map(|()| true)
    } else {
        run_commands(&mut session, &args.commands)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}

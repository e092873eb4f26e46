extern crate ansi_term;
use crate::lang::Error;
use crate::mach::Runtime;
use ansi_term::Style;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::sync::Once;
use tracing::debug;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostics on standard error.
///
/// Only installs a subscriber when `RUST_LOG` is set, for example
/// `RUST_LOG=dc=debug`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

pub fn main() {
    init_tracing();
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "dc".to_string());
    let paths: Vec<String> = args.collect();
    if paths.is_empty() {
        eprintln!("Usage: {} file1 file2 ...", program);
        eprintln!("       use - to read from standard input");
        return;
    }
    let mut runtime = Runtime::default();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = run_session(&mut runtime, &paths, &mut stdout.lock(), &mut stderr.lock());
    if status != 0 {
        std::process::exit(status);
    }
}

/// Runs every input, tears the runtime down and returns the exit status.
pub fn run_session<W: Write, E: Write>(
    runtime: &mut Runtime,
    paths: &[String],
    out: &mut W,
    err: &mut E,
) -> i32 {
    let status = run_files(runtime, paths, out, err);
    let released = runtime.reset();
    debug!(released, "teardown");
    match status {
        Ok(()) => 0,
        Err(error) => {
            let _ = writeln!(err, "{}", error);
            1
        }
    }
}

/// Runs each input in turn against one runtime. A failing input is
/// reported and skipped; an input that can't be opened ends it all.
pub fn run_files<W: Write, E: Write>(
    runtime: &mut Runtime,
    paths: &[String],
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    for path in paths {
        writeln!(out, "Running on input file {}", path)?;
        let result = if path == "-" {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            runtime.run(&mut input, out)
        } else {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(error) => {
                    return Err(io::Error::new(
                        error.kind(),
                        format!("Error opening {} for reading; {}", path, error),
                    ));
                }
            };
            runtime.run(&mut BufReader::new(file), out)
        };
        out.flush()?;
        match result {
            Ok(count) => debug!(path = path.as_str(), instructions = count, "finished input"),
            Err(error) => report(&error, err)?,
        }
    }
    Ok(())
}

fn report<E: Write>(error: &Error, err: &mut E) -> io::Result<()> {
    writeln!(err, "{}", Style::new().bold().paint(error.to_string()))?;
    writeln!(err, "Error")
}

mod formatter;
mod logging;

use anyhow::Result;
use calculate::{Calculator, Limits};
use clap::{value_parser, Parser};
use formatter::Formatter;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::debug;

#[derive(Parser)]
#[command(name = "calculate")]
#[command(about = "Sum, difference and product of two JSON numbers.")]
#[command(
    long_about = "Reads a JSON object with numeric fields `a` and `b` from the first argument and prints\n{\"sum\": .., \"difference\": .., \"product\": ..} on one line.\nInvalid input is reported as `Error: <message>`; the exit status stays 0."
)]
#[command(version)]
struct Cli {
    /// JSON object with numeric fields `a` and `b`; later arguments are ignored
    ///
    /// Examples:
    ///   '{"a": 3, "b": 4}'      - integer arithmetic
    ///   '{"a": 2.5, "b": 1.5}'  - float arithmetic
    #[arg(
        value_name = "JSON",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = value_parser!(OsString)
    )]
    args: Vec<OsString>,
    /// Reject input larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = Limits::default().max_input_bytes)]
    max_input_bytes: usize,
}

impl Cli {
    /// The first argument, as raw bytes since it need not be UTF-8
    fn input(&self) -> Option<&[u8]> {
        self.args.first().map(|arg| arg.as_encoded_bytes())
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let calculator = Calculator::with_limits(Limits {
        max_input_bytes: cli.max_input_bytes,
    });

    let input = cli.input();
    debug!(
        input = %input.map_or("<none>".into(), String::from_utf8_lossy),
        ignored = cli.args.len().saturating_sub(1),
        "received arguments"
    );

    let outcome = calculator.evaluate_slice(input);
    if let Some(err) = outcome.error() {
        debug!(error = ?err, "input rejected");
    }
    debug!(outcome = outcome.kind(), "evaluated");

    let line = Formatter::default().format_outcome(&outcome);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;

    Ok(())
}

//! # gridbot: interactive console
//!
//! Reads one command per line from stdin and runs it against a single
//! simulator session. The grid is redrawn after every move or turn.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use gridbot_gateway::{Command, Session, SimArgs};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridbot", about = "Interactive grid robot simulator")]
struct Args {
    /// Do not redraw the grid after moves and turns
    #[arg(long)]
    no_grid: bool,

    #[command(flatten)]
    sim: SimArgs,
}

fn main() -> Result<()> {
    // Warn by default so log lines do not interleave with the prompt.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.sim.config()?;
    let mut session = Session::new(config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut session, stdin.lock(), &mut stdout, !args.no_grid)?;

    info!("console closed");
    Ok(())
}

/// Drive `session` from `input` until `quit` or end of input.
fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    show_grid: bool,
) -> io::Result<()> {
    let start = session.simulator();
    writeln!(out, "Robot Grid Simulator")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(
        out,
        "Robot initialized at {} facing {}",
        start.position(),
        start.facing()
    )?;
    writeln!(out, "Type 'help' for available commands, 'quit' to exit")?;
    if show_grid {
        writeln!(out, "{}", start.render_grid())?;
    }

    let mut line = String::new();
    loop {
        write!(out, "Enter command: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed.to_lowercase().as_str(), "quit" | "exit") {
            break;
        }

        match trimmed.parse::<Command>() {
            Ok(command) => {
                let redraw = show_grid && command.is_motion();
                match session.execute(command) {
                    Ok(message) => writeln!(out, "{message}")?,
                    Err(e) => writeln!(out, "ERROR: {e}")?,
                }
                if redraw {
                    writeln!(out, "{}", session.simulator().render_grid())?;
                }
            }
            Err(e) => writeln!(out, "ERROR: {e}")?,
        }
        writeln!(out)?;
    }

    writeln!(out, "Shutting down robot simulator...")?;
    Ok(())
}

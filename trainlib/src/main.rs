use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trainlib::network::{Endpoint, Line};
use trainlib::summary::LineSummary;
use trainlib::{BuildError, LineError, parse_lines};

#[derive(Parser)]
#[command(name = "trainlib", about = "Inspect transit lines and apply closures")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the lines in a network file
    Show {
        /// Path to the JSON network file
        file: PathBuf,
        /// Only show this line
        #[arg(long)]
        line: Option<String>,
    },
    /// Close part or all of a line and show the result
    Close {
        /// Path to the JSON network file
        file: PathBuf,
        /// Line to close
        #[arg(long)]
        line: String,
        /// One end of the closure
        #[arg(long)]
        from: Option<String>,
        /// The other end of the closure
        #[arg(long)]
        to: Option<String>,
        /// Split the closure into two ranges meeting here
        #[arg(long)]
        via: Option<String>,
        /// Close every station on the line
        #[arg(long, conflicts_with_all = ["from", "to", "via"])]
        entire: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Line(#[from] LineError),

    #[error("no line named {0:?}")]
    NoSuchLine(String),

    #[error("failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "trainlib=debug" } else { "trainlib=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Show { file, line } => {
            let lines = parse_lines(file)?;
            info!(lines = lines.len(), "loaded network");
            let selected: Vec<&Line> = match line {
                Some(name) => vec![find_line(&lines, name)?],
                None => lines.iter().collect(),
            };
            print_lines(&selected, cli.json)
        }
        Command::Close {
            file,
            line,
            from,
            to,
            via,
            entire,
        } => {
            let mut lines = parse_lines(file)?;
            let idx = lines
                .iter()
                .position(|l| l.name() == line)
                .ok_or_else(|| CliError::NoSuchLine(line.clone()))?;
            let target = &mut lines[idx];

            let changed = if *entire {
                target.close_entire_line()
            } else {
                let from = Endpoint::from(from.as_deref());
                let to = Endpoint::from(to.as_deref());
                target.close_line_via(from, to, Endpoint::from(via.as_deref()))?
            };
            info!(line = %target.name(), closed = changed.len(), "applied closure");

            print_lines(&[&lines[idx]], cli.json)
        }
    }
}

fn find_line<'a>(lines: &'a [Line], name: &str) -> Result<&'a Line, CliError> {
    lines
        .iter()
        .find(|l| l.name() == name)
        .ok_or_else(|| CliError::NoSuchLine(name.to_string()))
}

fn print_lines(lines: &[&Line], json: bool) -> Result<(), CliError> {
    let summaries: Vec<LineSummary> = lines.iter().map(|l| LineSummary::new(l)).collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in &summaries {
            print!("{}", summary.to_text());
        }
    }
    Ok(())
}

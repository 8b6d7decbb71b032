use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt};

use longest_trip::Error;
use longest_trip::app::{Plan, emit, plan};
use longest_trip::output::{LineEnding, OutputFormat};
use longest_trip::planner::SearchConfig;

/// Find the longest one-way trip through a network of stations.
///
/// Input is a list of `start,end,length` triples. The trip is printed one
/// station id per line.
#[derive(Parser)]
#[command(name = "longest-trip", version)]
struct Cli {
    /// Connection list to read (stdin if omitted or `-`)
    input: Option<PathBuf>,

    /// Allow returning to the start over the connection used to leave it
    #[arg(long)]
    allow_retrace: bool,

    /// Sort neighbours by station id so ties resolve independently of input order
    #[arg(long)]
    sort_neighbours: bool,

    /// Line terminator for plain output
    #[arg(long, value_enum, default_value_t = LineEndingArg::Native)]
    line_ending: LineEndingArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Lines)]
    format: FormatArg,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum LineEndingArg {
    Native,
    Lf,
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Native => LineEnding::Native,
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Lines,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Lines => OutputFormat::Lines,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the trip
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = SearchConfig::new(cli.allow_retrace, cli.sort_neighbours);

    let plan = read_plan(cli.input.as_ref(), &config)?;

    let stdout = io::stdout().lock();
    emit(stdout, &plan, cli.format.into(), cli.line_ending.into())
}

fn read_plan(input: Option<&PathBuf>, config: &SearchConfig) -> Result<Plan, Error> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
            plan(BufReader::new(file), config)
        }
        _ => plan(io::stdin().lock(), config),
    }
}

//! Comparar CLI - tuned vs control latency comparison.
//!
//! Reads one newline-delimited integer sample file per scenario per
//! variant from `<data-dir>/tuned/` and `<data-dir>/control/`, prints the
//! per-scenario statistics report, then the overlaid distribution view.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

use comparar::error::Result;
use comparar::loader::{layout_present, DirSource};
use comparar::plot::render_distribution;
use comparar::report::{AnsiReporter, PlainReporter, Reporter};
use comparar::run_analysis;

/// Comparar - tuned vs control latency comparison
///
/// Compares latency samples from a tuned and a control process variant
/// across the fixed workload scenario set.
#[derive(Parser)]
#[command(name = "comparar")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Root directory containing tuned/ and control/ sample directories
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    data_dir: PathBuf,

    /// Disable ANSI styling in the report and plot
    #[arg(long)]
    no_color: bool,

    /// Skip the distribution plot
    #[arg(long)]
    no_plot: bool,

    /// Plot width in columns
    #[arg(long, default_value = "80", value_name = "COLS")]
    width: usize,

    /// Also write the per-scenario summaries as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<()> {
    if !layout_present(&cli.data_dir) {
        eprintln!(
            "warning: {} does not contain tuned/ and control/ directories",
            cli.data_dir.display()
        );
    }

    let source = DirSource::new(&cli.data_dir);
    let reporter: Box<dyn Reporter> = if cli.no_color {
        Box::new(PlainReporter)
    } else {
        Box::new(AnsiReporter)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = run_analysis(&source, reporter.as_ref(), &mut out)?;

    if !cli.no_plot {
        write!(
            out,
            "{}",
            render_distribution(&outcome.store, cli.width, !cli.no_color)
        )?;
    }

    if let Some(path) = &cli.json {
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(file, &outcome.reports)?;
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

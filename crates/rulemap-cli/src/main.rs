mod cmd;
mod output;
mod root;

use clap::Parser;
use std::path::PathBuf;

const EXIT_OK: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_BELOW_THRESHOLD: i32 = 2;
/// sysexits.h `EX_USAGE`
const EXIT_USAGE: i32 = 64;

#[derive(Parser)]
#[command(
    name = "rulemap",
    about = "Score a RULEMAP specification and gate on planning readiness",
    version,
    after_help = "Examples:\n  rulemap spec.md\n  rulemap 01-specifications/001-auth/spec.md\n\n\
                  Exit codes: 0 ready, 1 error, 2 below threshold, 64 usage error"
)]
struct Cli {
    /// Specification file to score
    file: PathBuf,

    /// Output as JSON
    #[arg(long, short = 'j')]
    json: bool,

    /// Scoring config (default: nearest .rulemap.yaml above the file)
    #[arg(long, env = "RULEMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Override the pass threshold (0-10)
    #[arg(long)]
    threshold: Option<f64>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too.
            let code = if e.use_stderr() { EXIT_USAGE } else { EXIT_OK };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Logs go to stderr so stdout stays a clean report.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = cmd::score::run(&cli.file, cli.config.as_deref(), cli.threshold, cli.json);

    let code = match result {
        Ok(true) => EXIT_OK,
        Ok(false) => EXIT_BELOW_THRESHOLD,
        Err(e) => {
            // Print the full error chain (anyhow's alternate Display)
            eprintln!("error: {e:#}");
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

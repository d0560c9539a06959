mod headless;
mod replay;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fieldmark", about = "PPGIS point-collection survey tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replays a recorded session script and writes exported GeoJSON files.
    Replay {
        /// Session script (JSON): form edits, clicks, deletes, exports.
        script: PathBuf,
        /// Directory receiving exported `.geojson` files.
        #[arg(long, default_value = "exports")]
        out_dir: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Replay { script, out_dir } => {
            let text = fs::read_to_string(&script).map_err(|e| format!("read {script:?}: {e}"))?;
            let parsed: replay::SessionScript =
                serde_json::from_str(&text).map_err(|e| format!("parse session script: {e}"))?;

            let summary = replay::run_session(&parsed, &out_dir)?;

            eprintln!(
                "replayed {} events: {} captured, {} rejected, {} deleted, {} export(s)",
                parsed.events.len(),
                summary.captured,
                summary.rejected,
                summary.deleted,
                summary.exports.len()
            );
            for path in &summary.exports {
                eprintln!("wrote {}", path.display());
            }
            Ok(())
        }
    }
}

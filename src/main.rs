use anyhow::Context;
use clap::{Parser, Subcommand};
use netmon_export::cli;
use netmon_export::config::DEFAULT_SHEET_NAME;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netmon-export")]
#[command(about = "Export network monitor readings to Excel with pass/fail highlighting.")]
#[command(long_about = "netmon-export - network monitor readings to Excel

Writes a reading log to networkmonitor.xlsx: bold column titles, frozen
header row and first two columns, PASS cells in green and FAIL cells in red.

COMMANDS:
  export   - Reading log (.yaml/.json) to networkmonitor.xlsx
  inspect  - Summarize an exported workbook

EXAMPLES:
  netmon-export export readings.yaml                 # Writes ./networkmonitor.xlsx
  netmon-export export readings.json -d /sdcard/nm   # Custom output directory
  netmon-export inspect networkmonitor.xlsx -v       # Show every row

Set RUST_LOG=netmon_export=debug for detailed logs.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Export a reading log to Excel.

The log lists column titles and one row per reading:

  columns: [time, network_type, google_connection_test]
  rows:
    - [\"2013-10-16 18:00\", WIFI, PASS]
    - [\"2013-10-16 18:05\", MOBILE, FAIL]

The workbook is always named networkmonitor.xlsx.")]
    /// Export a reading log to networkmonitor.xlsx
    Export {
        /// Path to reading log (.yaml, .yml or .json)
        input: PathBuf,

        /// Directory to write networkmonitor.xlsx into
        #[arg(short = 'd', long, default_value = ".", env = "NETMON_EXPORT_DIR")]
        output_dir: PathBuf,

        /// Worksheet title
        #[arg(long, default_value = DEFAULT_SHEET_NAME, env = "NETMON_SHEET_NAME")]
        sheet_name: String,

        /// Show verbose export steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Summarize an exported workbook
    Inspect {
        /// Path to Excel file (.xlsx)
        file: PathBuf,

        /// Print every row
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output_dir,
            sheet_name,
            verbose,
        } => {
            cli::init_logging(verbose);
            let context = format!("export of {} failed", input.display());
            cli::export(input, output_dir, sheet_name, verbose).context(context)
        }

        Commands::Inspect { file, verbose } => {
            cli::init_logging(verbose);
            let context = format!("could not inspect {}", file.display());
            cli::inspect(file, verbose).context(context)
        }
    }
}

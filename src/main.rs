use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use po_newlines::{FixError, FixOptions};

/// Fix msgid/msgstr leading and trailing newline mismatches in a PO file.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the PO file.
    #[arg(value_name = "PO_FILE", default_value = "strings.po")]
    po_file: PathBuf,

    /// Only report changes, do not modify the file.
    #[arg(long)]
    dry_run: bool,

    /// Do not create a .bak backup before saving.
    #[arg(long)]
    no_backup: bool,

    /// Log progress to stderr (-v for info, -vv for every changed string).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("po_newlines={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let options = FixOptions {
        dry_run: cli.dry_run,
        backup: !cli.no_backup,
    };

    let report = po_newlines::process_file(&cli.po_file, &options).map_err(|e| {
        match e {
            FixError::NotFound { .. } => eprintln!("error: {e}"),
            _ => eprintln!("error: {}: {e}", cli.po_file.display()),
        }
        ExitCode::from(1)
    })?;

    if cli.dry_run {
        println!("Would update {} translation string(s)", report.changed);
    } else {
        println!("Updated {} translation string(s)", report.changed);
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(code) => code,
    }
}

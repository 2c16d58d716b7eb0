//! Command-line interface for the dispatcher.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use console::style;

use crate::error::{DispatchError, Result};
use crate::registry::{create_dispatcher_with_sink, Dispatcher, Record, RecordSink};

/// Path argument that selects standard input.
const STDIN_PATH: &str = "-";

/// XML Dispatcher - Route XML payloads to the first matching handler.
#[derive(Parser)]
#[command(name = "xml-dispatcher")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dispatch XML payloads through the built-in handlers.
    Process {
        /// Payload files (default: stdin; `-` also reads stdin)
        files: Vec<PathBuf>,

        /// Print decoded records as JSON lines
        #[arg(long)]
        json: bool,
    },
}

/// Sink printing decoded records to stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    json: bool,
}

impl ConsoleSink {
    /// Create a sink printing human-readable lines, or JSON lines if `json`.
    #[must_use]
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl RecordSink for ConsoleSink {
    fn emit(&self, record: Record) {
        if self.json {
            match serde_json::to_string(&record) {
                Ok(line) => println!("{line}"),
                Err(err) => tracing::warn!(error = %err, "Failed to serialize record"),
            }
        } else {
            println!("{}", style(record).green());
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process { files, json } => process_command(&files, json),
    }
}

/// Execute the process command.
fn process_command(files: &[PathBuf], json: bool) -> Result<()> {
    let dispatcher = create_dispatcher_with_sink(Arc::new(ConsoleSink::new(json)));

    let stdin_only = [PathBuf::from(STDIN_PATH)];
    let inputs = if files.is_empty() { &stdin_only[..] } else { files };

    let mut failed = 0;
    for path in inputs {
        let label = input_label(path);
        if let Err(err) = process_input(&dispatcher, path) {
            failed += 1;
            eprintln!("{} {}: {}", style("Failed").red().bold(), label, err);
        }
    }

    if failed > 0 {
        return Err(DispatchError::PayloadsFailed {
            failed,
            total: inputs.len(),
        });
    }

    Ok(())
}

/// Read one payload and dispatch it.
fn process_input(dispatcher: &Dispatcher, path: &Path) -> Result<()> {
    let payload = read_payload(path)?;
    tracing::debug!(input = %input_label(path), bytes = payload.len(), "Dispatching payload");
    dispatcher.process(&payload)
}

/// Read a payload from a file, or from stdin for `-`.
fn read_payload(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new(STDIN_PATH) {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read(path)?)
}

fn input_label(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use keydump::io_utils::io_error;
use keydump::{
    generate, read_length, Alphabet, BatchObserver, Config, ConsoleProgress, FileSink,
    KeydumpError, SilentObserver, DEFAULT_BATCH_SIZE, DEFAULT_CHARSET,
};

#[derive(Parser, Debug)]
#[command(name = "keydump")]
#[command(about = "Enumerate a keyspace and stream SHA-256 digests of every candidate to disk")]
struct Args {
    /// Side file holding the candidate length as a single decimal line
    #[arg(long, default_value = "length.txt")]
    length_file: PathBuf,

    /// Output artifact
    #[arg(short, long, default_value = "sha256.txt")]
    output: PathBuf,

    /// Records per batch; bounds the in-memory buffer
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: u64,

    /// Candidate alphabet, in enumeration order
    #[arg(long, default_value = DEFAULT_CHARSET)]
    alphabet: String,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Print a machine readable summary on completion
    #[arg(long)]
    json: bool,
}

/// Completion summary for `--json`. Counts that can exceed u64 are
/// rendered as decimal strings.
#[derive(Serialize)]
struct RunSummary {
    length: u32,
    alphabet_size: usize,
    keyspace: String,
    records: String,
    batches: u64,
    output_bytes: u64,
    elapsed_ms: u64,
    output: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<(), KeydumpError> {
    let args = Args::parse();
    let start = Instant::now();

    let length = read_length(&args.length_file)?;
    let alphabet = Alphabet::new(&args.alphabet)?;
    let config = Config::new(alphabet, length, args.batch_size)?;

    if let Some(warning) = config.memory_warning() {
        eprintln!("warning: {warning}");
    }

    // The sink only appends; a previous artifact has to go first.
    if args.output.exists() {
        fs::remove_file(&args.output)
            .map_err(|e| io_error("removing existing output", &args.output, e))?;
    }
    let mut sink = FileSink::append(&args.output)?;

    eprintln!(
        "Enumerating {} candidates of length {}",
        config.keyspace(),
        config.length()
    );

    let mut observer: Box<dyn BatchObserver> = if args.no_progress {
        Box::new(SilentObserver)
    } else {
        Box::new(ConsoleProgress::new())
    };
    let stats = generate(&config, &mut sink, observer.as_mut())?;

    if args.json {
        let summary = RunSummary {
            length: config.length(),
            alphabet_size: config.alphabet().len(),
            keyspace: config.keyspace().to_string(),
            records: stats.records.to_string(),
            batches: stats.batches,
            output_bytes: stats.bytes_written,
            elapsed_ms: start.elapsed().as_millis() as u64,
            output: args.output.display().to_string(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).expect("summary serializes")
        );
    } else {
        stats.report();
    }
    Ok(())
}

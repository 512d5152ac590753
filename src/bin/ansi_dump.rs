//! ANSI Dump
//!
//! Reads terminal output from stdin or a file, decodes it and prints one
//! line per decoder event.

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use ansi_decoder::app::DecoderConfig;
use ansi_decoder::parser::{Decoder, Event, Recorder};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Parse command line arguments
    let mut chunk_size = 4096usize;
    let mut input_file: Option<PathBuf> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut output_format = OutputFormat::Text;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--chunk" => {
                i += 1;
                if i < args.len() {
                    chunk_size = args[i].parse().unwrap_or(4096).max(1);
                }
            },
            "-f" | "--file" => {
                i += 1;
                if i < args.len() {
                    input_file = Some(PathBuf::from(&args[i]));
                }
            },
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(PathBuf::from(&args[i]));
                }
            },
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            },
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            _ => {
                // Treat as input file if no flag
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(PathBuf::from(&args[i]));
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match &config_file {
        Some(path) => match DecoderConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            },
        },
        None => DecoderConfig::load_or_default(),
    };

    match run(input_file.as_deref(), config, chunk_size, output_format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(
    input_file: Option<&std::path::Path>,
    config: DecoderConfig,
    chunk_size: usize,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut input: Box<dyn Read> = match input_file {
        Some(path) => Box::new(std::fs::File::open(path)?),
        None => Box::new(io::stdin().lock()),
    };
    let mut out = BufWriter::new(io::stdout().lock());
    let mut decoder = Decoder::with_config(Recorder::new(), config);
    let mut buf = vec![0u8; chunk_size];

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        decoder.feed(&buf[..n]);
        print_events(&mut out, decoder.handler_mut().take(), format)?;
    }

    decoder.finish();
    print_events(&mut out, decoder.handler_mut().take(), format)?;
    out.flush()?;
    Ok(())
}

fn print_events(
    out: &mut impl Write,
    events: Vec<Event>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    for event in events {
        match format {
            OutputFormat::Text => writeln!(out, "{:?}", event)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&event)?)?,
        }
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn print_help() {
    println!("ANSI Dump");
    println!();
    println!("Usage: ansi-dump [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -n, --chunk <N>      Feed the decoder N bytes at a time (default: 4096)");
    println!("  -f, --file <PATH>    Read input from file");
    println!("  -c, --config <PATH>  Load decoder configuration (JSON)");
    println!("  -j, --json           Print events as JSON lines");
    println!("  -t, --text           Print events as text (default)");
    println!("  -h, --help           Show this help message");
    println!();
    println!("If no input file is specified, reads from stdin.");
    println!();
    println!("Examples:");
    println!("  printf 'Hello\\x1b[31mWorld\\x1b[0m' | ansi-dump");
    println!("  ansi-dump --json --chunk 1 capture.bin");
}

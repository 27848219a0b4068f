//! armor64 CLI
//!
//! Encode, decode, and validate armor64 text from the command line.

use anyhow::{Context, Result};
use armor64::{Decoder, Encoder};
use clap::{Args, Parser, Subcommand};
use log::debug;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "armor64")]
#[command(version)]
#[command(about = "Safe, strict, stable textual encoding of byte streams")]
#[command(after_help = "Use '-' or omit the argument to read from stdin.\n\
Newlines are not allowed in armor64 input; make sure piped text does not end with one (e.g. use `echo -n`).")]
struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode UTF-8 text, or raw bytes from stdin
    Encode {
        #[command(flatten)]
        source: Source,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Decode armor64 text to raw bytes
    Decode {
        #[command(flatten)]
        source: Source,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Check armor64 text, printing true or false
    Validate {
        #[command(flatten)]
        source: Source,
    },
}

/// Where the payload comes from: argument, file, or stdin
#[derive(Args, Debug)]
struct Source {
    /// Payload to process ('-' or omitted: read stdin)
    #[arg(conflicts_with = "input")]
    value: Option<String>,

    /// Read the payload from a file
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,
}

impl Source {
    fn open(&self) -> Result<Box<dyn Read>> {
        match (&self.value, &self.input) {
            (Some(value), _) if value != "-" => {
                debug!("reading payload from argument ({} bytes)", value.len());
                Ok(Box::new(io::Cursor::new(value.clone().into_bytes())))
            }
            (_, Some(path)) => {
                debug!("reading payload from {}", path.display());
                let file = fs::File::open(path).with_context(|| format!("Failed to read: {}", path.display()))?;
                Ok(Box::new(file))
            }
            _ => {
                debug!("reading payload from stdin");
                Ok(Box::new(io::stdin()))
            }
        }
    }

    fn read(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.open()?.read_to_end(&mut buffer).context("Failed to read input")?;
        Ok(buffer)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Encode { source, output } => {
            encode_command(&source, output)?;
        }
        Commands::Decode { source, output } => {
            decode_command(&source, output)?;
        }
        Commands::Validate { source } => {
            if !validate_command(&source)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn encode_command(source: &Source, output: Option<PathBuf>) -> Result<()> {
    let data = source.read()?;
    let encoder = Encoder::new();

    if let Some(output_path) = output {
        encoder
            .encode_to_file(&data, &output_path)
            .with_context(|| format!("Failed to write: {}", output_path.display()))?;
        debug!("encoded {} bytes to {}", data.len(), output_path.display());
    } else {
        let mut stdout = io::stdout().lock();
        encoder.encode_to_writer(&data, &mut stdout)?;
        writeln!(stdout)?;
        stdout.flush()?;
        debug!("encoded {} bytes", data.len());
    }

    Ok(())
}

fn decode_command(source: &Source, output: Option<PathBuf>) -> Result<()> {
    let text = source.read()?;
    let decoded = Decoder::new().decode(&text).context("Invalid armor64 input")?;

    if let Some(output_path) = output {
        fs::write(&output_path, &decoded)
            .with_context(|| format!("Failed to write: {}", output_path.display()))?;
        debug!("decoded {} bytes to {}", decoded.len(), output_path.display());
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&decoded)?;
        stdout.flush()?;
        debug!("decoded {} bytes", decoded.len());
    }

    Ok(())
}

fn validate_command(source: &Source) -> Result<bool> {
    let text = source.read()?;

    let valid = match Decoder::new().decode(&text) {
        Ok(_) => true,
        Err(e) => {
            debug!("rejected: {}", e);
            false
        }
    };

    println!("{}", valid);
    Ok(valid)
}

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geomark_core::{PacketError, decode_coordinates};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GEOMARK_BUILD_COMMIT"),
    " ",
    env!("GEOMARK_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "geomark")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for marker-anchored binary location packets (hex input).",
    long_about = None,
    after_help = "Examples:\n  geomark decode \"25 00 00 64 00 00 32\"\n  geomark decode 2500006400 0032 --json\n  cat packet.hex | geomark decode --pretty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a hex-encoded location packet into latitude/longitude.
    #[command(
        after_help = "Examples:\n  geomark decode \"25 00 00 64 00 00 32\"\n  geomark decode -i packet.hex --json\n  echo 2500006400 0032 | geomark decode"
    )]
    Decode {
        /// Hex digit pairs, spaces permitted anywhere (multiple arguments
        /// are joined). Reads stdin when neither HEX nor --input is given.
        hex: Vec<String>,

        /// Read the hex string from a file instead of arguments
        #[arg(short = 'i', long, conflicts_with = "hex")]
        input: Option<PathBuf>,

        /// Emit the position as JSON instead of plain text
        #[arg(long)]
        json: bool,

        /// Pretty-print the JSON output (implies --json)
        #[arg(long)]
        pretty: bool,

        /// Suppress the trailing source note on stderr
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            hex,
            input,
            json,
            pretty,
            quiet,
        } => cmd_decode(hex, input, json, pretty, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_decode(
    hex: Vec<String>,
    input: Option<PathBuf>,
    json: bool,
    pretty: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let (hex_str, source) = read_hex_input(hex, input)?;

    let position = decode_coordinates(&hex_str).map_err(packet_error)?;

    if json || pretty {
        let rendered = if pretty {
            serde_json::to_string_pretty(&position).context("JSON serialization failed")?
        } else {
            serde_json::to_string(&position).context("JSON serialization failed")?
        };
        println!("{rendered}");
    } else {
        println!("{} {}", position.lat, position.lon);
    }

    if !quiet {
        eprintln!("OK: decoded packet from {source}");
    }
    Ok(())
}

fn read_hex_input(hex: Vec<String>, input: Option<PathBuf>) -> Result<(String, String), CliError> {
    if let Some(path) = input {
        if !path.exists() {
            return Err(CliError::new(
                format!("input file not found: {}", path.display()),
                Some("pass a file containing hex digit pairs".to_string()),
            ));
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        return Ok((
            contents.split_whitespace().collect::<Vec<_>>().join(" "),
            path.display().to_string(),
        ));
    }

    if !hex.is_empty() {
        return Ok((hex.join(" "), "arguments".to_string()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read hex input from stdin")?;
    if buffer.trim().is_empty() {
        return Err(CliError::new(
            "no hex input",
            Some("pass HEX arguments, use -i/--input, or pipe hex via stdin".to_string()),
        ));
    }
    Ok((
        buffer.split_whitespace().collect::<Vec<_>>().join(" "),
        "stdin".to_string(),
    ))
}

fn packet_error(err: PacketError) -> CliError {
    let hint = match &err {
        PacketError::InvalidHex(_) => {
            Some("expected an even number of hex digits; spaces are allowed".to_string())
        }
        PacketError::MarkerNotFound => {
            Some("the packet must contain a 0x25 marker byte".to_string())
        }
        PacketError::Truncated { .. } => {
            Some("6 bytes must follow the first 0x25 marker".to_string())
        }
    };
    CliError::new(err.to_string(), hint)
}

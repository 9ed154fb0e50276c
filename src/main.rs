use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde_psdata::PsValue;

#[derive(Parser)]
#[command(name = "psdata")]
#[command(about = "Convert between PowerShell data literals and JSON", version)]
struct Cli {
    /// Source file
    #[arg(short, long)]
    input: PathBuf,

    /// Destination file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Conversion direction
    #[arg(short, long, value_enum)]
    mode: Mode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// PowerShell data text to pretty JSON
    Ps2json,
    /// JSON to PowerShell data text
    Json2ps,
}

fn convert(source: &str, mode: Mode) -> Result<String, Box<dyn std::error::Error>> {
    let text = match mode {
        Mode::Ps2json => {
            let value = serde_psdata::parse(source)?;
            serde_json::to_string_pretty(&value)?
        }
        Mode::Json2ps => {
            let value: PsValue = serde_json::from_str(source)?;
            serde_psdata::to_string_pretty(&value)?
        }
    };
    Ok(text)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.input)?;
    let mut result = convert(&source, cli.mode)?;
    result.push('\n');

    match cli.output {
        Some(path) => fs::write(path, result)?,
        None => io::stdout().lock().write_all(result.as_bytes())?,
    }

    Ok(())
}

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};
use lzscan::{decode, encode, EncodeOpts, ScanMode};

#[derive(Parser, Debug)]
#[command(name = "lzscan")]
#[command(about = "Compress raw 8-bit grayscale images with LZSS")]
#[command(version)]
#[command(group(ArgGroup::new("action").required(true).args(["compress", "decompress"])))]
struct Args {
    /// Compress the input
    #[arg(short = 'c')]
    compress: bool,

    /// Decompress the input
    #[arg(short = 'd')]
    decompress: bool,

    /// Use the adaptive 16x16 tile scan (compression only)
    #[arg(short = 'a')]
    adaptive: bool,

    /// Apply the delta model before encoding (compression only)
    #[arg(short = 'm')]
    model: bool,

    /// Input file
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Output file (parent directory is created if missing)
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// Image width in pixels (required with -c -a)
    #[arg(short = 'w', long = "width")]
    width: Option<u16>,

    /// Show size statistics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Funnel usage errors through the common error path so every failure
    // exits with code 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let input = fs::read(&args.input)?;

    let output = if args.compress {
        let width = match (args.adaptive, args.width) {
            (true, Some(w)) => w,
            (true, None) => return Err("-w is required with -c -a".into()),
            (false, _) => 0,
        };
        let opts = EncodeOpts {
            mode: if args.adaptive { ScanMode::Adaptive } else { ScanMode::Static },
            delta: args.model,
            width,
        };
        encode(&input, opts)?
    } else {
        decode(&input)?
    };

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&args.output, &output)?;

    if args.verbose {
        eprintln!("Input bytes:  {}", input.len());
        eprintln!("Output bytes: {}", output.len());
        if args.compress && !input.is_empty() {
            eprintln!(
                "Ratio:        {:.1}%",
                100.0 * output.len() as f64 / input.len() as f64
            );
        }
    }

    Ok(())
}

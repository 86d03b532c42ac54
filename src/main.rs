use anyhow::{Context, Result};
use chartopts::{runtime, DocumentKind, NormalizeOptions, OutputFormat};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chartopts")]
#[command(about = "Validate and normalize chart configuration JSON", long_about = None)]
struct Args {
    /// Input JSON file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Typed model the document is read into
    #[arg(long, value_enum, default_value_t = DocumentKind::Options)]
    kind: DocumentKind,

    /// Indent the normalized output
    #[arg(long)]
    pretty: bool,

    /// Only validate; print nothing on success
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read JSON from stdin")?;
            buffer
        }
    };

    let options = NormalizeOptions {
        kind: args.kind,
        format: if args.pretty { OutputFormat::Pretty } else { OutputFormat::Compact },
        check_only: args.check,
    };

    if let Some(output) = runtime::normalize(&input, &options)? {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", output).context("Failed to write to stdout")?;
        handle.flush().context("Failed to flush stdout")?;
    }

    Ok(())
}

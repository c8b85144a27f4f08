use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "jsonval-cli",
    about = "Parse JSON and print its canonical jsonval rendering",
    version
)]
struct Args {
    /// Emit trace-level diagnostics (copies, moves, parser steps) on stderr
    #[arg(long)]
    log: bool,

    /// Render `/` unescaped
    #[arg(long)]
    no_escape_solidus: bool,

    /// Maximum array/object nesting accepted by the parser
    #[arg(long, default_value_t = 128)]
    max_depth: usize,

    /// Re-parse the rendered text and fail unless it equals the input value
    #[arg(long)]
    verify: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_tracing(log: bool) {
    let filter = if log {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log);

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let options = jsonval::Options {
        escape_solidus: !args.no_escape_solidus,
        max_depth: args.max_depth,
    };

    let value = jsonval::decode_from_str(&buf, &options)?;
    debug!(kind = %value.kind(), "parsed input");
    let out = jsonval::encode_to_string(&value, &options);

    if args.verify {
        let back = jsonval::decode_from_str(&out, &options)
            .context("re-parsing the rendered text")?;
        if back != value {
            bail!("rendered text does not parse back to the same value");
        }
        debug!("round trip verified");
    }

    let mut stdout = stdout().lock();
    writeln!(stdout, "{out}")?;
    Ok(())
}

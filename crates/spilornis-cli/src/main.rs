use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

/// Presence of this variable silences all log output.
const NO_TRACE_VAR: &str = "SPILORNIS_NO_TRACE";

#[derive(Parser, Debug)]
#[command(name = "spilornis", about = "Split, join and canonicalize Tcl lists", version)]
struct Args {
    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a list into its elements, one per line
    Split {
        /// Print the elements as a JSON array of strings
        #[arg(long)]
        json: bool,

        /// Pretty-print the JSON array
        #[arg(long, requires = "json")]
        pretty: bool,

        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Join a JSON array of strings into a list
    Join {
        /// Do not guard a leading `#` on the first element
        #[arg(long)]
        no_quote_hash: bool,

        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Rewrite a list in canonical form
    Canonical {
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Print the library build descriptor
    Version,
}

fn init_logging(args: &Args) {
    use tracing_subscriber::EnvFilter;

    if std::env::var_os(NO_TRACE_VAR).is_some() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match args.verbose {
        0 if args.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(args.verbose >= 2)
        .init();
}

fn open_input(input: Option<&PathBuf>) -> Result<Box<dyn Read>> {
    match input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            Ok(Box::new(f))
        }
        None => Ok(Box::new(stdin())),
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    let mut buf = String::new();
    open_input(input)?.read_to_string(&mut buf)?;
    debug!(bytes = buf.len(), "read input");
    Ok(buf)
}

fn json_element(value: &serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => bail!("list elements must be strings, got {}", other),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    match &args.command {
        Command::Split {
            json,
            pretty,
            input,
        } => {
            let reader = open_input(input.as_ref())?;
            let list = spilornis::split_reader(reader, &spilornis::Options::default())?;
            debug!(elements = list.len(), "split input");
            if *json {
                let out = if *pretty {
                    serde_json::to_string_pretty(&list)?
                } else {
                    serde_json::to_string(&list)?
                };
                println!("{}", out);
            } else {
                let mut out = stdout().lock();
                for element in list.to_strings_lossy() {
                    writeln!(out, "{}", element)?;
                }
            }
        }
        Command::Join {
            no_quote_hash,
            input,
        } => {
            let buf = read_input(input.as_ref())?;
            let value: serde_json::Value = serde_json::from_str(&buf)?;
            let Some(items) = value.as_array() else {
                bail!("expected a JSON array of strings");
            };
            let elements = items
                .iter()
                .map(json_element)
                .collect::<Result<Vec<String>>>()?;
            let options = spilornis::Options {
                quote_hash: !no_quote_hash,
                ..spilornis::Options::default()
            };
            let mut out = stdout().lock();
            spilornis::join_to_writer(&mut out, &elements, &options)?;
            writeln!(out)?;
        }
        Command::Canonical { input } => {
            let buf = read_input(input.as_ref())?;
            let units: Vec<u16> = buf.encode_utf16().collect();
            let canonical = spilornis::canonicalize(&units)?;
            println!("{}", String::from_utf16(&canonical)?);
        }
        Command::Version => {
            println!("{}", spilornis::version());
        }
    }

    Ok(())
}

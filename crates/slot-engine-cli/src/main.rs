//! `slots` CLI — free slots, suggestions, business days and answers from the command line.
//!
//! Every subcommand reads a JSON request body and writes the response body,
//! exactly as the scheduling endpoints would.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots between 9h and 12h (stdin → stdout)
//! echo '{"value":[{"start":"2025-02-21T10:00:00Z","end":"2025-02-21T11:00:00Z"}],"startHour":9,"endHour":12}' | slots free
//!
//! # Override the hours of a stored request
//! slots free -i busy.json --start-hour 7 --end-hour 18
//!
//! # First three free slots
//! slots suggest -i free.json
//!
//! # Work window on the next business day
//! slots next-business-day --datetime 2025-02-21T10:00:00
//!
//! # French sentence for suggested slots
//! slots answer -i suggested.json
//!
//! # Free → suggest → answer in one go
//! slots plan -i busy.json
//! ```
//!
//! Rejected requests print `{"message": "..."}` on stdout and exit with status 2.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use slot_engine::api::{self, ErrorResponse};
use slot_engine::{SlotConfig, SlotError};
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

/// Exit status for requests the engine rejected.
const EXIT_REJECTED: i32 = 2;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Find free time slots and phrase them for scheduling assistants"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file (suggestion limit, business hours, default work hours)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute free slots from occupied slots (`value`, `startHour`, `endHour`)
    Free {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Work-window start hour, replacing `startHour` in the request
        #[arg(long)]
        start_hour: Option<u32>,
        /// Work-window end hour, replacing `endHour` in the request
        #[arg(long)]
        end_hour: Option<u32>,
    },
    /// Keep the first free slots as suggestions (`free_slots`)
    Suggest {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Number of suggestions, replacing the configured limit
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Work window on the business day after a date (`requested_datetime`)
    NextBusinessDay {
        /// Input file (reads from stdin if omitted and --datetime is not given)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Reference datetime without timezone, e.g. 2025-02-21T10:00:00
        #[arg(long, conflicts_with = "input")]
        datetime: Option<String>,
    },
    /// Phrase suggested slots as a French sentence (`suggested_slots`)
    Answer {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Run free → suggest → answer on a free-slot request
    Plan {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Work-window start hour, replacing `startHour` in the request
        #[arg(long)]
        start_hour: Option<u32>,
        /// Work-window end hour, replacing `endHour` in the request
        #[arg(long)]
        end_hour: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match run(cli.command, config) {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<SlotError>() {
            Some(rejection) => {
                println!("{}", serde_json::to_string(&ErrorResponse::from(rejection))?);
                process::exit(EXIT_REJECTED);
            }
            None => Err(err),
        },
    }
}

fn run(command: Commands, mut config: SlotConfig) -> Result<()> {
    match command {
        Commands::Free {
            input,
            output,
            start_hour,
            end_hour,
        } => {
            let mut body = read_body(input.as_deref())?;
            override_hours(&mut body, start_hour, end_hour);
            let response = api::compute_free_slots(&body, &config)?;
            write_output(output.as_deref(), &to_json(&response)?)?;
        }
        Commands::Suggest {
            input,
            output,
            limit,
        } => {
            if let Some(limit) = limit {
                config.suggestion_limit = limit;
                config.validate()?;
            }
            let body = read_body(input.as_deref())?;
            let response = api::suggest_slots(&body, &config)?;
            write_output(output.as_deref(), &to_json(&response)?)?;
        }
        Commands::NextBusinessDay {
            input,
            output,
            datetime,
        } => {
            let body = match datetime {
                Some(datetime) => serde_json::json!({ "requested_datetime": datetime }),
                None => read_body(input.as_deref())?,
            };
            let response = api::advance_to_next_business_day(&body, &config)?;
            write_output(output.as_deref(), &to_json(&response)?)?;
        }
        Commands::Answer { input, output } => {
            let body = read_body(input.as_deref())?;
            let sentence = api::format_answer(&body, &config)?;
            write_output(output.as_deref(), &sentence)?;
        }
        Commands::Plan {
            input,
            output,
            start_hour,
            end_hour,
        } => {
            let mut body = read_body(input.as_deref())?;
            override_hours(&mut body, start_hour, end_hour);
            let sentence = api::plan(&body, &config)?;
            write_output(output.as_deref(), &sentence)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout only ever carries the response body.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&str>) -> Result<SlotConfig> {
    let Some(path) = path else {
        return Ok(SlotConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    let config = SlotConfig::from_json_str(&text)
        .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path, e))?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

/// Replace `startHour`/`endHour` in an object body. Non-object bodies are left
/// alone for the engine to reject.
fn override_hours(body: &mut Value, start_hour: Option<u32>, end_hour: Option<u32>) {
    let Some(fields) = body.as_object_mut() else {
        return;
    };
    if let Some(hour) = start_hour {
        fields.insert("startHour".to_string(), Value::from(hour));
    }
    if let Some(hour) = end_hour {
        fields.insert("endHour".to_string(), Value::from(hour));
    }
}

fn read_body(path: Option<&str>) -> Result<Value> {
    let text = read_input(path)?;
    Ok(api::parse_body(&text)?)
}

fn to_json<T: Serialize>(response: &T) -> Result<String> {
    serde_json::to_string(response).context("Failed to serialize response")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

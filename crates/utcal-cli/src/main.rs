use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use utcal_core::{BrokenDownTime, from_epoch_seconds, to_epoch_seconds, weekday_name};

#[derive(Parser)]
#[command(name = "utcal", about = "UTC calendar clock and epoch-seconds conversion")]
struct Cli {
    /// Enable per-conversion trace output on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current UTC date and time
    Now {
        /// Emit JSON instead of the plain format
        #[arg(long)]
        json: bool,
    },

    /// Decode an epoch-seconds value into a calendar date
    Decode {
        /// Seconds since 1970-01-01T00:00:00Z
        #[arg(allow_negative_numbers = true)]
        seconds: i64,

        /// Emit JSON instead of the plain format
        #[arg(long)]
        json: bool,
    },

    /// Encode a calendar date and time into epoch seconds
    Encode {
        /// Date as YYYY-MM-DD (one-based month)
        date: String,

        /// Time as HH:MM:SS
        time: String,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Now { json } => cmd_now(*json),
        Commands::Decode { seconds, json } => cmd_decode(*seconds, *json),
        Commands::Encode { date, time } => cmd_encode(date, time),
    }
}

/// Clock source: the process wall clock as raw epoch seconds.
fn now_epoch_seconds() -> Result<i64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("unable to get current time")?;
    i64::try_from(elapsed.as_secs()).context("current time out of range")
}

fn cmd_now(json: bool) -> Result<()> {
    let secs = now_epoch_seconds()?;
    print_decoded(secs, json)
}

fn cmd_decode(secs: i64, json: bool) -> Result<()> {
    print_decoded(secs, json)
}

fn print_decoded(secs: i64, json: bool) -> Result<()> {
    let t = from_epoch_seconds(secs).with_context(|| format!("cannot decode {secs}"))?;

    if json {
        let mut value = serde_json::to_value(t)?;
        value["epoch"] = serde_json::Value::from(secs);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{t}");
    }
    Ok(())
}

fn cmd_encode(date: &str, time: &str) -> Result<()> {
    let t = parse_datetime(date, time)?;
    println!("{} ({})", to_epoch_seconds(&t), weekday_name(t.day_of_week()));
    Ok(())
}

fn parse_datetime(date: &str, time: &str) -> Result<BrokenDownTime> {
    let (year, month, day) = parse_triplet(date, '-').context("date must be YYYY-MM-DD")?;
    let (hour, minute, second) = parse_triplet(time, ':').context("time must be HH:MM:SS")?;

    // One-based month on the command line, zero-based in the core
    if !(1..=12).contains(&month) {
        bail!("invalid month: {month}");
    }
    let t = BrokenDownTime::new(
        i32::try_from(year).with_context(|| format!("invalid year: {year}"))?,
        (month - 1) as u8,
        u8::try_from(day).with_context(|| format!("invalid day: {day}"))?,
        u8::try_from(hour).with_context(|| format!("invalid hour: {hour}"))?,
        u8::try_from(minute).with_context(|| format!("invalid minute: {minute}"))?,
        u8::try_from(second).with_context(|| format!("invalid second: {second}"))?,
    )?;
    Ok(t)
}

fn parse_triplet(s: &str, sep: char) -> Option<(i64, i64, i64)> {
    let mut parts = s.split(sep);
    let a = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    let c = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b, c))
}

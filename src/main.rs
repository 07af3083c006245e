mod debug_report;

use std::io::{self, IsTerminal, Read};

use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use clap::Parser;
use tourparse::{Context, Converter, ConverterConfig, Variant};

const DEFAULT_REFERENCE: &str = "2024-01-10T09:00:00";

#[derive(Parser)]
#[command(author, version, about = "Convert a scheduling phrase to a date/time range.", long_about = None)]
struct Cli {
    /// Phrase to convert. Read from stdin when omitted.
    input: Vec<String>,

    /// Message timestamp as local wall-clock time in --timezone (YYYY-MM-DDTHH:MM:SS).
    #[arg(long, default_value = DEFAULT_REFERENCE, value_parser = parse_reference)]
    reference: NaiveDateTime,

    /// IANA timezone of the community.
    #[arg(long, default_value = "US/Eastern")]
    timezone: String,

    /// Anchor for relative phrases (YYYY-MM-DDTHH:MM:SS); defaults to the message day.
    #[arg(long, value_parser = parse_reference)]
    context_date: Option<NaiveDateTime>,

    #[arg(long, value_enum, default_value_t = CliVariant::Appointment)]
    variant: CliVariant,

    /// Hours below this are read as afternoon.
    #[arg(long, default_value_t = 9)]
    threshold: u32,

    /// Require urgency keywords and month mentions to be the whole phrase.
    #[arg(long)]
    exact: bool,

    /// Feed the phrase to the rules as typed.
    #[arg(long)]
    no_clean: bool,

    /// Force ANSI color output.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CliVariant {
    Appointment,
    MoveIn,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let cli = Cli::parse();

    let input = if cli.input.is_empty() {
        match read_stdin_input() {
            Ok(input) => input,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    } else {
        cli.input.join(" ")
    };
    if input.trim().is_empty() {
        eprintln!("error: no input provided");
        std::process::exit(2);
    }

    let timezone: Tz = cli.timezone.parse().unwrap_or(Tz::US__Eastern);
    let Some(sent) = timezone.from_local_datetime(&cli.reference).earliest() else {
        eprintln!("error: --reference {} does not exist in {}", cli.reference, timezone.name());
        std::process::exit(2);
    };

    let mut context = Context::new(sent, cli.timezone.clone());
    if let Some(context_date) = cli.context_date {
        context = context.with_context_date(context_date);
    }

    let variant = match cli.variant {
        CliVariant::Appointment => Variant::Appointment,
        CliVariant::MoveIn => Variant::MoveIn,
    };
    let config =
        ConverterConfig::default().with_am_pm_threshold(cli.threshold).with_exact_match(cli.exact).with_clean(!cli.no_clean);
    let converter = Converter::new(variant, config);

    let color = if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        io::stdout().is_terminal()
    };

    let run = converter.run(input.trim(), &context);
    debug_report::print_run(input.trim(), &run, color);
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("invalid timestamp '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

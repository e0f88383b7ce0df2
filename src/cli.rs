//! CLI definitions and entry point

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::commands::{self, Context};
use markflow::config::Config;
use markflow::core::models::{DeadlineStatus, FilingBasis};
use markflow::core::ports::{SystemClock, evaluation_date};
use markflow::output::OutputMode;
use markflow::parser::{parse_date, parse_filing_basis, parse_status};

/// markflow - Trademark deadline docketing
#[derive(Parser, Debug)]
#[command(
    name = "markflow",
    version,
    about = "Trademark deadline docketing",
    long_about = "Compute trademark prosecution and maintenance deadlines.\n\n\
                  Due dates follow the statutory response periods and are rolled\n\
                  forward past weekends and US federal holidays."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Evaluate as of this date instead of today (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,

    /// Config file (defaults to $MARKFLOW_CONFIG or ~/.markflow/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// markflow subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Office action response deadline
    OfficeAction {
        /// Date the office action was issued (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        issued: NaiveDate,

        /// Filing basis: 1(a), 1(b), 44(d), 44(e), 66(a)
        #[arg(long, value_parser = parse_filing_basis)]
        basis: FilingBasis,

        /// An extension of time has been filed
        #[arg(long)]
        extension_filed: bool,
    },

    /// Section 8 & 15 and Section 9 maintenance deadlines
    Maintenance {
        /// Registration date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        registered: NaiveDate,
    },

    /// Statement of use deadline for an intent-to-use application
    StatementOfUse {
        /// Notice of Allowance date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        noa: NaiveDate,

        /// Six-month extensions already filed (0-5)
        #[arg(long, default_value_t = 0)]
        extensions: u32,
    },

    /// Close of the opposition period
    Opposition {
        /// Publication date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        published: NaiveDate,

        /// Extension days granted
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        extension_days: i64,
    },

    /// Classify days remaining into an urgency level
    Urgency {
        /// Days remaining (negative when overdue)
        #[arg(long, allow_negative_numbers = true)]
        days: i64,

        /// Deadline status: open, completed
        #[arg(long, default_value = "open", value_parser = parse_status)]
        status: DeadlineStatus,
    },

    /// List observed federal holidays
    Holidays {
        /// Calendar year (defaults to the evaluation year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Check whether a date is a business day
    BusinessDay {
        /// Date to check (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },

    /// Look up a registry status code
    Status {
        /// Numeric status code
        code: u16,
    },

    /// Show every deadline for the matters in a docket file
    Docket {
        /// Only this matter
        matter: Option<String>,

        /// Docket file (defaults to config, then ./docket.toml)
        #[arg(long)]
        docket: Option<PathBuf>,
    },

    /// Dashboard counts and deadlines due within 30 days
    Summary {
        /// Docket file (defaults to config, then ./docket.toml)
        #[arg(long)]
        docket: Option<PathBuf>,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path);
    let as_of = evaluation_date(cli.as_of, &SystemClock);
    log::debug!("evaluating as of {as_of}");

    let ctx = Context { mode, as_of, config };

    match cli.command {
        Some(Command::OfficeAction {
            issued,
            basis,
            extension_filed,
        }) => commands::office_action(&ctx, issued, basis, extension_filed),
        Some(Command::Maintenance { registered }) => commands::maintenance(&ctx, registered),
        Some(Command::StatementOfUse { noa, extensions }) => {
            commands::statement_of_use(&ctx, noa, extensions)
        },
        Some(Command::Opposition {
            published,
            extension_days,
        }) => commands::opposition(&ctx, published, extension_days),
        Some(Command::Urgency { days, status }) => commands::urgency(&ctx, days, status),
        Some(Command::Holidays { year }) => commands::holidays(&ctx, year),
        Some(Command::BusinessDay { date }) => commands::business_day(&ctx, date),
        Some(Command::Status { code }) => commands::status(&ctx, code),
        Some(Command::Docket { matter, docket }) => {
            commands::docket(&ctx, docket.as_deref(), matter.as_deref())
        },
        Some(Command::Summary { docket }) => commands::summary(&ctx, docket.as_deref()),
        Some(Command::Init { force }) => commands::init(&ctx, &config_path, force),
        Some(Command::Version) => commands::version(&ctx),
        None => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": markflow::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("markflow v{}", markflow::VERSION);
                println!("\nRun 'markflow --help' for usage");
            }
            Ok(())
        },
    }
}

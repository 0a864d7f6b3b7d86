//! signdrill CLI — practice signs, record reviews, and check what is due.

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "signdrill", version, about = "Sign-language practice tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record the outcome of practicing a sign
    #[command(group(ArgGroup::new("outcome").required(true).args(["pass", "fail"])))]
    Review {
        /// Sign that was practiced (e.g. "Stop")
        #[arg(long)]
        sign: String,

        /// The sign was performed correctly
        #[arg(long)]
        pass: bool,

        /// The sign was missed
        #[arg(long)]
        fail: bool,

        /// Review date as yyyy-mm-dd (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show signs due for review
    Due {
        /// Date to check as yyyy-mm-dd (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show progress for every sign in the vocabulary
    Stats {
        /// Date to evaluate due signs on (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Classify recorded landmark frames against a target sign
    Recognize {
        /// Target sign (e.g. "I Love You")
        #[arg(long)]
        sign: String,

        /// JSON frame file, or JSON Lines with one frame per line
        #[arg(long)]
        frames: PathBuf,

        /// Consecutive matching frames required (default: from config)
        #[arg(long)]
        stable_frames: Option<usize>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the signs the recognizer supports
    Signs,

    /// Create a starter config
    Init,
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("signdrill=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Review {
            sign,
            pass,
            fail: _,
            date,
            config,
        } => commands::review::execute(sign, pass, date, config),
        Commands::Due { date, config } => commands::due::execute(date, config),
        Commands::Stats {
            date,
            format,
            config,
        } => commands::stats::execute(date, format, config),
        Commands::Recognize {
            sign,
            frames,
            stable_frames,
            format,
            config,
        } => commands::recognize::execute(sign, frames, stable_frames, format, config),
        Commands::Signs => commands::signs::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

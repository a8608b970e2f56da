//! CLI argument definitions for the schools directory toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use schooldir_model::Currency;

#[derive(Parser)]
#[command(
    name = "schooldir",
    version,
    about = "Schools Directory - normalize and compare school records",
    long_about = "Work with international-school directory data.\n\n\
                  Renders display-safe school profiles from messy source records,\n\
                  compares schools side by side, and manages the persisted shortlist\n\
                  and its share links."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render one school's display-ready profile.
    Profile(ProfileArgs),

    /// Compare schools side by side.
    Compare(CompareArgs),

    /// Inspect or modify the persisted shortlist.
    Shortlist(ShortlistArgs),

    /// List and advance the editorial draft queue.
    Drafts(DraftsArgs),
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Path to the JSON file of school records.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Identifier of the school to render.
    #[arg(long = "school", value_name = "ID")]
    pub school: String,

    /// Display currency for the converted tuition range.
    #[arg(long = "currency", value_enum, default_value = "usd")]
    pub currency: CurrencyArg,

    /// School ids whose fees are editorially suppressed.
    #[arg(long = "unpublished", value_name = "IDS", value_delimiter = ',')]
    pub unpublished: Vec<String>,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Path to the JSON file of school records.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Comma-separated school ids to compare.
    #[arg(long = "schools", value_name = "IDS", value_delimiter = ',')]
    pub schools: Vec<String>,

    /// Compare the snapshot encoded in a share-link query string
    /// (e.g. "schools=bsj,jis"); ignores the persisted shortlist.
    #[arg(long = "from-link", value_name = "QUERY", conflicts_with = "schools")]
    pub from_link: Option<String>,

    /// Fall back to this persisted shortlist when no ids are given.
    #[arg(long = "store", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Display currency for the converted tuition range.
    #[arg(long = "currency", value_enum, default_value = "usd")]
    pub currency: CurrencyArg,

    /// School ids whose fees are editorially suppressed.
    #[arg(long = "unpublished", value_name = "IDS", value_delimiter = ',')]
    pub unpublished: Vec<String>,
}

#[derive(Parser)]
pub struct ShortlistArgs {
    #[command(subcommand)]
    pub action: ShortlistAction,

    /// Path of the persisted shortlist slot.
    #[arg(
        long = "store",
        value_name = "PATH",
        default_value = "shortlist.json",
        global = true
    )]
    pub store: PathBuf,
}

#[derive(Subcommand)]
pub enum ShortlistAction {
    /// Add a school to the shortlist (no-op if present).
    Add {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Remove a school from the shortlist (no-op if absent).
    Remove {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Toggle a school's shortlist membership.
    Toggle {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Print the current shortlist.
    List,

    /// Print the share-link query parameter for the current shortlist.
    Link,

    /// Merge a share-link query string into the shortlist (one-shot).
    Merge {
        #[arg(value_name = "QUERY")]
        query: String,
    },
}

#[derive(Parser)]
pub struct DraftsArgs {
    /// Path to the JSON file of editorial drafts.
    #[arg(value_name = "DRAFTS_FILE")]
    pub drafts_file: PathBuf,

    /// Only list drafts with this status.
    #[arg(long = "status", value_enum)]
    pub status: Option<DraftStatusArg>,

    /// Advance the draft with this slug one pipeline stage and save.
    #[arg(long = "advance", value_name = "SLUG")]
    pub advance: Option<String>,
}

/// CLI currency choices. Only currencies with a conversion rate (or no
/// conversion at all, for the base currency) are offered, so the rendered
/// range always matches the requested symbol.
#[derive(Clone, Copy, ValueEnum)]
pub enum CurrencyArg {
    Usd,
    Idr,
}

impl CurrencyArg {
    pub fn to_currency(self) -> Currency {
        match self {
            CurrencyArg::Usd => Currency::Usd,
            CurrencyArg::Idr => Currency::Idr,
        }
    }
}

/// CLI draft status choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DraftStatusArg {
    Pending,
    Approved,
    Published,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

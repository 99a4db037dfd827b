use crate::core::aggregate::{Aggregation, Dimension};
use crate::core::backup::Compression;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::criteria::FilterCriteria;
use crate::utils::date::normalize;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::num::NonZeroUsize;

/// Command-line interface definition for bitacora
/// CLI application to browse and analyse an IT support incident log
#[derive(Parser)]
#[command(
    name = "bitacora",
    version = env!("CARGO_PKG_VERSION"),
    about = "IT support incident log: filter, analyse, report and export downtime entries",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (CSV or JSON)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override the operation log database path
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter selection shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only entries of this date (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long = "date")]
    pub date: Option<String>,

    /// Only entries of these weeks (repeatable or comma separated)
    #[arg(long = "week", value_delimiter = ',')]
    pub weeks: Vec<String>,

    /// Only entries of these areas
    #[arg(long = "area")]
    pub areas: Vec<String>,

    /// Only entries of these classes
    #[arg(long = "class")]
    pub classes: Vec<String>,

    /// Without filters, show every entry instead of the most recent ones
    #[arg(long = "all")]
    pub all: bool,

    /// Size of the most-recent window (default from config)
    #[arg(long = "limit")]
    pub limit: Option<NonZeroUsize>,
}

impl FilterArgs {
    /// Window size: `--limit` when given, else the configured one.
    pub fn window(&self, configured: usize) -> usize {
        self.limit.map_or(configured, NonZeroUsize::get)
    }

    /// Criteria for the view; a date that cannot be read is an error.
    pub fn criteria(&self) -> AppResult<FilterCriteria> {
        let date = match self.date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                let canonical = normalize(raw);
                if canonical.is_empty() {
                    return Err(AppError::InvalidDate(raw.to_string()));
                }
                canonical
            }
            _ => String::new(),
        };

        Ok(FilterCriteria::new()
            .with_date(date)
            .with_weeks(&self.weeks)
            .with_areas(self.areas.iter().map(|a| a.trim().to_string()))
            .with_classes(self.classes.iter().map(|c| c.trim().to_string()))
            .with_show_all(self.all))
    }
}

/// Series printed by `trend`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TrendKind {
    /// Total downtime per ISO week
    DowntimeWeek,
    /// IT downtime per month
    DowntimeMonth,
    /// Number of incidents per month
    FrequencyMonth,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the data file and the operation log
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List entries: filtered, all, or the most recent ones
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the weeks, months, years, areas and classes present in the data
    Meta {
        #[arg(long = "json", help = "Print as JSON")]
        json: bool,
    },

    /// Print the ISO week (and week-based year) of a date
    Week {
        /// Date (YYYY-MM-DD, MM/DD/YYYY, RFC 3339, ...)
        date: String,
    },

    /// Compute the total downtime from wait and solution times
    Total {
        /// Wait time in minutes
        #[arg(allow_hyphen_values = true)]
        wait: String,
        /// Solution time in minutes
        #[arg(allow_hyphen_values = true)]
        solve: String,
    },

    /// Append a new incident to the data file
    Add {
        #[arg(long = "date", help = "Date (YYYY-MM-DD, DD/MM/YYYY or MM/DD/YYYY)")]
        date: Option<String>,

        #[arg(long = "shift", help = "Shift")]
        shift: Option<String>,

        #[arg(long = "area", help = "Area")]
        area: Option<String>,

        #[arg(long = "class", help = "Class (failure type)")]
        class: Option<String>,

        #[arg(long = "description", help = "Problem description / solution")]
        description: Option<String>,

        #[arg(long = "operator", help = "Operator / users")]
        operator: Option<String>,

        #[arg(long = "originator", help = "Originator")]
        originator: Option<String>,

        #[arg(long = "wait", help = "Wait time in minutes", allow_hyphen_values = true)]
        wait: Option<String>,

        #[arg(long = "solve", help = "Solution time in minutes", allow_hyphen_values = true)]
        solve: Option<String>,

        #[arg(long = "it-downtime", help = "IT downtime in minutes")]
        it_downtime: Option<String>,
    },

    /// Delete entries by index (as shown by `list`)
    Del {
        #[arg(required = true, value_delimiter = ',')]
        indices: Vec<usize>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Rank areas, classes or events by downtime
    Top {
        #[arg(long = "by", value_enum, default_value_t = Dimension::Area)]
        by: Dimension,

        #[arg(long = "week", value_delimiter = ',', help = "Restrict to these weeks")]
        weeks: Vec<u32>,

        #[arg(short = 'n', help = "Number of groups (default from config)")]
        n: Option<usize>,

        #[arg(long = "agg", value_enum, default_value_t = Aggregation::Sum)]
        agg: Aggregation,
    },

    /// Print a downtime or frequency series
    Trend {
        #[arg(long = "kind", value_enum, default_value_t = TrendKind::DowntimeWeek)]
        kind: TrendKind,

        #[arg(long = "week", value_delimiter = ',', help = "Restrict to these weeks")]
        weeks: Vec<u32>,

        #[arg(long = "month", value_delimiter = ',', help = "Restrict to these months (YYYY-MM)")]
        months: Vec<String>,
    },

    /// Export the listed entries to csv, json, xlsx or pdf
    Export {
        #[arg(long = "format", value_enum, help = "Output format (default: from the file extension)")]
        format: Option<ExportFormat>,

        #[arg(long = "file", help = "Absolute output path")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long = "force", help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Generate the PDF support report
    Report {
        #[arg(long = "file", help = "Absolute output path of the PDF")]
        file: String,

        #[arg(long = "week", value_delimiter = ',')]
        weeks: Vec<u32>,

        #[arg(long = "year", value_delimiter = ',')]
        years: Vec<i32>,

        #[arg(long = "month", value_delimiter = ',', help = "Months as YYYY-MM")]
        months: Vec<String>,

        #[arg(long = "force", help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Back up the data file
    Backup {
        #[arg(long = "file", help = "Destination file")]
        file: String,

        #[arg(long = "compress", value_enum, help = "Compress the backup (zip or tgz)")]
        compress: Option<Compression>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

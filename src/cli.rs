use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "payroll-merge")]
#[command(about = "Merge POS timekeeping hours into a payroll spreadsheet template", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging (per-row updates)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge a POS CSV into the payroll template
    Merge {
        /// POS timekeeping export (CSV)
        #[arg(short, long, required = true)]
        csv: PathBuf,

        /// Payroll template workbook (.xlsx)
        #[arg(short, long, required = true)]
        template: PathBuf,

        /// "Week 1" or "Week 2" (prompted when omitted and no default is set)
        #[arg(short, long)]
        week: Option<String>,

        /// Output file (default: <output dir>/<template>_processed.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output directory (default: configured dir or Downloads)
        #[arg(long, conflicts_with = "output")]
        output_dir: Option<PathBuf>,

        /// Suffix appended to the template name
        #[arg(long, conflicts_with = "output")]
        suffix: Option<String>,
    },

    /// Show the cleaned rows a POS CSV would contribute
    Load {
        /// POS timekeeping export (CSV)
        #[arg(required = true)]
        csv: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or edit settings
    Config {
        /// Default output directory
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// Default week ("Week 1" / "Week 2")
        #[arg(long)]
        set_default_week: Option<String>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}

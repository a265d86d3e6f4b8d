use clap::{Parser, Subcommand};

use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
use crate::dependency_management::domain::{DependencyType, SortKey};
use crate::ports::outbound::DependencyFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'table' or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    ///
    /// Table output is colored only when it goes to a terminal.
    pub fn create_formatter(&self, colored: bool) -> Box<dyn DependencyFormatter> {
        match self {
            OutputFormat::Table if colored => Box::new(TableFormatter::new()),
            OutputFormat::Table => Box::new(TableFormatter::without_color()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Manage the dependencies of an npm project
#[derive(Parser, Debug)]
#[command(name = "depdesk")]
#[command(version)]
#[command(about = "List, check, add and remove the dependencies of an npm project", long_about = None)]
pub struct Args {
    /// Path to the project directory containing package.json (defaults to current directory)
    #[arg(short, long, global = true)]
    pub path: Option<String>,

    /// Path to a config file (defaults to depdesk.config.yml in the project directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<String>,

    /// Seconds to wait for each npm request before giving up
    #[arg(long, global = true, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Command to run instead of `npm`
    #[arg(long, global = true, value_name = "CMD")]
    pub npm_command: Option<String>,

    /// Only print errors and the requested output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List dependencies from every section of package.json
    List(ListArgs),

    /// List only outdated dependencies
    Outdated(OutputArgs),

    /// Add a dependency with npm install
    Add {
        /// Package name
        name: String,

        /// Section to add to: prod, dev, optional or peer
        #[arg(short = 't', long = "type", default_value = "prod")]
        dependency_type: DependencyType,
    },

    /// Remove a dependency with npm uninstall
    Remove {
        /// Package name
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Update a dependency in place
    Update {
        /// Package name
        name: String,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format: table or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Exit with code 1 when outdated dependencies are found
    #[arg(long)]
    pub fail_on_outdated: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Column to sort by: name or type
    #[arg(short, long, default_value = "name")]
    pub sort: SortKey,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Hide dependencies that are up to date
    #[arg(long)]
    pub outdated_only: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

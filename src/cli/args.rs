use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "voltig",
    about = "A cross-platform package manager CLI",
    long_about = "Declare packages once in voltig.yml and install, update, remove or \
                  inspect them with the host's native package manager.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Path to the YAML config file
    #[arg(
        short = 'c',
        long,
        global = true,
        value_name = "PATH",
        default_value = "voltig.yml"
    )]
    pub config: PathBuf,

    /// Verbose output
    #[arg(
        short = 'v',
        long,
        global = true,
        env = "VOLTIG_VERBOSE",
        value_parser = FalseyValueParser::new()
    )]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install packages from config (all when none are given)
    #[command(visible_alias = "i")]
    Install {
        /// Package names or aliases from config
        packages: Vec<String>,

        /// Install Homebrew first when it is missing (macOS/Linux)
        #[arg(long)]
        bootstrap_brew: bool,
    },

    /// Update packages from config (all when none are given)
    #[command(visible_alias = "u")]
    Update {
        /// Package names or aliases from config
        packages: Vec<String>,
    },

    /// Remove packages listed in config
    #[command(visible_alias = "rm")]
    Remove {
        /// Package names or aliases from config
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Show installation status of all packages
    #[command(visible_alias = "st")]
    Status {
        /// Print a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List every package installed on this system
    Scan {
        /// Print a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show loaded configuration
    Config,

    /// Lint and validate the config file
    Lint,

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Project command defined under `commands:` in the config
    #[command(external_subcommand)]
    External(Vec<String>),
}

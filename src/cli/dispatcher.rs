//! Command dispatcher
//!
//! Routes CLI commands to their handlers. Every handler returns the process
//! exit code; errors bubble up to `run_cli`.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::error::Result;
use clap::CommandFactory;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<i32> {
    let config = args.global.config.clone();

    match &args.command {
        Some(Command::Install {
            packages,
            bootstrap_brew,
        }) => commands::install::run(commands::install::InstallOptions {
            config,
            packages: packages.clone(),
            bootstrap_brew: *bootstrap_brew,
        }),

        Some(Command::Update { packages }) => {
            commands::update::run(commands::update::UpdateOptions {
                config,
                packages: packages.clone(),
            })
        }

        Some(Command::Remove { packages }) => {
            commands::remove::run(commands::remove::RemoveOptions {
                config,
                packages: packages.clone(),
            })
        }

        Some(Command::Status { json }) => commands::status::run(commands::status::StatusOptions {
            config,
            json: *json,
        }),

        Some(Command::Scan { json }) => commands::scan::run(*json),

        Some(Command::Config) => commands::config::run(&config),

        Some(Command::Lint) => commands::lint::run(&config),

        Some(Command::Completions { shell }) => commands::completions::run(*shell),

        Some(Command::External(argv)) => commands::custom::run(commands::custom::CustomOptions {
            config,
            argv: argv.clone(),
        }),

        None => {
            Cli::command().print_help()?;
            println!();
            Ok(0)
        }
    }
}

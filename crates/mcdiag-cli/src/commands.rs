use super::args::{Cli, Commands, CustomCommand};
use super::handlers;
use crate::config::{Config, resolve_data_dir};
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let renderer = ConsoleRenderer::new(cli.format == OutputFormat::Json);

    match cli.command {
        Commands::Analyze { path, no_custom } => {
            let config_path = Config::path_in(&resolve_data_dir(cli.data_dir.as_deref())?);
            handlers::analyze::handle(path, &config_path, &cli.scope, !no_custom, &renderer)
        }

        Commands::Link { message } => handlers::link::handle(&message, &renderer),

        Commands::Rules => handlers::rules::handle(&renderer),

        Commands::Custom { command } => {
            let config_path = Config::path_in(&resolve_data_dir(cli.data_dir.as_deref())?);

            match command {
                CustomCommand::Add { label, trigger } => {
                    handlers::custom::add(&config_path, &cli.scope, &label, &trigger, &renderer)
                }
                CustomCommand::List => handlers::custom::list(&config_path, &cli.scope, &renderer),
                CustomCommand::Remove { label } => {
                    handlers::custom::remove(&config_path, &cli.scope, &label, &renderer)
                }
            }
        }
    }
}

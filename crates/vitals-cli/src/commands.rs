use super::args::{Cli, Commands, EntryCommand, SourceCommand};
use super::handlers;
use anyhow::Result;
use vitals_runtime::{Config, resolve_data_dir};
use vitals_types::Source;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = data_dir.join("config.toml");

    match cli.command {
        Commands::Init => handlers::init::handle(&data_dir),

        Commands::Sync {
            past_days,
            sources,
            offline,
            synthetic,
            seed,
        } => {
            let config = Config::load_from(&config_path)?;
            let sources: Vec<Source> = sources.into_iter().map(Into::into).collect();
            handlers::sync::handle(
                &config,
                &data_dir,
                past_days,
                if sources.is_empty() { None } else { Some(sources) },
                offline,
                synthetic,
                seed,
            )
        }

        Commands::Show { limit, sources } => {
            let sources: Vec<Source> = sources.into_iter().map(Into::into).collect();
            handlers::show::handle(&data_dir, limit, &sources)
        }

        Commands::Export { output } => handlers::export::handle(&data_dir, output),

        Commands::Entry { command } => {
            let config = Config::load_from(&config_path)?;
            match command {
                EntryCommand::Add {
                    date,
                    bodyweight,
                    lift,
                } => handlers::entry::add(&config, date, bodyweight, lift),
                EntryCommand::List => handlers::entry::list(&config),
            }
        }

        Commands::Source { command } => match command {
            SourceCommand::List => handlers::source::list(&config_path),
            SourceCommand::Set {
                source,
                fixture,
                enable,
                disable,
            } => handlers::source::set(&config_path, source.into(), fixture, enable, disable),
        },
    }
}

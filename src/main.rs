//! PetFriends CLI - pet shelter management
//!
//! Usage: petfriends [COMMAND]
//!
//! Without a command the interactive main menu is shown.

use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use petfriends::config::{Config, ConfigWarning};
use petfriends::observability;
use petfriends::presentation::{commands, factory, Console, DialoguerConsole, LineConsole};
use petfriends::AddAnimalRequest;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, warnings) = load_config(&cli)?;

    observability::init(
        observability::level_for_verbosity(&config.logging.level, cli.verbose),
        config.logging.json || cli.json_logs,
    );
    for warning in &warnings {
        tracing::warn!(%warning, "ignoring config key");
    }

    let mut service = factory::create_animal_service(&config)
        .with_context(|| format!("failed to open {} storage", config.storage.backend))?;
    let mut console = open_console();
    let console = console.as_mut();

    match cli.command {
        None => commands::run_menu(&mut service, console),
        Some(Commands::List) => commands::list_all(&service, console),
        Some(Commands::Add {
            species,
            age,
            physical,
            personality,
            nickname,
        }) => {
            let request = AddAnimalRequest::new(species)
                .age(age)
                .physical_description(physical)
                .personality_description(personality)
                .nickname(nickname);
            if !commands::add_animal(&mut service, console, &request)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::CompleteAges) => {
            commands::ensure_ages_and_descriptions(&mut service, console)
        }
        Some(Commands::CompleteNicknames) => {
            commands::ensure_nicknames_and_personality(&mut service, console)
        }
        Some(Commands::EditAge { id, age }) => {
            commands::edit_age(&mut service, console, Some(&id), age.as_deref())
        }
        Some(Commands::EditPersonality { id, personality }) => {
            commands::edit_personality(&mut service, console, Some(&id), personality.as_deref())
        }
        Some(Commands::Search {
            species,
            characteristic,
        }) => commands::display_with_characteristic(
            &service,
            console,
            species.into(),
            Some(&characteristic),
        ),
        Some(Commands::Remove { id }) => commands::remove_animal(&mut service, console, Some(&id)),
    }
}

/// Config file (explicit or discovered), then env, then command-line flags.
fn load_config(cli: &Cli) -> Result<(Config, Vec<ConfigWarning>)> {
    let (mut config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides()?, warnings)
        }
        None => Config::load_or_default(Some(Path::new(".")))?,
    };

    if let Some(backend) = cli.backend {
        config.storage.backend = backend;
    }
    if let Some(data) = &cli.data {
        config.storage.path = Some(data.clone());
    }

    Ok((config, warnings))
}

fn open_console() -> Box<dyn Console> {
    if io::stdin().is_terminal() {
        Box::new(DialoguerConsole)
    } else {
        Box::new(LineConsole::new(BufReader::new(io::stdin()), io::stdout()))
    }
}

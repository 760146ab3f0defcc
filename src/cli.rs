use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use petfriends::{Species, StorageBackend};

/// PetFriends - manage the dogs and cats in your shelter
#[derive(Parser, Debug)]
#[command(name = "petfriends")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'petfriends' without arguments for the interactive menu.")]
pub struct Cli {
    /// Config file to use instead of petfriends.toml / the user config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage backend (overrides config)
    #[arg(long, value_enum, global = true)]
    pub backend: Option<StorageBackend>,

    /// Data file or database path (overrides config)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Log events as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every animal
    List,

    /// Add one animal
    Add {
        /// dog or cat
        species: String,

        /// Age, or '?' if unknown
        #[arg(long, default_value = "")]
        age: String,

        /// Size, color, breed, gender, weight, housebroken
        #[arg(long, default_value = "")]
        physical: String,

        /// Likes or dislikes, tricks, energy level
        #[arg(long, default_value = "")]
        personality: String,

        #[arg(long, default_value = "")]
        nickname: String,
    },

    /// Prompt for missing ages and physical descriptions
    CompleteAges,

    /// Prompt for missing nicknames and personality descriptions
    CompleteNicknames,

    /// Change an animal's age
    EditAge {
        id: String,
        /// New age (prompted when omitted)
        age: Option<String>,
    },

    /// Change an animal's personality description
    EditPersonality {
        id: String,
        /// New description (prompted when omitted)
        personality: Option<String>,
    },

    /// Find animals whose descriptions mention a characteristic
    Search {
        #[arg(value_enum)]
        species: SpeciesArg,
        characteristic: String,
    },

    /// Remove an animal
    Remove { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpeciesArg {
    Dog,
    Cat,
}

impl From<SpeciesArg> for Species {
    fn from(arg: SpeciesArg) -> Self {
        match arg {
            SpeciesArg::Dog => Species::Dog,
            SpeciesArg::Cat => Species::Cat,
        }
    }
}

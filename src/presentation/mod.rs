//! Presentation Layer
//!
//! This layer handles:
//! - The interactive main menu and the commands behind it
//! - Prompting through a swappable [`Console`]
//! - Creating the animal service with its storage backend
//!
//! ## Structure
//!
//! - `commands` - One function per menu entry, shared with the subcommands
//! - `console` - Terminal and line-based user interaction
//! - `factory` - Creates the service with proper dependencies
//! - `menu` - Main menu options and labels
//! - `messages` - Every line shown to the user
//! - `output` - Animal rendering
//!
//! ## Usage
//!
//! ```ignore
//! use petfriends::config::Config;
//! use petfriends::presentation::{commands, factory, LineConsole};
//!
//! let mut service = factory::create_animal_service(&Config::default())?;
//! let mut console = LineConsole::new(std::io::stdin().lock(), std::io::stdout());
//! commands::run_menu(&mut service, &mut console)?;
//! ```

pub mod commands;
pub mod console;
pub mod factory;
pub mod menu;
pub mod messages;
pub mod output;

pub use console::{Console, DialoguerConsole, LineConsole};
pub use factory::{create_animal_service, open_repository, ConcreteAnimalService};
pub use menu::MenuOption;

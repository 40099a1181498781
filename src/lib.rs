pub mod cli;
pub mod config;
pub mod env;
pub mod logging;
pub mod model;
pub mod pattern;
pub mod profile;
pub mod resolver;
pub mod verify;

pub use config::Settings;
pub use env::{Environment, ProcessEnv};
pub use model::{DictionaryDefinition, SpellCheckConfiguration};
pub use profile::{Preset, Profile};
pub use resolver::{resolve, Resolver};

use crate::model::DictionaryDefinition;
use crate::profile::{Preset, Profile};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".spellconf.toml";

/// Repository or user overrides layered on top of a preset.
///
/// Scalars replace the preset's value; lists are appended to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub preset: Option<Preset>,
    pub language: Option<String>,
    pub min_word_length: Option<u32>,
    pub fallback_base: Option<String>,
    pub base_path_vars: Option<Vec<String>>,

    #[serde(default)]
    pub dictionaries: Vec<String>,

    #[serde(default)]
    pub dictionary_definitions: Vec<DictionaryDefinition>,

    #[serde(default)]
    pub flag_words: Vec<String>,

    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl Settings {
    /// Load settings with priority: explicit file (or local `.spellconf.toml`) > global config
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!("Loading global settings from {}", global_path.display());
                settings = settings.merge(Self::from_file(&global_path)?);
            }
        }

        match explicit {
            // An explicit path must exist
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                settings = settings.merge(Self::from_file(path)?);
            }
            None => {
                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    tracing::debug!("Loading local settings from {}", local_path.display());
                    settings = settings.merge(Self::from_file(&local_path)?);
                }
            }
        }

        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// `other` is the higher-priority layer.
    pub fn merge(mut self, other: Self) -> Self {
        if other.preset.is_some() {
            self.preset = other.preset;
        }
        if other.language.is_some() {
            self.language = other.language;
        }
        if other.min_word_length.is_some() {
            self.min_word_length = other.min_word_length;
        }
        if other.fallback_base.is_some() {
            self.fallback_base = other.fallback_base;
        }
        if other.base_path_vars.is_some() {
            self.base_path_vars = other.base_path_vars;
        }
        self.dictionaries.extend(other.dictionaries);
        self.dictionary_definitions.extend(other.dictionary_definitions);
        self.flag_words.extend(other.flag_words);
        self.ignore_patterns.extend(other.ignore_patterns);
        self
    }

    /// Pick the preset (CLI choice first) and apply these settings to it.
    pub fn profile(&self, cli_preset: Option<Preset>) -> Profile {
        let preset = cli_preset.or(self.preset).unwrap_or_default();
        self.apply(preset.profile())
    }

    pub fn apply(&self, mut profile: Profile) -> Profile {
        if let Some(language) = &self.language {
            profile.language = language.clone();
        }
        if let Some(min) = self.min_word_length {
            profile.min_word_length = min;
        }
        if let Some(base) = &self.fallback_base {
            profile.fallback_base = base.clone();
        }
        if let Some(vars) = &self.base_path_vars {
            profile.base_path_vars = vars.clone();
        }
        profile.dictionary_names.extend(self.dictionaries.iter().cloned());
        profile
            .extra_definitions
            .extend(self.dictionary_definitions.iter().cloned());
        profile.flag_words.extend(self.flag_words.iter().cloned());
        profile
            .ignore_patterns
            .extend(self.ignore_patterns.iter().cloned());
        profile
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellconf").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

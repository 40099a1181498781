use crate::model::DictionaryDefinition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PER_REPOSITORY_DICTIONARY: &str = "per-repository dictionary";
pub const DICTIONARY_SUFFIX: &str = ".github/etc/dictionary.txt";

/// GitHub Actions checkout directory.
pub const GITHUB_WORKSPACE: &str = "GITHUB_WORKSPACE";
/// GitLab CI checkout directory.
pub const CI_PROJECT_DIR: &str = "CI_PROJECT_DIR";

const BASE_DICTIONARIES: &[&str] = &[
    "bash",
    "companies",
    "cpp",
    "csharp",
    "css",
    "en-gb",
    "en_US",
    "go",
    "html",
    "latex",
    "misc",
    "node",
    "npm",
    PER_REPOSITORY_DICTIONARY,
    "php",
    "powershell",
    "python",
    "seiso global dictionary",
    "softwareTerms",
    "typescript",
];

const BASE_FLAG_WORDS: &[&str] = &["blacklist", "master", "slave", "whitelist"];
const EXTENDED_FLAG_WORDS: &[&str] = &["blacklisted", "whitelisted", "whitelisting"];

const BASE_IGNORE_PATTERNS: &[&str] = &["/.*pairwise master key.*/"];
const SSID_IGNORE_PATTERN: &str = "/--ssid-whitelist/";

/// Everything the resolver needs besides the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    /// Candidate variables for the base path, tried in order.
    pub base_path_vars: Vec<String>,
    pub fallback_base: String,
    pub per_repository_dictionary: String,
    pub dictionary_suffix: String,
    pub language: String,
    pub dictionary_names: Vec<String>,
    /// Definitions listed after the per-repository one.
    pub extra_definitions: Vec<DictionaryDefinition>,
    pub flag_words: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub min_word_length: u32,
}

/// The built-in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// `GITHUB_WORKSPACE`, else the current directory.
    #[default]
    Local,
    /// `GITHUB_WORKSPACE`, else `/goat`.
    Container,
    /// `GITHUB_WORKSPACE`, then `CI_PROJECT_DIR`, else `/goat`.
    #[serde(alias = "multi_ci")]
    MultiCi,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Local, Preset::Container, Preset::MultiCi];

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Local => "GitHub Actions workspace, falling back to the current directory",
            Preset::Container => "GitHub Actions workspace, falling back to /goat",
            Preset::MultiCi => "GitHub Actions or GitLab CI workspace, falling back to /goat",
        }
    }

    pub fn profile(&self) -> Profile {
        let mut profile = Profile {
            name: self.to_string(),
            base_path_vars: vec![GITHUB_WORKSPACE.to_string()],
            fallback_base: ".".to_string(),
            per_repository_dictionary: PER_REPOSITORY_DICTIONARY.to_string(),
            dictionary_suffix: DICTIONARY_SUFFIX.to_string(),
            language: "en".to_string(),
            dictionary_names: to_strings(BASE_DICTIONARIES),
            extra_definitions: vec![DictionaryDefinition::new(
                "seiso global dictionary",
                "./seiso_global_dictionary.txt",
            )],
            flag_words: to_strings(BASE_FLAG_WORDS),
            ignore_patterns: to_strings(BASE_IGNORE_PATTERNS),
            min_word_length: 4,
        };

        match self {
            Preset::Local => {}
            Preset::Container => {
                profile.fallback_base = "/goat".to_string();
                profile.flag_words.extend(to_strings(EXTENDED_FLAG_WORDS));
            }
            Preset::MultiCi => {
                profile.base_path_vars.push(CI_PROJECT_DIR.to_string());
                profile.fallback_base = "/goat".to_string();
                profile.flag_words.extend(to_strings(EXTENDED_FLAG_WORDS));
                profile.ignore_patterns.push(SSID_IGNORE_PATTERN.to_string());
            }
        }

        profile
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Preset::Local),
            "container" => Ok(Preset::Container),
            "multi-ci" | "multi_ci" => Ok(Preset::MultiCi),
            _ => Err(format!("Unknown preset: {}", s)),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Local => write!(f, "local"),
            Preset::Container => write!(f, "container"),
            Preset::MultiCi => write!(f, "multi-ci"),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

use crate::env::Environment;
use crate::model::{dedup_ordered, DictionaryDefinition, SpellCheckConfiguration};
use crate::profile::Profile;
use std::fmt;

/// Where the base path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseSource {
    Variable(String),
    Fallback,
}

impl fmt::Display for BaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseSource::Variable(name) => write!(f, "${}", name),
            BaseSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Builds a [`SpellCheckConfiguration`] from a profile and an environment.
pub struct Resolver<'a, E: Environment> {
    profile: &'a Profile,
    env: &'a E,
}

impl<'a, E: Environment> Resolver<'a, E> {
    pub fn new(profile: &'a Profile, env: &'a E) -> Self {
        Self { profile, env }
    }

    /// First candidate variable that is set and non-empty, else the fallback.
    pub fn base_path(&self) -> (String, BaseSource) {
        for name in &self.profile.base_path_vars {
            if let Some(value) = self.env.var(name).filter(|v| !v.is_empty()) {
                return (value, BaseSource::Variable(name.clone()));
            }
        }

        (self.profile.fallback_base.clone(), BaseSource::Fallback)
    }

    /// Path of the per-repository word list. Plain concatenation; nothing is
    /// normalized or checked on disk.
    pub fn per_repository_path(&self) -> String {
        let (base, _) = self.base_path();
        format!("{}/{}", base, self.profile.dictionary_suffix)
    }

    pub fn resolve(&self) -> SpellCheckConfiguration {
        let (base, source) = self.base_path();
        let path = format!("{}/{}", base, self.profile.dictionary_suffix);

        tracing::debug!(
            profile = %self.profile.name,
            base = %base,
            source = %source,
            "Resolved per-repository dictionary path: {}",
            path
        );

        let mut definitions = Vec::with_capacity(self.profile.extra_definitions.len() + 1);
        definitions.push(DictionaryDefinition::new(
            self.profile.per_repository_dictionary.clone(),
            path,
        ));
        definitions.extend(self.profile.extra_definitions.iter().cloned());

        SpellCheckConfiguration::new(
            self.profile.language.clone(),
            dedup_ordered(self.profile.dictionary_names.iter().cloned()),
            definitions,
            dedup_ordered(self.profile.flag_words.iter().cloned()),
            self.profile.ignore_patterns.clone(),
            self.profile.min_word_length,
        )
    }
}

pub fn resolve<E: Environment>(profile: &Profile, env: &E) -> SpellCheckConfiguration {
    Resolver::new(profile, env).resolve()
}

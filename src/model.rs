use serde::{Deserialize, Serialize};

/// A named word list the engine loads from `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryDefinition {
    pub name: String,
    pub path: String,
}

impl DictionaryDefinition {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// The record handed to the spell-checking engine.
///
/// Serializes with the engine's own key names, so the JSON form can be
/// written straight to `cspell.json`. Built only by the resolver and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellCheckConfiguration {
    language: String,
    #[serde(rename = "dictionaries")]
    dictionary_names: Vec<String>,
    dictionary_definitions: Vec<DictionaryDefinition>,
    flag_words: Vec<String>,
    ignore_reg_exp_list: Vec<String>,
    min_word_length: u32,
}

impl SpellCheckConfiguration {
    pub(crate) fn new(
        language: String,
        dictionary_names: Vec<String>,
        dictionary_definitions: Vec<DictionaryDefinition>,
        flag_words: Vec<String>,
        ignore_reg_exp_list: Vec<String>,
        min_word_length: u32,
    ) -> Self {
        Self {
            language,
            dictionary_names,
            dictionary_definitions,
            flag_words,
            ignore_reg_exp_list,
            min_word_length,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn dictionary_names(&self) -> &[String] {
        &self.dictionary_names
    }

    pub fn dictionary_definitions(&self) -> &[DictionaryDefinition] {
        &self.dictionary_definitions
    }

    /// Look up a definition by its dictionary name.
    pub fn definition(&self, name: &str) -> Option<&DictionaryDefinition> {
        self.dictionary_definitions.iter().find(|d| d.name == name)
    }

    pub fn flag_words(&self) -> &[String] {
        &self.flag_words
    }

    pub fn ignore_reg_exp_list(&self) -> &[String] {
        &self.ignore_reg_exp_list
    }

    pub fn min_word_length(&self) -> u32 {
        self.min_word_length
    }
}

/// Drop repeated entries, keeping the first occurrence of each.
pub(crate) fn dedup_ordered(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

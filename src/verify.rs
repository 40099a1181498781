use crate::model::SpellCheckConfiguration;
use crate::pattern::{IgnorePattern, PatternError};
use serde::Serialize;
use std::fmt;
use std::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyReport {
    pub findings: Vec<Finding>,
}

impl VerifyReport {
    fn push(&mut self, severity: Severity, subject: impl Into<String>, message: impl Into<String>) {
        self.findings.push(Finding {
            severity,
            subject: subject.into(),
            message: message.into(),
        });
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Check a resolved configuration against what the engine will find at run time.
pub fn verify(config: &SpellCheckConfiguration) -> VerifyReport {
    let mut report = VerifyReport::default();

    for definition in config.dictionary_definitions() {
        match fs::read_to_string(&definition.path) {
            Ok(content) => {
                let words = count_words(&content);
                report.push(
                    Severity::Info,
                    &definition.name,
                    format!("{} ({} words)", definition.path, words),
                );
            }
            Err(e) => {
                tracing::warn!("Cannot read dictionary {}: {}", definition.path, e);
                report.push(
                    Severity::Error,
                    &definition.name,
                    format!("cannot read {}: {}", definition.path, e),
                );
            }
        }

        if !config.dictionary_names().contains(&definition.name) {
            report.push(
                Severity::Warning,
                &definition.name,
                "defined but not listed in dictionaries",
            );
        }
    }

    for source in config.ignore_reg_exp_list() {
        match IgnorePattern::parse(source) {
            Ok(_) => {}
            Err(e @ PatternError::Unsupported { .. }) => {
                report.push(Severity::Warning, source, e.to_string());
            }
            Err(e) => report.push(Severity::Error, source, e.to_string()),
        }
    }

    if config.min_word_length() == 0 {
        report.push(
            Severity::Warning,
            "minWordLength",
            "0 checks every word, including single letters",
        );
    }

    report
}

/// One word per line; blank lines and `#` comments don't count.
fn count_words(content: &str) -> usize {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .count()
}

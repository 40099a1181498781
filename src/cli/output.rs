use crate::profile::Preset;
use crate::verify::{Severity, VerifyReport};
use crate::SpellCheckConfiguration;
use anyhow::{Context, Result};
use colored::*;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            "text" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Toml => write!(f, "toml"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Render a configuration. JSON output is a valid `cspell.json`.
pub fn render(config: &SpellCheckConfiguration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(config).context("Failed to serialize as JSON")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Toml => toml::to_string_pretty(config).context("Failed to serialize as TOML"),
        OutputFormat::Text => Ok(render_text(config)),
    }
}

fn render_text(config: &SpellCheckConfiguration) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "language: {}", config.language());
    let _ = writeln!(out, "minWordLength: {}", config.min_word_length());
    let _ = writeln!(out, "dictionaries: {}", config.dictionary_names().join(", "));
    let _ = writeln!(out, "dictionaryDefinitions:");
    for definition in config.dictionary_definitions() {
        let _ = writeln!(out, "  {} -> {}", definition.name, definition.path);
    }
    let _ = writeln!(out, "flagWords: {}", config.flag_words().join(", "));
    let _ = writeln!(out, "ignoreRegExpList:");
    for pattern in config.ignore_reg_exp_list() {
        let _ = writeln!(out, "  {}", pattern);
    }

    out
}

pub fn print_presets(colored: bool) {
    for preset in Preset::ALL {
        let profile = preset.profile();
        let chain = profile
            .base_path_vars
            .iter()
            .map(|v| format!("${}", v))
            .chain(std::iter::once(profile.fallback_base.clone()))
            .collect::<Vec<_>>()
            .join(" → ");

        if colored {
            println!("{} {}", preset.to_string().cyan().bold(), preset.description());
            println!("    {}", chain.dimmed());
        } else {
            println!("{} {}", preset, preset.description());
            println!("    {}", chain);
        }
    }
}

pub fn print_report(report: &VerifyReport, colored: bool) {
    for finding in &report.findings {
        let label = finding.severity.to_string();
        if colored {
            let label = match finding.severity {
                Severity::Info => label.green(),
                Severity::Warning => label.yellow().bold(),
                Severity::Error => label.red().bold(),
            };
            println!("  {} {} {}", label, finding.subject.bold(), finding.message);
        } else {
            println!("  {} {} {}", label, finding.subject, finding.message);
        }
    }

    print_verify_summary(report.error_count(), report.warning_count(), colored);
}

fn print_verify_summary(errors: usize, warnings: usize, colored: bool) {
    println!();
    if errors == 0 {
        let message = if warnings == 0 {
            "✓ Configuration verified!".to_string()
        } else {
            format!(
                "✓ Configuration verified with {} {}",
                warnings,
                if warnings == 1 { "warning" } else { "warnings" }
            )
        };
        if colored {
            println!("{}", message.green().bold());
        } else {
            println!("{}", message);
        }
    } else {
        let error_word = if errors == 1 { "error" } else { "errors" };
        if colored {
            println!(
                "{} {} {} found",
                "✗".red().bold(),
                errors.to_string().red().bold(),
                error_word
            );
        } else {
            println!("✗ {} {} found", errors, error_word);
        }
    }
}

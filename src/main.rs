use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use spellconf::cli::output::{self, OutputFormat};
use spellconf::{logging, verify, Preset, ProcessEnv, Resolver, Settings};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellconf")]
#[command(version, about = "Resolve spell-checker configuration for CI and local runs", long_about = None)]
struct Cli {
    /// Built-in profile to start from (local, container, multi-ci)
    #[arg(short, long, env = "SPELLCONF_PRESET", global = true)]
    preset: Option<Preset>,

    /// Settings file to use instead of ./.spellconf.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Print the resolved configuration (default)
    Resolve {
        /// Output format (json, toml, text)
        #[arg(short = 'o', long, default_value = "json")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Check that dictionaries exist and ignore patterns compile
    Verify {
        /// Exit with code 0 even if errors are found
        #[arg(long)]
        no_fail: bool,
    },
    /// List built-in presets
    Presets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellconf", &mut io::stdout());
        return Ok(());
    }

    logging::init_tracing(&cli.log_level, cli.log_json);

    let colored = !cli.no_color;
    let command = cli.command.unwrap_or(Commands::Resolve {
        format: OutputFormat::Json,
        output: None,
    });

    if let Commands::Presets = command {
        output::print_presets(colored);
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let profile = settings.profile(cli.preset);
    let env = ProcessEnv;
    let config = Resolver::new(&profile, &env).resolve();

    match command {
        Commands::Resolve { format, output: destination } => {
            let rendered = output::render(&config, format)?;
            match destination {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote {} configuration to {}", format, path.display());
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    if let Err(e) = stdout.write_all(rendered.as_bytes()).and_then(|_| stdout.flush()) {
                        // Reader went away, e.g. `spellconf | head -1`
                        if e.kind() != io::ErrorKind::BrokenPipe {
                            return Err(e).context("Failed to write to stdout");
                        }
                    }
                }
            }
        }
        Commands::Verify { no_fail } => {
            let report = verify::verify(&config);
            output::print_report(&report, colored);

            if report.has_errors() && !no_fail {
                std::process::exit(1);
            }
        }
        Commands::Presets => {}
    }

    Ok(())
}

// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Meshwright - modeling and shading skills for DCC agents.
//!
//! This is the binary entry point. Envelopes go to stdout, logs to stderr.

mod commands;
mod shell;
mod skills;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use meshwright_config::MeshwrightConfig;
use tracing::{debug, error};

/// Meshwright - modeling and shading skills for DCC agents.
#[derive(Parser, Debug)]
#[command(name = "meshwright", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered skills.
    List,
    /// Print tool definitions for one skill or all of them.
    Schema {
        /// Skill name; omit for every registered skill.
        skill: Option<String>,
        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Run a skill and print its result envelope.
    Invoke {
        /// Skill name.
        skill: String,
        /// Arguments as a JSON object.
        #[arg(long, value_name = "JSON")]
        args: Option<String>,
        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Launch an interactive REPL session.
    Shell,
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => meshwright_config::load_and_validate_path(path),
        None => meshwright_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            meshwright_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.agent.log_level);
    debug!(agent = %config.agent.name, "configuration loaded");

    match run(cli.command, &config).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Option<Commands>,
    config: &MeshwrightConfig,
) -> Result<ExitCode, meshwright_core::MeshwrightError> {
    let registry = skills::build_registry(&config.skill);
    let default_pretty = config.output.pretty;

    match command {
        Some(Commands::List) => print!("{}", commands::render_list(&registry)),
        Some(Commands::Schema { skill, pretty }) => {
            let rendered =
                commands::render_schema(&registry, skill.as_deref(), pretty || default_pretty)?;
            println!("{rendered}");
        }
        Some(Commands::Invoke {
            skill,
            args,
            pretty,
        }) => {
            let result =
                commands::invoke(&registry, &skill, args.as_deref(), pretty || default_pretty)
                    .await?;
            println!("{}", result.rendered);
            if result.is_error {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Shell) => shell::run_shell(&registry, default_pretty).await?,
        Some(Commands::Config) => print!("{}", commands::render_config(config)?),
        None => println!("meshwright: use --help for available commands"),
    }

    Ok(ExitCode::SUCCESS)
}

/// Initializes the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("meshwright={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn invoke_accepts_args_and_global_config() {
        let cli = Cli::try_parse_from([
            "meshwright",
            "invoke",
            "create_primitive",
            "--args",
            r#"{"primitive_type": "torus"}"#,
            "--config",
            "studio.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("studio.toml")));
        match cli.command {
            Some(Commands::Invoke {
                skill,
                args,
                pretty,
            }) => {
                assert_eq!(skill, "create_primitive");
                assert_eq!(args.as_deref(), Some(r#"{"primitive_type": "torus"}"#));
                assert!(!pretty);
            }
            other => panic!("expected invoke, got {other:?}"),
        }
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = meshwright_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.agent.name, "meshwright");
    }

    #[tokio::test]
    async fn invoke_error_envelope_sets_failure_exit() {
        let config = MeshwrightConfig::default();
        let code = run(
            Some(Commands::Invoke {
                skill: "subdivide_surface".into(),
                args: Some(r#"{"object_name": "Cube.001", "subdivision_level": 11}"#.into()),
                pretty: false,
            }),
            &config,
        )
        .await
        .unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn unknown_skill_is_an_error() {
        let config = MeshwrightConfig::default();
        let err = run(
            Some(Commands::Invoke {
                skill: "sculpt".into(),
                args: None,
                pretty: false,
            }),
            &config,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("sculpt"));
    }
}

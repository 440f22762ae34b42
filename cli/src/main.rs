//! CLI entrypoint for kubecall
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use commands::{Cli, Command, build_call};
use kubecall_application::{ExecuteOperationUseCase, OperationError};
use kubecall_domain::OperationCatalog;
use kubecall_infrastructure::{ConfigLoader, OutputFormat, TokioProcessRunner, is_command_available};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level, unless RUST_LOG is set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };
    if !config.output.color {
        colored::control::set_override(false);
    }
    let settings = cli.apply_overrides(config.kubectl_settings());

    match &cli.command {
        Command::List { json } => {
            if !is_command_available(&settings.binary) {
                warn!("{} was not found on PATH", settings.binary);
            }
            let catalog = OperationCatalog::standard();
            if *json || config.output.format == OutputFormat::Json {
                println!("{}", output::format_catalog_json(&catalog)?);
            } else {
                print!("{}", output::format_catalog(&catalog));
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Config => {
            for line in ConfigLoader::config_sources() {
                println!("{}", line);
            }
            println!();
            let available = if is_command_available(&settings.binary) {
                "found".green()
            } else {
                "not found".red()
            };
            println!("binary:     {} ({})", settings.binary, available);
            println!(
                "kubeconfig: {}",
                settings.kubeconfig.as_deref().unwrap_or("(kubectl default)")
            );
            println!(
                "context:    {}",
                settings.context.as_deref().unwrap_or("(current context)")
            );
            Ok(ExitCode::SUCCESS)
        }

        Command::Call {
            operation,
            args,
            arg,
            input_file,
            json,
        } => {
            if !is_command_available(&settings.binary) {
                warn!("{} was not found on PATH", settings.binary);
            }

            info!("Starting kubecall {}", operation);
            let runner = Arc::new(TokioProcessRunner::new());
            let use_case = ExecuteOperationUseCase::new(runner, settings);

            let definition = use_case.catalog().get(operation).map(|e| &e.definition);
            let call = build_call(operation, definition, args.as_deref(), arg, input_file.as_deref())?;

            match use_case.invoke(&call).await {
                Ok(result) => {
                    if *json || config.output.format == OutputFormat::Json {
                        println!("{}", output::format_output_json(&result)?);
                    } else if result.error {
                        eprintln!("{}", result.output.red());
                    } else {
                        println!("{}", result.output);
                    }
                    Ok(if result.error {
                        ExitCode::FAILURE
                    } else {
                        ExitCode::SUCCESS
                    })
                }
                Err(e) => {
                    eprintln!("{} {}", "error:".red().bold(), e);
                    if let OperationError::UnknownOperation(_) = e {
                        eprintln!("Run `kubecall list` to see the available operations.");
                    }
                    Ok(ExitCode::from(2))
                }
            }
        }
    }
}

//! gqlint CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use gqlint::cli::{Cli, CommandDispatcher, Commands, EXIT_FAILURE};
use gqlint::config::find_project_root;
use gqlint::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gqlint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gqlint=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Paths typed on the command line are relative to the working directory,
/// while config paths are relative to the project root.
fn anchor_to_cwd(cli: &mut Cli, cwd: &Path) {
    let (schema_paths, plugin_dirs) = match &mut cli.command {
        Some(Commands::Lint(args)) => (Some(&mut args.schema_paths), args.custom_rule_paths.as_mut()),
        Some(Commands::Rules(args)) => (None, args.custom_rule_paths.as_mut()),
        _ => (None, None),
    };

    for pattern in schema_paths.into_iter().flatten() {
        if Path::new(pattern.as_str()).is_relative() {
            *pattern = cwd.join(pattern.as_str()).to_string_lossy().into_owned();
        }
    }
    for dir in plugin_dirs.into_iter().flatten() {
        if dir.is_relative() {
            *dir = cwd.join(&*dir);
        }
    }
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gqlint starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    let mut ui = TerminalUI::new(output_mode, cli.no_color);

    // Determine project root
    let cwd = std::env::current_dir().unwrap_or_default();
    let project_root = match &cli.project {
        Some(project) => project.clone(),
        None => find_project_root(&cwd).unwrap_or_else(|| cwd.clone()),
    };
    anchor_to_cwd(&mut cli, &cwd);

    let dispatcher = CommandDispatcher::new(project_root).with_config_path(cli.config.clone());

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(EXIT_FAILURE as u8)
        }
    }
}

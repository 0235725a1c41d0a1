#![deny(clippy::all)]

use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use shotline_core::{CommandContext, GlobalOptions, SystemFileSystem};
use tracing_subscriber::EnvFilter;

mod cli;
mod dispatch;
mod output;
mod style;

use cli::ShotlineCli;
use dispatch::dispatch_command;
use output::{emit_output, OutputOptions};

const LOG_ENV: &str = "SHOTLINE_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = ShotlineCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let global = GlobalOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
        trace: cli.trace,
        json: cli.json,
        project: cli
            .project
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
    };

    let ctx = CommandContext::new(&global, SystemFileSystem::shared())
        .map_err(|err| eyre!("{err:?}"))?;
    let (info, outcome) = dispatch_command(&ctx, &cli.command)?;
    let opts = OutputOptions {
        quiet: cli.quiet,
        json: cli.json,
        no_color: cli.no_color,
    };
    let code = emit_output(&opts, info, &outcome)?;

    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

fn init_tracing(trace: bool, verbose: u8) {
    let level = if trace {
        "trace"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "shotline={level},shotline_core={level},shotline_cli={level}"
        ))
    });
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

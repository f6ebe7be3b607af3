//! tagbind CLI entry point.
//!
//! Provides command-line tools for working with tag strings and records:
//! - `tagbind tags` - Scan a tag string into namespaces
//! - `tagbind rules` - Parse a `rules` value against the built-in registry
//! - `tagbind bind` - Validate and bind the demo service record

mod commands;
mod error;
mod output;
mod service;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_bind, run_rules, run_tags, BindArgs, RulesArgs, TagsArgs};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Tag string and record binding tools.
#[derive(Debug, Parser)]
#[command(name = "tagbind")]
#[command(about = "Tag string and record binding tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a tag string into namespaces
    Tags(TagsArgs),
    /// Parse a rules value and check it against the built-in rules
    Rules(RulesArgs),
    /// Validate and bind the demo service record from the environment
    Bind(BindArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, honoring `RUST_LOG`; `--verbose` raises the floor to debug.
fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Tags(args) => run_tags(args),
        Commands::Rules(args) => run_rules(args),
        Commands::Bind(args) => run_bind(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}

//! Implementation of the `tagbind bind` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tagbind::input::{env_to_map, read_json, Bag};
use tagbind::{
    build_tree, resolve, validate, FieldTree, Inputs, RuleRegistry, Settings, Slot, Value,
    Violations, DEFAULT_TAGS,
};
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::table::{format_fields_table, format_violations_table};
use crate::service::ServiceConfig;

/// Namespace violations are reported under.
const MESSAGE_TAG: &str = "json";

/// Arguments for the bind command.
#[derive(Debug, clap::Args)]
pub struct BindArgs {
    /// Resolution settings file (JSON)
    #[arg(long, env = "TAGBIND_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// JSON document with input values
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Input values in name=value format (repeatable)
    #[arg(short = 's', long = "set", value_parser = parse_key_val)]
    pub set: Vec<(String, String)>,

    /// Keep resolving names and tags after an env match
    #[arg(long)]
    pub env_override: bool,

    /// Let later tag matches overwrite earlier ones
    #[arg(long)]
    pub tag_override: bool,

    /// Print the field tree before binding
    #[arg(long)]
    pub tree: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for bind results.
#[derive(Debug, Serialize)]
pub struct BindReport {
    pub violations: Violations,
    pub record: Option<Value>,
}

/// Parse a key=value input string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid input format '{}': expected name=value", s))?;
    Ok((key.to_string(), value.to_string()))
}

/// Load settings from `path`, or the default tag order when absent.
fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    let Some(path) = path else {
        return Ok(Settings::builder()
            .tag_order(DEFAULT_TAGS.iter().map(ToString::to_string).collect())
            .build());
    };
    let settings_error = |message: String| CliError::Settings {
        path: path.to_path_buf(),
        message,
    };
    let content = read_to_string(path).map_err(|e| settings_error(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| settings_error(e.to_string()))
}

/// Merge inputs: the JSON document first, then environment, then `--set`.
fn gather_inputs(document: Option<&Path>, bag: &Bag) -> Result<Inputs, CliError> {
    let mut inputs = match document {
        Some(path) => read_json(path)?,
        None => Inputs::new(),
    };
    inputs.extend(bag.collect());
    Ok(inputs)
}

/// Bind a fresh [`ServiceConfig`], then validate it.
///
/// Validation runs against the resolved record, so a value that reached a
/// field through any source, including its `env` key, satisfies `required`
/// through the live value. Returns the violations and, when there are none,
/// the bound record.
fn bind_service(
    settings: &Settings,
    inputs: &Inputs,
    show_tree: bool,
) -> Result<(Violations, Option<ServiceConfig>), CliError> {
    let mut config = ServiceConfig::default();
    let tree = build_tree(&mut config)?;
    if show_tree {
        print!("{}", tree);
    }

    resolve(&tree, &mut config, settings, inputs)?;

    let registry = RuleRegistry::default();
    let violations = validate(
        &registry,
        &tree,
        &config,
        inputs,
        MESSAGE_TAG,
        &settings.tag_order,
    )?;
    if !violations.is_empty() {
        info!(count = violations.len(), "validation failed");
        return Ok((violations, None));
    }

    Ok((violations, Some(config)))
}

/// Run the bind command.
pub fn run_bind(args: BindArgs) -> miette::Result<i32> {
    let mut settings = load_settings(args.settings.as_deref())?;
    settings.allow_env_override |= args.env_override;
    settings.allow_tag_override |= args.tag_override;
    debug!(?settings, "loaded settings");

    let bag = Bag {
        env: env_to_map(),
        args: args.set.into_iter().collect(),
        ..Bag::default()
    };
    let inputs = gather_inputs(args.input.as_deref(), &bag)?;

    let (violations, config) = bind_service(&settings, &inputs, args.tree && !args.json)?;

    if args.json {
        let report = BindReport {
            violations,
            record: config.as_ref().map(Slot::value),
        };
        let json = serde_json::to_string_pretty(&report).map_err(CliError::from)?;
        println!("{}", json);
        return Ok(exit_code(&report.violations));
    }

    match &config {
        Some(config) => {
            let tree = FieldTree::from_record(config).map_err(CliError::from)?;
            println!("{}", format_fields_table(&tree, config));
        }
        None => println!("{}", format_violations_table(&violations)),
    }
    Ok(exit_code(&violations))
}

fn exit_code(violations: &Violations) -> i32 {
    if violations.is_empty() {
        exitcode::OK
    } else {
        exitcode::DATAERR
    }
}

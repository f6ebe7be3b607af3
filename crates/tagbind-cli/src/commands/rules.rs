//! Implementation of the `tagbind rules` command.

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tagbind::{compute_suggestions, parse_rules, RuleRegistry};

use crate::error::CliError;
use crate::output::table::{format_rules_table, RuleRow};

/// Arguments for the rules command.
#[derive(Debug, clap::Args)]
pub struct RulesArgs {
    /// Rules value to parse, e.g. 'required|oneof:debug,info'
    pub value: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one parsed rule.
#[derive(Debug, Serialize)]
pub struct RuleReport {
    pub name: String,
    pub args: Vec<String>,
    pub known: bool,
    pub suggestions: Vec<String>,
}

/// Parse `value` and check every rule against `registry`.
pub fn check_rules(value: &str, registry: &RuleRegistry) -> Vec<RuleReport> {
    parse_rules(value)
        .into_iter()
        .map(|rule| {
            let known = registry.contains(&rule.name);
            let suggestions = if known {
                Vec::new()
            } else {
                compute_suggestions(&rule.name, registry.names())
            };
            RuleReport {
                name: rule.name,
                args: rule.args,
                known,
                suggestions,
            }
        })
        .collect()
}

fn status(report: &RuleReport) -> String {
    if report.known {
        return "ok".if_supports_color(Stream::Stdout, |s| s.green()).to_string();
    }
    let unknown = "unknown".if_supports_color(Stream::Stdout, |s| s.red()).to_string();
    if report.suggestions.is_empty() {
        unknown
    } else {
        format!("{} (did you mean {}?)", unknown, report.suggestions.join(", "))
    }
}

/// Run the rules command.
pub fn run_rules(args: RulesArgs) -> miette::Result<i32> {
    let registry = RuleRegistry::default();
    let reports = check_rules(&args.value, &registry);

    if args.json {
        let json = serde_json::to_string_pretty(&reports).map_err(CliError::from)?;
        println!("{}", json);
    } else {
        let rows: Vec<RuleRow> = reports
            .iter()
            .map(|report| RuleRow {
                name: report.name.clone(),
                args: report.args.clone(),
                status: status(report),
            })
            .collect();
        println!("{}", format_rules_table(&rows));
    }

    if reports.iter().all(|report| report.known) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}

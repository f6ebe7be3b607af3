//! Implementation of the `tagbind tags` command.

use serde::Serialize;
use tagbind::{parse_rules, scan_tags, TagMap, DEFAULT_TAG, RULES_TAG};

use crate::error::CliError;
use crate::output::table::format_tags_table;
use crate::output::TagDiagnostic;

/// Arguments for the tags command.
#[derive(Debug, clap::Args)]
pub struct TagsArgs {
    /// Tag string to scan, e.g. 'env:"PORT" default:"8080"'
    pub tag: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a scanned tag.
#[derive(Debug, Serialize)]
pub struct TagsReport {
    pub tags: TagMap,
    pub default: Option<String>,
    pub rules: Vec<String>,
    pub dropped: Option<String>,
}

impl TagsReport {
    pub fn scan(tag: &str) -> Self {
        let scan = scan_tags(tag);
        let mut tags = scan.tags;
        let default = tags.remove(DEFAULT_TAG);
        let rules = tags
            .remove(RULES_TAG)
            .map(|value| parse_rules(&value).iter().map(ToString::to_string).collect())
            .unwrap_or_default();
        TagsReport {
            tags,
            default,
            rules,
            dropped: scan.dropped,
        }
    }
}

/// Run the tags command.
pub fn run_tags(args: TagsArgs) -> miette::Result<i32> {
    let report = TagsReport::scan(&args.tag);

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(CliError::from)?;
        println!("{}", json);
    } else {
        println!("{}", format_tags_table(&report.tags));
        if let Some(default) = &report.default {
            println!("default: {}", default);
        }
        if !report.rules.is_empty() {
            println!("rules: {}", report.rules.join(" | "));
        }
    }

    match &report.dropped {
        Some(dropped) => {
            eprintln!("{:?}", miette::Report::new(TagDiagnostic::new(&args.tag, dropped)));
            Ok(exitcode::DATAERR)
        }
        None => Ok(exitcode::OK),
    }
}

//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use tagbind::record::slot_at;
use tagbind::{FieldTree, Record, Slot, TagMap, Violations};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format scanned tags as a namespace/value table.
pub fn format_tags_table(tags: &TagMap) -> Table {
    let mut table = new_table(vec!["Namespace", "Value"]);
    for (namespace, value) in tags {
        table.add_row(vec![namespace.clone(), value.clone()]);
    }
    table
}

/// One parsed rule and whether the registry knows it.
pub struct RuleRow {
    pub name: String,
    pub args: Vec<String>,
    pub status: String,
}

/// Format parsed rules as a table.
pub fn format_rules_table(rows: &[RuleRow]) -> Table {
    let mut table = new_table(vec!["Rule", "Args", "Status"]);
    for row in rows {
        table.add_row(vec![row.name.clone(), row.args.join(", "), row.status.clone()]);
    }
    table
}

/// Format the leaf fields of a bound record with their current values.
pub fn format_fields_table(tree: &FieldTree, record: &dyn Record) -> Table {
    let mut table = new_table(vec!["Field", "Kind", "Value"]);
    for field in tree.iter().filter(|field| field.fields.is_empty()) {
        let value = slot_at(record, field.path.as_slice())
            .map(|slot| slot.value().to_string())
            .unwrap_or_default();
        table.add_row(vec![
            field.qualified_name().to_string(),
            field.kind.to_string(),
            value,
        ]);
    }
    table
}

/// Format violations as a key/codes table.
pub fn format_violations_table(violations: &Violations) -> Table {
    let mut table = new_table(vec!["Field", "Violations"]);
    for (key, codes) in violations {
        table.add_row(vec![key.clone(), codes.join(", ")]);
    }
    table
}

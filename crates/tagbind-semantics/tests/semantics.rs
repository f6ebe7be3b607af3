use tagbind_semantics::{
    Rule, TagMap, is_reserved, join_separator, parse_rules, parse_tags, scan_tags,
};

fn tags(pairs: &[(&str, &str)]) -> TagMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn spaces_in_value() {
    let parsed = parse_tags(r#"arg:"cwd" short:"c" help:"Current working directory""#);
    assert_eq!(
        parsed,
        tags(&[
            ("arg", "cwd"),
            ("short", "c"),
            ("help", "Current working directory"),
        ])
    );
}

#[test]
fn escaped_quotes_in_value() {
    let parsed = parse_tags(r#"arg:"cwd" short:"c" help:"Current \"working directory\"""#);
    assert_eq!(parsed["help"], r#"Current "working directory""#);
    assert_eq!(parsed.len(), 3);
}

#[test]
fn colons_in_value() {
    let parsed = parse_tags(
        r#"arg:"cwd" short:"c" default:"http://127.0.0.1:3888" help:"Current \"working directory\"""#,
    );
    assert_eq!(
        parsed,
        tags(&[
            ("arg", "cwd"),
            ("short", "c"),
            ("default", "http://127.0.0.1:3888"),
            ("help", r#"Current "working directory""#),
        ])
    );
}

#[test]
fn empty_string_yields_empty_map() {
    assert!(parse_tags("").is_empty());
    assert!(parse_tags("   \t ").is_empty());
}

#[test]
fn names_and_values_are_trimmed() {
    let parsed = parse_tags(r#"  json :"  field_1 "   yaml:"f1""#);
    assert_eq!(parsed, tags(&[("json", "field_1"), ("yaml", "f1")]));
}

#[test]
fn later_duplicates_overwrite() {
    let parsed = parse_tags(r#"arg:"first" arg:"second""#);
    assert_eq!(parsed, tags(&[("arg", "second")]));
}

#[test]
fn pairs_without_separating_whitespace() {
    let parsed = parse_tags(r#"arg:"a"short:"b""#);
    assert_eq!(parsed, tags(&[("arg", "a"), ("short", "b")]));
}

#[test]
fn unterminated_quote_is_dropped() {
    let scan = scan_tags(r#"arg:"cwd" help:"never closed"#);
    assert_eq!(scan.tags, tags(&[("arg", "cwd")]));
    assert_eq!(scan.dropped.as_deref(), Some(r#"help:"never closed"#));

    // The runtime entry point keeps the committed pairs only.
    assert_eq!(parse_tags(r#"arg:"cwd" help:"never closed"#), scan.tags);
}

#[test]
fn trailing_escaped_quote_does_not_close_value() {
    let scan = scan_tags(r#"help:"ends with \""#);
    assert!(scan.tags.is_empty());
    assert!(scan.dropped.is_some());
}

#[test]
fn name_without_value_is_dropped() {
    let scan = scan_tags(r#"json:"ok" dangling"#);
    assert_eq!(scan.tags, tags(&[("json", "ok")]));
    assert_eq!(scan.dropped.as_deref(), Some("dangling"));
}

#[test]
fn complete_tag_reports_nothing_dropped() {
    assert_eq!(scan_tags(r#"env:"PORT""#).dropped, None);
}

#[test]
fn rules_split_on_pipe_colon_and_comma() {
    let rules = parse_rules("required|oneof:debug,info, warn|min:3");
    assert_eq!(
        rules,
        vec![
            Rule::new("required"),
            Rule::with_args("oneof", ["debug", "info", "warn"]),
            Rule::with_args("min", ["3"]),
        ]
    );
}

#[test]
fn rule_args_keep_later_colons() {
    let rules = parse_rules("match:^a:b$");
    assert_eq!(rules, vec![Rule::with_args("match", ["^a:b$"])]);
}

#[test]
fn empty_rule_segments_are_skipped() {
    assert!(parse_rules("").is_empty());
    assert_eq!(parse_rules("required||"), vec![Rule::new("required")]);
}

#[test]
fn rule_display_round_trips_through_parser() {
    let rule = Rule::with_args("oneof", ["a", "b"]);
    assert_eq!(rule.to_string(), "oneof:a,b");
    assert_eq!(parse_rules(&rule.to_string()), vec![rule]);
    assert_eq!(Rule::new("required").to_string(), "required");
}

#[test]
fn env_joins_with_underscore() {
    assert_eq!(join_separator("env"), "_");
    assert_eq!(join_separator("arg"), ".");
    assert_eq!(join_separator("json"), ".");
}

#[test]
fn reserved_namespaces() {
    assert!(is_reserved("default"));
    assert!(is_reserved("rules"));
    assert!(!is_reserved("env"));
    assert!(!is_reserved("json"));
}

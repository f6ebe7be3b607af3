//! Tests for rule validation.

use tagbind::validation::rules::{REQUIRED, required};
use tagbind::{
    BindError, FieldTree, Inputs, Record, RuleRegistry, Slot, Value, Violations, build_tree, inputs,
    validate,
};

#[derive(Debug, Default, Record)]
struct WithRules {
    #[tag(r#"json:"field_1" rules:"required""#)]
    field1: String,
    #[tag(r#"json:"field_2" rules:"required""#)]
    field2: i64,
}

fn run(record: &mut dyn Record, registry: &RuleRegistry, inputs: &Inputs) -> Violations {
    let tree = FieldTree::from_record(record).unwrap();
    validate(registry, &tree, record, inputs, "json", &["json"]).unwrap()
}

fn codes(pairs: &[(&str, &[&str])]) -> Violations {
    pairs
        .iter()
        .map(|(key, codes)| {
            (
                key.to_string(),
                codes.iter().map(ToString::to_string).collect(),
            )
        })
        .collect()
}

#[test]
fn all_fields_valid() {
    let mut record = WithRules::default();
    let inputs = inputs! { "field_1" => "field_1_value", "field_2" => "field_2_value" };

    let violations = run(&mut record, &RuleRegistry::default(), &inputs);

    assert!(violations.is_empty());
}

#[test]
fn one_field_invalid() {
    let mut record = WithRules::default();
    let inputs = inputs! { "field_2" => "field_2_value" };

    let violations = run(&mut record, &RuleRegistry::default(), &inputs);

    assert_eq!(violations, codes(&[("field_1", &["required"])]));
}

#[test]
fn all_fields_invalid() {
    let mut record = WithRules::default();

    let violations = run(&mut record, &RuleRegistry::default(), &Inputs::new());

    assert_eq!(
        violations,
        codes(&[("field_1", &["required"]), ("field_2", &["required"])])
    );
}

#[test]
fn blank_string_counts_as_missing() {
    let mut record = WithRules::default();
    let inputs = inputs! { "field_1" => "   ", "field_2" => 3 };

    let violations = run(&mut record, &RuleRegistry::default(), &inputs);

    assert_eq!(violations, codes(&[("field_1", &["required"])]));
}

#[test]
fn live_value_satisfies_required() {
    let mut record = WithRules {
        field1: "already set".to_string(),
        field2: 4,
    };

    let violations = run(&mut record, &RuleRegistry::default(), &Inputs::new());

    assert!(violations.is_empty());
}

#[derive(Debug, Default, Record)]
struct WithDefault {
    #[tag(r#"json:"level" default:"info" rules:"required""#)]
    level: String,
}

#[test]
fn default_satisfies_required() {
    let mut record = WithDefault::default();

    let blank = run(&mut record, &RuleRegistry::default(), &inputs! { "level" => "" });
    let absent = run(&mut record, &RuleRegistry::default(), &Inputs::new());

    assert!(blank.is_empty());
    assert!(absent.is_empty());
}

#[test]
fn name_falls_back_to_field_name() {
    #[derive(Debug, Default, Record)]
    struct Untagged {
        #[tag(r#"rules:"required""#)]
        token: String,
    }

    let mut record = Untagged::default();
    let violations = run(&mut record, &RuleRegistry::default(), &Inputs::new());

    assert_eq!(violations, codes(&[("token", &["required"])]));
}

#[test]
fn violations_are_keyed_by_message_tag() {
    #[derive(Debug, Default, Record)]
    struct Request {
        #[tag(r#"arg:"user-name" json:"userName" rules:"required""#)]
        user_name: String,
    }

    let mut record = Request::default();
    let tree = build_tree(&mut record).unwrap();
    let violations = validate(
        &RuleRegistry::default(),
        &tree,
        &record,
        &Inputs::new(),
        "json",
        &["arg"],
    )
    .unwrap();

    assert_eq!(violations, codes(&[("userName", &["required"])]));
}

fn one_of(field: &str, inputs: &Inputs, _default: &str, _value: &dyn Slot, args: &[String]) -> Violations {
    let allowed = inputs
        .get(field)
        .and_then(Value::as_str)
        .is_none_or(|value| args.iter().any(|arg| arg == value));
    if allowed {
        Violations::new()
    } else {
        Violations::from([(field.to_string(), vec!["oneof".to_string()])])
    }
}

#[derive(Debug, Default, Record)]
struct Logging {
    #[tag(r#"json:"level" rules:"required|oneof:debug,info""#)]
    level: String,
}

#[test]
fn custom_rules_receive_arguments() {
    let registry = RuleRegistry::default().with("oneof", one_of);
    let mut record = Logging::default();

    let ok = run(&mut record, &registry, &inputs! { "level" => "debug" });
    let bad = run(&mut record, &registry, &inputs! { "level" => "trace" });

    assert!(ok.is_empty());
    assert_eq!(bad, codes(&[("level", &["oneof"])]));
}

#[test]
fn codes_accumulate_in_rule_order() {
    fn always(field: &str, _: &Inputs, _: &str, _: &dyn Slot, _: &[String]) -> Violations {
        Violations::from([(field.to_string(), vec!["oneof".to_string()])])
    }

    let registry = RuleRegistry::default().with("oneof", always);
    let mut record = Logging::default();

    let violations = run(&mut record, &registry, &Inputs::new());

    assert_eq!(violations, codes(&[("level", &["required", "oneof"])]));
}

#[test]
fn unknown_rule_is_an_error_with_suggestions() {
    #[derive(Debug, Default, Record)]
    struct Typo {
        #[tag(r#"json:"name" rules:"requird""#)]
        name: String,
    }

    let mut record = Typo::default();
    let tree = build_tree(&mut record).unwrap();
    let err = validate(
        &RuleRegistry::default(),
        &tree,
        &record,
        &Inputs::new(),
        "json",
        &["json"],
    )
    .unwrap_err();

    let BindError::UnknownRule {
        field,
        rule,
        suggestions,
    } = &err
    else {
        panic!("expected an unknown rule error");
    };
    assert_eq!(field, "name");
    assert_eq!(rule, "requird");
    assert_eq!(suggestions, &["required"]);
    assert_eq!(
        err.to_string(),
        "field 'name' declares unknown rule 'requird'; did you mean: required?"
    );
}

#[test]
fn empty_registry_knows_no_rules() {
    let registry = RuleRegistry::new();
    assert!(!registry.contains(REQUIRED));
    assert!(registry.get(REQUIRED).is_none());

    let mut registry = registry;
    assert!(registry.register(REQUIRED, required).is_none());
    assert!(registry.register(REQUIRED, required).is_some());
    assert_eq!(registry.names().collect::<Vec<_>>(), [REQUIRED]);
}

#[test]
fn repeated_validation_is_stable() {
    let mut record = WithDefault::default();
    let mut required = WithRules::default();
    let inputs = inputs! { "field_2" => 7, "level" => "" };

    let tree = build_tree(&mut required).unwrap();
    let first = validate(&RuleRegistry::default(), &tree, &required, &inputs, "json", &["json"]).unwrap();
    let second = validate(&RuleRegistry::default(), &tree, &required, &inputs, "json", &["json"]).unwrap();

    assert_eq!(first, codes(&[("field_1", &["required"])]));
    assert_eq!(first, second);
    assert_eq!(run(&mut record, &RuleRegistry::default(), &inputs), run(&mut record, &RuleRegistry::default(), &inputs));
}

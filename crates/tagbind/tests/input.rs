//! Tests for input harvesting.

use std::collections::BTreeMap;
use std::fs;

use tagbind::input::{Bag, args_to_map, env_to_map, read_json};
use tagbind::{InputError, Value};

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn args_support_equals_space_and_bare_flags() {
    let args = args_to_map(["--outer=5", "-i", "inner", "--verbose", "--count", "-1"]);

    assert_eq!(
        args,
        map(&[("outer", "5"), ("i", "inner"), ("verbose", "true"), ("count", "-1")])
    );
}

#[test]
fn args_ignore_stray_positionals() {
    let args = args_to_map(["run", "--name", "x", "extra"]);
    assert_eq!(args, map(&[("name", "x")]));
}

#[test]
fn args_keep_equals_inside_values() {
    let args = args_to_map(["--filter=a=b"]);
    assert_eq!(args["filter"], "a=b");
}

#[test]
fn trailing_flag_is_true() {
    let args = args_to_map(["--name", "--debug"]);
    assert_eq!(args, map(&[("name", "true"), ("debug", "true")]));
}

#[test]
fn collect_namespaces_env_and_data() {
    let bag = Bag {
        env: map(&[("HOME", "/root")]),
        data: map(&[("user", "jane")]),
        args: map(&[("port", "80")]),
        headers: map(&[("accept", "json")]),
        request: map(&[("port", "81")]),
    };

    let inputs = bag.collect();

    assert_eq!(inputs["HOME"], Value::from("/root"));
    assert_eq!(inputs["env.home"], Value::from("/root"));
    assert_eq!(inputs["data.user"], Value::from("jane"));
    assert_eq!(inputs["accept"], Value::from("json"));
    // Request parameters are collected last.
    assert_eq!(inputs["port"], Value::from("81"));
    assert!(!inputs.contains_key("user"));
}

#[test]
fn getters_prefer_args_then_data_then_env() {
    let bag = Bag {
        args: map(&[("level", "debug")]),
        data: map(&[("level", "info"), ("retries", "3")]),
        env: map(&[("retries", "5"), ("enabled", "yes")]),
        ..Bag::default()
    };

    assert_eq!(bag.get_string("level").unwrap(), "debug");
    assert_eq!(bag.get_int("retries").unwrap(), 3);
    assert!(bag.get_bool("enabled").unwrap());
}

#[test]
fn getters_retry_lowercase() {
    let bag = Bag {
        headers: map(&[("token", "abc")]),
        ..Bag::default()
    };

    assert_eq!(bag.get_string("TOKEN").unwrap(), "abc");
}

#[test]
fn getter_errors() {
    let bag = Bag {
        args: map(&[("port", "eighty")]),
        ..Bag::default()
    };

    assert!(matches!(
        bag.get_string("missing"),
        Err(InputError::NotFound { ref name }) if name == "missing"
    ));
    let err = bag.get_int("port").unwrap_err();
    assert_eq!(err.to_string(), "input 'port' is not an integer: 'eighty'");
}

#[test]
fn read_json_keeps_nesting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inputs.json");
    fs::write(&path, r#"{ "server": { "port": 8080 }, "debug": true }"#).unwrap();

    let inputs = read_json(&path).unwrap();

    assert_eq!(inputs["debug"], Value::Bool(true));
    assert_eq!(
        tagbind::lookup(&inputs, "server.port"),
        Some(&Value::Int(8080))
    );
}

#[test]
fn read_json_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = read_json(&path).unwrap_err();

    assert!(matches!(err, InputError::Json { .. }));
    assert!(err.to_string().contains("broken.json"));

    let missing = read_json(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(missing, InputError::Io { .. }));
}

#[test]
fn from_process_captures_the_environment() {
    let bag = Bag::from_process();

    assert_eq!(bag.env, env_to_map());
    assert!(bag.data.is_empty());
    assert!(bag.headers.is_empty());
    assert!(bag.request.is_empty());
}

//! Tests for the one-stop binder.

use tagbind::{BindError, Binder, DEFAULT_TAGS, Inputs, Record, RuleRegistry, Settings, inputs};

#[derive(Debug, Default, PartialEq, Record)]
struct Signup {
    #[tag(r#"arg:"user" json:"user_name" rules:"required""#)]
    user_name: String,
    #[tag(r#"json:"age" rules:"required""#)]
    age: u8,
    #[tag(r#"short:"n" json:"newsletter" default:"yes""#)]
    newsletter: bool,
}

#[test]
fn default_binder_uses_builtin_tags() {
    let binder = Binder::default();

    assert_eq!(
        binder.settings(),
        Settings {
            tag_order: DEFAULT_TAGS.iter().map(ToString::to_string).collect(),
            allow_env_override: false,
            allow_tag_override: false,
        }
    );
    assert!(binder.rules().contains("required"));
}

#[test]
fn bind_sets_fields_when_valid() {
    let binder = Binder::default();
    let mut signup = Signup::default();

    let violations = binder
        .bind(&mut signup, &inputs! { "user" => "jane", "age" => "30" })
        .unwrap();

    assert!(violations.is_empty());
    assert_eq!(
        signup,
        Signup {
            user_name: "jane".to_string(),
            age: 30,
            newsletter: true,
        }
    );
}

#[test]
fn bind_reports_violations_without_setting() {
    let binder = Binder::default();
    let mut signup = Signup::default();

    let violations = binder.bind(&mut signup, &inputs! { "age" => 30 }).unwrap();

    assert_eq!(violations["user_name"], ["required"]);
    assert_eq!(signup, Signup::default());
}

#[test]
fn message_tag_is_configurable() {
    let binder = Binder::builder().message_tag("arg").build();
    let mut signup = Signup::default();

    let violations = binder.validate(&mut signup, &Inputs::new()).unwrap();

    let keys: Vec<&str> = violations.keys().map(String::as_str).collect();
    assert_eq!(keys, ["age", "user"]);
}

#[test]
fn custom_tag_order() {
    let binder = Binder::builder().tags(vec!["short".to_string()]).build();
    let mut signup = Signup::default();

    binder
        .set(&mut signup, &inputs! { "n" => "no", "newsletter" => "yes" })
        .unwrap();

    assert!(!signup.newsletter);
}

#[test]
fn empty_registry_rejects_declared_rules() {
    let binder = Binder::builder().rules(RuleRegistry::new()).build();
    let mut signup = Signup::default();

    let err = binder.validate(&mut signup, &Inputs::new()).unwrap_err();

    assert!(matches!(err, BindError::UnknownRule { .. }));
}

#[test]
fn shared_references_are_rejected() {
    let binder = Binder::default();
    let signup = Signup::default();

    assert!(matches!(
        binder.validate(&signup, &Inputs::new()),
        Err(BindError::NotAPointer)
    ));
    assert!(matches!(
        binder.set(&signup, &Inputs::new()),
        Err(BindError::NotAPointer)
    ));
}

#[test]
fn env_keys_name_fields_without_arg_tags() {
    #[derive(Debug, Default, Record)]
    struct Service {
        #[tag(r#"env:"SERVICE_TOKEN" json:"token" rules:"required""#)]
        token: String,
    }

    let binder = Binder::default();
    let mut service = Service::default();

    let violations = binder
        .bind(&mut service, &inputs! { "SERVICE_TOKEN" => "secret" })
        .unwrap();

    assert!(violations.is_empty());
    assert_eq!(service.token, "secret");
}

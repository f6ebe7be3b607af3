// Test basic derive usage compiles successfully
use tagbind::{Kind, Record, Slot};

#[derive(Default, Record)]
struct Config {
    #[tag(r#"env:"HOST" default:"localhost""#)]
    host: String,
    #[tag(r#"env:"PORT" rules:"required""#)]
    port: u16,
    verbose: bool,
}

fn main() {
    let config = Config::default();
    assert_eq!(config.kind(), Kind::Struct);
    assert!(config.is_zero());

    let fields = config.declared_fields();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].name, "host");
    assert_eq!(fields[0].tag, r#"env:"HOST" default:"localhost""#);
    assert_eq!(fields[2].tag, "");
    assert!(config.field(3).is_none());
}

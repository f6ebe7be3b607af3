// Test raw identifiers are declared without their prefix
use tagbind::Record;

#[derive(Default, Record)]
struct Options {
    #[tag(r#"arg:"type""#)]
    r#type: String,
    #[tag("json:\"match\"")]
    r#match: Vec<String>,
}

fn main() {
    let options = Options::default();
    let names: Vec<&str> = options.declared_fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["type", "match"]);
}

// Test container and optional field types derive successfully
use std::collections::{BTreeMap, HashMap};

use tagbind::{Kind, Record, Slot, Value};

#[derive(Default, Record)]
struct Containers {
    tags: Vec<String>,
    labels: BTreeMap<String, String>,
    limits: HashMap<String, i64>,
    timeout: Option<f64>,
    extra: Value,
}

fn main() {
    let containers = Containers::default();
    let kinds: Vec<Kind> = (0..5)
        .filter_map(|i| containers.field(i))
        .map(|slot| slot.kind())
        .collect();
    assert_eq!(kinds.len(), 5);
    assert_eq!(kinds[0], Kind::Slice);
    assert_eq!(kinds[1], Kind::Map);
    assert_eq!(kinds[4], Kind::Any);
    assert!(matches!(containers.value(), Value::Map(_)));
}

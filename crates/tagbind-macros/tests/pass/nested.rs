// Test nested records expose their fields through as_record
use tagbind::{Record, Slot};

#[derive(Default, Record)]
struct Inner {
    #[tag(r#"env:"COMPLEX_FLAG""#)]
    complex_flag: String,
}

#[derive(Default, Record)]
struct Outer {
    #[tag(r#"env:"INNER""#)]
    inner: Inner,
    outer: i64,
}

fn main() {
    let mut outer = Outer::default();
    let inner = outer.field(0).and_then(|slot| slot.as_record());
    assert_eq!(inner.map(|r| r.declared_fields().len()), Some(1));

    let slot = outer
        .field_mut(0)
        .and_then(|slot| slot.as_record_mut())
        .and_then(|record| record.field_mut(0));
    if let Some(slot) = slot {
        slot.set("set".into()).unwrap();
    }
    assert_eq!(outer.inner.complex_flag, "set");
    assert!(!outer.is_zero());
}

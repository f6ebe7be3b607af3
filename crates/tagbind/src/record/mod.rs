//! The reflection capability the binder works through.
//!
//! Records expose their declared fields by index through [`Record`], and every
//! field value is reached as a [`Slot`]. `#[derive(Record)]` generates both
//! for structs; scalar and container types get [`Slot`] from this module.

mod coerce;

pub use coerce::{FromValue, parse_bool};

use crate::types::{Kind, Value};
use crate::CoercionError;

/// A declared field: its identifier and its raw tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: &'static str,
    pub tag: &'static str,
}

impl FieldDecl {
    pub const fn new(name: &'static str, tag: &'static str) -> Self {
        Self { name, tag }
    }
}

/// A live, typed storage location inside a record.
pub trait Slot {
    /// The semantic kind of the stored value.
    fn kind(&self) -> Kind;

    /// Whether the stored value is the zero value for its kind.
    fn is_zero(&self) -> bool;

    /// A dynamic copy of the stored value.
    fn value(&self) -> Value;

    /// Coerce `value` to the slot's type and store it.
    fn set(&mut self, _value: Value) -> Result<(), CoercionError> {
        Err(CoercionError::Unsupported { kind: self.kind() })
    }

    /// The slot viewed as a nested record, if it is one.
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    /// The slot viewed as a mutable nested record, if it is one.
    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

/// A structured record whose fields can be enumerated in declaration order.
pub trait Record: Slot {
    /// Declared fields, in declaration order.
    fn declared_fields(&self) -> &'static [FieldDecl];

    /// The slot of the field at `index`.
    fn field(&self, index: usize) -> Option<&dyn Slot>;

    /// The mutable slot of the field at `index`.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Slot>;
}

/// Follow an index path from `root` to a field slot.
pub fn slot_at<'a>(root: &'a dyn Record, path: &[usize]) -> Option<&'a dyn Slot> {
    let (last, parents) = path.split_last()?;
    let mut record = root;
    for &index in parents {
        record = record.field(index)?.as_record()?;
    }
    record.field(*last)
}

/// Follow an index path from `root` to a mutable field slot.
pub fn slot_at_mut<'a>(root: &'a mut dyn Record, path: &[usize]) -> Option<&'a mut dyn Slot> {
    let (last, parents) = path.split_last()?;
    let mut record = root;
    for &index in parents {
        record = record.field_mut(index)?.as_record_mut()?;
    }
    record.field_mut(*last)
}

/// The value handed to the binder's entry points.
///
/// Binding needs exclusive access to a record. A shared borrow converts into
/// [`Target::Shared`] and is rejected with
/// [`BindError::NotAPointer`](crate::BindError::NotAPointer).
pub enum Target<'a> {
    Shared(&'a dyn Slot),
    Exclusive(&'a mut dyn Slot),
}

impl<'a> Target<'a> {
    /// Kind of the referenced value.
    pub fn kind(&self) -> Kind {
        match self {
            Target::Shared(slot) => slot.kind(),
            Target::Exclusive(slot) => slot.kind(),
        }
    }
}

impl<'a, T: Slot + 'a> From<&'a T> for Target<'a> {
    fn from(slot: &'a T) -> Self {
        Target::Shared(slot)
    }
}

impl<'a, T: Slot + 'a> From<&'a mut T> for Target<'a> {
    fn from(slot: &'a mut T) -> Self {
        Target::Exclusive(slot)
    }
}

//! Plain-text rendering of a field tree, one field per line.

use std::fmt::{Display, Formatter, Result as FmtResult};

use tagbind_semantics::TagMap;

use super::{Field, FieldId, FieldTree};

impl Display for FieldTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for &root in self.roots() {
            self.render_node(f, root, 0)?;
        }
        Ok(())
    }
}

impl FieldTree {
    fn render_node(&self, f: &mut Formatter<'_>, id: FieldId, depth: usize) -> FmtResult {
        let field = self.get(id);
        writeln!(f, "{}{}", "  ".repeat(depth), FieldLine(field))?;
        for &child in &field.fields {
            self.render_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

struct FieldLine<'a>(&'a Field);

impl Display for FieldLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let field = self.0;
        write!(f, "{}: {}", field.name, field.kind)?;
        if !field.tags.is_empty() {
            write!(f, " {}", TagList(&field.tags))?;
        }
        if field.has_default() {
            write!(f, " = {:?}", field.default)?;
        }
        if !field.rules.is_empty() {
            let rules: Vec<String> = field.rules.iter().map(ToString::to_string).collect();
            write!(f, " rules({})", rules.join("|"))?;
        }
        if let Some(fqn) = &field.fqn {
            write!(f, " -> {}", fqn.name)?;
            if !fqn.tags.is_empty() {
                write!(f, " {}", TagList(&fqn.tags))?;
            }
        }
        Ok(())
    }
}

struct TagList<'a>(&'a TagMap);

impl Display for TagList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let pairs: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}={v}")).collect();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}

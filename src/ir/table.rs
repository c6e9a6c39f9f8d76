//! Match-action table declarations and their named properties.

use ahash::AHashMap;

use super::annotation::{Annotation, find_annotation};
use super::diagnostic::SourceSpan;
use super::expr::Expression;

/// One element of a table's match key.
#[derive(Debug, Clone)]
pub struct KeyElement {
    pub expr: Expression,
    pub match_kind: String,
}

/// Tagged value of a table property. Control-plane queries only interpret
/// the `Expression` kind; the structured kinds exist so a wrongly-typed
/// property is observable as such.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Expression(Expression),
    Key(Vec<KeyElement>),
    ActionList(Vec<String>),
}

/// A named attribute of a table declaration (`size`, an attached counter,
/// an action selector reference, ...).
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
    pub annotations: Vec<Annotation>,
    pub span: Option<SourceSpan>,
}

impl Property {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
            annotations: Vec::new(),
            span: None,
        }
    }

    pub fn get_annotation(&self, name: &str) -> Option<&Annotation> {
        find_annotation(&self.annotations, name)
    }

    /// Value of this property's `@name` annotation, when present.
    pub fn name_annotation(&self) -> Option<&str> {
        self.get_annotation(Annotation::NAME)
            .and_then(Annotation::string_argument)
    }

    /// Name the control plane uses for this property: the `@name` override
    /// when present, the declared name otherwise.
    pub fn control_plane_name(&self) -> &str {
        self.name_annotation().unwrap_or(&self.name)
    }
}

/// Declaration-ordered property storage with by-name lookup.
#[derive(Debug, Clone, Default)]
pub struct TableProperties {
    entries: Vec<Property>,
    index: AHashMap<String, usize>,
}

impl TableProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: Property) {
        let slot = self.entries.len();
        self.index.entry(property.name.clone()).or_insert(slot);
        self.entries.push(property);
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.index.get(name).map(|slot| &self.entries[*slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A match-action table declaration as seen by control-plane queries.
/// Owned by the enclosing program IR; this crate only reads it.
#[derive(Debug, Clone)]
pub struct TableDecl {
    pub name: String,
    pub properties: TableProperties,
    pub annotations: Vec<Annotation>,
    pub span: Option<SourceSpan>,
}

impl TableDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: TableProperties::new(),
            annotations: Vec::new(),
            span: None,
        }
    }

    pub fn get_annotation(&self, name: &str) -> Option<&Annotation> {
        find_annotation(&self.annotations, name)
    }

    pub fn name_annotation(&self) -> Option<&str> {
        self.get_annotation(Annotation::NAME)
            .and_then(Annotation::string_argument)
    }

    pub fn control_plane_name(&self) -> &str {
        self.name_annotation().unwrap_or(&self.name)
    }
}

//! Read-only view of the data-plane IR consumed by control-plane queries.
//! The frontend owns parsing, type checking, and construction of these
//! nodes; this crate never mutates them.

pub mod annotation;
pub mod diagnostic;
pub mod expr;
pub mod table;

pub use annotation::{Annotation, find_annotation};
pub use diagnostic::{
    Diagnostic, DiagnosticLevel, DiagnosticSink, SourcePosition, SourceSpan,
};
pub use expr::Expression;
pub use table::{KeyElement, Property, PropertyValue, TableDecl, TableProperties};

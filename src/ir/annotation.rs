//! Declaration-level annotations carrying control-plane-facing hints.

use smallvec::SmallVec;

use super::diagnostic::SourceSpan;
use super::expr::Expression;

/// An annotation attached to a declaration: `@name(positional..., key=value...)`.
///
/// Both argument groups keep declaration order; serialization depends on it.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub name: String,
    pub exprs: SmallVec<[Expression; 4]>,
    pub kvs: Vec<(String, Expression)>,
    pub span: Option<SourceSpan>,
}

impl Annotation {
    /// Well-known identifier of the annotation that overrides a declaration's
    /// control-plane name.
    pub const NAME: &'static str = "name";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exprs: SmallVec::new(),
            kvs: Vec::new(),
            span: None,
        }
    }

    /// Builds a `@name("value")` annotation.
    pub fn name_annotation(value: impl Into<String>) -> Self {
        let mut annotation = Self::new(Self::NAME);
        annotation.exprs.push(Expression::string(value));
        annotation
    }

    pub fn push_expr(&mut self, expr: Expression) {
        self.exprs.push(expr);
    }

    pub fn push_kv(&mut self, key: impl Into<String>, value: Expression) {
        self.kvs.push((key.into(), value));
    }

    /// The single positional string argument, when the annotation has exactly
    /// that shape. This is how `@name("...")` carries its override.
    pub fn string_argument(&self) -> Option<&str> {
        if self.exprs.len() != 1 || !self.kvs.is_empty() {
            return None;
        }
        self.exprs[0].as_string_literal()
    }
}

/// First annotation with the given identifier, in declaration order.
pub fn find_annotation<'a>(annotations: &'a [Annotation], name: &str) -> Option<&'a Annotation> {
    annotations.iter().find(|annotation| annotation.name == name)
}

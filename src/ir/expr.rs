//! Expression nodes of the data-plane IR, as seen by control-plane queries.
//!
//! This is a read-only view: the frontend owns construction and type
//! checking. Only constants and constructor calls are interpreted by the
//! queries in [`crate::ctl`]; every other shape is carried through so the
//! renderer can still print it.

use super::diagnostic::SourceSpan;

#[derive(Debug, Clone)]
pub enum Expression {
    Constant {
        value: i64,
        /// Bit width of the literal when the source spelled one (`8w42`).
        width: Option<u16>,
        span: Option<SourceSpan>,
    },
    StringLiteral {
        value: String,
        span: Option<SourceSpan>,
    },
    BoolLiteral {
        value: bool,
        span: Option<SourceSpan>,
    },
    /// Reference to a previously declared entity by name.
    PathRef {
        name: String,
        span: Option<SourceSpan>,
    },
    Member {
        base: Box<Expression>,
        member: String,
        span: Option<SourceSpan>,
    },
    /// In-place construction of an extern resource, e.g. `Counter(1024)`.
    ConstructorCall {
        type_name: String,
        arguments: Vec<Expression>,
        span: Option<SourceSpan>,
    },
}

impl Expression {
    pub fn constant(value: i64) -> Self {
        Expression::Constant {
            value,
            width: None,
            span: None,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral {
            value: value.into(),
            span: None,
        }
    }

    pub fn path(name: impl Into<String>) -> Self {
        Expression::PathRef {
            name: name.into(),
            span: None,
        }
    }

    pub fn constructor(type_name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::ConstructorCall {
            type_name: type_name.into(),
            arguments,
            span: None,
        }
    }

    pub fn span(&self) -> Option<&SourceSpan> {
        match self {
            Expression::Constant { span, .. }
            | Expression::StringLiteral { span, .. }
            | Expression::BoolLiteral { span, .. }
            | Expression::PathRef { span, .. }
            | Expression::Member { span, .. }
            | Expression::ConstructorCall { span, .. } => span.as_ref(),
        }
    }

    /// The literal value when this node is a constant, converted to a signed
    /// 64-bit integer.
    pub fn as_constant(&self) -> Option<i64> {
        match self {
            Expression::Constant { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Expression::StringLiteral { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_constructor_call(&self) -> bool {
        matches!(self, Expression::ConstructorCall { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_shape_checks() {
        let expr = Expression::constant(-7);
        assert_eq!(expr.as_constant(), Some(-7));
        assert!(!expr.is_constructor_call());
    }

    #[test]
    fn constructor_shape_checks() {
        let expr = Expression::constructor("Counter", vec![Expression::constant(1024)]);
        assert!(expr.is_constructor_call());
        assert_eq!(expr.as_constant(), None);
    }
}

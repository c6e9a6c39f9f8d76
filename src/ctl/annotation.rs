//! Canonical textual serialization of declaration annotations.
//!
//! The generated control-plane description embeds annotations as plain
//! strings; downstream tooling diffs and hashes them, so the rendering must
//! be byte-stable for a given input.

use crate::ir::annotation::Annotation;
use crate::ir::expr::Expression;

/// Capability interface for turning an expression into its canonical source
/// text. Implementations must be deterministic and total over well-typed
/// expressions.
pub trait ExpressionRenderer {
    fn render(&self, expr: &Expression) -> String;
}

/// Serializes one annotation as `@name(pos1, pos2, key1=val1, ...)`.
///
/// Positional arguments come first in declaration order, then key/value
/// pairs in declaration order, with a single ", " between the two groups
/// when both are present. An argument-less annotation renders as `@name()`.
pub fn serialize_annotation<R: ExpressionRenderer + ?Sized>(
    annotation: &Annotation,
    renderer: &R,
) -> String {
    let mut out = String::with_capacity(annotation.name.len() + 16);
    out.push('@');
    out.push_str(&annotation.name);
    out.push('(');
    for (position, expr) in annotation.exprs.iter().enumerate() {
        if position > 0 {
            out.push_str(", ");
        }
        out.push_str(&renderer.render(expr));
    }
    if !annotation.exprs.is_empty() && !annotation.kvs.is_empty() {
        out.push_str(", ");
    }
    for (position, (key, value)) in annotation.kvs.iter().enumerate() {
        if position > 0 {
            out.push_str(", ");
        }
        out.push_str(key);
        out.push('=');
        out.push_str(&renderer.render(value));
    }
    out.push(')');
    out
}

/// Renderer that prints the canonical source form of every expression shape.
/// Callers with a richer frontend pretty-printer can substitute their own
/// [`ExpressionRenderer`]; this one is the shipped default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceRenderer;

impl SourceRenderer {
    fn render_into(&self, expr: &Expression, out: &mut String) {
        match expr {
            Expression::Constant { value, width, .. } => {
                if let Some(width) = width {
                    out.push_str(&format!("{width}w{value}"));
                } else {
                    out.push_str(&value.to_string());
                }
            }
            Expression::StringLiteral { value, .. } => {
                out.push('"');
                for ch in value.chars() {
                    if ch == '"' || ch == '\\' {
                        out.push('\\');
                    }
                    out.push(ch);
                }
                out.push('"');
            }
            Expression::BoolLiteral { value, .. } => {
                out.push_str(if *value { "true" } else { "false" });
            }
            Expression::PathRef { name, .. } => out.push_str(name),
            Expression::Member { base, member, .. } => {
                self.render_into(base, out);
                out.push('.');
                out.push_str(member);
            }
            Expression::ConstructorCall {
                type_name,
                arguments,
                ..
            } => {
                out.push_str(type_name);
                out.push('(');
                for (position, argument) in arguments.iter().enumerate() {
                    if position > 0 {
                        out.push_str(", ");
                    }
                    self.render_into(argument, out);
                }
                out.push(')');
            }
        }
    }
}

impl ExpressionRenderer for SourceRenderer {
    fn render(&self, expr: &Expression) -> String {
        let mut out = String::new();
        self.render_into(expr, &mut out);
        out
    }
}

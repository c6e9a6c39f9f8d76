//! Resolution of a table's declared capacity.

use crate::ir::diagnostic::DiagnosticSink;
use crate::ir::table::TableDecl;

use super::property::extract_property_expression;

/// Well-known name of the capacity property.
pub const SIZE_PROPERTY: &str = "size";

/// Architecture profile supplied by the caller. Only the default table size
/// matters to this crate; the constant is never hard-coded here because each
/// target architecture defines its own.
#[derive(Debug, Clone, Copy)]
pub struct ArchProfile {
    pub default_table_size: i64,
}

impl ArchProfile {
    pub fn new(default_table_size: i64) -> Self {
        Self { default_table_size }
    }

    pub fn table_size(&self, table: &TableDecl, sink: &mut DiagnosticSink) -> i64 {
        resolve_table_size(table, self.default_table_size, sink)
    }
}

/// Resolves the `size` property to a signed 64-bit capacity. Always yields a
/// value: a missing property, a non-constant value, and an explicit zero all
/// fall back to `default_size` (zero means "use the default", not a
/// zero-capacity table). Non-zero values pass through verbatim, negatives
/// included; range validation is a downstream concern.
pub fn resolve_table_size(table: &TableDecl, default_size: i64, sink: &mut DiagnosticSink) -> i64 {
    let Some(expr) = extract_property_expression(table, SIZE_PROPERTY, sink) else {
        return default_size;
    };
    let Some(size) = expr.as_constant() else {
        sink.error(
            "ctl.size-not-constant",
            format!(
                "expected a constant for the '{SIZE_PROPERTY}' property of table '{table_name}'",
                table_name = table.control_plane_name()
            ),
            expr.span().cloned(),
        );
        return default_size;
    };
    if size == 0 { default_size } else { size }
}

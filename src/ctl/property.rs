//! Retrieval of a named table property's value expression.

use crate::ir::diagnostic::DiagnosticSink;
use crate::ir::expr::Expression;
use crate::ir::table::{Property, PropertyValue, TableDecl};

/// Looks up `property_name` on `table` and returns its value expression.
///
/// A missing property is not an error: callers decide whether absence is
/// expected, so nothing is reported and `None` is returned. A property whose
/// value is not an expression is a usage error: exactly one diagnostic is
/// reported and `None` is returned.
pub fn extract_property_expression<'t>(
    table: &'t TableDecl,
    property_name: &str,
    sink: &mut DiagnosticSink,
) -> Option<&'t Expression> {
    extract_expression_property(table, property_name, sink).map(|(_, expr)| expr)
}

/// Same contract as [`extract_property_expression`], but hands back the
/// property node too, for callers that need its annotations.
pub(crate) fn extract_expression_property<'t>(
    table: &'t TableDecl,
    property_name: &str,
    sink: &mut DiagnosticSink,
) -> Option<(&'t Property, &'t Expression)> {
    let property = table.properties.get(property_name)?;
    match &property.value {
        PropertyValue::Expression(expr) => Some((property, expr)),
        _ => {
            sink.error(
                "ctl.property-not-expression",
                format!(
                    "expected the value of property '{property_name}' on table '{table_name}' \
                     to be an expression",
                    table_name = table.control_plane_name()
                ),
                property.span.clone(),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(property: Property) -> TableDecl {
        let mut table = TableDecl::new("ingress.acl");
        table.properties.push(property);
        table
    }

    #[test]
    fn missing_property_is_silent() {
        let table = TableDecl::new("ingress.acl");
        let mut sink = DiagnosticSink::new();
        assert!(extract_property_expression(&table, "size", &mut sink).is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn expression_property_is_returned() {
        let table = table_with(Property::new(
            "size",
            PropertyValue::Expression(Expression::constant(512)),
        ));
        let mut sink = DiagnosticSink::new();
        let expr = extract_property_expression(&table, "size", &mut sink).expect("expression");
        assert_eq!(expr.as_constant(), Some(512));
        assert!(sink.is_empty());
    }

    #[test]
    fn wrong_kind_reports_exactly_one_diagnostic() {
        let table = table_with(Property::new(
            "actions",
            PropertyValue::ActionList(vec!["drop".into()]),
        ));
        let mut sink = DiagnosticSink::new();
        assert!(extract_property_expression(&table, "actions", &mut sink).is_none());
        assert_eq!(sink.len(), 1);
        let diag = sink.iter().next().expect("diagnostic");
        assert_eq!(diag.code, "ctl.property-not-expression");
        assert!(diag.message.contains("ingress.acl"), "got {}", diag.message);
    }
}

//! Resolution of table properties that reference extern resources.
//!
//! A property such as an attached counter either constructs its resource
//! in place (`counters = Counter(1024)`) or references a prior declaration
//! by name (`counters = hit_stats`). Both forms resolve to a typed
//! [`ExternInstance`] descriptor; the actual symbol and type lookup lives
//! behind the [`ExternResolver`] seam.

use ahash::AHashMap;

use crate::ir::diagnostic::{DiagnosticSink, SourceSpan};
use crate::ir::expr::Expression;
use crate::ir::table::TableDecl;

use super::property::{extract_expression_property, extract_property_expression};

/// How an extern instance came into being at its use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionKind {
    InPlace,
    ByReference,
}

/// Fully resolved descriptor of an extern resource used by a table.
/// Produced fresh on every resolution call; never cached here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternInstance {
    pub type_name: String,
    pub control_plane_name: String,
    pub construction: ConstructionKind,
    pub span: Option<SourceSpan>,
}

/// Resolves an expression into an extern-instance descriptor. The
/// implementation owns whatever symbol table and type information it needs;
/// this crate only supplies the expression and the control-plane name to
/// use for the in-place case.
pub trait ExternResolver {
    fn resolve_instance(
        &self,
        expr: &Expression,
        control_plane_name: &str,
    ) -> Option<ExternInstance>;
}

/// Outcome of [`resolve_extern_property`]. The construction-kind flag is
/// meaningful even when `instance` is `None`: callers report failures
/// differently for the two forms.
#[derive(Debug, Clone)]
pub struct ExternResolution {
    pub instance: Option<ExternInstance>,
    pub constructed_in_place: bool,
}

impl ExternResolution {
    fn absent() -> Self {
        Self {
            instance: None,
            constructed_in_place: false,
        }
    }
}

/// Resolves the named table property into an extern-instance descriptor.
///
/// An in-place construction must carry an explicit `@name` annotation on the
/// property: the control plane needs a stable name for every resource, and
/// an anonymous construction has none. Violations are reported and resolve
/// to `None` while still flagging `constructed_in_place`.
pub fn resolve_extern_property<R: ExternResolver + ?Sized>(
    table: &TableDecl,
    property_name: &str,
    resolver: &R,
    sink: &mut DiagnosticSink,
) -> ExternResolution {
    let Some((property, expr)) = extract_expression_property(table, property_name, sink) else {
        return ExternResolution::absent();
    };
    let constructed_in_place = expr.is_constructor_call();

    if constructed_in_place && property.name_annotation().is_none() {
        sink.error(
            "ctl.anonymous-extern-property",
            format!(
                "table '{table_name}' has an anonymous property '{property_name}' with no \
                 name annotation, which the control plane cannot address",
                table_name = table.control_plane_name()
            ),
            property.span.clone(),
        );
        return ExternResolution {
            instance: None,
            constructed_in_place,
        };
    }

    let name = property.control_plane_name();
    let Some(instance) = resolver.resolve_instance(expr, name) else {
        sink.error(
            "ctl.unresolved-extern",
            format!(
                "expected the value of property '{property_name}' on table '{table_name}' \
                 to resolve to an extern instance",
                table_name = table.control_plane_name()
            ),
            property.span.clone(),
        );
        return ExternResolution {
            instance: None,
            constructed_in_place,
        };
    };

    ExternResolution {
        instance: Some(instance),
        constructed_in_place,
    }
}

/// Shape-only variant of [`resolve_extern_property`]: reports whether the
/// property's value is an in-place construction without resolving it.
///
/// Returns `false` both when the property is absent and when its value is
/// not an expression; the two conditions are deliberately not distinguished
/// (the wrong-kind case still reports its diagnostic through extraction).
pub fn is_extern_property_constructed_in_place(
    table: &TableDecl,
    property_name: &str,
    sink: &mut DiagnosticSink,
) -> bool {
    extract_property_expression(table, property_name, sink)
        .is_some_and(Expression::is_constructor_call)
}

#[derive(Debug, Clone)]
struct DeclaredInstance {
    type_name: String,
    control_plane_name: String,
}

/// Registry of previously declared extern instances, keyed by source name.
/// A minimal [`ExternResolver`] for callers that have no richer frontend
/// resolver at hand.
#[derive(Debug, Clone, Default)]
pub struct InstanceCatalog {
    declared: Vec<DeclaredInstance>,
    index: AHashMap<String, usize>,
}

impl InstanceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declared instance under its source-level name.
    pub fn declare(
        &mut self,
        source_name: impl Into<String>,
        type_name: impl Into<String>,
        control_plane_name: impl Into<String>,
    ) {
        let slot = self.declared.len();
        self.declared.push(DeclaredInstance {
            type_name: type_name.into(),
            control_plane_name: control_plane_name.into(),
        });
        self.index.entry(source_name.into()).or_insert(slot);
    }

    fn lookup(&self, source_name: &str) -> Option<&DeclaredInstance> {
        self.index.get(source_name).map(|slot| &self.declared[*slot])
    }
}

impl ExternResolver for InstanceCatalog {
    fn resolve_instance(
        &self,
        expr: &Expression,
        control_plane_name: &str,
    ) -> Option<ExternInstance> {
        match expr {
            Expression::PathRef { name, span } => {
                let declared = self.lookup(name)?;
                Some(ExternInstance {
                    type_name: declared.type_name.clone(),
                    control_plane_name: declared.control_plane_name.clone(),
                    construction: ConstructionKind::ByReference,
                    span: span.clone(),
                })
            }
            Expression::ConstructorCall {
                type_name, span, ..
            } => Some(ExternInstance {
                type_name: type_name.clone(),
                control_plane_name: control_plane_name.to_string(),
                construction: ConstructionKind::InPlace,
                span: span.clone(),
            }),
            _ => None,
        }
    }
}

//! End-to-end exercise of the control-plane queries over one realistic
//! table declaration, the way the API generator drives them.

use ctlmeta::ctl::{
    ArchProfile, ConstructionKind, ExternInstance, ExternResolver, InstanceCatalog,
    SourceRenderer, is_extern_property_constructed_in_place, resolve_extern_property,
    serialize_annotation,
};
use ctlmeta::ir::{
    Annotation, DiagnosticSink, Expression, Property, PropertyValue, TableDecl,
};

fn acl_table() -> TableDecl {
    let mut table = TableDecl::new("MyIngress.acl");
    table.annotations.push(Annotation::name_annotation("acl"));

    let mut pragma = Annotation::new("pragma");
    pragma.push_expr(Expression::string("stage"));
    pragma.push_kv("index", Expression::constant(2));
    table.annotations.push(pragma);

    table.properties.push(Property::new(
        "key",
        PropertyValue::Key(Vec::new()),
    ));
    table.properties.push(Property::new(
        "actions",
        PropertyValue::ActionList(vec!["permit".into(), "deny".into()]),
    ));
    table.properties.push(Property::new(
        "size",
        PropertyValue::Expression(Expression::constant(2048)),
    ));

    let mut counters = Property::new(
        "counters",
        PropertyValue::Expression(Expression::constructor(
            "DirectCounter",
            vec![Expression::path("CounterType.packets")],
        )),
    );
    counters
        .annotations
        .push(Annotation::name_annotation("acl_stats"));
    table.properties.push(counters);

    table.properties.push(Property::new(
        "meters",
        PropertyValue::Expression(Expression::path("rate_limiter")),
    ));

    table
}

fn catalog() -> InstanceCatalog {
    let mut catalog = InstanceCatalog::new();
    catalog.declare("rate_limiter", "DirectMeter", "MyIngress.rate_limiter");
    catalog
}

#[test]
fn generator_pass_over_one_table() {
    let table = acl_table();
    let catalog = catalog();
    let profile = ArchProfile::new(1024);
    let mut sink = DiagnosticSink::new();

    assert_eq!(table.control_plane_name(), "acl");
    assert_eq!(profile.table_size(&table, &mut sink), 2048);

    let counters = resolve_extern_property(&table, "counters", &catalog, &mut sink);
    let counters_instance = counters.instance.expect("counters resolve");
    assert!(counters.constructed_in_place);
    assert_eq!(counters_instance.type_name, "DirectCounter");
    assert_eq!(counters_instance.control_plane_name, "acl_stats");
    assert_eq!(counters_instance.construction, ConstructionKind::InPlace);

    let meters = resolve_extern_property(&table, "meters", &catalog, &mut sink);
    let meters_instance = meters.instance.expect("meters resolve");
    assert!(!meters.constructed_in_place);
    assert_eq!(meters_instance.control_plane_name, "MyIngress.rate_limiter");
    assert_eq!(meters_instance.construction, ConstructionKind::ByReference);

    // No implementation property attached, and that is fine.
    let implementation = resolve_extern_property(&table, "implementation", &catalog, &mut sink);
    assert!(implementation.instance.is_none());
    assert!(!implementation.constructed_in_place);

    let rendered: Vec<String> = table
        .annotations
        .iter()
        .map(|annotation| serialize_annotation(annotation, &SourceRenderer))
        .collect();
    assert_eq!(
        rendered,
        vec![
            "@name(\"acl\")".to_string(),
            "@pragma(\"stage\", index=2)".to_string(),
        ]
    );

    assert!(sink.is_empty(), "clean table must produce no diagnostics");
}

#[test]
fn diagnostics_accumulate_across_independent_failures() {
    let mut table = TableDecl::new("MyIngress.broken");
    // Capacity bound to a symbol the frontend never folded.
    table.properties.push(Property::new(
        "size",
        PropertyValue::Expression(Expression::path("TABLE_CAPACITY")),
    ));
    // Anonymous in-place construction: not addressable by the control plane.
    table.properties.push(Property::new(
        "counters",
        PropertyValue::Expression(Expression::constructor(
            "DirectCounter",
            vec![Expression::path("CounterType.bytes")],
        )),
    ));
    // Property of the wrong kind where an expression is required.
    table.properties.push(Property::new(
        "meters",
        PropertyValue::ActionList(vec!["meter".into()]),
    ));

    let catalog = catalog();
    let mut sink = DiagnosticSink::new();

    assert_eq!(ctlmeta::ctl::resolve_table_size(&table, 1024, &mut sink), 1024);
    let counters = resolve_extern_property(&table, "counters", &catalog, &mut sink);
    assert!(counters.instance.is_none());
    assert!(counters.constructed_in_place);
    let meters = resolve_extern_property(&table, "meters", &catalog, &mut sink);
    assert!(meters.instance.is_none());

    let codes: Vec<_> = sink.iter().map(|diag| diag.code).collect();
    assert_eq!(
        codes,
        vec![
            "ctl.size-not-constant",
            "ctl.anonymous-extern-property",
            "ctl.property-not-expression",
        ]
    );
    assert_eq!(sink.error_count(), 3);
}

#[test]
fn custom_resolver_plugs_into_the_seam() {
    struct FixedResolver;

    impl ExternResolver for FixedResolver {
        fn resolve_instance(
            &self,
            _expr: &Expression,
            control_plane_name: &str,
        ) -> Option<ExternInstance> {
            Some(ExternInstance {
                type_name: "ActionProfile".into(),
                control_plane_name: control_plane_name.to_string(),
                construction: ConstructionKind::ByReference,
                span: None,
            })
        }
    }

    let mut table = TableDecl::new("MyIngress.routes");
    table.properties.push(Property::new(
        "implementation",
        PropertyValue::Expression(Expression::path("ecmp_selector")),
    ));

    let mut sink = DiagnosticSink::new();
    assert!(!is_extern_property_constructed_in_place(
        &table,
        "implementation",
        &mut sink
    ));
    let resolution = resolve_extern_property(&table, "implementation", &FixedResolver, &mut sink);
    let instance = resolution.instance.expect("fixed resolver answers");
    assert_eq!(instance.type_name, "ActionProfile");
    assert_eq!(instance.control_plane_name, "implementation");
    assert!(sink.is_empty());
}

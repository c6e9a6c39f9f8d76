//! Stateless control-plane queries over a single table declaration. Each
//! function reads its inputs plus caller-supplied collaborators and returns
//! fresh values; nothing here caches or mutates shared state.

pub mod annotation;
pub mod extern_instance;
pub mod property;
pub mod size;

pub use annotation::{ExpressionRenderer, SourceRenderer, serialize_annotation};
pub use extern_instance::{
    ConstructionKind, ExternInstance, ExternResolution, ExternResolver, InstanceCatalog,
    is_extern_property_constructed_in_place, resolve_extern_property,
};
pub use property::extract_property_expression;
pub use size::{ArchProfile, SIZE_PROPERTY, resolve_table_size};

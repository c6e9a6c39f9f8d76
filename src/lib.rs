//! Control-plane metadata extraction for match-action table declarations.
//!
//! Given a read-only view of one table declaration ([`ir::TableDecl`]), the
//! queries in [`ctl`] resolve extern-resource properties into typed
//! descriptors, resolve the declared capacity with an architecture-supplied
//! fallback, and serialize declaration annotations into a canonical textual
//! form. Problems are accumulated in a [`ir::DiagnosticSink`] and never
//! abort the surrounding generation pass.

pub mod ctl;
pub mod ir;

//! A lookup table of [`SchemaInfo`](crate::info::SchemaInfo)s by type.

mod schema_registry;

pub use schema_registry::SchemaRegistry;

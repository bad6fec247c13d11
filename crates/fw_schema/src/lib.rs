#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    fw_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(feature = "auto_register")] => auto_register,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// The derive emits `::fw_schema::...` paths when the caller does not list
// `fw_schema` as a dependency, which includes this crate and its doc tests.
extern crate self as fw_schema;

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod schema;

pub mod impls;
pub mod info;
pub mod registry;
pub mod text;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use fw_schema_derive as derive;
pub use schema::{FieldsWithValues, Schema};

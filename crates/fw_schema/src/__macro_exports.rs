//! Items used by `fw_schema_derive` expansions. Not part of the public API.

crate::cfg::auto_register! {
    pub mod auto_register {
        pub use inventory;

        use crate::Schema;
        use crate::registry::SchemaRegistry;

        /// A registration function submitted by a derive expansion.
        pub struct __AutoRegisterFunc(pub fn(&mut SchemaRegistry));

        inventory::collect!(__AutoRegisterFunc);

        pub trait __RegisterType {
            fn __register(registry: &mut SchemaRegistry);
        }

        impl<T: Schema> __RegisterType for T {
            #[inline]
            fn __register(registry: &mut SchemaRegistry) {
                registry.register::<T>();
            }
        }

        // Always submitted. Seeing it means static constructors ran.
        fn __mark_supported(_: &mut SchemaRegistry) {}

        inventory::submit! {
            __AutoRegisterFunc(__mark_supported)
        }

        /// Runs every submitted function. Returns `false` if none ran.
        pub(crate) fn __register_types(registry: &mut SchemaRegistry) -> bool {
            let mut supported = false;
            for func in inventory::iter::<__AutoRegisterFunc> {
                supported = true;
                (func.0)(registry);
            }
            supported
        }
    }
}

//! Macros for compilation control.
//!
//! A crate declares its aliases once:
//!
//! ```
//! mod cfg {
//!     fw_cfg::define_alias! {
//!         #[cfg(debug_assertions)] => debug,
//!         #[cfg(feature = "never_enabled")] => never,
//!     }
//! }
//!
//! // Pass or suppress items.
//! cfg::never! {
//!     compile_error!("suppressed");
//! }
//!
//! // Branch inside expressions.
//! let enabled = cfg::never! { if { true } else { false } };
//! assert!(!enabled);
//!
//! // Plain boolean.
//! assert_eq!(cfg::debug!(), cfg!(debug_assertions));
//! ```
#![no_std]

/// Defines one alias macro per `#[cfg(...)]` predicate.
///
/// Each alias is a re-export of either [`enabled`] or [`disabled`], chosen when
/// the defining crate is compiled, so downstream code never repeats the predicate.
#[macro_export]
macro_rules! define_alias {
    (
        #[cfg($meta:meta)] => $p:ident
        $(, $( $rest:tt )+)?
    ) => {
        $crate::define_alias! {
            #[cfg($meta)] => { $p }
            $(
                $($rest)+
            )?
        }
    };
    (
        #[cfg($meta:meta)] => $p:ident,
        $($( $rest:tt )+)?
    ) => {
        $crate::define_alias! {
            #[cfg($meta)] => { $p }
            $(
                $($rest)+
            )?
        }
    };
    (
        #[cfg($meta:meta)] => {
            $(#[$p_meta:meta])*
            $p:ident
        }
        $($( $rest:tt )+)?
    ) => {
        $crate::switch! {
            #[cfg($meta)] => {
                $(#[$p_meta])*
                #[doc = concat!("Passes the input through: `#[cfg(", stringify!($meta), ")]` is active.")]
                pub use $crate::enabled as $p;
            }
            _ => {
                $(#[$p_meta])*
                #[doc = concat!("Suppresses the input: `#[cfg(", stringify!($meta), ")]` is not active.")]
                pub use $crate::disabled as $p;
            }
        }

        $(
            $crate::define_alias! {
                $($rest)+
            }
        )?
    };
}

/// Alias target for an active predicate.
///
/// - `()` expands to `true`.
/// - `if { .. } else { .. }` expands to the first block's contents.
/// - anything else is passed through.
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Alias target for an inactive predicate.
///
/// - `()` expands to `false`.
/// - `if { .. } else { .. }` expands to the second block's contents.
/// - anything else is removed.
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

/// Selects the first arm whose predicate holds.
///
/// Arms are either `#[cfg(..)] => { .. }`, an alias macro path `alias => { .. }`
/// or the fallback `_ => { .. }`.
#[macro_export]
macro_rules! switch {
    ({ $($tt:tt)* }) => {{
        $crate::switch! { $($tt)* }
    }};
    (_ => { $($output:tt)* }) => {
        $($output)*
    };
    (
        $cond:path => $output:tt
        $($( $rest:tt )+)?
    ) => {
        $cond! {
            if {
                $crate::switch! { _ => $output }
            } else {
                $(
                    $crate::switch! { $($rest)+ }
                )?
            }
        }
    };
    (
        #[cfg($cfg:meta)] => $output:tt
        $($( $rest:tt )+)?
    ) => {
        #[cfg($cfg)]
        $crate::switch! { _ => $output }
        $(
            #[cfg(not($cfg))]
            $crate::switch! { $($rest)+ }
        )?
    };
}

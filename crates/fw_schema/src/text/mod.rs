//! The `name:value` text codec.
//!
//! ```text
//! text := pair (", " pair)*
//! pair := wireName ":" value
//! ```
//!
//! - [`encode`] renders every schema field in declaration order.
//! - [`decode`] applies `name:value` tokens to an existing record, in wire
//!   order, ignoring names the schema does not know.
//! - [`WireDecoder`] configures decoding, e.g. rejecting unknown names.
//!
//! Values are not escaped. Text containing `,` or `:` is written as is and
//! will not decode back to the same value.

// -----------------------------------------------------------------------------
// Modules

mod decoder;
mod encoder;
mod error;

// -----------------------------------------------------------------------------
// Exports

pub use decoder::{UnknownFieldPolicy, WireDecoder, decode};
pub use encoder::{WireText, encode, encode_into};
pub use error::DecodeError;

// -----------------------------------------------------------------------------
// Wire format

/// Separates a wire name from its value.
pub const NAME_SEPARATOR: char = ':';

/// Separates pairs. The decoder splits on this character alone.
pub const PAIR_SEPARATOR: char = ',';

/// Written by the encoder between pairs.
pub const PAIR_DELIMITER: &str = ", ";

//! Location packet decoding.
//!
//! The module follows a layered structure:
//! - `layout`: byte values, field widths and scale constants (source of truth)
//! - `reader`: bounds-checked byte access over a decoded packet
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! The packet format is fixed and trusted: a marker byte (0x25) anchors two
//! signed 24-bit big-endian coordinate fields. Only the first marker
//! occurrence is used; everything before it and after the coordinate block is
//! opaque to this module. Parsers are pure and contain no I/O.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::PacketError;
pub use parser::{decode_hex_packet, int24_be, parse_position};
pub use reader::PacketReader;

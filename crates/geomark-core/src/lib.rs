//! Geomark core library for decoding marker-anchored location packets.
//!
//! This crate implements the decoding pipeline used by the CLI: a
//! hex-encoded packet is decoded into bytes, the marker byte (0x25) is
//! located, and the two signed 24-bit big-endian coordinate fields that
//! follow it are scaled into decimal degrees. Decoding is byte-oriented and
//! side-effect free; there is no I/O anywhere in this crate. Byte positions
//! live in `packet::layout`, bounds-checked access in `packet::reader`, and
//! domain decoding in `packet::parser`.
//!
//! Invariants:
//! - Decoding is pure: the same input string always yields a bit-identical
//!   result.
//! - Only the first marker occurrence anchors the coordinate block.
//! - Failures are typed errors; no partial or fallback coordinates are ever
//!   returned.
//!
//! # Examples
//! ```
//! use geomark_core::decode_coordinates;
//!
//! let pos = decode_coordinates("2500006400 0032")?;
//! assert!((pos.lat - 100.0 / 30_000.0).abs() < 1e-12);
//! assert!((pos.lon - 50.0 / 30_000.0).abs() < 1e-12);
//! # Ok::<(), geomark_core::PacketError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod packet;

pub use packet::{PacketError, decode_hex_packet, int24_be, parse_position};

/// A decoded coordinate pair in decimal degrees.
///
/// Values are not checked for geographic plausibility; a malformed but
/// well-framed packet can yield latitudes outside [-90, 90].
///
/// # Examples
/// ```
/// use geomark_core::Position;
///
/// let pos = Position { lat: 0.5, lon: -1.25 };
/// assert_eq!(serde_json::to_string(&pos).unwrap(), r#"{"lat":0.5,"lon":-1.25}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

/// Decode a hex-encoded location packet into a coordinate pair.
///
/// Hex digits are case-insensitive and space characters may appear anywhere
/// in the string. Fails with [`PacketError::InvalidHex`] on odd-length or
/// non-hex input, [`PacketError::MarkerNotFound`] when no 0x25 byte is
/// present, and [`PacketError::Truncated`] when fewer than 6 bytes follow
/// the first marker.
///
/// # Examples
/// ```
/// use geomark_core::{PacketError, decode_coordinates};
///
/// let pos = decode_coordinates("25 00 00 64 00 00 32")?;
/// assert_eq!(pos.lat, 100.0 / 30_000.0);
///
/// let err = decode_coordinates("0011223344").unwrap_err();
/// assert!(matches!(err, PacketError::MarkerNotFound));
/// # Ok::<(), PacketError>(())
/// ```
pub fn decode_coordinates(hex_str: &str) -> Result<Position, PacketError> {
    let packet = decode_hex_packet(hex_str)?;
    parse_position(&packet)
}

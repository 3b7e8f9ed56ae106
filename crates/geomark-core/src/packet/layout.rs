/// Marker byte anchoring the coordinate block.
pub const MARKER: u8 = 0x25;

/// Width of a single coordinate field in bytes.
pub const COORD_FIELD_LEN: usize = 3;
/// Width of the full coordinate block (latitude + longitude).
pub const COORD_BLOCK_LEN: usize = 2 * COORD_FIELD_LEN;

/// Divisor converting raw sensor units into decimal degrees.
pub const COORD_SCALE: f64 = 30_000.0;

/// Sign bit of a 24-bit two's-complement integer.
pub const INT24_SIGN_BIT: u32 = 0x80_0000;
/// Modulus of a 24-bit integer (2^24).
pub const INT24_MODULUS: i32 = 0x100_0000;

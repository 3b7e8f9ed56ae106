use crate::Position;

use super::error::PacketError;
use super::layout;
use super::reader::PacketReader;

/// Decode 3 bytes as a big-endian two's-complement signed integer.
pub fn int24_be(bytes: [u8; 3]) -> i32 {
    let unsigned = u32::from(bytes[0]) << 16 | u32::from(bytes[1]) << 8 | u32::from(bytes[2]);
    if unsigned & layout::INT24_SIGN_BIT != 0 {
        unsigned as i32 - layout::INT24_MODULUS
    } else {
        unsigned as i32
    }
}

/// Decode a hex string into packet bytes. Space characters are allowed
/// anywhere and stripped before decoding; digits are case-insensitive.
pub fn decode_hex_packet(hex_str: &str) -> Result<Vec<u8>, PacketError> {
    let stripped: String = hex_str.chars().filter(|&c| c != ' ').collect();
    Ok(hex::decode(stripped)?)
}

/// Extract the coordinate pair anchored by the first marker byte.
pub fn parse_position(packet: &[u8]) -> Result<Position, PacketError> {
    let reader = PacketReader::new(packet);
    let start = reader.find_marker()? + 1;
    reader.require_len(start + layout::COORD_BLOCK_LEN)?;

    let lat_raw = read_coord_field(&reader, start)?;
    let lon_raw = read_coord_field(&reader, start + layout::COORD_FIELD_LEN)?;

    Ok(Position {
        lat: f64::from(lat_raw) / layout::COORD_SCALE,
        lon: f64::from(lon_raw) / layout::COORD_SCALE,
    })
}

fn read_coord_field(reader: &PacketReader<'_>, offset: usize) -> Result<i32, PacketError> {
    let bytes = reader.read_slice(offset..offset + layout::COORD_FIELD_LEN)?;
    Ok(int24_be([bytes[0], bytes[1], bytes[2]]))
}

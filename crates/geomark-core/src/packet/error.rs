use thiserror::Error;

/// Errors returned by packet decoding and reading.
#[derive(Debug, Error)]
pub enum PacketError {
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("marker byte 0x25 not found in packet")]
    MarkerNotFound,
    #[error("packet truncated: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
}

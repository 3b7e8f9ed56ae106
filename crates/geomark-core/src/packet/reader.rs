use super::error::PacketError;
use super::layout;

pub struct PacketReader<'a> {
    packet: &'a [u8],
}

impl<'a> PacketReader<'a> {
    pub fn new(packet: &'a [u8]) -> Self {
        Self { packet }
    }

    /// Index of the first marker byte in the packet.
    pub fn find_marker(&self) -> Result<usize, PacketError> {
        self.packet
            .iter()
            .position(|&byte| byte == layout::MARKER)
            .ok_or(PacketError::MarkerNotFound)
    }

    pub fn require_len(&self, needed: usize) -> Result<(), PacketError> {
        if self.packet.len() < needed {
            return Err(PacketError::Truncated {
                needed,
                actual: self.packet.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], PacketError> {
        self.packet
            .get(range.clone())
            .ok_or(PacketError::Truncated {
                needed: range.end,
                actual: self.packet.len(),
            })
    }

}

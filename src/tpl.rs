//! Tile Layer Pro palette files.
//!
//! A TPL file is a fixed 52-byte layout: the 4-byte magic (`"TPL"` plus a
//! NUL) followed by 16 RGB triples, one per palette slot in order. Anything
//! past byte 52 is ignored.

use crate::color::Rgb;
use crate::error::PaletteError;
use crate::palette::{Palette, PALETTE_SIZE};

pub const MAGIC: [u8; 4] = *b"TPL\0";
pub const FILE_SIZE: usize = MAGIC.len() + 3 * PALETTE_SIZE;

/// Parse a TPL buffer. A bad magic wins over a short buffer: anything that
/// does not begin with the four magic bytes is `InvalidHeader`, and only a
/// magic-valid buffer under 52 bytes reports `TruncatedFile`.
pub fn decode(bytes: &[u8]) -> Result<Palette, PaletteError> {
    if !bytes.starts_with(&MAGIC) {
        return Err(PaletteError::InvalidHeader);
    }
    if bytes.len() < FILE_SIZE {
        return Err(PaletteError::TruncatedFile(bytes.len()));
    }
    let mut colors = [Rgb::BLACK; PALETTE_SIZE];
    let triples = bytes[MAGIC.len()..FILE_SIZE].chunks_exact(3);
    for (slot, triple) in colors.iter_mut().zip(triples) {
        *slot = Rgb::new(triple[0], triple[1], triple[2]);
    }
    Ok(Palette { colors })
}

/// Serialize as exactly 52 bytes: magic, then R,G,B per color in order.
pub fn encode(palette: &Palette) -> [u8; FILE_SIZE] {
    let mut bytes = [0; FILE_SIZE];
    bytes[..MAGIC.len()].copy_from_slice(&MAGIC);
    for (i, color) in palette.colors.iter().enumerate() {
        let offset = MAGIC.len() + 3 * i;
        bytes[offset] = color.r;
        bytes[offset + 1] = color.g;
        bytes[offset + 2] = color.b;
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_palette() -> Palette {
        let mut palette = Palette::default();
        for (i, color) in palette.colors.iter_mut().enumerate() {
            *color = Rgb::new(i as u8, 0x40 + i as u8, 0x80 + i as u8);
        }
        palette
    }

    #[test]
    fn encode_emits_magic_then_triples() {
        let bytes = encode(&sample_palette());
        assert_eq!(bytes.len(), FILE_SIZE);
        assert_eq!(&bytes[..4], b"TPL\0");
        assert_eq!(&bytes[4..7], &[0x00, 0x40, 0x80]);
        assert_eq!(&bytes[49..52], &[0x0f, 0x4f, 0x8f]);
    }

    #[test]
    fn decode_round_trips_encode_exactly() {
        let palette = sample_palette();
        assert_eq!(decode(&encode(&palette)).expect("valid"), palette);
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let mut bytes = encode(&sample_palette()).to_vec();
        bytes.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode(&bytes).expect("valid"), sample_palette());
    }

    #[test]
    fn decode_rejects_bad_magic() {
        let mut bytes = encode(&sample_palette());
        bytes[3] = b'!';
        assert_eq!(decode(&bytes), Err(PaletteError::InvalidHeader));
    }

    #[test]
    fn decode_rejects_buffer_shorter_than_magic() {
        // Too short to even hold the magic reads as a header problem, not
        // truncation.
        assert_eq!(decode(b"TP"), Err(PaletteError::InvalidHeader));
        assert_eq!(decode(&[]), Err(PaletteError::InvalidHeader));
    }

    #[test]
    fn decode_rejects_truncated_payload() {
        let bytes = encode(&sample_palette());
        assert_eq!(decode(&bytes[..51]), Err(PaletteError::TruncatedFile(51)));
        assert_eq!(decode(&bytes[..4]), Err(PaletteError::TruncatedFile(4)));
    }
}

use itertools::Itertools;

use crate::bgr::Bgr15;
use crate::color::Rgb;
use crate::error::PaletteError;

pub const PALETTE_SIZE: usize = 16;

/// Exactly 16 colors, ordered. Parsers pad short input with black and drop
/// entries past the 16th, so every palette is full.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Palette {
    pub colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// Parse newline-separated 6-digit hex colors, one per line.
    ///
    /// Total over any input: lines that are not valid colors are dropped,
    /// so later valid lines shift up to fill the slot, and the result is
    /// padded with black. Only the first 16 non-blank lines are considered.
    pub fn from_rgb_text(text: &str) -> Palette {
        let mut colors = [Rgb::BLACK; PALETTE_SIZE];
        let mut n = 0;
        let candidates = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(PALETTE_SIZE);
        for line in candidates {
            if let Ok(color) = Rgb::from_hex(line) {
                colors[n] = color;
                n += 1;
            }
        }
        Palette { colors }
    }

    /// Parse packed BGR words written as hex byte pairs, low byte first,
    /// with any amount of whitespace between digits.
    ///
    /// Unlike RGB line parsing, a malformed byte pair fails the whole call
    /// rather than being skipped.
    pub fn from_bgr_text(text: &str) -> Result<Palette, PaletteError> {
        let stripped: String = text.split_whitespace().collect();

        // A trailing unpaired digit is dropped before any validation.
        let mut bytes = Vec::with_capacity(stripped.len() / 2);
        for (hi, lo) in stripped.chars().tuples() {
            match (hi.to_digit(16), lo.to_digit(16)) {
                (Some(h), Some(l)) => bytes.push((h << 4 | l) as u8),
                _ => return Err(PaletteError::InvalidByteSequence(format!("{}{}", hi, lo))),
            }
        }

        // Bytes pair into little-endian words; a trailing odd byte is
        // dropped, and only the first 16 words become colors.
        let mut colors = [Rgb::BLACK; PALETTE_SIZE];
        let words = bytes.iter().tuples().take(PALETTE_SIZE);
        for (i, (&low, &high)) in words.enumerate() {
            colors[i] = Bgr15::from_le_bytes([low, high]).into();
        }
        Ok(Palette { colors })
    }

    /// Render as 16 lowercase hex lines, no trailing newline.
    pub fn to_rgb_text(&self) -> String {
        self.colors.iter().join("\n")
    }

    /// Pack every color and emit the flat 32-byte sequence, low byte first
    /// per color.
    pub fn to_bgr_bytes(&self) -> [u8; 2 * PALETTE_SIZE] {
        let mut bytes = [0; 2 * PALETTE_SIZE];
        for (i, &color) in self.colors.iter().enumerate() {
            let [low, high] = Bgr15::from(color).to_le_bytes();
            bytes[2 * i] = low;
            bytes[2 * i + 1] = high;
        }
        bytes
    }

    /// The packed bytes as space-separated lowercase hex pairs.
    pub fn to_bgr_text(&self) -> String {
        self.to_bgr_bytes()
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .join(" ")
    }
}

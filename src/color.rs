use std::fmt::Display;

use crate::error::PaletteError;

// Channels are full 8-bit values (0-255); the packed hardware format in
// bgr.rs is what narrows them to 5 bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse exactly six hex digits, e.g. `ff9c00`. Case-insensitive; no `#`
    /// prefix, no surrounding whitespace, no signs.
    pub fn from_hex(s: &str) -> Result<Rgb, PaletteError> {
        // from_str_radix on its own would accept a leading sign, so require
        // every character to be a hex digit first.
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidFormat(s.to_string()));
        }
        let value =
            u32::from_str_radix(s, 16).map_err(|_| PaletteError::InvalidFormat(s.to_string()))?;
        Ok(Rgb {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_hex_digits() {
        assert_eq!(
            Rgb::from_hex("ff9c00").expect("valid"),
            Rgb::new(0xff, 0x9c, 0x00)
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            Rgb::from_hex("FF9C0a").expect("valid"),
            Rgb::from_hex("ff9c0A").expect("valid")
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("fff").is_err());
        assert!(Rgb::from_hex("ff9c001").is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(Rgb::from_hex("ff9c0g").is_err());
        assert!(Rgb::from_hex("#ff9c0").is_err());
        assert!(Rgb::from_hex("+1ff00").is_err());
        assert!(Rgb::from_hex(" ff9c0").is_err());
    }

    #[test]
    fn renders_lowercase_zero_padded() {
        assert_eq!(Rgb::new(0xff, 0x9c, 0x00).to_string(), "ff9c00");
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "010203");
        assert_eq!(Rgb::BLACK.to_string(), "000000");
    }

    #[test]
    fn error_carries_offending_input() {
        match Rgb::from_hex("nope") {
            Err(PaletteError::InvalidFormat(s)) => assert_eq!(s, "nope"),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }
}

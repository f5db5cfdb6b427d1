use crate::color::Rgb;

// SNES-style packed color word: five bits per channel with blue in the top
// bits (B << 10 | G << 5 | R). Bit 15 is unused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Bgr15(pub u16);

impl Bgr15 {
    // Two-byte wire form, low byte first.
    pub fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Bgr15(u16::from_le_bytes(bytes))
    }
}

impl From<Rgb> for Bgr15 {
    fn from(color: Rgb) -> Self {
        // Truncating 8-to-5-bit scale (divide by 8, no rounding), the same
        // quantization the TPL tool family applies.
        let r = (color.r >> 3) as u16;
        let g = (color.g >> 3) as u16;
        let b = (color.b >> 3) as u16;
        Bgr15(b << 10 | g << 5 | r)
    }
}

impl From<Bgr15> for Rgb {
    fn from(color: Bgr15) -> Self {
        let Bgr15(c) = color;
        let r = (c & 31) as u8;
        let g = (c >> 5 & 31) as u8;
        let b = (c >> 10 & 31) as u8;
        // Widening is a plain multiply by 8, no midpoint bias; the low three
        // bits lost in packing stay lost.
        Rgb::new(r << 3, g << 3, b << 3)
    }
}

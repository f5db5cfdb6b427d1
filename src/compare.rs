use crate::bgr::Bgr15;
use crate::color::Rgb;
use crate::palette::Palette;

// Before/after pairing for side-by-side display. No logic of its own
// beyond building the "after" palette.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub original: Palette,
    pub converted: Palette,
}

impl Comparison {
    /// Pair a palette with what survives packing to 15-bit BGR and back:
    /// every channel keeps only its top five bits.
    pub fn against_bgr15(original: Palette) -> Comparison {
        let mut converted = original.clone();
        for color in &mut converted.colors {
            *color = Rgb::from(Bgr15::from(*color));
        }
        Comparison { original, converted }
    }

    pub fn pairs(&self) -> impl Iterator<Item = (Rgb, Rgb)> {
        self.original.colors.into_iter().zip(self.converted.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantizes_each_channel_to_top_five_bits() {
        let original = Palette::from_rgb_text("ff9c07\n080808");
        let comparison = Comparison::against_bgr15(original);
        assert_eq!(comparison.converted.colors[0], Rgb::new(0xf8, 0x98, 0x00));
        assert_eq!(comparison.converted.colors[1], Rgb::new(0x08, 0x08, 0x08));
    }

    #[test]
    fn leaves_multiples_of_eight_untouched() {
        let original = Palette::from_rgb_text("f8f8f8\n506080");
        let comparison = Comparison::against_bgr15(original.clone());
        assert_eq!(comparison.converted, original);
    }

    #[test]
    fn pairs_walks_all_sixteen_slots() {
        let comparison = Comparison::against_bgr15(Palette::default());
        assert_eq!(comparison.pairs().count(), 16);
        for (original, converted) in comparison.pairs() {
            assert_eq!(original, converted);
        }
    }
}

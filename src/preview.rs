use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::palette::{Palette, PALETTE_SIZE};

// Edge length of one square swatch, in pixels.
pub const CELL_SIZE: u32 = 16;

/// Render the palette as a single-row PNG strip of 16 square swatches.
pub fn save_swatch_strip(palette: &Palette, path: &Path) -> Result<()> {
    info!("Saving {}", path.display());
    let width = PALETTE_SIZE as u32 * CELL_SIZE;
    let height = CELL_SIZE;

    let file =
        File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut png_writer = encoder.write_header()?;

    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..height {
        for color in &palette.colors {
            for _ in 0..CELL_SIZE {
                rgb.push(color.r);
                rgb.push(color.g);
                rgb.push(color.b);
            }
        }
    }
    png_writer.write_image_data(&rgb)?;
    Ok(())
}

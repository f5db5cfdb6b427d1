use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use tpl_palette_converter::{preview, tpl, Comparison, Palette};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Convert 16-color palettes between RGB hex text, packed 15-bit BGR text, and TPL files"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert palette text into a 52-byte TPL file
    ToTpl {
        /// Palette text file to read
        input: PathBuf,
        /// Format of the input text
        #[arg(long, value_enum, default_value = "rgb")]
        format: TextFormat,
        /// Output path; defaults to palette_<unix-millis>.tpl
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode a TPL file and print it as palette text
    FromTpl {
        /// TPL file to read
        input: PathBuf,
        /// Format to print
        #[arg(long, value_enum, default_value = "rgb")]
        format: TextFormat,
    },
    /// Re-express RGB hex lines as packed BGR byte text
    RgbToBgr {
        /// RGB palette text file to read
        input: PathBuf,
    },
    /// Re-express packed BGR byte text as RGB hex lines
    BgrToRgb {
        /// BGR palette text file to read
        input: PathBuf,
    },
    /// Show what survives 15-bit BGR packing, color by color
    Compare {
        /// RGB palette text file to read
        input: PathBuf,
    },
    /// Render the 16 swatches as a PNG strip
    Preview {
        /// Palette file to read
        input: PathBuf,
        /// Format of the input file
        #[arg(long, value_enum, default_value = "rgb")]
        format: InputFormat,
        /// Output path; defaults to the input path with a .png extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TextFormat {
    Rgb,
    Bgr,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Rgb,
    Bgr,
    Tpl,
}

fn main() -> Result<()> {
    env_logger::init();
    match Args::parse().command {
        Command::ToTpl {
            input,
            format,
            output,
        } => to_tpl(&input, format, output),
        Command::FromTpl { input, format } => from_tpl(&input, format),
        Command::RgbToBgr { input } => rgb_to_bgr(&input),
        Command::BgrToRgb { input } => bgr_to_rgb(&input),
        Command::Compare { input } => compare(&input),
        Command::Preview {
            input,
            format,
            output,
        } => preview_palette(&input, format, output),
    }
}

fn to_tpl(input: &Path, format: TextFormat, output: Option<PathBuf>) -> Result<()> {
    let palette = read_text_palette(input, format)?;
    let path = match output {
        Some(path) => path,
        None => PathBuf::from(format!("palette_{}.tpl", unix_millis()?)),
    };
    info!("Saving {}", path.display());
    fs::write(&path, tpl::encode(&palette))
        .with_context(|| format!("unable to write {}", path.display()))?;
    Ok(())
}

fn from_tpl(input: &Path, format: TextFormat) -> Result<()> {
    let palette = read_tpl(input)?;
    match format {
        TextFormat::Rgb => println!("{}", palette.to_rgb_text()),
        TextFormat::Bgr => println!("{}", palette.to_bgr_text()),
    }
    Ok(())
}

fn rgb_to_bgr(input: &Path) -> Result<()> {
    let palette = read_text_palette(input, TextFormat::Rgb)?;
    println!("{}", palette.to_bgr_text());
    Ok(())
}

fn bgr_to_rgb(input: &Path) -> Result<()> {
    let palette = read_text_palette(input, TextFormat::Bgr)?;
    println!("{}", palette.to_rgb_text());
    Ok(())
}

fn compare(input: &Path) -> Result<()> {
    let comparison = Comparison::against_bgr15(read_text_palette(input, TextFormat::Rgb)?);
    println!("idx  original  bgr15");
    for (i, (original, converted)) in comparison.pairs().enumerate() {
        println!("{:>3}  {}    {}", i, original, converted);
    }
    Ok(())
}

fn preview_palette(input: &Path, format: InputFormat, output: Option<PathBuf>) -> Result<()> {
    let palette = match format {
        InputFormat::Rgb => read_text_palette(input, TextFormat::Rgb)?,
        InputFormat::Bgr => read_text_palette(input, TextFormat::Bgr)?,
        InputFormat::Tpl => read_tpl(input)?,
    };
    let path = output.unwrap_or_else(|| input.with_extension("png"));
    preview::save_swatch_strip(&palette, &path)?;
    Ok(())
}

fn read_text_palette(path: &Path, format: TextFormat) -> Result<Palette> {
    info!("Loading {}", path.display());
    let text =
        fs::read_to_string(path).with_context(|| format!("unable to read {}", path.display()))?;
    if text.trim().is_empty() {
        warn!(
            "{} contains no palette data; continuing with 16 black entries.",
            path.display()
        );
    }
    let palette = match format {
        TextFormat::Rgb => Palette::from_rgb_text(&text),
        TextFormat::Bgr => Palette::from_bgr_text(&text)?,
    };
    Ok(palette)
}

fn read_tpl(path: &Path) -> Result<Palette> {
    if path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("tpl"))
    {
        warn!("{} does not have a .tpl extension.", path.display());
    }
    info!("Loading {}", path.display());
    let bytes = fs::read(path).with_context(|| format!("unable to read {}", path.display()))?;
    Ok(tpl::decode(&bytes)?)
}

fn unix_millis() -> Result<u128> {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)?;
    Ok(elapsed.as_millis())
}

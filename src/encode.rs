//! Serializes rendered canvases into PNG, ICO and ICNS bytes, and reads the
//! two container formats back.

use std::io::Cursor;

use anyhow::{bail, Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use icns::{IconFamily, IconType, PixelFormat};
use image::{ImageFormat, RgbaImage};

/// Encodes a single canvas as a standalone PNG.
pub fn png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .with_context(|| format!("Failed to encode {}x{} PNG", img.width(), img.height()))?;
    Ok(buf)
}

/// Packs canvases into one ICO file. Every entry is stored as an uncompressed
/// bitmap, including the 256 px one.
pub fn ico(images: &[RgbaImage]) -> Result<Vec<u8>> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for img in images {
        let (w, h) = img.dimensions();
        let icon_image = IconImage::from_rgba_data(w, h, img.as_raw().clone());
        let entry = IconDirEntry::encode_as_bmp(&icon_image)
            .with_context(|| format!("Failed to encode ICO entry at {w}x{h}"))?;
        icon_dir.add_entry(entry);
    }

    let mut buf = Vec::new();
    icon_dir
        .write(&mut buf)
        .context("Failed to write ICO directory")?;
    Ok(buf)
}

/// Packs canvases into one ICNS file, one element per canvas.
pub fn icns(images: &[RgbaImage]) -> Result<Vec<u8>> {
    let mut family = IconFamily::new();

    for img in images {
        let (w, h) = img.dimensions();
        let icon_type = icns_type(w, h)?;
        let image = icns::Image::from_data(PixelFormat::RGBA, w, h, img.as_raw().clone())
            .with_context(|| format!("Invalid {w}x{h} RGBA buffer"))?;
        family
            .add_icon_with_type(&image, icon_type)
            .with_context(|| format!("Failed to encode ICNS element at {w}x{h}"))?;
    }

    let mut buf = Vec::new();
    family
        .write(&mut buf)
        .context("Failed to write ICNS family")?;
    Ok(buf)
}

/// ICNS element type for a square icon of the given literal pixel size.
pub fn icns_type(width: u32, height: u32) -> Result<IconType> {
    let icon_type = match (width, height) {
        (16, 16) => IconType::RGBA32_16x16,
        (32, 32) => IconType::RGBA32_32x32,
        (64, 64) => IconType::RGBA32_64x64,
        (128, 128) => IconType::RGBA32_128x128,
        (256, 256) => IconType::RGBA32_256x256,
        (512, 512) => IconType::RGBA32_512x512,
        (1024, 1024) => IconType::RGBA32_512x512_2x,
        _ => bail!("No ICNS icon type for {width}x{height}"),
    };
    Ok(icon_type)
}

/// Entry `(width, height)` pairs of an ICO file, in directory order.
pub fn ico_dimensions(bytes: &[u8]) -> Result<Vec<(u32, u32)>> {
    let icon_dir = IconDir::read(Cursor::new(bytes)).context("Failed to parse ICO")?;
    Ok(icon_dir
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect())
}

/// Element `(width, height)` pairs of an ICNS file, in file order.
pub fn icns_dimensions(bytes: &[u8]) -> Result<Vec<(u32, u32)>> {
    let family = IconFamily::read(Cursor::new(bytes)).context("Failed to parse ICNS")?;
    Ok(family
        .available_icons()
        .iter()
        .map(|icon_type| (icon_type.pixel_width(), icon_type.pixel_height()))
        .collect())
}

/// Entry sizes of an ICO file. Fails on any non-square entry.
pub fn ico_sizes(bytes: &[u8]) -> Result<Vec<u32>> {
    square_sizes(ico_dimensions(bytes)?)
}

/// Element sizes of an ICNS file. Fails on any non-square element.
pub fn icns_sizes(bytes: &[u8]) -> Result<Vec<u32>> {
    square_sizes(icns_dimensions(bytes)?)
}

fn square_sizes(dimensions: Vec<(u32, u32)>) -> Result<Vec<u32>> {
    dimensions
        .into_iter()
        .map(|(w, h)| {
            if w != h {
                bail!("Non-square {w}x{h} entry");
            }
            Ok(w)
        })
        .collect()
}

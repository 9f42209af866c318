use packed_struct::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::{Error, Result};
use super::layout::{BitmapLayout, INFO_HEADER_SIZE};
use super::palette::Palette;
use super::shp::Shp;

const BMP_SIGNATURE: u16 = u16::from_le_bytes(*b"BM");
const PIXELS_PER_METER: u32 = 2834;

#[derive(PackedStruct)]
#[packed_struct(endian="lsb")]
pub struct FileHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved: u32,
    pub pixel_offset: u32,
}

#[derive(PackedStruct)]
#[packed_struct(endian="lsb")]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl FileHeader {
    pub fn new(layout: &BitmapLayout) -> Self {
        Self {
            signature: BMP_SIGNATURE,
            file_size: layout.file_size,
            reserved: 0,
            pixel_offset: layout.pixel_offset,
        }
    }
}

impl InfoHeader {
    pub fn new(layout: &BitmapLayout) -> Self {
        Self {
            header_size: INFO_HEADER_SIZE,
            width: layout.width,
            height: layout.height,
            planes: 1,
            bits_per_pixel: 8,
            compression: 0,
            image_size: layout.pixel_data_size,
            x_pixels_per_meter: PIXELS_PER_METER,
            y_pixels_per_meter: PIXELS_PER_METER,
            colors_used: layout.palette_count,
            colors_important: layout.palette_count,
        }
    }
}

/// Writes `shp` as an 8-bit bitmap using `palette`. Rows are emitted
/// bottom-up and padded to a 4-byte stride; the file itself is padded to a
/// multiple of 4 bytes.
pub fn write_bitmap<W: Write>(out: &mut W, palette: &Palette, shp: &Shp) -> Result<BitmapLayout> {
    let layout = BitmapLayout::new(palette.len(), shp.width, shp.height)?;
    if shp.pixels.len() as u64 != shp.width as u64 * shp.height as u64 {
        return Err(Error::format("pixel data does not match image dimensions"));
    }
    log::debug!("bitmap layout: {:?}", layout);

    out.write_all(&FileHeader::new(&layout).pack()?)?;
    out.write_all(&InfoHeader::new(&layout).pack()?)?;

    for color in palette.colors() {
        out.write_all(&[ color.b, color.g, color.r, 0 ])?;
    }

    let row_pad = vec![ 0u8; layout.row_pad as usize ];
    for y in (0..shp.height).rev() {
        out.write_all(shp.row(y))?;
        out.write_all(&row_pad)?;
    }

    out.write_all(&vec![ 0u8; layout.file_pad as usize ])?;
    Ok(layout)
}

/// Like `write_bitmap`, creating the file and any missing parent
/// directories first.
pub fn save_bitmap(path: &Path, palette: &Palette, shp: &Shp) -> Result<BitmapLayout> {
    // catch an oversized image before anything is created on disk
    BitmapLayout::new(palette.len(), shp.width, shp.height)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut out = BufWriter::new(File::create(path)?);
    let layout = write_bitmap(&mut out, palette, shp)?;
    out.flush()?;
    Ok(layout)
}

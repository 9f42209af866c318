use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;
use std::path::Path;

use super::error::{Error, Result};

pub const SHP_HEADER_SIZE: usize = 8;

/// Raw 8-bit indexed image, rows stored top to bottom.
#[derive(Debug)]
pub struct Shp {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Shp {
    pub fn new(data: &[u8]) -> Result<Self> {
        let mut rdr = Cursor::new(data);
        let width = rdr.read_u32::<LittleEndian>().map_err(|_| Error::format("truncated raster header"))?;
        let height = rdr.read_u32::<LittleEndian>().map_err(|_| Error::format("truncated raster header"))?;

        let size = (width as u64) * (height as u64);
        let payload = &data[SHP_HEADER_SIZE..];
        if (payload.len() as u64) < size {
            return Err(Error::format("truncated raster data"));
        }
        // anything past width * height is ignored
        let pixels = payload[..size as usize].to_vec();
        Ok(Self { width, height, pixels })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::new(&data)
    }

    /// Pixels of row `y`, counted from the top.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize) * (self.width as usize);
        &self.pixels[start..start + self.width as usize]
    }
}

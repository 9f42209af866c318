use super::error::{Error, Result};

pub const HEADER_SIZE: u32 = 54;
pub const INFO_HEADER_SIZE: u32 = 40;
pub const PALETTE_ENTRY_SIZE: u32 = 4;
pub const ALIGNMENT: u32 = 4;

pub fn aligned(size: u64, m: u64) -> u64 {
    if size % m != 0 {
        size + (m - size % m)
    } else {
        size
    }
}

/// Sizes and offsets of an 8-bit bitmap file, derived from the palette
/// length and the image dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapLayout {
    pub width: u32,
    pub height: u32,
    pub palette_count: u32,
    /// Row stride, `width` rounded up to a multiple of 4
    pub aligned_width: u32,
    pub row_pad: u32,
    pub palette_size: u32,
    pub pixel_offset: u32,
    /// Rows plus the trailing file padding
    pub pixel_data_size: u32,
    pub file_size: u32,
    pub file_pad: u32,
}

fn to_u32(value: u64) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::format("image too large"))
}

impl BitmapLayout {
    pub fn new(palette_count: usize, width: u32, height: u32) -> Result<Self> {
        let palette_count = to_u32(palette_count as u64)?;
        let aligned_width = aligned(width as u64, ALIGNMENT as u64);
        let row_pad = aligned_width - width as u64;
        let palette_size = palette_count as u64 * PALETTE_ENTRY_SIZE as u64;
        let pixel_offset = palette_size + HEADER_SIZE as u64;
        let raw_file_size = pixel_offset + aligned_width * height as u64;
        let file_size = aligned(raw_file_size, ALIGNMENT as u64);
        let file_pad = file_size - raw_file_size;
        let pixel_data_size = aligned_width * height as u64 + file_pad;

        Ok(Self {
            width,
            height,
            palette_count,
            aligned_width: to_u32(aligned_width)?,
            row_pad: row_pad as u32,
            palette_size: to_u32(palette_size)?,
            pixel_offset: to_u32(pixel_offset)?,
            pixel_data_size: to_u32(pixel_data_size)?,
            file_size: to_u32(file_size)?,
            file_pad: file_pad as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_to_four() {
        assert_eq!(aligned(0, 4), 0);
        assert_eq!(aligned(1, 4), 4);
        assert_eq!(aligned(4, 4), 4);
        assert_eq!(aligned(5, 4), 8);
        assert_eq!(aligned(7, 4), 8);
    }

    #[test]
    fn two_colour_two_by_one() {
        let layout = BitmapLayout::new(2, 2, 1).unwrap();
        assert_eq!(layout.aligned_width, 4);
        assert_eq!(layout.row_pad, 2);
        assert_eq!(layout.palette_size, 8);
        assert_eq!(layout.pixel_offset, 62);
        assert_eq!(layout.file_pad, 2);
        assert_eq!(layout.file_size, 68);
        assert_eq!(layout.pixel_data_size, 6);
    }

    #[test]
    fn stride_and_file_size_are_aligned() {
        for palette_count in [0, 1, 3, 16, 255, 256] {
            for width in 0..12 {
                for height in 0..5 {
                    let layout = BitmapLayout::new(palette_count, width, height).unwrap();
                    assert_eq!(layout.aligned_width % 4, 0);
                    assert!(layout.aligned_width >= width && layout.aligned_width - width < 4);
                    assert_eq!(layout.row_pad, layout.aligned_width - width);
                    assert_eq!(layout.file_size % 4, 0);
                    assert_eq!(layout.file_size, layout.palette_size + HEADER_SIZE + layout.pixel_data_size);
                }
            }
        }
    }

    #[test]
    fn full_palette_layout() {
        let layout = BitmapLayout::new(256, 3, 3).unwrap();
        assert_eq!(layout.pixel_offset, 54 + 1024);
        assert_eq!(layout.file_pad, 2);
        assert_eq!(layout.file_size, 54 + 1024 + 12 + 2);
    }

    #[test]
    fn oversized_image_is_rejected() {
        let err = BitmapLayout::new(256, u32::MAX, u32::MAX).unwrap_err();
        assert!(err.is_format());
    }
}

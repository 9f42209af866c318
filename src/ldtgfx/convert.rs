use std::path::Path;

use super::bitmap;
use super::error::Result;
use super::palette::Palette;
use super::shp::Shp;

const MAX_COLORS: usize = 256;

fn check_indices(palette: &Palette, shp: &Shp) {
    if palette.len() > MAX_COLORS {
        log::warn!("palette has {} entries, only {} are addressable", palette.len(), MAX_COLORS);
    }
    if let Some(max_index) = shp.pixels.iter().max() {
        if *max_index as usize >= palette.len() {
            log::warn!("pixel index {} is outside the {} entry palette", max_index, palette.len());
        }
    }
}

/// Reads `pal_path` and `shp_path` and writes the combined image to `bmp_path`.
pub fn convert(pal_path: &Path, shp_path: &Path, bmp_path: &Path) -> Result<()> {
    let palette = Palette::load(pal_path)?;
    log::info!("{}: {} colours", pal_path.display(), palette.len());

    let shp = Shp::load(shp_path)?;
    log::info!("{}: {}x{}", shp_path.display(), shp.width, shp.height);

    check_indices(&palette, &shp);

    let layout = bitmap::save_bitmap(bmp_path, &palette, &shp)?;
    log::info!("{}: wrote {} bytes", bmp_path.display(), layout.file_size);
    Ok(())
}

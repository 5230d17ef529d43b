//! Stroke image loading and PNG rendering of a tile map layer

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::autotile::display::Variant;
use crate::io::configuration::{
    AREA_COLOR, FILL_COLOR, FRINGE_COLOR, MAX_STROKE_IMAGE_DIMENSION, MIN_SHADE,
    STROKE_ALPHA_THRESHOLD,
};
use crate::io::error::{Result, TileError};
use crate::spatial::cell::Occupant;
use crate::spatial::coord::Coord;
use crate::spatial::target::TileGrid;
use crate::spatial::tilemap::TileMap;

/// Load the cells marked by a stroke image
///
/// Every pixel whose alpha reaches the stroke threshold marks one cell on
/// layer 0. Image row 0 is the top of the picture, so world `y` is flipped to
/// grow upward. Cells are returned in image scan order.
///
/// # Errors
///
/// Returns an error if:
/// - The image cannot be loaded
/// - Either side exceeds the maximum stroke image dimension
pub fn load_stroke_image(path: &Path) -> Result<Vec<Coord>> {
    let img = image::open(path).map_err(|e| TileError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width > MAX_STROKE_IMAGE_DIMENSION || height > MAX_STROKE_IMAGE_DIMENSION {
        return Err(TileError::InvalidStrokeImage {
            path: path.to_path_buf(),
            reason: format!(
                "{width}x{height} exceeds the {MAX_STROKE_IMAGE_DIMENSION} pixel limit"
            ),
        });
    }

    let cells = rgba
        .enumerate_pixels()
        .filter(|(_, _, pixel)| pixel.0[3] >= STROKE_ALPHA_THRESHOLD)
        .filter_map(|(px, py, _)| {
            let x = i32::try_from(px).ok()?;
            let y = i32::try_from(height - 1 - py).ok()?;
            Some(Coord::flat(x, y))
        })
        .collect();

    Ok(cells)
}

fn shade(base: [u8; 4], slot: usize) -> [u8; 4] {
    let factor = 1.0 - (1.0 - MIN_SHADE) * (slot.min(15) as f32 / 15.0);
    let scale = |channel: u8| (f32::from(channel) * factor).round().clamp(0.0, 255.0) as u8;
    [scale(base[0]), scale(base[1]), scale(base[2]), base[3]]
}

/// Color a cell is drawn with
///
/// Fringe and area cells are shaded by the sprite slot of their displayed
/// variant; cells without a variant use the unshaded base color.
pub fn cell_color(occupant: Occupant, variant: Option<Variant>) -> [u8; 4] {
    let slot = variant.map_or(0, Variant::slot);
    match occupant {
        Occupant::Empty => [0, 0, 0, 0],
        Occupant::Fill => FILL_COLOR,
        Occupant::Fringe => shade(FRINGE_COLOR, slot),
        Occupant::Area => shade(AREA_COLOR, slot),
    }
}

/// Render the occupied part of a layer
///
/// Each cell becomes a `scale`-sized square; the image is cropped to the
/// occupied bounds and north is up.
///
/// # Errors
///
/// Returns an error if the layer has no occupied cells
pub fn render_layer(map: &TileMap, layer: i32, scale: u32) -> Result<RgbaImage> {
    let bounds = map
        .occupied_bounds(layer)
        .ok_or(TileError::EmptyRender { layer })?;

    let scale = scale.max(1);
    let columns = u32::try_from(bounds.x.end - bounds.x.start).unwrap_or(0);
    let rows = u32::try_from(bounds.y.end - bounds.y.start).unwrap_or(0);
    let mut img = ImageBuffer::new(columns * scale, rows * scale);

    for at in bounds.cells() {
        let color = Rgba(cell_color(map.occupant(at), map.variant(at)));
        let (Ok(column), Ok(row)) = (
            u32::try_from(at.x - bounds.x.start),
            u32::try_from(bounds.y.end - 1 - at.y),
        ) else {
            continue;
        };
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(column * scale + dx, row * scale + dy, color);
            }
        }
    }

    Ok(img)
}

/// Render a layer and save it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The layer has no occupied cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layer_as_png(map: &TileMap, layer: i32, scale: u32, output_path: &Path) -> Result<()> {
    let img = render_layer(map, layer, scale)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| TileError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
